//! The note collection and its persistence.

use tracing::{debug, error, warn};

use crate::{
    Result,
    note::{Color, Note, NoteId},
    storage::Storage,
};

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

/// Name of the slot notes are kept in unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// How [`NoteStore::create`] colours a note when no colour is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NewNoteColor {
    #[default]
    Random,
    Fixed(Color),
}

impl NewNoteColor {
    fn pick(&self) -> Color {
        match self {
            NewNoteColor::Random => Color::random(&mut rand::rng()),
            NewNoteColor::Fixed(color) => color.clone(),
        }
    }
}

/// Outcome of the most recent write to the storage slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersistStatus {
    #[default]
    Saved,
    /// The last write failed. The in-memory notes are still authoritative.
    Unsaved { reason: String },
}

/// Owns the ordered collection of notes, newest first.
///
/// Every mutation is written through to the injected [`Storage`] before it returns. Neither
/// unreadable stored data nor a failing write is reported as an error: both are logged and
/// the store keeps working from memory. Operations addressing an id that is not present do
/// nothing.
#[derive(Debug)]
pub struct NoteStore {
    notes: Vec<Note>,
    storage: Box<dyn Storage>,
    key: String,
    clock: Box<dyn Clock>,
    default_color: NewNoteColor,
    /// Largest id ever seen by this store
    last_id: Option<NoteId>,
    status: PersistStatus,
}

impl NoteStore {
    /// An empty store backed by the `key` slot of `storage`. Nothing is read until
    /// [`NoteStore::load`] is called.
    pub fn new(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        Self {
            notes: Vec::new(),
            storage: Box::new(storage),
            key: key.into(),
            clock: Box::new(SystemClock),
            default_color: NewNoteColor::default(),
            last_id: None,
            status: PersistStatus::default(),
        }
    }

    /// Create a store and load whatever the slot currently holds.
    pub fn open(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.load();
        store
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_default_color(mut self, default_color: NewNoteColor) -> Self {
        self.default_color = default_color;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn persist_status(&self) -> &PersistStatus {
        &self.status
    }

    /// Replace the in-memory notes with the contents of the storage slot.
    ///
    /// An absent slot, or one that cannot be read or parsed, yields an empty collection.
    pub fn load(&mut self) {
        self.notes = match self.read_slot() {
            Ok(notes) => {
                debug!("Loaded {} notes from slot '{}'", notes.len(), self.key);
                notes
            }
            Err(err) => {
                warn!("Discarding unreadable notes in slot '{}': {err}", self.key);
                Vec::new()
            }
        };

        self.last_id = self.notes.iter().map(|n| n.id).max();
    }

    /// Add a new note to the front of the collection and return a copy of it.
    ///
    /// `color` falls back to the store's [`NewNoteColor`] policy.
    pub fn create(&mut self, color: Option<Color>) -> Note {
        let now = self.clock.now();
        let id = self.fresh_id(NoteId::from(now.timestamp_millis()));
        let color = color.unwrap_or_else(|| self.default_color.pick());

        let note = Note::new(id, color, &now);
        self.notes.insert(0, note.clone());

        debug!("Created note {id} ({})", note.color);

        self.persist();

        note
    }

    /// Set the content of a note. Returns `false` if there is no such note.
    pub fn update_content(&mut self, id: NoteId, content: impl Into<String>) -> bool {
        self.mutate(id, |note| note.content = content.into())
    }

    /// Flip the starred flag of a note. Returns `false` if there is no such note.
    pub fn toggle_star(&mut self, id: NoteId) -> bool {
        self.mutate(id, |note| note.starred = !note.starred)
    }

    /// Recolour a note. Returns `false` if there is no such note.
    pub fn set_color(&mut self, id: NoteId, color: Color) -> bool {
        self.mutate(id, |note| note.color = color)
    }

    /// Remove a note. Returns `false` if there is no such note.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);

        if self.notes.len() == before {
            debug!("Ignoring deletion of unknown note {id}");
            return false;
        }

        debug!("Deleted note {id}");
        self.persist();

        true
    }

    /// Notes whose content contains `text`, ignoring case, in collection order.
    ///
    /// An empty `text` matches every note.
    pub fn filter(&self, text: &str) -> Vec<&Note> {
        let needle = text.to_lowercase();

        self.notes
            .iter()
            .filter(|n| needle.is_empty() || n.content.to_lowercase().contains(&needle))
            .collect()
    }

    /// Write the whole collection to the storage slot.
    ///
    /// A failed write is logged and recorded in [`NoteStore::persist_status`]; memory is left
    /// untouched and the write is not retried.
    pub fn persist(&mut self) {
        self.status = match self.write_slot() {
            Ok(()) => PersistStatus::Saved,
            Err(err) => {
                error!("Failed to persist notes to slot '{}': {err}", self.key);
                PersistStatus::Unsaved {
                    reason: err.to_string(),
                }
            }
        };
    }

    fn mutate<F>(&mut self, id: NoteId, f: F) -> bool
    where
        F: FnOnce(&mut Note),
    {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            debug!("Ignoring update of unknown note {id}");
            return false;
        };

        f(note);
        self.persist();

        true
    }

    fn fresh_id(&mut self, candidate: NoteId) -> NoteId {
        let id = match self.last_id {
            Some(last) if candidate <= last => last.next(),
            _ => candidate,
        };

        self.last_id = Some(id);

        id
    }

    fn read_slot(&self) -> Result<Vec<Note>> {
        match self.storage.read(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_slot(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.storage.write(&self.key, &raw)?;

        Ok(())
    }
}
