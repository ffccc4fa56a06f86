//! What a front-end needs to draw notes and to turn its controls back into store mutations.
//!
//! Rendering is always a full replace: a front-end asks for the [`Card`]s of the current
//! (possibly filtered) collection and throws its previous set away. Controls never touch
//! notes directly, they emit a [`Command`] which is applied with [`NoteStore::dispatch`].

use crate::{
    config::Features,
    note::{Color, Note, NoteId, Swatch},
    store::NoteStore,
};

pub const STARRED_GLYPH: &str = "★";
pub const UNSTARRED_GLYPH: &str = "☆";

/// Display projection of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: NoteId,
    pub background: Color,
    pub content: String,
    pub starred: bool,
    pub date: String,
}

impl Card {
    pub fn star_glyph(&self) -> &'static str {
        if self.starred {
            STARRED_GLYPH
        } else {
            UNSTARRED_GLYPH
        }
    }
}

impl From<&Note> for Card {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id(),
            background: note.color().clone(),
            content: note.content().clone(),
            starred: note.starred(),
            date: note.date().clone(),
        }
    }
}

/// One card per note, in the order given.
pub fn cards<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Vec<Card> {
    notes.into_iter().map(Card::from).collect()
}

/// A store mutation requested by a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(Option<Color>),
    UpdateContent(NoteId, String),
    ToggleStar(NoteId),
    SetColor(NoteId, Color),
    Delete(NoteId),
}

/// What the front-end has to do after a [`Command`] has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Identity and order are unchanged, the visible cards are still valid.
    Keep,
    /// Rebuild every card from the store.
    Rerender,
}

impl NoteStore {
    pub fn dispatch(&mut self, command: Command) -> Refresh {
        match command {
            Command::Create(color) => {
                self.create(color);
                Refresh::Rerender
            }
            Command::UpdateContent(id, content) => {
                self.update_content(id, content);
                Refresh::Keep
            }
            Command::ToggleStar(id) => {
                self.toggle_star(id);
                Refresh::Rerender
            }
            Command::SetColor(id, color) => {
                self.set_color(id, color);
                Refresh::Rerender
            }
            Command::Delete(id) => {
                self.delete(id);
                Refresh::Rerender
            }
        }
    }
}

/// View-side state of a note board: which notes are shown.
#[derive(Debug, Clone, Default)]
pub struct Board {
    search_enabled: bool,
    query: String,
}

impl Board {
    pub fn new(features: &Features) -> Self {
        Self {
            search_enabled: features.search,
            query: String::new(),
        }
    }

    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Cards for every note matching the current query.
    pub fn visible(&self, store: &NoteStore) -> Vec<Card> {
        if self.search_enabled {
            cards(store.filter(&self.query))
        } else {
            cards(store.notes())
        }
    }
}

/// The pre-creation colour chooser: a panel of [`Swatch`]es that can be toggled open.
#[derive(Debug, Clone, Default)]
pub struct ColorPicker {
    open: bool,
    pending: Option<Color>,
}

impl ColorPicker {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Colour used for the most recent creation.
    pub fn pending(&self) -> Option<&Color> {
        self.pending.as_ref()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Hide the panel without choosing anything.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Choose a swatch. The panel closes and a note of that colour is to be created.
    pub fn select(&mut self, swatch: Swatch) -> Command {
        let color = Color::from(swatch);

        self.pending = Some(color.clone());
        self.open = false;

        Command::Create(Some(color))
    }
}
