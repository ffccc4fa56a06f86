//! Core configuration shared by every front-end, serialized to TOML.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    Result,
    fs::{config_dir, data_dir},
    note::Color,
    storage::{FileStorage, MemoryStorage},
    store::{DEFAULT_STORAGE_KEY, NewNoteColor, NoteStore},
};

const FILE_NAME: &str = "stickies.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Name of the slot notes are persisted in
    pub storage_key: String,
    /// Overrides the XDG data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub features: Features,
    pub search: SearchConfig,
    pub notes: NotesConfig,
}

/// Optional parts of the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Show the search bar and filter cards by it
    pub search: bool,
    /// Choose a colour from a swatch panel before creating a note
    pub color_picker: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Colour for new notes. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<Color>,
}

impl CoreConfig {
    /// Load the configuration file from the XDG config directory, writing a default one if it
    /// doesn't exist yet. Any failure is logged and yields the defaults.
    pub fn load() -> Self {
        let loaded = config_dir().and_then(|dir| Self::load_from(&dir.join(FILE_NAME)));

        loaded.unwrap_or_else(|err| {
            warn!("Using default configuration: {err}");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(path)?;
            debug!("Wrote default configuration to {}", path.display());
            return Ok(cfg);
        }

        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        Ok(())
    }

    /// Directory holding the note slots.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => data_dir(),
        }
    }

    pub fn new_note_color(&self) -> NewNoteColor {
        match &self.notes.default_color {
            Some(color) => NewNoteColor::Fixed(color.clone()),
            None => NewNoteColor::Random,
        }
    }

    /// Open the configured note store.
    ///
    /// Without a usable data directory notes are kept in memory for this session only.
    pub fn open_store(&self) -> NoteStore {
        let store = match self.data_dir() {
            Ok(dir) => NoteStore::open(FileStorage::new(dir), self.storage_key.as_str()),
            Err(err) => {
                warn!("No data directory, notes will not be saved: {err}");
                NoteStore::open(MemoryStorage::new(), self.storage_key.as_str())
            }
        };

        store.with_default_color(self.new_note_color())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            features: Features::default(),
            search: SearchConfig::default(),
            notes: NotesConfig::default(),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            search: true,
            color_picker: false,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stickies.toml");

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
        assert_eq!(CoreConfig::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stickies.toml");
        fs::write(
            &path,
            "storage_key = \"work\"\n\n[features]\ncolor_picker = true\n\n[notes]\ndefault_color = \"#fff475\"\n",
        )
        .unwrap();

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg.storage_key, "work");
        assert!(cfg.features.search);
        assert!(cfg.features.color_picker);
        assert_eq!(cfg.search.debounce(), Duration::from_millis(300));
        assert_eq!(
            cfg.new_note_color(),
            NewNoteColor::Fixed(Color::new("#fff475"))
        );
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stickies.toml");
        fs::write(&path, "features = 3").unwrap();

        assert!(CoreConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_open_store() {
        let dir = tempdir().unwrap();
        let cfg = CoreConfig {
            data_dir: Some(dir.path().to_path_buf()),
            storage_key: "board".into(),
            notes: NotesConfig {
                default_color: Some(Color::new("#a7ffeb")),
            },
            ..CoreConfig::default()
        };

        let mut store = cfg.open_store();
        let id = store.create(None).id();
        store.update_content(id, "persisted");

        let reopened = cfg.open_store();

        assert!(dir.path().join("board.json").exists());
        assert_eq!(reopened.get(id).unwrap().content(), "persisted");
        assert_eq!(reopened.get(id).unwrap().color().as_str(), "#a7ffeb");
    }
}
