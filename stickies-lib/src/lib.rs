//! Sticky notes: a small, persisted, newest-first collection of coloured notes.
//!
//! The [`NoteStore`] owns the notes and writes them through to a key-value [`Storage`] slot
//! after every change. Front-ends render [`view::Card`]s from it and send [`view::Command`]s
//! back.
//!
//! [`Storage`]: storage::Storage

use thiserror::Error;

pub mod config;
pub mod debounce;
pub mod fs;
pub mod note;
pub mod storage;
pub mod store;
pub mod view;

pub use config::CoreConfig;
pub use note::{Color, Note, NoteId, Swatch};
pub use store::NoteStore;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] storage::StorageError),
    #[error("Malformed notes data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    ConfigRead(#[from] toml::de::Error),
    #[error("Could not serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("$HOME must exist")]
    NoHomeDir,
}
