use std::{fs::create_dir_all, path::PathBuf};

use xdg::BaseDirectories;

use crate::{Error, Result};

/// Returns the path to the Stickies configuration directory. If it doesn't exist when this
/// function is called, it will be created.
pub fn config_dir() -> Result<PathBuf> {
    ensure(xdg_prefix().get_config_home())
}

/// Returns the path to the Stickies data directory, where note slots live. If it doesn't exist
/// when this function is called, it will be created.
pub fn data_dir() -> Result<PathBuf> {
    ensure(xdg_prefix().get_data_home())
}

fn ensure(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = path.ok_or(Error::NoHomeDir)?;

    create_dir_all(&path)?;

    Ok(path)
}

fn xdg_prefix() -> BaseDirectories {
    xdg::BaseDirectories::with_prefix("stickies")
}
