use std::fs;

use serde::{Deserialize, Serialize};
use stickies_lib::fs::config_dir;
use tracing::warn;

use crate::config::theme::Theme;

pub mod theme;

const FILE_NAME: &str = "gui.toml";

/// The desktop front-end's own settings, serialized to TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
    /// Width of a single note card in logical pixels
    pub card_width: Option<f32>,
}

impl GuiConfig {
    pub fn load() -> Self {
        let path = match config_dir() {
            Ok(dir) => dir.join(FILE_NAME),
            Err(err) => {
                warn!("Using default GUI configuration: {err}");
                return Self::default();
            }
        };

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                    warn!("Ignoring malformed {}: {err}", path.display());
                    Self::default()
                }),
                Err(err) => {
                    warn!("Could not read {}: {err}", path.display());
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let result = config_dir().map_err(|err| err.to_string()).and_then(|dir| {
            let contents = toml::to_string_pretty(self).map_err(|err| err.to_string())?;
            fs::write(dir.join(FILE_NAME), contents).map_err(|err| err.to_string())
        });

        if let Err(err) = result {
            warn!("Could not save GUI configuration: {err}");
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }

    pub fn card_width(&self) -> f32 {
        self.card_width.unwrap_or(240.0)
    }
}
