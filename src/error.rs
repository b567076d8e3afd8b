//! Error type shared by the generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("character '{0}' is defined more than once")]
    DuplicateCharacter(String),

    /// Names become file stems under `sprites/`, so they must be plain.
    #[error("character name '{0}' is not a valid file name")]
    InvalidCharacterName(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AssetError {
    /// Short kind label used in log lines next to the description.
    pub fn kind(&self) -> &'static str {
        match self {
            AssetError::Save { .. } => "SaveError",
            AssetError::Config { .. } => "ConfigError",
            AssetError::DuplicateCharacter(_) | AssetError::InvalidCharacterName(_) => {
                "CharacterError"
            }
            AssetError::Io(_) => "IoError",
        }
    }
}
