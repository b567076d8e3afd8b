//! Generator configuration
//!
//! The engine never reaches for a global character table; everything it
//! needs is in a [`GeneratorConfig`] handed to it at construction. The
//! defaults reproduce the stock asset set, and an optional
//! `config/assets.toml` can override them:
//!
//! ```toml
//! output_dir = "assets"
//! parallel = false
//!
//! [[characters]]
//! name = "dwight"
//! shirt = [255, 255, 220]
//! pants = [77, 77, 77]
//! skin = [255, 213, 170]
//! hair = [139, 69, 19]
//! ```

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::error::AssetError;
use crate::palettes::{CharacterDef, default_characters, validate_characters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root the asset paths are joined onto. Must already exist.
    pub output_dir: PathBuf,
    /// Build independent assets on the rayon pool instead of in order
    pub parallel: bool,
    /// Characters to draw sheets for, in generation order
    pub characters: Vec<CharacterDef>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            parallel: false,
            characters: default_characters(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, AssetError> {
        let config: GeneratorConfig = toml::from_str(content).map_err(|source| AssetError::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        validate_characters(&config.characters)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` if it exists. A broken file is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
