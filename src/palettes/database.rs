//! Character table - the default cast and name validation

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ColorScheme;
use crate::error::AssetError;

/// A named character as listed in the config file (RGB 0-255).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub name: String,
    pub shirt: [u8; 3],
    pub pants: [u8; 3],
    pub skin: [u8; 3],
    pub hair: [u8; 3],
}

impl CharacterDef {
    pub fn new(name: &str, shirt: [u8; 3], pants: [u8; 3], skin: [u8; 3], hair: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            shirt,
            pants,
            skin,
            hair,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::new(self.shirt, self.pants, self.skin, self.hair)
    }
}

const SKIN: [u8; 3] = [255, 213, 170];
const BLACK: [u8; 3] = [50, 50, 50];

/// The office cast, in the order the sheets are generated.
pub fn default_characters() -> Vec<CharacterDef> {
    vec![
        CharacterDef::new("dwight", [255, 255, 220], [77, 77, 77], SKIN, [139, 69, 19]),
        CharacterDef::new("jim", [173, 216, 230], BLACK, SKIN, [101, 67, 33]),
        CharacterDef::new("pam", [255, 182, 193], [169, 169, 169], SKIN, [205, 133, 63]),
        CharacterDef::new("michael", [230, 230, 250], [47, 79, 79], SKIN, [0, 0, 0]),
        CharacterDef::new("angela", [240, 248, 255], BLACK, SKIN, [255, 215, 0]),
        CharacterDef::new("stanley", [245, 245, 220], [47, 79, 79], [101, 67, 33], BLACK),
        CharacterDef::new("kevin", [220, 20, 60], BLACK, SKIN, [101, 67, 33]),
        CharacterDef::new("oscar", [143, 188, 143], BLACK, [210, 180, 140], [0, 0, 0]),
        CharacterDef::new("phyllis", [216, 191, 216], [64, 130, 109], SKIN, [211, 211, 211]),
        CharacterDef::new("meredith", [50, 205, 50], [178, 34, 34], SKIN, [255, 127, 80]),
        CharacterDef::new("creed", [112, 128, 144], BLACK, SKIN, [192, 192, 192]),
        CharacterDef::new("ryan", [30, 144, 255], BLACK, SKIN, [0, 0, 0]),
        CharacterDef::new("kelly", [255, 105, 180], [123, 104, 238], [210, 180, 140], [0, 0, 0]),
        CharacterDef::new("toby", [184, 134, 11], BLACK, SKIN, [205, 133, 63]),
        CharacterDef::new("darryl", [70, 130, 180], BLACK, [139, 69, 19], BLACK),
    ]
}

/// Names must be unique and usable as a bare file stem.
pub fn validate_characters(characters: &[CharacterDef]) -> Result<(), AssetError> {
    let mut seen = HashSet::new();
    for character in characters {
        let name = character.name.as_str();
        let plain = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain {
            return Err(AssetError::InvalidCharacterName(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(AssetError::DuplicateCharacter(name.to_string()));
        }
    }
    Ok(())
}
