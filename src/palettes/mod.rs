//! Character color schemes
//!
//! Every character sheet is drawn from the same frame template; the only
//! thing that tells Dwight from Jim is the four colors below.

mod database;

pub use database::{CharacterDef, default_characters, validate_characters};

use image::Rgba;

/// Body-part role a template shape is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Shirt,
    Pants,
    Skin,
    Hair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub shirt: Rgba<u8>,
    pub pants: Rgba<u8>,
    pub skin: Rgba<u8>,
    pub hair: Rgba<u8>,
}

impl ColorScheme {
    /// Opaque scheme from RGB triples
    pub const fn new(shirt: [u8; 3], pants: [u8; 3], skin: [u8; 3], hair: [u8; 3]) -> Self {
        Self {
            shirt: opaque(shirt),
            pants: opaque(pants),
            skin: opaque(skin),
            hair: opaque(hair),
        }
    }

    pub fn color(&self, part: BodyPart) -> Rgba<u8> {
        match part {
            BodyPart::Shirt => self.shirt,
            BodyPart::Pants => self.pants,
            BodyPart::Skin => self.skin,
            BodyPart::Hair => self.hair,
        }
    }

    pub fn colors(&self) -> [Rgba<u8>; 4] {
        [self.shirt, self.pants, self.skin, self.hair]
    }
}

const fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}
