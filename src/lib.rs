//! Dundie asset generator
//!
//! Procedurally draws the office tile atlas, the character sprite sheets,
//! and the small UI images the game loads, by replaying fixed drawing
//! programs onto grid canvases.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod palettes;
pub mod sprites;
pub mod tiles;

pub use canvas::{Cell, DrawOp, GridCanvas, LocalBox};
pub use config::GeneratorConfig;
pub use constants::*;
pub use error::AssetError;
pub use generate::{
    AssetJob, AssetKind, AssetLayoutEngine, AssetOutcome, AssetSink, BatchReport, PixelFormat,
    PngSink,
};
pub use palettes::{BodyPart, CharacterDef, ColorScheme};
pub use sprites::{Facing, Frame, SpriteRules, leg_offset};
pub use tiles::{TileKind, TileRules};
