//! Fixed sizes, colors, and output paths for the generated assets
//!
//! The paths are a contract with the game: the preload scene loads these
//! exact files, so changing one here means changing the loader too.

use image::Rgba;

// =============================================================================
// GRID GEOMETRY
// =============================================================================

pub const CELL_SIZE: u32 = 32;

pub const TILE_GRID_COLS: u32 = 10;
pub const TILE_GRID_ROWS: u32 = 10;
pub const TILE_ATLAS_SIZE: u32 = CELL_SIZE * TILE_GRID_COLS; // 320x320

pub const SPRITE_GRID_COLS: u32 = 4;
pub const SPRITE_GRID_ROWS: u32 = 4;
pub const SPRITE_SHEET_SIZE: u32 = CELL_SIZE * SPRITE_GRID_COLS; // 128x128
pub const FRAMES_PER_SHEET: u8 = (SPRITE_GRID_COLS * SPRITE_GRID_ROWS) as u8;

// =============================================================================
// ANCILLARY CANVAS SIZES
// =============================================================================

pub const LOGO_SIZE: (u32, u32) = (200, 100);
pub const DIALOG_SIZE: (u32, u32) = (300, 100);
pub const SCREENSHOT_SIZE: (u32, u32) = (800, 600);

// =============================================================================
// COLORS
// =============================================================================

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub const FLOOR_COLOR: Rgba<u8> = Rgba([200, 200, 200, 255]); // Light gray
pub const WALL_COLOR: Rgba<u8> = Rgba([100, 100, 100, 255]); // Dark gray
pub const DESK_COLOR: Rgba<u8> = Rgba([139, 69, 19, 255]); // Brown
pub const CHAIR_COLOR: Rgba<u8> = Rgba([0, 0, 139, 255]); // Dark blue
pub const COMPUTER_COLOR: Rgba<u8> = Rgba([50, 50, 50, 255]); // Almost black
pub const SCREEN_COLOR: Rgba<u8> = Rgba([173, 216, 230, 255]);
pub const PLANT_COLOR: Rgba<u8> = Rgba([0, 100, 0, 255]); // Dark green
pub const POT_COLOR: Rgba<u8> = Rgba([139, 69, 19, 255]);
pub const DOOR_COLOR: Rgba<u8> = Rgba([160, 82, 45, 255]); // Sienna
pub const DOORKNOB_COLOR: Rgba<u8> = Rgba([255, 215, 0, 255]);
pub const WINDOW_COLOR: Rgba<u8> = Rgba([173, 216, 230, 255]); // Light blue
pub const CARPET_COLOR: Rgba<u8> = Rgba([47, 79, 79, 255]); // Dark slate gray
pub const TABLE_COLOR: Rgba<u8> = Rgba([160, 82, 45, 255]);

pub const PANEL_COLOR: Rgba<u8> = Rgba([50, 50, 50, 200]); // Translucent backing
pub const LOGO_FRAME_COLOR: Rgba<u8> = Rgba([139, 69, 19, 255]);
pub const LOGO_PLATE_COLOR: Rgba<u8> = Rgba([255, 215, 0, 255]); // Gold
pub const DIALOG_BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const SCREENSHOT_BACKGROUND: Rgba<u8> = Rgba([30, 30, 30, 255]);
pub const SCREENSHOT_VIEWPORT: Rgba<u8> = Rgba([60, 60, 60, 255]);
pub const SCREENSHOT_PLAYER: Rgba<u8> = Rgba([100, 100, 100, 255]);

// =============================================================================
// OUTPUT PATHS (relative to the configured output directory)
// =============================================================================

pub const TILE_ATLAS_PATH: &str = "tiles/office_tiles.png";
pub const SPRITES_DIR: &str = "sprites";
pub const LOGO_PATHS: [&str; 2] = ["logo.png", "ui/dundie_logo.png"];
pub const DIALOG_BOX_PATH: &str = "ui/dialog_box.png";
pub const SCREENSHOT_PATH: &str = "screenshots/game_screenshot.png";

pub const DEFAULT_OUTPUT_DIR: &str = "assets";
pub const CONFIG_FILE: &str = "config/assets.toml";
