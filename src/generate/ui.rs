//! Single-purpose UI assets: logo, dialog box, screenshot placeholder
//!
//! Each is one program drawn on a one-cell canvas the size of the asset.

use crate::canvas::DrawOp;
use crate::constants::*;

pub const LOGO: &[DrawOp] = &[
    DrawOp::rect(0, 0, 200, 100, PANEL_COLOR),
    DrawOp::rect(20, 20, 180, 80, LOGO_FRAME_COLOR),
    DrawOp::rect(30, 30, 170, 70, LOGO_PLATE_COLOR),
];

pub const DIALOG_BOX: &[DrawOp] = &[
    DrawOp::rect(0, 0, 300, 100, PANEL_COLOR),
    DrawOp::line((2, 2), (298, 2), DIALOG_BORDER_COLOR, 1),
    DrawOp::line((2, 98), (298, 98), DIALOG_BORDER_COLOR, 1),
    DrawOp::line((2, 2), (2, 98), DIALOG_BORDER_COLOR, 1),
    DrawOp::line((298, 2), (298, 98), DIALOG_BORDER_COLOR, 1),
];

// Painted as RGBA, saved as RGB
pub const SCREENSHOT: &[DrawOp] = &[
    DrawOp::rect(0, 0, 800, 600, SCREENSHOT_BACKGROUND),
    DrawOp::rect(50, 50, 750, 550, SCREENSHOT_VIEWPORT),
    DrawOp::rect(300, 200, 500, 400, SCREENSHOT_PLAYER),
];
