//! Character sprite sheet rules
//!
//! A sheet is a 4x4 grid of 32x32 frames. The row is the facing direction
//! (down, left, right, up) and the column is the walk phase. Every frame is
//! the same five-shape figure painted with one character's color scheme:
//! torso, head, hair over the top of the head, then two legs.
//!
//! Sideways rows get a one-pixel leg swing. Phase 0 is the neutral stance;
//! phases 1 and 3 push the front leg forward and phase 2 pulls it back, so
//! only three of the four columns visibly move.

use crate::canvas::{DrawOp, GridCanvas, LocalBox};
use crate::constants::{FRAMES_PER_SHEET, SPRITE_GRID_COLS};
use crate::palettes::{BodyPart, ColorScheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

    pub fn row(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
            Facing::Up => "up",
        }
    }

    /// Only side views show the legs apart.
    pub fn walks_sideways(self) -> bool {
        matches!(self, Facing::Left | Facing::Right)
    }

    /// The four frames of this row's walk cycle.
    pub fn walk_frames(self) -> [Frame; 4] {
        let first = self.row() * SPRITE_GRID_COLS as u8;
        [0, 1, 2, 3].map(|phase| Frame(first + phase))
    }

    /// Standing frame: the neutral phase of the row.
    pub fn idle_frame(self) -> Frame {
        self.walk_frames()[0]
    }

    /// Animation name the game registers for this row, e.g. `jim_walk_left`.
    pub fn animation_key(self, character: &str, walking: bool) -> String {
        let action = if walking { "walk" } else { "idle" };
        format!("{}_{}_{}", character, action, self.name())
    }
}

/// Frame number 0-15 on a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Frame(u8);

impl Frame {
    pub fn new(number: u8) -> Option<Frame> {
        (number < FRAMES_PER_SHEET).then_some(Frame(number))
    }

    pub fn all() -> impl Iterator<Item = Frame> {
        (0..FRAMES_PER_SHEET).map(Frame)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / SPRITE_GRID_COLS as u8
    }

    /// Walk phase 0-3
    pub fn col(self) -> u8 {
        self.0 % SPRITE_GRID_COLS as u8
    }

    pub fn facing(self) -> Facing {
        Facing::ALL[self.row() as usize]
    }

    /// Cell index on the sheet
    pub fn cell(self) -> usize {
        self.0 as usize
    }
}

/// Horizontal leg shift for a frame: 0 at phase 0, then +1, -1, +1.
/// Down and up rows never shift.
pub fn leg_offset(frame: Frame) -> i32 {
    if !frame.facing().walks_sideways() {
        return 0;
    }
    let phase = frame.col() as i32;
    if phase > 0 { (phase % 2) * 2 - 1 } else { 0 }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Rect,
    Ellipse,
}

/// One shape of the figure. `swing` is how the leg offset applies to it.
#[derive(Debug, Clone, Copy)]
struct Part {
    part: BodyPart,
    shape: Shape,
    bounds: LocalBox,
    swing: i32,
}

const fn part(part: BodyPart, shape: Shape, bounds: LocalBox, swing: i32) -> Part {
    Part {
        part,
        shape,
        bounds,
        swing,
    }
}

// z-order is array order
const FIGURE: [Part; 5] = [
    part(BodyPart::Shirt, Shape::Rect, LocalBox::new(10, 8, 22, 20), 0),
    part(BodyPart::Skin, Shape::Ellipse, LocalBox::new(10, 2, 22, 14), 0),
    part(BodyPart::Hair, Shape::Rect, LocalBox::new(10, 2, 22, 8), 0),
    part(BodyPart::Pants, Shape::Rect, LocalBox::new(10, 20, 15, 30), 1),
    part(BodyPart::Pants, Shape::Rect, LocalBox::new(17, 20, 22, 30), -1),
];

pub struct SpriteRules;

impl SpriteRules {
    /// Drawing program for one frame of a character.
    pub fn program(frame: Frame, scheme: &ColorScheme) -> Vec<DrawOp> {
        let offset = leg_offset(frame);
        FIGURE
            .iter()
            .map(|p| {
                let bounds = p.bounds.shifted_x(p.swing * offset);
                let color = scheme.color(p.part);
                match p.shape {
                    Shape::Rect => DrawOp::Rect { bounds, color },
                    Shape::Ellipse => DrawOp::Ellipse { bounds, color },
                }
            })
            .collect()
    }

    pub fn draw(canvas: &mut GridCanvas, frame: Frame, scheme: &ColorScheme) {
        canvas.execute(frame.cell(), &Self::program(frame, scheme));
    }
}
