//! Drawing operations and cell-local boxes
//!
//! A drawing program is a plain slice of [`DrawOp`]s. Later ops paint over
//! earlier ones, so program order is z-order.

use image::Rgba;

/// Corner-inclusive box `[x0, y0, x1, y1]` in cell-local pixels.
///
/// Both edges are painted, so `[0, 0, 32, 32]` nominally covers 33x33
/// pixels. The canvas clips the extra row and column to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl LocalBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal shift, used for the walking leg offset.
    pub const fn shifted_x(self, dx: i32) -> Self {
        Self::new(self.x0 + dx, self.y0, self.x1 + dx, self.y1)
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub const fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1) as u32
    }

    pub const fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1) as u32
    }

    /// Geometric center, treating the box as covering whole pixels.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1 + 1) as f32 / 2.0,
            (self.y0 + self.y1 + 1) as f32 / 2.0,
        )
    }
}

/// One primitive paint operation addressed in cell-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Rect {
        bounds: LocalBox,
        color: Rgba<u8>,
    },
    Ellipse {
        bounds: LocalBox,
        color: Rgba<u8>,
    },
    Line {
        start: (i32, i32),
        end: (i32, i32),
        color: Rgba<u8>,
        width: u32,
    },
}

impl DrawOp {
    pub const fn rect(x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) -> Self {
        DrawOp::Rect {
            bounds: LocalBox::new(x0, y0, x1, y1),
            color,
        }
    }

    pub const fn ellipse(x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) -> Self {
        DrawOp::Ellipse {
            bounds: LocalBox::new(x0, y0, x1, y1),
            color,
        }
    }

    pub const fn line(start: (i32, i32), end: (i32, i32), color: Rgba<u8>, width: u32) -> Self {
        DrawOp::Line {
            start,
            end,
            color,
            width,
        }
    }

    pub fn color(&self) -> Rgba<u8> {
        match *self {
            DrawOp::Rect { color, .. } | DrawOp::Ellipse { color, .. } | DrawOp::Line { color, .. } => {
                color
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_spans_include_both_edges() {
        let b = LocalBox::new(10, 20, 21, 30);
        assert_eq!(b.width(), 12);
        assert_eq!(b.height(), 11);
        assert!(!b.is_empty());
        assert!(LocalBox::new(5, 0, 4, 0).is_empty());
    }

    #[test]
    fn test_shift_moves_only_x() {
        let b = LocalBox::new(10, 20, 15, 30).shifted_x(-1);
        assert_eq!(b, LocalBox::new(9, 20, 14, 30));
    }

    #[test]
    fn test_ellipse_geometry() {
        // Sprite head box
        let b = LocalBox::new(10, 2, 22, 14);
        assert_eq!(b.center(), (16.5, 8.5));
        assert_eq!((b.width(), b.height()), (13, 13));
    }
}
