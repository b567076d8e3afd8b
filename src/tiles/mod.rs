//! Office tile atlas rules
//!
//! Tile index -> drawing program, as a static lookup table. Each program
//! lays down a base fill (floor, wall, desk or carpet) and then the
//! foreground details. Indices past the table are left transparent.

use crate::canvas::{DrawOp, GridCanvas};
use crate::constants::*;

/// Named tiles, in atlas order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Floor,
    Wall,
    Desk,
    Chair,
    Computer,
    Plant,
    Door,
    Window,
    Carpet,
    Table,
}

impl TileKind {
    pub const ALL: [TileKind; 10] = [
        TileKind::Floor,
        TileKind::Wall,
        TileKind::Desk,
        TileKind::Chair,
        TileKind::Computer,
        TileKind::Plant,
        TileKind::Door,
        TileKind::Window,
        TileKind::Carpet,
        TileKind::Table,
    ];

    /// Kind drawn at an atlas index; `None` past the named tiles.
    pub fn from_index(index: usize) -> Option<TileKind> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn program(self) -> &'static [DrawOp] {
        TILE_PROGRAMS[self.index()]
    }
}

// Full-cell base fill. The far edge sits on the next cell and is clipped.
const fn base(color: image::Rgba<u8>) -> DrawOp {
    DrawOp::rect(0, 0, 32, 32, color)
}

const FLOOR: &[DrawOp] = &[base(FLOOR_COLOR)];

const WALL: &[DrawOp] = &[base(WALL_COLOR)];

const DESK: &[DrawOp] = &[base(DESK_COLOR)];

const CHAIR: &[DrawOp] = &[base(FLOOR_COLOR), DrawOp::rect(8, 8, 24, 24, CHAIR_COLOR)];

const COMPUTER: &[DrawOp] = &[
    base(DESK_COLOR),
    DrawOp::rect(8, 5, 24, 17, COMPUTER_COLOR), // monitor
    DrawOp::rect(10, 7, 22, 15, SCREEN_COLOR),
];

const PLANT: &[DrawOp] = &[
    base(FLOOR_COLOR),
    DrawOp::rect(10, 20, 22, 30, POT_COLOR),
    DrawOp::ellipse(8, 5, 24, 20, PLANT_COLOR),
];

const DOOR: &[DrawOp] = &[
    base(WALL_COLOR),
    DrawOp::rect(2, 2, 30, 30, DOOR_COLOR),
    DrawOp::ellipse(5, 16, 8, 19, DOORKNOB_COLOR),
];

const WINDOW: &[DrawOp] = &[
    base(WALL_COLOR),
    DrawOp::rect(3, 5, 29, 27, WINDOW_COLOR),
    DrawOp::line((3, 16), (29, 16), WALL_COLOR, 1),
    DrawOp::line((16, 5), (16, 27), WALL_COLOR, 1),
];

const CARPET: &[DrawOp] = &[base(CARPET_COLOR)];

const TABLE: &[DrawOp] = &[base(FLOOR_COLOR), DrawOp::rect(4, 4, 28, 28, TABLE_COLOR)];

static TILE_PROGRAMS: [&[DrawOp]; 10] = [
    FLOOR, WALL, DESK, CHAIR, COMPUTER, PLANT, DOOR, WINDOW, CARPET, TABLE,
];

pub struct TileRules;

impl TileRules {
    /// Program for a tile index; unassigned indices get an empty program.
    pub fn program(index: usize) -> &'static [DrawOp] {
        TileKind::from_index(index)
            .map(TileKind::program)
            .unwrap_or_default()
    }

    /// Draw tile `index` into the cell at the same row-major position.
    ///
    /// Panics if `index` is not a cell of `canvas`.
    pub fn draw(canvas: &mut GridCanvas, index: usize) {
        assert!(
            index < canvas.cell_count(),
            "tile {} outside the {}-cell atlas",
            index,
            canvas.cell_count()
        );
        canvas.execute(index, Self::program(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn atlas() -> GridCanvas {
        GridCanvas::new(TILE_ATLAS_SIZE, TILE_ATLAS_SIZE, CELL_SIZE)
    }

    fn draw_all(canvas: &mut GridCanvas) {
        for index in 0..canvas.cell_count() {
            TileRules::draw(canvas, index);
        }
    }

    fn pixel(canvas: &GridCanvas, index: usize, x: u32, y: u32) -> Rgba<u8> {
        let cell = canvas.cell(index);
        *canvas.image().get_pixel(cell.x + x, cell.y + y)
    }

    #[test]
    fn test_kind_indices_match_table() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_index(i), Some(*kind));
            assert_eq!(kind.program(), TileRules::program(i));
        }
        assert_eq!(TileKind::from_index(10), None);
        assert!(TileRules::program(42).is_empty());
    }

    #[test]
    fn test_floor_center_is_floor_color() {
        let mut canvas = atlas();
        draw_all(&mut canvas);
        assert_eq!(*canvas.image().get_pixel(16, 16), Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn test_each_tile_is_deterministic() {
        for index in 0..TileKind::ALL.len() {
            let mut a = atlas();
            let mut b = atlas();
            TileRules::draw(&mut a, index);
            TileRules::draw(&mut b, index);
            assert_eq!(a.image().as_raw(), b.image().as_raw(), "tile {}", index);
        }
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut once = atlas();
        draw_all(&mut once);
        let mut twice = atlas();
        draw_all(&mut twice);
        draw_all(&mut twice);
        assert_eq!(once.image().as_raw(), twice.image().as_raw());
    }

    #[test]
    fn test_unassigned_cells_stay_transparent() {
        let mut canvas = atlas();
        draw_all(&mut canvas);
        for cell in canvas.cells().skip(TileKind::ALL.len()) {
            let [x0, y0, x1, y1] = cell.pixel_box();
            for y in y0..y1 {
                for x in x0..x1 {
                    assert_eq!(*canvas.image().get_pixel(x, y), TRANSPARENT);
                }
            }
        }
    }

    #[test]
    fn test_foreground_details() {
        let mut canvas = atlas();
        draw_all(&mut canvas);

        // Chair seat over floor
        assert_eq!(pixel(&canvas, 3, 16, 16), CHAIR_COLOR);
        assert_eq!(pixel(&canvas, 3, 2, 2), FLOOR_COLOR);
        // Screen inside the monitor, desk around it
        assert_eq!(pixel(&canvas, 4, 16, 10), SCREEN_COLOR);
        assert_eq!(pixel(&canvas, 4, 9, 6), COMPUTER_COLOR);
        assert_eq!(pixel(&canvas, 4, 16, 28), DESK_COLOR);
        // Leaves paint over the top of the pot
        assert_eq!(pixel(&canvas, 5, 16, 12), PLANT_COLOR);
        assert_eq!(pixel(&canvas, 5, 16, 28), POT_COLOR);
        assert_eq!(pixel(&canvas, 5, 16, 20), PLANT_COLOR);
        // Door with knob, wall border
        assert_eq!(pixel(&canvas, 6, 20, 10), DOOR_COLOR);
        assert_eq!(pixel(&canvas, 6, 6, 17), DOORKNOB_COLOR);
        assert_eq!(pixel(&canvas, 6, 5, 17), DOORKNOB_COLOR);
        assert_eq!(pixel(&canvas, 6, 8, 17), DOORKNOB_COLOR);
        assert_eq!(pixel(&canvas, 6, 9, 17), DOOR_COLOR);
        assert_eq!(pixel(&canvas, 6, 0, 0), WALL_COLOR);
        // Window pane split by the frame cross
        assert_eq!(pixel(&canvas, 7, 8, 10), WINDOW_COLOR);
        assert_eq!(pixel(&canvas, 7, 8, 16), WALL_COLOR);
        assert_eq!(pixel(&canvas, 7, 16, 10), WALL_COLOR);
        // Carpet and table
        assert_eq!(pixel(&canvas, 8, 16, 16), CARPET_COLOR);
        assert_eq!(pixel(&canvas, 9, 16, 16), TABLE_COLOR);
        assert_eq!(pixel(&canvas, 9, 1, 1), FLOOR_COLOR);
    }

    #[test]
    #[should_panic]
    fn test_index_past_grid_panics() {
        let mut canvas = atlas();
        TileRules::draw(&mut canvas, 100);
    }
}
