//! Grid canvas
//!
//! A transparent RGBA surface divided into equally sized cells. Every draw
//! call is addressed to one cell in cell-local coordinates; the canvas
//! translates to absolute pixels and clips the result to that cell, so a
//! program can never paint into its neighbours.
//!
//! Pixels are overwritten, never blended: the last op to touch a pixel
//! decides both its color and its alpha.

pub mod ops;

pub use ops::{DrawOp, LocalBox};

use image::{Rgba, RgbaImage};
use imageproc::drawing::{Canvas, draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use log::debug;

/// One grid-aligned region of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub row: u32,
    pub col: u32,
    /// Absolute pixel origin
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Cell {
    /// Absolute box `[x0, y0, x1, y1]`; `x1`/`y1` are the first pixels
    /// past the cell.
    pub fn pixel_box(&self) -> [u32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    fn origin(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// imageproc canvas that drops every pixel outside one cell.
struct CellView<'a> {
    image: &'a mut RgbaImage,
    cell: Cell,
}

impl Canvas for CellView<'_> {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if self.cell.contains(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }
}

pub struct GridCanvas {
    image: RgbaImage,
    cell_width: u32,
    cell_height: u32,
    cols: u32,
    rows: u32,
}

impl GridCanvas {
    /// Transparent `width`x`height` canvas split into square cells.
    ///
    /// Panics if the dimensions are not a multiple of `cell_size`.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        assert!(
            cell_size > 0 && width % cell_size == 0 && height % cell_size == 0,
            "{}x{} canvas cannot be split into {}px cells",
            width,
            height,
            cell_size
        );
        Self {
            image: RgbaImage::new(width, height),
            cell_width: cell_size,
            cell_height: cell_size,
            cols: width / cell_size,
            rows: height / cell_size,
        }
    }

    /// Canvas with one cell covering the whole surface (logo, dialog box...).
    pub fn single(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            cell_width: width,
            cell_height: height,
            cols: 1,
            rows: 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Cell at a row-major index. Out-of-range indices are a caller bug.
    pub fn cell(&self, index: usize) -> Cell {
        assert!(
            index < self.cell_count(),
            "cell {} out of range for a {}x{} grid",
            index,
            self.cols,
            self.rows
        );
        let row = index as u32 / self.cols;
        let col = index as u32 % self.cols;
        Cell {
            index,
            row,
            col,
            x: col * self.cell_width,
            y: row * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|i| self.cell(i))
    }

    fn view(&mut self, index: usize) -> CellView<'_> {
        let cell = self.cell(index);
        CellView {
            image: &mut self.image,
            cell,
        }
    }

    pub fn draw_rect(&mut self, cell: usize, local: LocalBox, color: Rgba<u8>) {
        if local.is_empty() {
            return;
        }
        let (ox, oy) = self.cell(cell).origin();
        let abs = local.translate(ox, oy);
        let rect = Rect::at(abs.x0, abs.y0).of_size(abs.width(), abs.height());
        draw_filled_rect_mut(&mut self.view(cell), rect, color);
    }

    pub fn draw_ellipse(&mut self, cell: usize, local: LocalBox, color: Rgba<u8>) {
        if local.is_empty() {
            return;
        }
        let (ox, oy) = self.cell(cell).origin();
        let abs = local.translate(ox, oy);
        let (cx, cy) = abs.center();
        let rx = abs.width() as f32 / 2.0;
        let ry = abs.height() as f32 / 2.0;
        let mut view = self.view(cell);

        // One span per row; a pixel is in when its center is inside.
        for y in abs.y0..=abs.y1 {
            let t = (y as f32 + 0.5 - cy) / ry;
            let half = rx * (1.0 - t * t).max(0.0).sqrt();
            let left = (cx - half - 0.5).ceil() as i32;
            let right = (cx + half - 0.5).floor() as i32;
            if right >= left {
                let span = Rect::at(left, y).of_size((right - left + 1) as u32, 1);
                draw_filled_rect_mut(&mut view, span, color);
            }
        }
    }

    /// Straight line; widths above one are drawn as parallel segments
    /// stacked along the minor axis.
    pub fn draw_line(
        &mut self,
        cell: usize,
        start: (i32, i32),
        end: (i32, i32),
        color: Rgba<u8>,
        width: u32,
    ) {
        let (ox, oy) = self.cell(cell).origin();
        let horizontal = (end.0 - start.0).abs() >= (end.1 - start.1).abs();
        let width = width.max(1) as i32;
        let mut view = self.view(cell);

        for i in 0..width {
            let shift = i - (width - 1) / 2;
            let (sx, sy) = if horizontal { (0, shift) } else { (shift, 0) };
            draw_line_segment_mut(
                &mut view,
                ((start.0 + ox + sx) as f32, (start.1 + oy + sy) as f32),
                ((end.0 + ox + sx) as f32, (end.1 + oy + sy) as f32),
                color,
            );
        }
    }

    /// Replay a drawing program against one cell, in order.
    pub fn execute(&mut self, cell: usize, program: &[DrawOp]) {
        debug!("cell {}: {} ops", cell, program.len());
        for op in program {
            match *op {
                DrawOp::Rect { bounds, color } => self.draw_rect(cell, bounds, color),
                DrawOp::Ellipse { bounds, color } => self.draw_ellipse(cell, bounds, color),
                DrawOp::Line {
                    start,
                    end,
                    color,
                    width,
                } => self.draw_line(cell, start, end, color, width),
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Finish the canvas and hand the pixels off for saving.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CELL_SIZE, TILE_ATLAS_SIZE, TRANSPARENT};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const HAZE: Rgba<u8> = Rgba([50, 50, 50, 200]);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = GridCanvas::new(64, 32, CELL_SIZE);
        assert_eq!(canvas.cell_count(), 2);
        assert!(canvas.image().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_cells_tile_atlas_exactly() {
        let canvas = GridCanvas::new(TILE_ATLAS_SIZE, TILE_ATLAS_SIZE, CELL_SIZE);
        assert_eq!(canvas.cell_count(), 100);

        let mut hits = vec![0u32; (TILE_ATLAS_SIZE * TILE_ATLAS_SIZE) as usize];
        for cell in canvas.cells() {
            let [x0, y0, x1, y1] = cell.pixel_box();
            assert_eq!(
                [x0, y0, x1, y1],
                [32 * cell.col, 32 * cell.row, 32 * cell.col + 32, 32 * cell.row + 32]
            );
            for y in y0..y1 {
                for x in x0..x1 {
                    hits[(y * TILE_ATLAS_SIZE + x) as usize] += 1;
                }
            }
        }
        assert!(hits.iter().all(|&h| h == 1), "cells overlap or leave gaps");
    }

    #[test]
    fn test_cell_index_is_row_major() {
        let canvas = GridCanvas::new(TILE_ATLAS_SIZE, TILE_ATLAS_SIZE, CELL_SIZE);
        let cell = canvas.cell(23);
        assert_eq!((cell.row, cell.col), (2, 3));
        assert_eq!((cell.x, cell.y), (96, 64));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_cell_panics() {
        let canvas = GridCanvas::new(64, 64, CELL_SIZE);
        canvas.cell(4);
    }

    #[test]
    fn test_full_cell_rect_is_clipped_to_cell() {
        let mut canvas = GridCanvas::new(64, 64, CELL_SIZE);
        canvas.draw_rect(0, LocalBox::new(0, 0, 32, 32), RED);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(31, 31), RED);
        assert_eq!(*img.get_pixel(32, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(0, 32), TRANSPARENT);
    }

    #[test]
    fn test_rect_translates_to_cell_origin() {
        let mut canvas = GridCanvas::new(64, 64, CELL_SIZE);
        canvas.draw_rect(3, LocalBox::new(8, 8, 24, 24), RED);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(40, 40), RED);
        assert_eq!(*img.get_pixel(56, 56), RED);
        assert_eq!(*img.get_pixel(39, 40), TRANSPARENT);
        assert_eq!(*img.get_pixel(57, 56), TRANSPARENT);
    }

    #[test]
    fn test_overwrite_replaces_alpha() {
        let mut canvas = GridCanvas::single(10, 10);
        canvas.draw_rect(0, LocalBox::new(0, 0, 9, 9), RED);
        canvas.draw_rect(0, LocalBox::new(0, 0, 9, 9), HAZE);
        assert_eq!(*canvas.image().get_pixel(5, 5), HAZE);
    }

    #[test]
    fn test_ellipse_fills_center_not_corners() {
        let mut canvas = GridCanvas::new(32, 32, CELL_SIZE);
        canvas.draw_ellipse(0, LocalBox::new(10, 2, 22, 14), RED);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(16, 8), RED);
        assert_eq!(*img.get_pixel(10, 2), TRANSPARENT);
        assert_eq!(*img.get_pixel(22, 14), TRANSPARENT);
    }

    #[test]
    fn test_ellipse_reaches_every_box_edge() {
        // Doorknob box: even spans on both axes
        let mut canvas = GridCanvas::new(32, 32, CELL_SIZE);
        canvas.draw_ellipse(0, LocalBox::new(5, 16, 8, 19), RED);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(5, 17), RED);
        assert_eq!(*img.get_pixel(8, 17), RED);
        assert_eq!(*img.get_pixel(6, 16), RED);
        assert_eq!(*img.get_pixel(6, 19), RED);
        assert_eq!(*img.get_pixel(4, 17), TRANSPARENT);
        assert_eq!(*img.get_pixel(9, 17), TRANSPARENT);
        assert_eq!(*img.get_pixel(6, 20), TRANSPARENT);

        // Plant box: the bottom row is y1
        let mut canvas = GridCanvas::new(32, 32, CELL_SIZE);
        canvas.draw_ellipse(0, LocalBox::new(8, 5, 24, 20), RED);
        assert_eq!(*canvas.image().get_pixel(16, 20), RED);
        assert_eq!(*canvas.image().get_pixel(16, 21), TRANSPARENT);
        assert_eq!(*canvas.image().get_pixel(8, 12), RED);
        assert_eq!(*canvas.image().get_pixel(24, 12), RED);
    }

    #[test]
    fn test_line_width() {
        let mut canvas = GridCanvas::new(32, 32, CELL_SIZE);
        canvas.draw_line(0, (3, 16), (29, 16), RED, 1);
        canvas.draw_line(0, (3, 4), (29, 4), RED, 3);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(16, 16), RED);
        assert_eq!(*img.get_pixel(16, 15), TRANSPARENT);
        assert_eq!(*img.get_pixel(16, 17), TRANSPARENT);
        for y in 3..=5 {
            assert_eq!(*img.get_pixel(16, y), RED);
        }
        assert_eq!(*img.get_pixel(16, 6), TRANSPARENT);
    }

    #[test]
    fn test_single_canvas_spans_whole_surface() {
        let canvas = GridCanvas::single(300, 100);
        assert_eq!(canvas.cell_count(), 1);
        assert_eq!(canvas.cell(0).pixel_box(), [0, 0, 300, 100]);
    }

    #[test]
    fn test_execute_respects_program_order() {
        let program = [
            DrawOp::rect(0, 0, 31, 31, RED),
            DrawOp::rect(0, 0, 15, 31, HAZE),
        ];
        let mut canvas = GridCanvas::new(32, 32, CELL_SIZE);
        canvas.execute(0, &program);

        assert_eq!(*canvas.image().get_pixel(4, 4), HAZE);
        assert_eq!(*canvas.image().get_pixel(20, 4), RED);
    }
}
