// view.rs - How frame buffer contents look on screen

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use life_core::{Fill, FrameBuffer};

pub const ALIVE_COLOR: Color32 = Color32::BLACK;
pub const DEAD_COLOR: Color32 = Color32::WHITE;
pub const PREVIEW_COLOR: Color32 = Color32::GRAY;
pub const SLOT_DISABLED_COLOR: Color32 = Color32::from_gray(150);
const GRID_LINE: Color32 = Color32::from_gray(60);

pub fn fill_color(fill: Fill) -> Color32 {
    match fill {
        Fill::Alive   => ALIVE_COLOR,
        Fill::Dead    => DEAD_COLOR,
        Fill::Preview => PREVIEW_COLOR,
    }
}

/// Screen rectangle of a cell whose grid starts at `origin`.
pub fn cell_rect(origin: Pos2, resolution: f32, col: usize, row: usize) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(col as f32 * resolution, row as f32 * resolution),
        Vec2::splat(resolution),
    )
}

pub fn paint_grid(painter: &Painter, origin: Pos2, resolution: f32, frame: &FrameBuffer) {
    for row in 0..frame.rows() {
        for col in 0..frame.cols() {
            let rect = cell_rect(origin, resolution, col, row);
            painter.rect_filled(rect, 0.0, fill_color(frame.fill(col, row)));
            painter.rect_stroke(rect, 0.0, Stroke::new(0.5, GRID_LINE));
        }
    }
}
