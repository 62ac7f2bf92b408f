/// Abstract rendering interface.

use crate::core::types::{Color, Vec2};

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_polygon(&self, points: &[Vec2], color: Color);
    fn stroke_polyline(&self, points: &[Vec2], closed: bool, color: Color, line_width: f64);

    // Text
    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color);
    fn text_width(&self, text: &str, size: f64) -> f64;
}
