/// Cairo-based renderer implementation.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::Context;

pub struct RendererCairo {
    cr: Context,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn select_font(&self, size: f64) {
        self.cr
            .select_font_face("monospace", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
    }

    fn polyline_path(&self, points: &[Vec2], closed: bool) {
        self.cr.new_path();
        if let Some(first) = points.first() {
            self.cr.move_to(first.x, first.y);
            for p in &points[1..] {
                self.cr.line_to(p.x, p.y);
            }
            if closed {
                self.cr.close_path();
            }
        }
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn fill_polygon(&self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.set_color(color);
        self.polyline_path(points, true);
        self.cr.fill().ok();
    }

    fn stroke_polyline(&self, points: &[Vec2], closed: bool, color: Color, line_width: f64) {
        if points.len() < 2 {
            return;
        }
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.polyline_path(points, closed);
        self.cr.stroke().ok();
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.select_font(size);
        self.cr.move_to(x, y + size);
        self.cr.show_text(text).ok();
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        self.select_font(size);
        self.cr
            .text_extents(text)
            .map(|ext| ext.width())
            .unwrap_or_else(|_| text.len() as f64 * size * 0.6)
    }
}
