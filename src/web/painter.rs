//! egui-backed canvas

use crate::surface::{Bounds, Canvas, Point};
use crate::theme::{alpha_byte, Rgb};

/// Paints field coordinates into an egui layer, offset by the container rect
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    #[inline]
    fn pos(&self, p: Point) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

fn color(rgb: Rgb, alpha: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha_byte(alpha))
}

impl Canvas for PainterCanvas<'_> {
    // egui repaints the whole layer every frame
    fn clear(&mut self, _bounds: Bounds) {}

    fn fill_circle(&mut self, center: Point, radius: f32, rgb: Rgb, alpha: f32) {
        self.painter.circle_filled(self.pos(center), radius, color(rgb, alpha));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, rgb: Rgb, alpha: f32) {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            egui::Stroke::new(width, color(rgb, alpha)),
        );
    }
}
