use super::super::ContourpadApp;
use crate::editor::EditorEvent;
use crate::render::{self, Canvas};
use crate::types::{PixelPos, Rgba};
use egui::{CornerRadius, Painter, Pos2, Stroke, StrokeKind};

/// [`Canvas`] over an egui painter; pixel positions are relative to `origin`.
struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(value: f64) -> f32 {
    value as f32
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: Rgba) {
        self.painter
            .rect_filled(self.painter.clip_rect(), CornerRadius::ZERO, color.to_color32());
    }

    fn line(&mut self, from: PixelPos, to: PixelPos, color: Rgba, width: f64) {
        self.painter.line_segment(
            [from.to_pos2(self.origin), to.to_pos2(self.origin)],
            Stroke::new(to_f32(width), color.to_color32()),
        );
    }

    fn circle_filled(&mut self, center: PixelPos, radius: f64, color: Rgba) {
        self.painter.circle_filled(
            center.to_pos2(self.origin),
            to_f32(radius),
            color.to_color32(),
        );
    }

    fn rect_stroke(&mut self, min: PixelPos, width: f64, height: f64, color: Rgba, stroke: f64) {
        let min = min.to_pos2(self.origin);
        let rect = egui::Rect::from_min_size(min, egui::vec2(to_f32(width), to_f32(height)));
        self.painter.rect_stroke(
            rect,
            CornerRadius::ZERO,
            Stroke::new(to_f32(stroke), color.to_color32()),
            StrokeKind::Middle,
        );
    }
}

fn pixel_extent(value: f32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.floor().max(0.0) as u32
    }
}

impl ContourpadApp {
    pub(crate) fn ui_preview(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        self.send(&EditorEvent::Resize {
            width: pixel_extent(rect.width()),
            height: pixel_extent(rect.height()),
        });
        self.send(&EditorEvent::PaintRequest);

        let painter = painter.with_clip_rect(rect);
        let mut canvas = PainterCanvas {
            painter: &painter,
            origin: rect.min,
        };
        canvas.clear(Rgba::WHITE);
        render::draw_all(self.editor.frame(), &mut canvas);
    }
}
