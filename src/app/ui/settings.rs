use super::super::ContourpadApp;
use super::common::labeled_switch;
use crate::editor::{ButtonId, EditorEvent};
use crate::types::Rgba;
use egui::{Key, RichText, TextEdit};

impl ContourpadApp {
    pub(crate) fn ui_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading("Drawing");
        let style = self.editor.style_mut();

        let mut grid = style.grid_enabled();
        if labeled_switch(ui, "Grid", &mut grid, "Draw cell lines and the border") {
            style.set_grid_enabled(grid);
        }
        let mut per_path = style.color_per_path();
        if labeled_switch(
            ui,
            "Color every path",
            &mut per_path,
            "Give each path its own line color from a fixed palette",
        ) {
            style.set_color_per_path(per_path);
        }

        let mut radius = style.point_radius();
        if ui
            .add(
                egui::Slider::new(&mut radius, 1.0..=20.0)
                    .text("point radius")
                    .clamping(egui::SliderClamping::Always),
            )
            .changed()
        {
            style.set_point_radius(radius);
        }

        self.ui_line_width(ui);

        ui.add_space(6.0);
        ui.heading("Colors");
        let current = self.editor.style();
        let (line, grid, point) = (
            current.line_color(),
            current.grid_color(),
            current.point_color(),
        );
        let style = self.editor.style_mut();
        egui::Grid::new("style_colors")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                if let Some(color) = color_row(ui, "Line", line) {
                    style.set_line_color(color);
                }
                if let Some(color) = color_row(ui, "Grid", grid) {
                    style.set_grid_color(color);
                }
                if let Some(color) = color_row(ui, "Points", point) {
                    style.set_point_color(color);
                }
            });

        ui.add_space(6.0);
        ui.heading("Config");
        let config_label = self.config_path.as_ref().map_or_else(
            || "No config file found; using built-in defaults.".to_string(),
            |path| format!("Loaded from {}", path.display()),
        );
        ui.label(RichText::new(config_label).small().weak());
    }

    fn ui_line_width(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Line width");
            let resp = ui.add(
                TextEdit::singleline(&mut self.editor.line_width_text).desired_width(60.0),
            );
            let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui
                .button("Apply")
                .on_hover_text("Use this width for path segments")
                .clicked()
                || submitted
            {
                self.send(&EditorEvent::ButtonActivate(ButtonId::ApplyLineWidth));
            }
        });
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, current: Rgba) -> Option<Rgba> {
    ui.label(label);
    let mut color = current.to_color32();
    let changed = ui
        .horizontal(|ui| {
            let changed = ui.color_edit_button_srgba(&mut color).changed();
            ui.label(RichText::new(current.to_hex()).monospace().weak());
            changed
        })
        .inner;
    ui.end_row();
    changed.then(|| Rgba::from_color32(color))
}
