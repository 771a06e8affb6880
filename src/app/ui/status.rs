use super::super::ContourpadApp;
use egui::{Color32, RichText};

impl ContourpadApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        let store = self.editor.store();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "Paths: {}  Points: {}",
                    store.len(),
                    store.point_count()
                ))
                .small()
                .color(Color32::from_gray(180)),
            );
            if let Some([w, h]) = self.editor.canvas_size() {
                ui.separator();
                ui.label(
                    RichText::new(format!("Canvas: {w}×{h}"))
                        .small()
                        .color(Color32::from_gray(180)),
                );
            }
            if let Some(msg) = &self.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }
}
