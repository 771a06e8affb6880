use super::super::{ContourpadApp, Tab};
use super::icons;
use crate::editor::{ButtonId, EditorEvent};

impl ContourpadApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            self.ui_file_menu(ui);
            ui.separator();

            for tab in Tab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
        });
    }

    fn ui_file_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button(format!("{} File", icons::ICON_MENU), |ui| {
            if ui
                .button(format!("{} Open", icons::ICON_OPEN))
                .on_hover_text("Clear the canvas and redraw the current paths")
                .clicked()
            {
                self.send(&EditorEvent::ButtonActivate(ButtonId::Open));
                self.set_status("Canvas redrawn.");
                ui.close();
            }

            let can_save = self.editor.canvas_size().is_some();
            if ui
                .add_enabled(
                    can_save,
                    egui::Button::new(format!("{} Save image…", icons::ICON_SAVE)),
                )
                .on_hover_text("Save the preview as a PNG image")
                .on_disabled_hover_text("Show the Preview tab once to size the canvas")
                .clicked()
            {
                self.send(&EditorEvent::ButtonActivate(ButtonId::SaveImage));
                ui.close();
            }
        });
    }
}
