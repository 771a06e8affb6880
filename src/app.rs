//! eframe host: turns widget input into editor events and paints the frame.

use crate::config::AppConfig;
use crate::editor::{Editor, EditorEvent, EditorKey, Outcome};
use egui::{Context, Key};
use egui_file_dialog::DialogState;
use std::path::{Path, PathBuf};
use tracing::warn;

mod ui;
mod ui_state;

use ui_state::{CellEdit, NativeDialog, Tab};

pub struct ContourpadApp {
    editor: Editor,
    tab: Tab,
    last_status: Option<String>,
    active_dialog: Option<NativeDialog>,
    last_export_dir: Option<PathBuf>,
    cell_edit: Option<CellEdit>,
    config_path: Option<PathBuf>,
}

impl ContourpadApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            editor: Editor::new(config),
            tab: Tab::default(),
            last_status: None,
            active_dialog: None,
            last_export_dir: AppConfig::default_export_dir(),
            cell_edit: None,
            config_path: crate::config::existing_config_path(),
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.last_status = Some(msg.into());
    }

    /// Dispatch one event and reflect its outcome in the status bar.
    fn send(&mut self, event: &EditorEvent) {
        match self.editor.dispatch(event) {
            Outcome::Ignored => {}
            Outcome::Updated => self.drop_stale_cell_edit(),
            Outcome::Rejected(msg) => self.set_status(msg),
            Outcome::SaveImageRequested => self.save_image_dialog(),
        }
    }

    /// Forget an open cell edit whose row was deleted.
    fn drop_stale_cell_edit(&mut self) {
        if self
            .cell_edit
            .as_ref()
            .is_some_and(|edit| !edit.is_live(self.editor.store()))
        {
            self.cell_edit = None;
        }
    }

    fn commit_cell_edit(&mut self, edit: CellEdit) {
        let CellEdit {
            row, column, text, ..
        } = edit;
        self.send(&EditorEvent::CellEdited { row, column, text });
    }

    fn remember_export_dir_from_path(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_export_dir = Some(parent.to_path_buf());
        }
    }

    fn handle_save_image(&mut self, path: &Path) {
        match self.editor.save_image(path) {
            Ok(()) => self.set_status(format!("Image saved to {}", path.display())),
            Err(err) => {
                warn!(path = %path.display(), "image save failed: {err:#}");
                self.set_status(format!("Image save failed: {err:#}"));
            }
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        // Keys belong to the focused text field while one is active.
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(Key::Delete)) {
            self.send(&EditorEvent::KeyPress(EditorKey::Delete));
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.cell_edit = None;
            self.send(&EditorEvent::KeyPress(EditorKey::Escape));
        }
    }

    fn poll_dialog(&mut self, ctx: &Context) {
        let mut close_dialog = false;
        let mut picked_path: Option<PathBuf> = None;

        if let Some(NativeDialog::SaveImage(dialog)) = self.active_dialog.as_mut() {
            dialog.update(ctx);
            if let Some(path) = dialog.take_picked() {
                picked_path = Some(path);
                close_dialog = true;
            } else {
                match dialog.state() {
                    DialogState::Cancelled => {
                        self.last_status = Some("Save canceled.".to_string());
                        close_dialog = true;
                    }
                    DialogState::Closed => close_dialog = true,
                    _ => {}
                }
            }
        }

        if let Some(path) = picked_path {
            self.remember_export_dir_from_path(&path);
            self.handle_save_image(&path);
        }
        if close_dialog {
            self.active_dialog = None;
        }
    }
}

impl eframe::App for ContourpadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Preview => self.ui_preview(ui),
            Tab::PointsList => self.ui_points(ui),
            Tab::Settings => self.ui_settings(ui),
        });

        self.poll_dialog(ctx);
    }

    // Required by eframe 0.34; all UI is drawn in `update`, which eframe still calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}
