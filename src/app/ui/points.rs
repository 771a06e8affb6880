use super::super::ContourpadApp;
use super::super::ui_state::CellEdit;
use super::icons;
use crate::editor::{ButtonId, EditorEvent};
use crate::model::Row;
use crate::types::Field;
use egui::{Key, RichText, Sense, TextEdit};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 22.0;
const ENTRY_WIDTH: f32 = 70.0;

/// Display copy of one points list row.
struct RowView {
    row: Row,
    label: String,
    x: String,
    y: String,
}

enum TableAction {
    Select(Row),
    StartEdit(CellEdit),
    Commit,
    Cancel,
}

impl ContourpadApp {
    pub(crate) fn ui_points(&mut self, ui: &mut egui::Ui) {
        self.ui_path_controls(ui);
        ui.add_space(4.0);
        self.ui_point_controls(ui);
        ui.separator();

        let has_selection = self.editor.selection().is_some();
        if ui
            .add_enabled(
                has_selection,
                egui::Button::new(format!("{} Delete selected", icons::ICON_DELETE)),
            )
            .on_hover_text("Delete the selected path or point (Delete)")
            .clicked()
        {
            self.send(&EditorEvent::ButtonActivate(ButtonId::DeleteSelected));
        }
        ui.add_space(4.0);

        self.drop_stale_cell_edit();
        if self.editor.store().is_empty() {
            ui.label(RichText::new("No paths yet. Use \"Add path\" to start one.").weak());
            return;
        }
        let rows = self.collect_rows();
        if let Some(action) = self.ui_points_table(ui, &rows) {
            self.apply_table_action(action);
        }
    }

    fn ui_path_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Add path", icons::ICON_ADD))
                .on_hover_text("Append an empty path named \"Contour N\"")
                .clicked()
            {
                self.send(&EditorEvent::ButtonActivate(ButtonId::AddPath));
            }

            let names = self.editor.list_path_names();
            let mut selected = self.editor.selected_path().map(str::to_owned);
            ui.label("Path");
            egui::ComboBox::from_id_salt("path_selector")
                .selected_text(selected.as_deref().unwrap_or("No paths"))
                .show_ui(ui, |ui| {
                    for name in &names {
                        ui.selectable_value(&mut selected, Some(name.clone()), name.as_str());
                    }
                });
            if selected.as_deref() != self.editor.selected_path() {
                self.editor.select_path(selected);
            }
        });
    }

    fn ui_point_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("X");
            ui.add(
                TextEdit::singleline(&mut self.editor.x_text)
                    .desired_width(ENTRY_WIDTH)
                    .hint_text("0"),
            );
            ui.label("Y");
            let y_resp = ui.add(
                TextEdit::singleline(&mut self.editor.y_text)
                    .desired_width(ENTRY_WIDTH)
                    .hint_text("0"),
            );
            let submitted = y_resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let has_path = self.editor.selected_path().is_some();
            let clicked = ui
                .add_enabled(
                    has_path,
                    egui::Button::new(format!("{} Add point", icons::ICON_ADD)),
                )
                .on_hover_text("Append (X, Y) to the selected path; blank entries count as 0")
                .clicked();
            if clicked || (submitted && has_path) {
                self.send(&EditorEvent::ButtonActivate(ButtonId::AddPoint));
            }
        });
    }

    fn collect_rows(&self) -> Vec<RowView> {
        let store = self.editor.store();
        let mut rows = Vec::with_capacity(store.len() + store.point_count());
        for path in store.paths() {
            let id = path.id();
            rows.push(RowView {
                row: Row::Path(id),
                label: id.to_string(),
                x: path.name().to_string(),
                y: String::new(),
            });
            for (index, point) in path.points().iter().enumerate() {
                rows.push(RowView {
                    row: Row::Point { path: id, index },
                    label: format!("    {}", index + 1),
                    x: point.get(Field::X).to_string(),
                    y: point.get(Field::Y).to_string(),
                });
            }
        }
        rows
    }

    fn ui_points_table(&mut self, ui: &mut egui::Ui, rows: &[RowView]) -> Option<TableAction> {
        let selection = self.editor.selection();
        let cell_edit = &mut self.cell_edit;
        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(60.0))
            .column(Column::remainder().at_least(80.0))
            .column(Column::remainder().at_least(80.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Path / #");
                });
                header.col(|ui| {
                    ui.strong("X (name)");
                });
                header.col(|ui| {
                    ui.strong("Y");
                });
            })
            .body(|mut body| {
                for view in rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(selection == Some(view.row));
                        row.col(|ui| {
                            if matches!(view.row, Row::Path(_)) {
                                ui.strong(view.label.as_str());
                            } else {
                                ui.label(view.label.as_str());
                            }
                        });
                        for (column, text) in [(Field::X, &view.x), (Field::Y, &view.y)] {
                            row.col(|ui| {
                                if let Some(next) = cell_ui(ui, cell_edit, view.row, column, text) {
                                    action = Some(next);
                                }
                            });
                        }
                        if row.response().clicked() && action.is_none() {
                            action = Some(TableAction::Select(view.row));
                        }
                    });
                }
            });

        action
    }

    fn apply_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::Select(row) => self.editor.set_selection(Some(row)),
            TableAction::StartEdit(edit) => {
                self.editor.set_selection(Some(edit.row));
                self.cell_edit = Some(edit);
            }
            TableAction::Commit => {
                if let Some(edit) = self.cell_edit.take() {
                    self.commit_cell_edit(edit);
                }
            }
            TableAction::Cancel => self.cell_edit = None,
        }
    }
}

/// One editable cell: a label until double-clicked, then a text field that
/// commits when it loses focus.
fn cell_ui(
    ui: &mut egui::Ui,
    cell_edit: &mut Option<CellEdit>,
    row: Row,
    column: Field,
    text: &str,
) -> Option<TableAction> {
    if let Some(edit) = cell_edit
        .as_mut()
        .filter(|edit| edit.row == row && edit.column == column)
    {
        let response = ui.add(TextEdit::singleline(&mut edit.text).desired_width(f32::INFINITY));
        if edit.focus_pending {
            response.request_focus();
            edit.focus_pending = false;
            return None;
        }
        if response.lost_focus() {
            if ui.input(|i| i.key_pressed(Key::Escape)) {
                return Some(TableAction::Cancel);
            }
            return Some(TableAction::Commit);
        }
        return None;
    }

    // Path rows have nothing to edit under Y.
    let editable = !(matches!(row, Row::Path(_)) && column == Field::Y);
    let response = ui.add(egui::Label::new(text).sense(Sense::click()));
    if editable && response.double_clicked() {
        return Some(TableAction::StartEdit(CellEdit {
            row,
            column,
            text: text.to_string(),
            focus_pending: true,
        }));
    }
    if response.clicked() {
        return Some(TableAction::Select(row));
    }
    None
}
