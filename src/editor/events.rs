use std::collections::HashMap;

use super::{Editor, Outcome};
use crate::model::Row;
use crate::types::Field;

/// Buttons of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    AddPath,
    AddPoint,
    DeleteSelected,
    ApplyLineWidth,
    Open,
    SaveImage,
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKey {
    Delete,
    Escape,
}

/// Discrete input delivered by the window host.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Resize { width: u32, height: u32 },
    PaintRequest,
    ButtonActivate(ButtonId),
    CellEdited { row: Row, column: Field, text: String },
    KeyPress(EditorKey),
}

/// Lookup key of the handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    PaintRequest,
    Button(ButtonId),
    CellEdited,
    Key(EditorKey),
}

impl EditorEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::PaintRequest => EventKind::PaintRequest,
            Self::ButtonActivate(id) => EventKind::Button(*id),
            Self::CellEdited { .. } => EventKind::CellEdited,
            Self::KeyPress(key) => EventKind::Key(*key),
        }
    }
}

pub type Handler = fn(&mut Editor, &EditorEvent) -> Outcome;

/// Event kind to handler registry, filled once at startup.
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    handlers: HashMap<EventKind, Handler>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler table wiring every window event to the editor.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(EventKind::Resize, Editor::on_resize);
        table.register(EventKind::PaintRequest, Editor::on_paint_request);
        table.register(EventKind::CellEdited, Editor::on_cell_edited);
        table.register(EventKind::Button(ButtonId::AddPath), Editor::on_add_path);
        table.register(EventKind::Button(ButtonId::AddPoint), Editor::on_add_point);
        table.register(
            EventKind::Button(ButtonId::DeleteSelected),
            Editor::on_delete_selected,
        );
        table.register(
            EventKind::Button(ButtonId::ApplyLineWidth),
            Editor::on_apply_line_width,
        );
        table.register(EventKind::Button(ButtonId::Open), Editor::on_open);
        table.register(EventKind::Button(ButtonId::SaveImage), Editor::on_save_image);
        table.register(EventKind::Key(EditorKey::Delete), Editor::on_delete_selected);
        table.register(EventKind::Key(EditorKey::Escape), Editor::on_clear_selection);
        table
    }

    /// Register `handler` for `kind`, returning the one it replaces.
    pub fn register(&mut self, kind: EventKind, handler: Handler) -> Option<Handler> {
        self.handlers.insert(kind, handler)
    }

    pub fn get(&self, kind: EventKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }
}
