//! Editor state behind the window: the document, the style, and the widget
//! values that feed them.
//!
//! The window host turns toolkit input into [`EditorEvent`]s and hands them
//! to [`Editor::dispatch`], which routes each through the [`EventTable`]
//! built at startup. Rejected input never panics or raises; it shows up as
//! an unchanged document (and sometimes a cleared entry).

mod events;

pub use events::{ButtonId, EditorEvent, EditorKey};
use events::EventTable;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{AppConfig, CanvasConfig};
use crate::export;
use crate::model::{Removed, Row, Store, StoreError, parse_coordinate};
use crate::render::{self, Canvas, Primitive, RasterSurface};
use crate::style::StyleConfig;
use crate::types::{Field, GridMapping, Rgba};

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// Document, style or canvas changed; the host should repaint.
    Updated,
    /// Input was refused; the message is meant for the status line.
    Rejected(String),
    /// The host should ask for a file name and call [`Editor::save_image`].
    SaveImageRequested,
}

/// Shortest text that parses back to the same width.
fn format_width(value: f64) -> String {
    value.to_string()
}

pub struct Editor {
    store: Store,
    style: StyleConfig,
    canvas: CanvasConfig,
    handlers: EventTable,
    /// Text of the X entry next to "Add point".
    pub x_text: String,
    /// Text of the Y entry next to "Add point".
    pub y_text: String,
    /// Text of the line width entry in the settings tab.
    pub line_width_text: String,
    selected_path: Option<String>,
    selection: Option<Row>,
    canvas_size: Option<[u32; 2]>,
    frame: Vec<Primitive>,
    surface: Option<RasterSurface>,
    surface_dirty: bool,
}

impl Editor {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(config.canvas.sanitized(), config.style.to_style())
    }

    pub fn with_parts(canvas: CanvasConfig, style: StyleConfig) -> Self {
        let line_width_text = format_width(style.line_width());
        Self {
            store: Store::new(),
            style,
            canvas,
            handlers: EventTable::standard(),
            x_text: String::new(),
            y_text: String::new(),
            line_width_text,
            selected_path: None,
            selection: None,
            canvas_size: None,
            frame: Vec::new(),
            surface: None,
            surface_dirty: false,
        }
    }

    pub const fn store(&self) -> &Store {
        &self.store
    }

    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Style for the settings widgets; the next paint request picks up changes.
    pub const fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    pub const fn canvas_size(&self) -> Option<[u32; 2]> {
        self.canvas_size
    }

    pub fn mapping(&self) -> Option<GridMapping> {
        let [w, h] = self.canvas_size?;
        Some(self.canvas.mapping(f64::from(w), f64::from(h)))
    }

    /// Primitives of the last paint request.
    pub fn frame(&self) -> &[Primitive] {
        &self.frame
    }

    pub fn list_path_names(&self) -> Vec<String> {
        self.store.path_names()
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn select_path(&mut self, name: Option<String>) {
        self.selected_path = name;
    }

    pub const fn selection(&self) -> Option<Row> {
        self.selection
    }

    pub fn set_selection(&mut self, row: Option<Row>) {
        self.selection = row.filter(|r| self.store.contains(*r));
    }

    /// Route one event through the handler table.
    pub fn dispatch(&mut self, event: &EditorEvent) -> Outcome {
        let kind = event.kind();
        let Some(handler) = self.handlers.get(kind) else {
            debug!(?kind, "no handler registered");
            return Outcome::Ignored;
        };
        handler(self, event)
    }

    /// Re-read the selector entries; the last path ends up selected.
    fn refresh_path_selector(&mut self) {
        self.selected_path = self.store.path_names().pop();
    }

    fn on_resize(&mut self, event: &EditorEvent) -> Outcome {
        let EditorEvent::Resize { width, height } = *event else {
            return Outcome::Ignored;
        };
        // A failed allocation is only retried once the size changes.
        if self.canvas_size == Some([width, height]) {
            return Outcome::Ignored;
        }
        self.canvas_size = Some([width, height]);
        self.surface = None;
        match RasterSurface::new(width, height) {
            Ok(surface) => {
                debug!(width, height, "surface allocated");
                self.surface = Some(surface);
                self.surface_dirty = true;
            }
            Err(err) => warn!(width, height, "skipping surface: {err:#}"),
        }
        Outcome::Updated
    }

    fn on_paint_request(&mut self, _event: &EditorEvent) -> Outcome {
        let Some(mapping) = self.mapping() else {
            return Outcome::Ignored;
        };
        self.frame = render::render(&self.store, &mapping, &self.style);
        self.surface_dirty = true;
        Outcome::Updated
    }

    fn on_add_path(&mut self, _event: &EditorEvent) -> Outcome {
        let id = self.store.add_path(None);
        self.refresh_path_selector();
        debug!(%id, selected = ?self.selected_path, "path selector refreshed");
        Outcome::Updated
    }

    fn on_add_point(&mut self, _event: &EditorEvent) -> Outcome {
        let Some(path_name) = self.selected_path.clone() else {
            debug!("add point without a selected path");
            return Outcome::Ignored;
        };
        match self.store.add_point(&path_name, &self.x_text, &self.y_text) {
            Ok(_) => Outcome::Updated,
            Err(err @ StoreError::InvalidField(field)) => {
                match field {
                    Field::X => self.x_text.clear(),
                    Field::Y => self.y_text.clear(),
                }
                debug!(%err, "point rejected");
                Outcome::Rejected(err.to_string())
            }
            Err(err) => {
                debug!(%err, "point not added");
                Outcome::Ignored
            }
        }
    }

    fn on_delete_selected(&mut self, _event: &EditorEvent) -> Outcome {
        let Some(row) = self.selection.take() else {
            return Outcome::Ignored;
        };
        match self.store.remove(row) {
            Ok(Removed::Path(path)) => {
                debug!(name = path.name(), "deleted path");
                self.refresh_path_selector();
                Outcome::Updated
            }
            Ok(Removed::Point { .. }) => Outcome::Updated,
            Err(err) => {
                debug!(%err, "stale selection");
                Outcome::Ignored
            }
        }
    }

    fn on_clear_selection(&mut self, _event: &EditorEvent) -> Outcome {
        if self.selection.take().is_some() {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }

    fn on_cell_edited(&mut self, event: &EditorEvent) -> Outcome {
        let EditorEvent::CellEdited { row, column, text } = event else {
            return Outcome::Ignored;
        };
        match self.store.edit_cell(*row, *column, text) {
            Ok(()) => {
                if matches!(row, Row::Path(_)) {
                    self.refresh_path_selector();
                }
                Outcome::Updated
            }
            Err(err) => {
                debug!(%err, ?row, "cell edit rejected");
                Outcome::Rejected(err.to_string())
            }
        }
    }

    fn on_apply_line_width(&mut self, _event: &EditorEvent) -> Outcome {
        let accepted = parse_coordinate(&self.line_width_text)
            .is_some_and(|width| self.style.set_line_width(width));
        if accepted {
            self.line_width_text = format_width(self.style.line_width());
            Outcome::Updated
        } else {
            let refused = std::mem::replace(
                &mut self.line_width_text,
                format_width(self.style.line_width()),
            );
            Outcome::Rejected(format!("Line width must be a positive number, got '{refused}'"))
        }
    }

    fn on_open(&mut self, _event: &EditorEvent) -> Outcome {
        info!("project files are not supported; redrawing the canvas");
        if let Some(surface) = self.surface.as_mut() {
            surface.clear(Rgba::WHITE);
        }
        self.on_paint_request(&EditorEvent::PaintRequest);
        Outcome::Updated
    }

    fn on_save_image(&mut self, _event: &EditorEvent) -> Outcome {
        if self.surface.is_none() {
            return Outcome::Rejected("Nothing to save yet: the canvas has no size".to_string());
        }
        Outcome::SaveImageRequested
    }

    /// Off-screen copy of the current frame, redrawn if it is stale.
    pub fn surface(&mut self) -> Option<&RasterSurface> {
        let surface = self.surface.as_mut()?;
        if self.surface_dirty {
            surface.clear(Rgba::WHITE);
            render::draw_all(&self.frame, surface);
            self.surface_dirty = false;
        }
        Some(&*surface)
    }

    /// Write the current frame to `path` as PNG.
    pub fn save_image(&mut self, path: &Path) -> anyhow::Result<()> {
        let Some(surface) = self.surface() else {
            anyhow::bail!("Nothing to save yet: the canvas has no size");
        };
        export::save_png(path, surface)
    }
}
