use crate::model::{Row, Store};
use crate::types::Field;
use egui_file_dialog::FileDialog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Preview,
    PointsList,
    Settings,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Preview, Self::PointsList, Self::Settings];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::PointsList => "Points List",
            Self::Settings => "Settings",
        }
    }
}

/// Points list cell currently open for editing.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub row: Row,
    pub column: Field,
    pub text: String,
    /// Focus the text field on its first frame.
    pub focus_pending: bool,
}

impl CellEdit {
    /// Whether the edited row still exists in `store`.
    pub fn is_live(&self, store: &Store) -> bool {
        store.contains(self.row)
    }
}

#[derive(Debug)]
pub enum NativeDialog {
    SaveImage(FileDialog),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn edit_of(row: Row) -> CellEdit {
        CellEdit {
            row,
            column: Field::X,
            text: "7".to_string(),
            focus_pending: false,
        }
    }

    #[test]
    fn edit_of_removed_point_is_stale() {
        let mut store = Store::new();
        let id = store.add_path(None);
        store.push_point(id, Point::new(1.0, 2.0)).expect("point");
        let edit = edit_of(Row::Point { path: id, index: 0 });
        assert!(edit.is_live(&store));

        store.remove(edit.row).expect("remove");
        assert!(!edit.is_live(&store));
    }

    #[test]
    fn edit_of_removed_path_is_stale() {
        let mut store = Store::new();
        let id = store.add_path(None);
        let edit = edit_of(Row::Path(id));
        store.remove(Row::Path(id)).expect("remove");
        store.add_path(None);
        assert!(!edit.is_live(&store));
    }
}
