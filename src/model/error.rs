use thiserror::Error;

use super::store::PathId;
use crate::types::Field;

/// Rejected store mutation. The store is left unchanged whenever one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Cell edits must not be empty.
    #[error("value must not be empty")]
    EmptyValue,

    /// Coordinate text is not a finite number.
    #[error("{} value is not a number", .0.label())]
    InvalidField(Field),

    /// No path carries the requested name.
    #[error("no path named '{0}'")]
    PathNotFound(String),

    /// Path handle refers to a removed path.
    #[error("path {0} does not exist")]
    UnknownPath(PathId),

    /// Point index past the end of the path.
    #[error("path {path} has no point at index {index}")]
    PointOutOfRange { path: PathId, index: usize },

    /// Path rows only expose their name column.
    #[error("path rows have no editable Y column")]
    ReadOnlyCell,
}
