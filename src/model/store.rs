use std::fmt;

use tracing::debug;

use super::error::StoreError;
use super::parse::{parse_coordinate, resolve_coordinate_text};
use crate::types::{Field, Point};

/// Name prefix for paths created without an explicit name.
pub const DEFAULT_PATH_PREFIX: &str = "Contour";

/// Stable handle of a path. Handles are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(u64);

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Location of a point inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointId {
    pub path: PathId,
    pub index: usize,
}

/// A named polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    id: PathId,
    name: String,
    points: Vec<Point>,
}

impl Path {
    pub const fn id(&self) -> PathId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// One row of the points list: either a path header or one of its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Path(PathId),
    Point { path: PathId, index: usize },
}

impl Row {
    pub const fn path(self) -> PathId {
        match self {
            Self::Path(path) | Self::Point { path, .. } => path,
        }
    }
}

/// What a successful [`Store::remove`] took out of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Removed {
    Path(Path),
    Point { path: PathId, point: Point },
}

/// Ordered collection of paths.
#[derive(Debug, Clone)]
pub struct Store {
    paths: Vec<Path>,
    next_path_number: u64,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            next_path_number: 1,
            next_id: 1,
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.paths.iter().map(|p| p.points.len()).sum()
    }

    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.iter().find(|p| p.id == id)
    }

    fn path_mut(&mut self, id: PathId) -> Result<&mut Path, StoreError> {
        self.paths
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::UnknownPath(id))
    }

    fn position(&self, id: PathId) -> Result<usize, StoreError> {
        self.paths
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::UnknownPath(id))
    }

    /// First path carrying `name`. Names are not unique.
    pub fn find_by_name(&self, name: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, row: Row) -> bool {
        self.path(row.path()).is_some_and(|p| match row {
            Row::Path(_) => true,
            Row::Point { index, .. } => index < p.points.len(),
        })
    }

    /// Names in store order, for the path selector.
    pub fn path_names(&self) -> Vec<String> {
        self.paths.iter().map(|p| p.name.clone()).collect()
    }

    /// Append an empty path.
    ///
    /// Every call consumes one number from the `Contour N` counter, so
    /// automatic names keep counting up across deletions and named paths.
    pub fn add_path(&mut self, name: Option<&str>) -> PathId {
        let number = self.next_path_number;
        self.next_path_number += 1;
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| format!("{DEFAULT_PATH_PREFIX} {number}"), str::to_string);
        let id = PathId(self.next_id);
        self.next_id += 1;
        debug!(%id, %name, "path added");
        self.paths.push(Path {
            id,
            name,
            points: Vec::new(),
        });
        id
    }

    /// Append a point parsed from entry text to the first path named
    /// `path_name`.
    ///
    /// Blank entries count as `"0"`. X is checked before Y and a bad X stops
    /// the check, so at most one field is reported.
    pub fn add_point(
        &mut self,
        path_name: &str,
        x_text: &str,
        y_text: &str,
    ) -> Result<PointId, StoreError> {
        let x = parse_coordinate(resolve_coordinate_text(x_text))
            .ok_or(StoreError::InvalidField(Field::X))?;
        let y = parse_coordinate(resolve_coordinate_text(y_text))
            .ok_or(StoreError::InvalidField(Field::Y))?;
        let id = self
            .find_by_name(path_name)
            .map(Path::id)
            .ok_or_else(|| StoreError::PathNotFound(path_name.to_string()))?;
        self.push_point(id, Point::new(x, y))
    }

    pub fn push_point(&mut self, path: PathId, point: Point) -> Result<PointId, StoreError> {
        let target = self.path_mut(path)?;
        target.points.push(point);
        let index = target.points.len() - 1;
        debug!(%path, index, x = point.x, y = point.y, "point added");
        Ok(PointId { path, index })
    }

    /// Overwrite one coordinate of a point from cell text.
    pub fn update_point_field(
        &mut self,
        path: PathId,
        index: usize,
        field: Field,
        text: &str,
    ) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyValue);
        }
        let value = parse_coordinate(text).ok_or(StoreError::InvalidField(field))?;
        let point = self
            .path_mut(path)?
            .points
            .get_mut(index)
            .ok_or(StoreError::PointOutOfRange { path, index })?;
        point.set(field, value);
        Ok(())
    }

    /// Rename a path. Any non-blank text is accepted.
    pub fn rename_path(&mut self, path: PathId, text: &str) -> Result<(), StoreError> {
        let name = text.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyValue);
        }
        let target = self.path_mut(path)?;
        debug!(%path, from = %target.name, to = %name, "path renamed");
        target.name = name.to_string();
        Ok(())
    }

    /// Apply an edit of the list cell at (`row`, `column`).
    ///
    /// On a path row the first column holds the name; on a point row the two
    /// columns hold the coordinates.
    pub fn edit_cell(&mut self, row: Row, column: Field, text: &str) -> Result<(), StoreError> {
        match (row, column) {
            (Row::Path(path), Field::X) => self.rename_path(path, text),
            (Row::Path(_), Field::Y) => Err(StoreError::ReadOnlyCell),
            (Row::Point { path, index }, field) => {
                self.update_point_field(path, index, field, text)
            }
        }
    }

    /// Remove a whole path (with its points) or a single point.
    pub fn remove(&mut self, row: Row) -> Result<Removed, StoreError> {
        match row {
            Row::Path(id) => {
                let pos = self.position(id)?;
                let path = self.paths.remove(pos);
                debug!(%id, points = path.points.len(), "path removed");
                Ok(Removed::Path(path))
            }
            Row::Point { path, index } => {
                let target = self.path_mut(path)?;
                if index >= target.points.len() {
                    return Err(StoreError::PointOutOfRange { path, index });
                }
                let point = target.points.remove(index);
                debug!(%path, index, "point removed");
                Ok(Removed::Point { path, point })
            }
        }
    }
}
