use super::parse::resolve_coordinate_text;
use super::store::{Path, PathId, PointId};
use super::*;
use crate::types::{Field, Point};

fn store_with_contour() -> (Store, PathId) {
    let mut store = Store::new();
    let id = store.add_path(None);
    (store, id)
}

#[test]
fn unnamed_paths_are_numbered_in_order() {
    let mut store = Store::new();
    for _ in 0..4 {
        store.add_path(None);
    }
    assert_eq!(
        store.path_names(),
        vec!["Contour 1", "Contour 2", "Contour 3", "Contour 4"]
    );
}

#[test]
fn path_counter_survives_deletions_and_named_paths() {
    let mut store = Store::new();
    let first = store.add_path(None);
    store.remove(Row::Path(first)).expect("remove first");
    store.add_path(Some("outline"));
    store.add_path(None);
    assert_eq!(store.path_names(), vec!["outline", "Contour 3"]);
}

#[test]
fn blank_name_falls_back_to_counter() {
    let mut store = Store::new();
    store.add_path(Some("   "));
    assert_eq!(store.path_names(), vec!["Contour 1"]);
}

#[test]
fn duplicate_names_are_allowed() {
    let mut store = Store::new();
    let a = store.add_path(Some("edge"));
    let b = store.add_path(Some("edge"));
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_name("edge").map(Path::id), Some(a));
}

#[test]
fn add_point_parses_and_defaults_blank_entries() {
    let (mut store, id) = store_with_contour();
    let first = store.add_point("Contour 1", "3", "4").expect("first point");
    assert_eq!(first, PointId { path: id, index: 0 });
    let second = store.add_point("Contour 1", "", "").expect("second point");
    assert_eq!(second.index, 1);
    let path = store.path(id).expect("path");
    assert_eq!(path.points(), &[Point::new(3.0, 4.0), Point::new(0.0, 0.0)]);
}

#[test]
fn add_point_rejects_x_before_looking_at_y() {
    let (mut store, id) = store_with_contour();
    let err = store.add_point("Contour 1", "abc", "oops").unwrap_err();
    assert_eq!(err, StoreError::InvalidField(Field::X));
    assert!(store.path(id).expect("path").points().is_empty());
}

#[test]
fn add_point_reports_bad_y() {
    let (mut store, id) = store_with_contour();
    let err = store.add_point("Contour 1", "1", "four").unwrap_err();
    assert_eq!(err, StoreError::InvalidField(Field::Y));
    assert!(store.path(id).expect("path").points().is_empty());
}

#[test]
fn add_point_without_matching_path_is_not_found() {
    let mut store = Store::new();
    let err = store.add_point("Contour 1", "1", "2").unwrap_err();
    assert_eq!(err, StoreError::PathNotFound("Contour 1".to_string()));
    assert_eq!(store.point_count(), 0);
}

#[test]
fn add_point_goes_to_first_duplicate() {
    let mut store = Store::new();
    let a = store.add_path(Some("twin"));
    let b = store.add_path(Some("twin"));
    store.add_point("twin", "1", "1").expect("point");
    assert_eq!(store.path(a).expect("a").points().len(), 1);
    assert!(store.path(b).expect("b").points().is_empty());
}

#[test]
fn coordinate_parsing_accepts_comma_and_rejects_non_finite() {
    assert_eq!(parse_coordinate(" 2.5 "), Some(2.5));
    assert_eq!(parse_coordinate("-1,25"), Some(-1.25));
    assert_eq!(parse_coordinate("1e1"), Some(10.0));
    assert_eq!(parse_coordinate(""), None);
    assert_eq!(parse_coordinate("inf"), None);
    assert_eq!(parse_coordinate("NaN"), None);
    assert_eq!(parse_coordinate("1,2,3"), None);
    assert_eq!(resolve_coordinate_text("  "), "0");
}

#[test]
fn point_cells_are_numerically_validated() {
    let (mut store, id) = store_with_contour();
    store.add_point("Contour 1", "1", "2").expect("point");
    let row = Row::Point { path: id, index: 0 };

    store.edit_cell(row, Field::Y, "7.5").expect("valid edit");
    assert_eq!(
        store.edit_cell(row, Field::X, "seven"),
        Err(StoreError::InvalidField(Field::X))
    );
    assert_eq!(store.edit_cell(row, Field::X, ""), Err(StoreError::EmptyValue));
    assert_eq!(store.path(id).expect("path").points(), &[Point::new(1.0, 7.5)]);
}

#[test]
fn path_name_cell_renames_without_numeric_check() {
    let (mut store, id) = store_with_contour();
    store
        .edit_cell(Row::Path(id), Field::X, "left wing")
        .expect("rename");
    assert_eq!(store.path_names(), vec!["left wing"]);
    assert_eq!(
        store.edit_cell(Row::Path(id), Field::X, ""),
        Err(StoreError::EmptyValue)
    );
    assert_eq!(
        store.edit_cell(Row::Path(id), Field::Y, "3"),
        Err(StoreError::ReadOnlyCell)
    );
    assert_eq!(store.path_names(), vec!["left wing"]);
}

#[test]
fn editing_missing_point_is_out_of_range() {
    let (mut store, id) = store_with_contour();
    assert_eq!(
        store.update_point_field(id, 3, Field::X, "1"),
        Err(StoreError::PointOutOfRange { path: id, index: 3 })
    );
}

#[test]
fn removing_path_drops_its_points() {
    let (mut store, id) = store_with_contour();
    store.add_point("Contour 1", "1", "1").expect("point");
    store.add_point("Contour 1", "2", "2").expect("point");
    let removed = store.remove(Row::Path(id)).expect("remove");
    match removed {
        Removed::Path(path) => assert_eq!(path.points().len(), 2),
        Removed::Point { .. } => panic!("expected a path"),
    }
    assert!(store.path_names().is_empty());
    assert_eq!(store.point_count(), 0);
    assert!(!store.contains(Row::Point { path: id, index: 0 }));
}

#[test]
fn removing_point_keeps_order_of_the_rest() {
    let (mut store, id) = store_with_contour();
    for x in ["1", "2", "3"] {
        store.add_point("Contour 1", x, "0").expect("point");
    }
    let removed = store
        .remove(Row::Point { path: id, index: 1 })
        .expect("remove point");
    assert_eq!(
        removed,
        Removed::Point {
            path: id,
            point: Point::new(2.0, 0.0)
        }
    );
    let xs: Vec<f64> = store
        .path(id)
        .expect("path")
        .points()
        .iter()
        .map(|p| p.x)
        .collect();
    assert_eq!(xs, vec![1.0, 3.0]);
}

#[test]
fn removing_unknown_rows_fails() {
    let (mut store, id) = store_with_contour();
    assert_eq!(
        store.remove(Row::Point { path: id, index: 0 }),
        Err(StoreError::PointOutOfRange { path: id, index: 0 })
    );
    store.remove(Row::Path(id)).expect("remove");
    assert_eq!(store.remove(Row::Path(id)), Err(StoreError::UnknownPath(id)));
}
