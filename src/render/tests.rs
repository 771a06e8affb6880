use super::*;
use crate::model::Store;
use crate::types::Point;

fn count(frame: &[Primitive]) -> (usize, usize, usize) {
    frame.iter().fold((0, 0, 0), |(l, c, r), p| match p {
        Primitive::Line { .. } => (l + 1, c, r),
        Primitive::Circle { .. } => (l, c + 1, r),
        Primitive::Rect { .. } => (l, c, r + 1),
    })
}

fn no_grid() -> StyleConfig {
    let mut style = StyleConfig::default();
    style.set_grid_enabled(false);
    style
}

fn triangle_store() -> Store {
    let mut store = Store::new();
    let id = store.add_path(None);
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
        store.push_point(id, Point::new(x, y)).expect("point");
    }
    store
}

#[test]
fn single_path_without_grid() {
    let mapping = GridMapping::new(200.0, 200.0, 20.0, 10, 10);
    let frame = render(&triangle_store(), &mapping, &no_grid());
    assert_eq!(count(&frame), (2, 3, 0));
}

#[test]
fn path_sequence_puts_segments_before_markers() {
    let mapping = GridMapping::new(120.0, 120.0, 10.0, 10, 10);
    let style = no_grid();
    let frame = render(&triangle_store(), &mapping, &style);
    let kinds: Vec<&str> = frame
        .iter()
        .map(|p| match p {
            Primitive::Line { .. } => "line",
            Primitive::Circle { .. } => "circle",
            Primitive::Rect { .. } => "rect",
        })
        .collect();
    assert_eq!(kinds, vec!["line", "line", "circle", "circle", "circle"]);

    let last = mapping.map(Point::new(1.0, 1.0));
    assert_eq!(
        frame[4],
        Primitive::Circle {
            center: last,
            radius: style.point_radius(),
            color: style.point_color(),
        }
    );
    // The first point never gets a marker.
    let first = mapping.map(Point::new(0.0, 0.0));
    assert!(
        !frame
            .iter()
            .any(|p| matches!(p, Primitive::Circle { center, .. } if *center == first))
    );
}

#[test]
fn grid_comes_first_and_border_closes_it() {
    let mapping = GridMapping::new(220.0, 220.0, 10.0, 10, 10);
    let frame = render(&triangle_store(), &mapping, &StyleConfig::default());
    let grid_color = StyleConfig::default().grid_color();
    assert_eq!(count(&frame), (22, 3, 1));
    assert!(frame[..20].iter().all(|p| matches!(
        p,
        Primitive::Line { color, width, .. } if *color == grid_color && (*width - GRID_LINE_WIDTH).abs() < f64::EPSILON
    )));
    assert_eq!(
        frame[20],
        Primitive::Rect {
            min: PixelPos::new(10.0, 10.0),
            width: 200.0,
            height: 200.0,
            color: grid_color,
            stroke: GRID_LINE_WIDTH,
        }
    );
    assert_eq!(
        frame[1],
        Primitive::Line {
            from: PixelPos::new(30.0, 10.0),
            to: PixelPos::new(30.0, 210.0),
            color: grid_color,
            width: GRID_LINE_WIDTH,
        }
    );
}

#[test]
fn empty_paths_are_skipped() {
    let mut store = Store::new();
    store.add_path(None);
    let id = store.add_path(None);
    store.push_point(id, Point::new(2.0, 3.0)).expect("point");
    let frame = render(&store, &GridMapping::new(100.0, 100.0, 0.0, 10, 10), &no_grid());
    assert_eq!(count(&frame), (0, 1, 0));
}

#[test]
fn rendering_is_repeatable() {
    let mapping = GridMapping::new(300.0, 240.0, 20.0, 10, 10);
    let store = triangle_store();
    let style = StyleConfig::default();
    assert_eq!(render(&store, &mapping, &style), render(&store, &mapping, &style));
}

#[test]
fn corrupted_coordinates_render_at_origin() {
    let mut store = Store::new();
    let id = store.add_path(None);
    store.push_point(id, Point::new(f64::NAN, f64::INFINITY)).expect("point");
    let mapping = GridMapping::new(100.0, 100.0, 10.0, 10, 10);
    let frame = render(&store, &mapping, &no_grid());
    assert!(matches!(
        frame.as_slice(),
        [Primitive::Circle { center, .. }] if *center == PixelPos::new(10.0, 10.0)
    ));
}

#[test]
fn per_path_colors_apply_to_segments_only() {
    let mut store = triangle_store();
    let id = store.add_path(None);
    store.push_point(id, Point::new(4.0, 4.0)).expect("point");
    store.push_point(id, Point::new(5.0, 5.0)).expect("point");
    let mut style = no_grid();
    style.set_color_per_path(true);
    let frame = render(&store, &GridMapping::new(100.0, 100.0, 0.0, 10, 10), &style);
    let line_colors: Vec<Rgba> = frame
        .iter()
        .filter_map(|p| match p {
            Primitive::Line { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(line_colors.len(), 3);
    assert_eq!(line_colors[0], line_colors[1]);
    assert_ne!(line_colors[1], line_colors[2]);
    assert!(frame.iter().all(|p| match p {
        Primitive::Circle { color, .. } => *color == style.point_color(),
        _ => true,
    }));
}

#[test]
fn raster_surface_replays_frame() {
    let mapping = GridMapping::new(120.0, 120.0, 10.0, 10, 10);
    let mut surface = RasterSurface::new(120, 120).expect("surface");
    let style = StyleConfig::default();
    draw_all(&render(&triangle_store(), &mapping, &style), &mut surface);

    // (1, 1) in grid space is pixel (20, 20): covered by the final marker.
    let marker = style.point_color().to_rgba8();
    assert_eq!(surface.pixel(20, 20), Some(marker));
    // Far from everything the surface stays white.
    assert_eq!(surface.pixel(115, 115), Some([255, 255, 255, 255]));
    // Border runs along the padding.
    assert_eq!(surface.pixel(60, 10), Some(style.grid_color().to_rgba8()));
}

#[test]
fn interior_markers_stay_above_segments() {
    let mapping = GridMapping::new(120.0, 120.0, 10.0, 10, 10);
    let mut surface = RasterSurface::new(120, 120).expect("surface");
    let style = no_grid();
    draw_all(&render(&triangle_store(), &mapping, &style), &mut surface);

    // (1, 0) is the corner joining both segments: pixel (20, 10).
    let marker = style.point_color().to_rgba8();
    assert_eq!(surface.pixel(20, 10), Some(marker));
}

#[test]
fn raster_surface_rejects_empty_size() {
    assert!(RasterSurface::new(0, 10).is_err());
    assert!(RasterSurface::new(10, 0).is_err());
    assert!(RasterSurface::new(super::raster::MAX_SURFACE_DIM + 1, 10).is_err());
}

#[test]
fn raster_clips_offscreen_shapes() {
    let mut surface = RasterSurface::new(8, 8).expect("surface");
    surface.circle_filled(PixelPos::new(-50.0, -50.0), 5.0, Rgba::opaque(0.0, 0.0, 0.0));
    surface.line(
        PixelPos::new(-100.0, 4.0),
        PixelPos::new(100.0, 4.0),
        Rgba::opaque(0.0, 0.0, 0.0),
        2.0,
    );
    assert_eq!(surface.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(surface.pixel(7, 4), Some([0, 0, 0, 255]));
}
