// File: crates/overlay-core/tests/geometry.rs
// Purpose: Validate path, look-ahead and decoration geometry for visible-child windows.

use overlay_core::{
    normalize_points, sample_dataset, DrawOp, OverlayError, OverlayGeometryBuilder, PixelMetrics, ScreenPoint,
    VisibleChild,
};

const HEIGHT: f32 = 400.0;
const WIDTH: f32 = 50.0;

fn metrics() -> PixelMetrics {
    PixelMetrics {
        stroke_width: 3.0,
        corner_radius: 16.0,
        header_footer_inset: 20.0,
        cursor_radius: 5.0,
        selected_cursor_radius: 24.0,
        drop_line_inset: 80.0,
    }
}

fn builder(selected: usize) -> OverlayGeometryBuilder {
    OverlayGeometryBuilder::new(&sample_dataset(), selected, metrics())
}

/// Children for `indices`, laid out edge to edge starting at `left`.
fn window(indices: std::ops::RangeInclusive<usize>, left: f32) -> Vec<VisibleChild> {
    indices
        .enumerate()
        .map(|(k, i)| {
            let l = left + k as f32 * WIDTH;
            VisibleChild::new(i, l, l + WIDTH, HEIGHT)
        })
        .collect()
}

fn expected_y(index: usize) -> f32 {
    let n = normalize_points(&sample_dataset())[index];
    (1.0 - n) as f32 * (HEIGHT - 40.0) + 20.0
}

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "{a} != {b}");
}

#[test]
fn interior_window_has_one_look_ahead_segment() {
    let children = window(2..=4, -10.0);
    let g = builder(6).build(&children).unwrap();

    assert_eq!(g.path.segments.len(), children.len() + 1);
    assert_eq!(g.points.len(), children.len());

    // entry segment: half an item left of the first child, at the previous value
    assert_close(g.path.start.x, -10.0 - WIDTH / 2.0);
    assert_close(g.path.start.y, expected_y(1));

    for ((index, p), child) in g.points.iter().zip(&children) {
        assert_eq!(*index, child.data_index);
        assert_close(p.x, child.left + WIDTH / 2.0);
        assert_close(p.y, expected_y(child.data_index));
    }

    let ahead = g.path.last().unwrap();
    let last = children.last().unwrap();
    assert_close(ahead.x, last.right + WIDTH / 2.0);
    assert_close(ahead.y, expected_y(5));
}

#[test]
fn window_at_dataset_end_terminates_flat() {
    let children = window(4..=6, 0.0);
    let g = builder(0).build(&children).unwrap();

    let last_point = g.points.last().unwrap().1;
    let ahead = g.path.last().unwrap();
    assert_eq!(g.path.segments.len(), children.len() + 1);
    assert_close(ahead.y, last_point.y);
    assert_close(ahead.x, children.last().unwrap().right);
}

#[test]
fn first_item_starts_from_its_own_value() {
    let g = builder(0).build(&window(0..=2, 0.0)).unwrap();
    assert_close(g.path.start.y, expected_y(0));
    assert_close(g.path.start.x, -WIDTH / 2.0);
}

#[test]
fn selection_decorated_once_wherever_it_sits() {
    let children = window(2..=4, 0.0);
    for selected in 2..=4 {
        let g = builder(selected).build(&children).unwrap();
        assert_eq!(g.selected_cursor_count(), 1, "selected {selected}");
        assert_eq!(g.drop_line_count(), 1, "selected {selected}");
        assert_eq!(g.cursor_count(), children.len());

        let p = g.points.iter().find(|(i, _)| *i == selected).unwrap().1;
        assert!(g.decorations.contains(&DrawOp::SelectedCursor { center: p, radius: 24.0 }));
        assert!(g.decorations.contains(&DrawOp::DropLine { from: p, to: ScreenPoint::new(p.x, HEIGHT - 80.0) }));
    }

    let offscreen = builder(6).build(&children).unwrap();
    assert_eq!(offscreen.selected_cursor_count(), 0);
    assert_eq!(offscreen.drop_line_count(), 0);
}

#[test]
fn decorations_keep_paint_order() {
    let g = builder(3).build(&window(3..=3, 0.0)).unwrap();
    assert!(matches!(
        g.decorations.as_slice(),
        [DrawOp::SelectedCursor { .. }, DrawOp::DropLine { .. }, DrawOp::Cursor { radius, .. }] if *radius == 5.0
    ));
}

#[test]
fn single_item_dataset_centers_and_ends_flat() {
    let b = OverlayGeometryBuilder::new(&[overlay_core::DataPoint::new(42.0, "only")], 0, metrics());
    let child = VisibleChild::new(0, 10.0, 60.0, HEIGHT);
    let g = b.build(&[child]).unwrap();

    let mid_y = 0.5 * (HEIGHT - 40.0) + 20.0;
    assert_eq!(g.path.segments, vec![ScreenPoint::new(35.0, mid_y), ScreenPoint::new(60.0, mid_y)]);
    assert_eq!(g.path.start, ScreenPoint::new(-15.0, mid_y));
    assert_eq!(g.selected_cursor_count(), 1);
}

#[test]
fn empty_dataset_draws_nothing() {
    let b = OverlayGeometryBuilder::new(&[], 0, metrics());
    let g = b.build(&window(0..=2, 0.0)).unwrap();
    assert!(g.is_empty());
    assert!(g.points.is_empty());
}

#[test]
fn no_children_draws_nothing() {
    let g = builder(0).build(&[]).unwrap();
    assert!(g.is_empty());
}

#[test]
fn out_of_range_child_fails_fast() {
    let mut children = window(5..=6, 0.0);
    children.push(VisibleChild::new(7, 100.0, 150.0, HEIGHT));
    assert_eq!(builder(0).build(&children), Err(OverlayError::IndexOutOfRange { index: 7, len: 7 }));

    let first_bad = vec![VisibleChild::new(9, 0.0, 50.0, HEIGHT)];
    assert_eq!(builder(0).build(&first_bad), Err(OverlayError::IndexOutOfRange { index: 9, len: 7 }));
}

#[test]
fn path_vertices_include_start() {
    let g = builder(0).build(&window(1..=2, 0.0)).unwrap();
    let vertices = g.path.vertices().collect::<Vec<_>>();
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[0], g.path.start);
}
