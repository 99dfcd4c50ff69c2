// File: crates/overlay-core/src/types.rs
// Summary: Shared data types: data points, visible child snapshots and screen points.

/// One chart entry. Ordering inside a dataset defines the x-axis sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    /// Display-only; never read by the geometry.
    pub label: String,
}

impl DataPoint {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

/// Bounds of one on-screen list item, in pixels, as reported by the host for a single repaint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleChild {
    pub data_index: usize,
    pub left: f32,
    pub right: f32,
    pub height: f32,
}

impl VisibleChild {
    pub const fn new(data_index: usize, left: f32, right: f32, height: f32) -> Self {
        Self { data_index, left, right, height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn half_width(&self) -> f32 { self.width() / 2.0 }
    /// Horizontal midpoint (right edge minus half the width).
    pub fn mid_x(&self) -> f32 { self.right - self.half_width() }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

impl From<ScreenPoint> for (f32, f32) {
    fn from(p: ScreenPoint) -> Self { (p.x, p.y) }
}

/// Seven-day sample used by the demo and the tests.
pub fn sample_dataset() -> Vec<DataPoint> {
    vec![
        DataPoint::new(30.00, "Aug 7"),
        DataPoint::new(20.00, "Aug 8"),
        DataPoint::new(20.00, "Aug 9"),
        DataPoint::new(95.31, "Aug 10"),
        DataPoint::new(81.82, "Aug 11"),
        DataPoint::new(72.33, "Yesterday"),
        DataPoint::new(80.38, "Today"),
    ]
}
