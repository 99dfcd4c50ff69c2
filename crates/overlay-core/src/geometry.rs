// File: crates/overlay-core/src/geometry.rs
// Summary: Per-repaint geometry: path through visible items plus cursor/selection decorations.

use tracing::trace;

use crate::error::{OverlayError, OverlayResult};
use crate::metrics::PixelMetrics;
use crate::normalize::normalize_points;
use crate::types::{DataPoint, ScreenPoint, VisibleChild};

/// Continuous polyline: a move-to followed by line-to targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayPath {
    pub start: ScreenPoint,
    pub segments: Vec<ScreenPoint>,
}

impl OverlayPath {
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Start point followed by every segment end.
    pub fn vertices(&self) -> impl Iterator<Item = ScreenPoint> + '_ {
        let start = if self.is_empty() { None } else { Some(self.start) };
        start.into_iter().chain(self.segments.iter().copied())
    }

    pub fn last(&self) -> Option<ScreenPoint> { self.segments.last().copied() }
}

/// A single decoration, in the order it should be painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// Large highlight behind the selected point.
    SelectedCursor { center: ScreenPoint, radius: f32 },
    /// Vertical line from the selected point down toward the footer.
    DropLine { from: ScreenPoint, to: ScreenPoint },
    /// Small dot drawn on every visible point.
    Cursor { center: ScreenPoint, radius: f32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayGeometry {
    pub path: OverlayPath,
    /// Screen point of every visible child, tagged with its data index.
    pub points: Vec<(usize, ScreenPoint)>,
    pub decorations: Vec<DrawOp>,
}

impl OverlayGeometry {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.decorations.is_empty()
    }

    pub fn selected_cursor_count(&self) -> usize {
        self.decorations.iter().filter(|d| matches!(d, DrawOp::SelectedCursor { .. })).count()
    }

    pub fn drop_line_count(&self) -> usize {
        self.decorations.iter().filter(|d| matches!(d, DrawOp::DropLine { .. })).count()
    }

    pub fn cursor_count(&self) -> usize {
        self.decorations.iter().filter(|d| matches!(d, DrawOp::Cursor { .. })).count()
    }
}

/// Turns visible-child snapshots into overlay geometry for one selection.
#[derive(Clone, Debug)]
pub struct OverlayGeometryBuilder {
    normalized: Vec<f64>,
    selected_index: usize,
    metrics: PixelMetrics,
}

impl OverlayGeometryBuilder {
    pub fn new(points: &[DataPoint], selected_index: usize, metrics: PixelMetrics) -> Self {
        Self::from_normalized(normalize_points(points), selected_index, metrics)
    }

    pub fn from_normalized(normalized: Vec<f64>, selected_index: usize, metrics: PixelMetrics) -> Self {
        Self { normalized, selected_index, metrics }
    }

    pub fn len(&self) -> usize { self.normalized.len() }
    pub fn is_empty(&self) -> bool { self.normalized.is_empty() }
    pub fn normalized(&self) -> &[f64] { &self.normalized }
    pub fn selected_index(&self) -> usize { self.selected_index }
    pub fn metrics(&self) -> &PixelMetrics { &self.metrics }

    fn value_at(&self, index: usize) -> OverlayResult<f64> {
        self.normalized
            .get(index)
            .copied()
            .ok_or(OverlayError::IndexOutOfRange { index, len: self.normalized.len() })
    }

    /// Y for `index` inside an item of `height`: higher values sit nearer the top,
    /// with the header/footer band kept clear at both ends.
    pub fn calculate_y(&self, index: usize, height: f32) -> OverlayResult<f32> {
        let inset = self.metrics.header_footer_inset;
        let graph_height = height - 2.0 * inset;
        let n = self.value_at(index)?;
        Ok((1.0 - n) as f32 * graph_height + inset)
    }

    /// Build the path and decorations for `children`, given in left-to-right order.
    pub fn build(&self, children: &[VisibleChild]) -> OverlayResult<OverlayGeometry> {
        let (first, last) = match (children.first(), children.last()) {
            (Some(f), Some(l)) if !self.is_empty() => (f, l),
            _ => return Ok(OverlayGeometry::default()),
        };

        // Entry segment starts half an item left of the first child, at the previous value.
        self.value_at(first.data_index)?;
        let previous = first.data_index.saturating_sub(1);
        let start = ScreenPoint::new(
            first.left - first.half_width(),
            self.calculate_y(previous, first.height)?,
        );

        let mut geometry = OverlayGeometry {
            path: OverlayPath { start, segments: Vec::with_capacity(children.len() + 1) },
            points: Vec::with_capacity(children.len()),
            decorations: Vec::with_capacity(children.len() + 2),
        };

        for (child_index, child) in children.iter().enumerate() {
            let point = ScreenPoint::new(child.mid_x(), self.calculate_y(child.data_index, child.height)?);
            trace!(child_index, data_index = child.data_index, x = point.x, y = point.y, "overlay point");

            geometry.path.segments.push(point);
            geometry.points.push((child.data_index, point));

            if child.data_index == self.selected_index {
                geometry.decorations.push(DrawOp::SelectedCursor {
                    center: point,
                    radius: self.metrics.selected_cursor_radius,
                });
                geometry.decorations.push(DrawOp::DropLine {
                    from: point,
                    to: ScreenPoint::new(point.x, child.height - self.metrics.drop_line_inset),
                });
            }
            geometry.decorations.push(DrawOp::Cursor { center: point, radius: self.metrics.cursor_radius });
        }

        geometry.path.segments.push(self.look_ahead(last)?);
        Ok(geometry)
    }

    /// One step past the last visible child: toward the next item's midpoint,
    /// or flat to the right edge when the dataset ends here.
    fn look_ahead(&self, last: &VisibleChild) -> OverlayResult<ScreenPoint> {
        let next = last.data_index + 1;
        let point = if next >= self.len() {
            ScreenPoint::new(last.right, self.calculate_y(self.len() - 1, last.height)?)
        } else {
            ScreenPoint::new(last.right + last.half_width(), self.calculate_y(next, last.height)?)
        };
        trace!(next, x = point.x, y = point.y, "overlay look-ahead");
        Ok(point)
    }
}
