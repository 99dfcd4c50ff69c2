// File: crates/overlay-core/src/overlay.rs
// Summary: Overlay instance bound to one dataset and one selection; rebuilt on every selection change.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{OverlayError, OverlayResult};
use crate::geometry::{OverlayGeometry, OverlayGeometryBuilder};
use crate::metrics::{Density, OverlayStyle, PixelMetrics};
use crate::normalize::normalize_points;
use crate::surface::{paint, DrawSurface};
use crate::theme::Theme;
use crate::types::{DataPoint, ScreenPoint, VisibleChild};

/// Path overlay drawn on top of a horizontally scrolling list.
///
/// Normalized values and pixel metrics are fixed at construction. Geometry is rebuilt
/// from scratch on every [`PathOverlay::draw`]; the only state carried between repaints
/// is the last frame's points, keyed by data index.
pub struct PathOverlay {
    points: Vec<DataPoint>,
    style: OverlayStyle,
    density: Density,
    theme: Theme,
    builder: OverlayGeometryBuilder,
    last_points: BTreeMap<usize, ScreenPoint>,
}

impl PathOverlay {
    pub fn new(points: Vec<DataPoint>, selected_index: usize, style: OverlayStyle, density: Density) -> OverlayResult<Self> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.value.is_finite()) {
            return Err(OverlayError::NonFiniteValue { index, value: p.value });
        }
        if !points.is_empty() && selected_index >= points.len() {
            return Err(OverlayError::SelectionOutOfRange { index: selected_index, len: points.len() });
        }

        let metrics = PixelMetrics::resolve(&style, density);
        let normalized = normalize_points(&points);
        debug!(len = points.len(), selected_index, density = density.scale(), "path overlay constructed");

        Ok(Self {
            builder: OverlayGeometryBuilder::from_normalized(normalized, selected_index, metrics),
            points,
            style,
            density,
            theme: Theme::light(),
            last_points: BTreeMap::new(),
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// A fresh overlay for the same dataset with a different selection.
    pub fn reselect(&self, selected_index: usize) -> OverlayResult<Self> {
        Ok(Self::new(self.points.clone(), selected_index, self.style, self.density)?.with_theme(self.theme))
    }

    pub fn data(&self) -> &[DataPoint] { &self.points }
    pub fn normalized(&self) -> &[f64] { self.builder.normalized() }
    pub fn selected_index(&self) -> usize { self.builder.selected_index() }
    pub fn metrics(&self) -> &PixelMetrics { self.builder.metrics() }
    pub fn theme(&self) -> &Theme { &self.theme }

    /// Geometry for one repaint without touching any surface.
    pub fn geometry(&self, children: &[VisibleChild]) -> OverlayResult<OverlayGeometry> {
        self.builder.build(children)
    }

    /// Rebuild geometry for `children` and paint it onto `surface`.
    pub fn draw<S: DrawSurface>(&mut self, children: &[VisibleChild], surface: &mut S) -> OverlayResult<OverlayGeometry> {
        let geometry = self.builder.build(children)?;
        if geometry.is_empty() && !children.is_empty() {
            warn!(children = children.len(), "empty dataset; overlay skipped");
        }

        self.last_points.clear();
        self.last_points.extend(geometry.points.iter().copied());

        paint(&geometry, self.builder.metrics(), &self.theme, surface);
        Ok(geometry)
    }

    /// Point drawn for `data_index` during the last repaint, if it was visible.
    pub fn point_for(&self, data_index: usize) -> Option<ScreenPoint> {
        self.last_points.get(&data_index).copied()
    }

    pub fn last_points(&self) -> &BTreeMap<usize, ScreenPoint> { &self.last_points }
}
