// File: crates/overlay-core/src/surface.rs
// Summary: Drawing-surface seam (path stroke, filled circle, line) and the geometry painter.

use skia_safe as skia;

use crate::geometry::{DrawOp, OverlayGeometry, OverlayPath};
use crate::metrics::PixelMetrics;
use crate::theme::Theme;
use crate::types::ScreenPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub join: StrokeJoin,
    pub cap: StrokeCap,
    /// Radius used to round the corners between path segments; 0 keeps sharp corners.
    pub corner_radius: f32,
    pub color: skia::Color,
}

impl StrokeStyle {
    pub fn plain(width: f32, color: skia::Color) -> Self {
        Self { width, join: StrokeJoin::Miter, cap: StrokeCap::Butt, corner_radius: 0.0, color }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: skia::Color,
}

/// Minimal set of primitives the overlay needs from a rendering backend.
pub trait DrawSurface {
    fn stroke_path(&mut self, path: &OverlayPath, style: &StrokeStyle);
    fn fill_circle(&mut self, center: ScreenPoint, radius: f32, style: &FillStyle);
    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, style: &StrokeStyle);
}

/// Paint decorations in order, then stroke the path on top of them.
pub fn paint<S: DrawSurface + ?Sized>(geometry: &OverlayGeometry, metrics: &PixelMetrics, theme: &Theme, surface: &mut S) {
    let cursor = FillStyle { color: theme.cursor };
    let selected = FillStyle { color: theme.selected_cursor };
    let drop_line = StrokeStyle::plain(metrics.stroke_width, theme.drop_line);

    for op in &geometry.decorations {
        match *op {
            DrawOp::SelectedCursor { center, radius } => surface.fill_circle(center, radius, &selected),
            DrawOp::DropLine { from, to } => surface.stroke_line(from, to, &drop_line),
            DrawOp::Cursor { center, radius } => surface.fill_circle(center, radius, &cursor),
        }
    }

    if geometry.path.is_empty() { return; }
    let path_style = StrokeStyle {
        width: metrics.stroke_width,
        join: StrokeJoin::Round,
        cap: StrokeCap::Round,
        corner_radius: metrics.corner_radius,
        color: theme.path_stroke,
    };
    surface.stroke_path(&geometry.path, &path_style);
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    StrokePath { path: OverlayPath, style: StrokeStyle },
    FillCircle { center: ScreenPoint, radius: f32, style: FillStyle },
    StrokeLine { from: ScreenPoint, to: ScreenPoint, style: StrokeStyle },
}

/// Surface that only records what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }
}

impl DrawSurface for RecordingSurface {
    fn stroke_path(&mut self, path: &OverlayPath, style: &StrokeStyle) {
        self.calls.push(SurfaceCall::StrokePath { path: path.clone(), style: *style });
    }
    fn fill_circle(&mut self, center: ScreenPoint, radius: f32, style: &FillStyle) {
        self.calls.push(SurfaceCall::FillCircle { center, radius, style: *style });
    }
    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, style: &StrokeStyle) {
        self.calls.push(SurfaceCall::StrokeLine { from, to, style: *style });
    }
}
