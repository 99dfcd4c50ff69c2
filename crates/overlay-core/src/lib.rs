// File: crates/overlay-core/src/lib.rs
// Summary: Core library entry point; exports the overlay normalizer, geometry and rendering API.

pub mod error;
pub mod types;
pub mod normalize;
pub mod metrics;
pub mod geometry;
pub mod overlay;
pub mod surface;
pub mod theme;
pub mod viewport;
pub mod render;

pub use error::{OverlayError, OverlayResult};
pub use types::{sample_dataset, DataPoint, ScreenPoint, VisibleChild};
pub use normalize::{normalize, normalize_points};
pub use metrics::{Density, OverlayStyle, PixelMetrics};
pub use geometry::{DrawOp, OverlayGeometry, OverlayGeometryBuilder, OverlayPath};
pub use overlay::PathOverlay;
pub use surface::{paint, DrawSurface, FillStyle, RecordingSurface, StrokeCap, StrokeJoin, StrokeStyle, SurfaceCall};
pub use theme::Theme;
pub use viewport::ListViewport;
pub use render::{render_to_png, render_to_png_bytes, CanvasSurface, RenderOptions};
