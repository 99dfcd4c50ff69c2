// File: crates/overlay-core/src/render.rs
// Summary: Skia-backed drawing surface and headless PNG rendering using CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::OverlayPath;
use crate::overlay::PathOverlay;
use crate::surface::{DrawSurface, FillStyle, StrokeCap, StrokeJoin, StrokeStyle};
use crate::types::{ScreenPoint, VisibleChild};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1080;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// [`DrawSurface`] over a borrowed Skia canvas.
pub struct CanvasSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn stroke_path(&mut self, path: &OverlayPath, style: &StrokeStyle) {
        let mut sk_path = skia::Path::new();
        sk_path.move_to(point(path.start));
        for &p in &path.segments {
            sk_path.line_to(point(p));
        }

        let mut paint = stroke_paint(style);
        if style.corner_radius > 0.0 {
            paint.set_path_effect(skia::PathEffect::corner_path(style.corner_radius));
        }
        self.canvas.draw_path(&sk_path, &paint);
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f32, style: &FillStyle) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(style.color);
        self.canvas.draw_circle(point(center), radius, &paint);
    }

    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, style: &StrokeStyle) {
        self.canvas.draw_line(point(from), point(to), &stroke_paint(style));
    }
}

/// Draw one repaint of `overlay` for `children` and encode it as PNG bytes.
pub fn render_to_png_bytes(overlay: &mut PathOverlay, children: &[VisibleChild], opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let background = overlay.theme().background;

    {
        let canvas = surface.canvas();
        canvas.clear(background);
        let mut target = CanvasSurface::new(canvas);
        overlay.draw(children, &mut target).context("overlay draw failed")?;
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file at `output_png_path`, creating parent directories as needed.
pub fn render_to_png(
    overlay: &mut PathOverlay,
    children: &[VisibleChild],
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(overlay, children, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn point(p: ScreenPoint) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn stroke_paint(style: &StrokeStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.width);
    paint.set_color(style.color);
    paint.set_stroke_join(match style.join {
        StrokeJoin::Miter => skia::paint::Join::Miter,
        StrokeJoin::Round => skia::paint::Join::Round,
        StrokeJoin::Bevel => skia::paint::Join::Bevel,
    });
    paint.set_stroke_cap(match style.cap {
        StrokeCap::Butt => skia::paint::Cap::Butt,
        StrokeCap::Round => skia::paint::Cap::Round,
        StrokeCap::Square => skia::paint::Cap::Square,
    });
    paint
}
