// File: crates/overlay-core/src/metrics.rs
// Summary: Density scale, dp-based overlay style and the pixel constants resolved from them.

use crate::error::{OverlayError, OverlayResult};

/// Device-independent unit to pixel scale factor.
/// Contract: finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(f32);

impl Density {
    pub fn new(scale: f32) -> OverlayResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(OverlayError::InvalidDensity(scale));
        }
        Ok(Self(scale))
    }

    pub fn scale(&self) -> f32 { self.0 }

    /// Convert dp to whole pixels, truncating toward zero.
    #[inline]
    pub fn to_px(&self, dp: f32) -> f32 {
        (dp * self.0).trunc()
    }
}

impl Default for Density {
    fn default() -> Self { Self(1.0) }
}

/// Overlay sizes in device-independent units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Path and drop-line stroke width, in raw pixels.
    pub stroke_width_px: f32,
    pub corner_radius_dp: f32,
    /// Band reserved at the top and bottom of every item for header/footer chrome.
    pub header_footer_dp: f32,
    pub cursor_radius_dp: f32,
    pub selected_cursor_radius_dp: f32,
    /// Drop-line ends at `height - multiplier * header_footer` regardless of item content.
    pub drop_line_inset_multiplier: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke_width_px: 3.0,
            corner_radius_dp: 16.0,
            header_footer_dp: 64.0,
            cursor_radius_dp: 5.0,
            selected_cursor_radius_dp: 24.0,
            drop_line_inset_multiplier: 4.0,
        }
    }
}

/// Every overlay size converted to pixels once for a given density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMetrics {
    pub stroke_width: f32,
    pub corner_radius: f32,
    pub header_footer_inset: f32,
    pub cursor_radius: f32,
    pub selected_cursor_radius: f32,
    pub drop_line_inset: f32,
}

impl PixelMetrics {
    pub fn resolve(style: &OverlayStyle, density: Density) -> Self {
        let header_footer_inset = density.to_px(style.header_footer_dp);
        Self {
            stroke_width: style.stroke_width_px,
            corner_radius: density.to_px(style.corner_radius_dp),
            header_footer_inset,
            cursor_radius: density.to_px(style.cursor_radius_dp),
            selected_cursor_radius: density.to_px(style.selected_cursor_radius_dp),
            drop_line_inset: header_footer_inset * style.drop_line_inset_multiplier,
        }
    }
}

impl Default for PixelMetrics {
    fn default() -> Self { Self::resolve(&OverlayStyle::default(), Density::default()) }
}
