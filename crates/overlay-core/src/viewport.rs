// File: crates/overlay-core/src/viewport.rs
// Horizontal list viewport: scroll state and the visible-child snapshot handed to the overlay.

use crate::types::VisibleChild;

/// A row of fixed-width items scrolled horizontally inside a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListViewport {
    pub item_width: f32,
    pub item_height: f32,
    pub viewport_width: f32,
    /// Content offset of the viewport's left edge, in pixels.
    pub scroll_x: f32,
}

impl ListViewport {
    pub fn new(item_width: f32, item_height: f32, viewport_width: f32) -> Self {
        Self { item_width: item_width.max(1.0), item_height, viewport_width: viewport_width.max(0.0), scroll_x: 0.0 }
    }

    pub fn content_width(&self, item_count: usize) -> f32 {
        item_count as f32 * self.item_width
    }

    pub fn max_scroll(&self, item_count: usize) -> f32 {
        (self.content_width(item_count) - self.viewport_width).max(0.0)
    }

    pub fn scroll_to(&mut self, x: f32, item_count: usize) {
        self.scroll_x = x.clamp(0.0, self.max_scroll(item_count));
    }

    /// Positive `dx` reveals items further right.
    pub fn scroll_by(&mut self, dx: f32, item_count: usize) {
        self.scroll_to(self.scroll_x + dx, item_count);
    }

    pub fn scroll_to_end(&mut self, item_count: usize) {
        self.scroll_x = self.max_scroll(item_count);
    }

    /// Every item intersecting the viewport, partially visible ones included, left to right.
    pub fn visible_children(&self, item_count: usize) -> Vec<VisibleChild> {
        if item_count == 0 || self.viewport_width <= 0.0 { return Vec::new(); }
        let first = (self.scroll_x / self.item_width).floor().max(0.0) as usize;
        let end = ((self.scroll_x + self.viewport_width) / self.item_width).ceil() as usize;

        (first..end.min(item_count))
            .map(|i| {
                let left = i as f32 * self.item_width - self.scroll_x;
                VisibleChild::new(i, left, left + self.item_width, self.item_height)
            })
            .filter(|c| c.right > 0.0 && c.left < self.viewport_width)
            .collect()
    }

    /// Data index of the item under viewport x-coordinate `x`.
    pub fn hit_test(&self, x: f32, item_count: usize) -> Option<usize> {
        if x < 0.0 || x >= self.viewport_width { return None; }
        let index = ((self.scroll_x + x) / self.item_width).floor() as usize;
        (index < item_count).then_some(index)
    }
}
