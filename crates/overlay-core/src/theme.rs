// File: crates/overlay-core/src/theme.rs
// Summary: Light/Dark color presets for the overlay.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub path_stroke: skia::Color,
    pub cursor: skia::Color,
    pub selected_cursor: skia::Color,
    pub drop_line: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            path_stroke: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            cursor: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            selected_cursor: skia::Color::from_argb(255, 0x03, 0xda, 0xc5), // teal 200
            drop_line: skia::Color::from_argb(255, 0xbb, 0x86, 0xfc),       // purple 200
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            path_stroke: skia::Color::from_argb(255, 235, 235, 245),
            cursor: skia::Color::from_argb(255, 235, 235, 245),
            selected_cursor: skia::Color::from_argb(255, 0x03, 0xda, 0xc5),
            drop_line: skia::Color::from_argb(255, 0xbb, 0x86, 0xfc),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
