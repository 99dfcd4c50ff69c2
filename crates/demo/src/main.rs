// File: crates/demo/src/main.rs
// Summary: Demo loads a value/label dataset, scrolls a simulated horizontal list and renders overlay frames to PNGs.

use anyhow::{Context, Result};
use clap::Parser;
use overlay_core::{sample_dataset, theme, DataPoint, Density, ListViewport, OverlayStyle, PathOverlay, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "overlay-demo", version, about = "Render path overlay frames for a scrolling list", long_about = None)]
struct Cli {
    /// CSV with `value,label` columns; the built-in sample is used when omitted
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Selected data index (defaults to the last point)
    #[arg(long)]
    selected: Option<usize>,

    /// Simulated tap at this viewport x (px) on the first frame; reselects the item under it
    #[arg(long)]
    tap: Option<f32>,

    /// Device-independent unit to pixel scale
    #[arg(long, default_value_t = 2.0)]
    density: f32,

    /// Theme preset name (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Number of items spanning the viewport width
    #[arg(long, default_value_t = 3.5)]
    viewport_items: f32,

    /// Frames to render while scrolling left to right
    #[arg(long, default_value_t = 6)]
    frames: usize,

    /// Scroll distance between frames, in item widths
    #[arg(long, default_value_t = 0.5)]
    step: f32,

    /// Drop-line end, in header/footer insets above the item bottom
    #[arg(long, default_value_t = 4.0)]
    drop_line_multiplier: f32,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Enable verbose (per-point) logging
    #[arg(short, long)]
    verbose: bool,
}

/// Item size in dp inside the simulated list.
const ITEM_WIDTH_DP: f32 = 120.0;
const ITEM_HEIGHT_DP: f32 = 640.0;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data = match &cli.csv {
        Some(path) => load_dataset_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => sample_dataset(),
    };
    info!(points = data.len(), "dataset loaded");
    if data.is_empty() {
        anyhow::bail!("no data points loaded; check headers/delimiter.");
    }

    let density = Density::new(cli.density)?;
    let style = OverlayStyle { drop_line_inset_multiplier: cli.drop_line_multiplier, ..OverlayStyle::default() };
    let selected = cli.selected.unwrap_or(data.len() - 1);

    let item_width = density.to_px(ITEM_WIDTH_DP);
    let item_height = density.to_px(ITEM_HEIGHT_DP);
    let mut viewport = ListViewport::new(item_width, item_height, item_width * cli.viewport_items);
    let opts = RenderOptions { width: viewport.viewport_width.ceil() as i32, height: item_height as i32 };

    let mut overlay = PathOverlay::new(data.clone(), selected, style, density)?.with_theme(theme::find(&cli.theme));

    if let Some(x) = cli.tap {
        match viewport.hit_test(x, data.len()) {
            Some(index) => {
                info!(x, index, label = %data[index].label, "tap selects item");
                overlay = overlay.reselect(index)?;
            }
            None => warn!(x, "tap missed every item"),
        }
    }

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    for frame in 0..cli.frames.max(1) {
        let children = viewport.visible_children(data.len());
        let out = frame_path(&cli.out, overlay.selected_index(), frame);
        overlay_core::render_to_png(&mut overlay, &children, &opts, &out)?;
        info!(frame, scroll_x = viewport.scroll_x, visible = children.len(), "wrote {}", out.display());

        if viewport.scroll_x >= viewport.max_scroll(data.len()) { break; }
        viewport.scroll_by(cli.step * item_width, data.len());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "overlay_core=trace,overlay_demo=debug" } else { "overlay_demo=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}

/// Output file name like <dir>/overlay_sel<selected>_f<frame>.png
fn frame_path(dir: &Path, selected: usize, frame: usize) -> PathBuf {
    dir.join(format!("overlay_sel{selected}_f{frame:02}.png"))
}

/// Load `value,label` rows. Headers are matched by name, else the first two columns are used.
fn load_dataset_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_value = idx(&["value", "v", "amount"]).unwrap_or(0);
    let i_label = idx(&["label", "name", "date"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        match value {
            Some(v) => out.push(DataPoint::new(v, rec.get(i_label).unwrap_or("").trim())),
            None => warn!(row, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}
