use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use overlay_core::{render_to_png_bytes, sample_dataset, Density, ListViewport, OverlayStyle, PathOverlay, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &density in &[1.0f32, 3.0f32] {
        group.bench_function(format!("density_{density}"), |b| {
            let data = sample_dataset();
            let mut overlay = PathOverlay::new(data.clone(), data.len() - 1, OverlayStyle::default(), Density::new(density).unwrap())
                .unwrap();
            let mut viewport = ListViewport::new(180.0 * density, 600.0 * density, 1080.0);
            viewport.scroll_to_end(data.len());
            let children = viewport.visible_children(data.len());
            let opts = RenderOptions { width: 1080, height: (600.0 * density) as i32 };
            b.iter(|| -> Result<()> {
                let bytes = render_to_png_bytes(&mut overlay, &children, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
