use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fb_demo::core::{execute, fill_rect, set_pixel, Color, Geometry, MemorySurface};
use fb_demo::demo::demo_layout;

/// 1920x1080 at 32bpp with a padded 7936-byte stride
fn full_hd() -> MemorySurface {
    MemorySurface::new(Geometry::new(1920, 1080, 32, 7936))
}

/// Benchmark: Full-screen fill
fn bench_fill_full_screen(c: &mut Criterion) {
    let mut surface = full_hd();

    c.bench_function("fill_rect_full_hd", |b| {
        b.iter(|| fill_rect(&mut surface, 0, 0, 1920, 1080, black_box(Color::BACKGROUND)))
    });
}

/// Benchmark: Fill mostly outside the visible area
fn bench_fill_clipped(c: &mut Criterion) {
    let mut surface = full_hd();

    c.bench_function("fill_rect_clipped", |b| {
        b.iter(|| {
            fill_rect(
                &mut surface,
                black_box(-100_000),
                black_box(-100_000),
                100_100,
                100_100,
                Color::GREEN,
            )
        })
    });
}

/// Benchmark: Single pixel writes, half of them clipped
fn bench_set_pixel(c: &mut Criterion) {
    let mut surface = full_hd();

    c.bench_function("set_pixel_mixed", |b| {
        b.iter(|| {
            for i in 0..1024 {
                let x = (i * 37) % 3840 - 960;
                set_pixel(&mut surface, black_box(x), black_box(i % 1080), Color::WHITE);
            }
        })
    });
}

/// Benchmark: Whole demo layout
fn bench_demo_layout(c: &mut Criterion) {
    let mut surface = full_hd();
    let layout = demo_layout(&Geometry::new(1920, 1080, 32, 7936));

    c.bench_function("demo_layout_full_hd", |b| {
        b.iter(|| execute(&mut surface, black_box(&layout)))
    });
}

criterion_group!(
    benches,
    bench_fill_full_screen,
    bench_fill_clipped,
    bench_set_pixel,
    bench_demo_layout
);
criterion_main!(benches);
