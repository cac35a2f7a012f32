//! Benchmarks for springy layout simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use springy::*;

fn prepared(count: usize) -> SpringyLayout {
    let mut layout = SpringyLayout::new();
    let config = GridConfig::new().with_available_width(1280.0);
    layout
        .prepare((0..count).map(ItemIndex::from), config)
        .expect("valid grid config");
    layout
}

fn bench_spring_step(c: &mut Criterion) {
    c.bench_function("spring_underdamped_1000_steps", |b| {
        b.iter(|| {
            let mut spring = SpringModel::new(ItemIndex::from(0), Point::new(0.0, 0.0), SpringParams::default())
                .expect("valid spring params");
            spring.set_target(Point::new(10.0, 5.0));
            for _ in 0..1000 {
                spring.step(1.0 / 60.0);
            }
            spring.position()
        });
    });
}

fn bench_prepare(c: &mut Criterion) {
    c.bench_function("prepare_1000_items", |b| {
        b.iter(|| prepared(1000).engine().map(DynamicsEngine::len));
    });
}

fn bench_scroll_frame(c: &mut Criterion) {
    let mut layout = prepared(1000);
    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let mut origin = 0.0;
    c.bench_function("scroll_frame_1000_items", |b| {
        b.iter(|| {
            layout.on_bounds_change(origin, origin + 4.0, Point::new(640.0, 400.0 + origin));
            origin += 4.0;
            layout.advance(1.0 / 60.0);
            layout.attributes_for_region(viewport).count()
        });
    });
}

criterion_group!(benches, bench_spring_step, bench_prepare, bench_scroll_frame);
criterion_main!(benches);
