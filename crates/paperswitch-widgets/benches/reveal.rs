//! Benchmarks for reveal geometry and animation stepping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paperswitch_core::{Color, Point, RecordingCanvas, Rect, Size, Widget};
use paperswitch_widgets::{covering_radius, PaperSwitchConfig, RevealPanel, Switch};

fn bench_covering_radius(c: &mut Criterion) {
    let container = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let center = Point::new(200.0, 900.0);

    c.bench_function("covering_radius", |b| {
        b.iter(|| covering_radius(black_box(center), black_box(container)))
    });
}

fn panel() -> RevealPanel {
    let config = PaperSwitchConfig::new().fill_color(Color::GREEN);
    let mut panel = RevealPanel::new(
        Size::new(1920.0, 1080.0),
        Some(Color::WHITE),
        Switch::new(),
        Rect::new(40.0, 40.0, 51.0, 31.0),
        &config,
    )
    .unwrap();
    panel.layout(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    panel
}

fn bench_reveal_cycle(c: &mut Criterion) {
    let mut panel = panel();

    c.bench_function("reveal_cycle_60fps", |b| {
        b.iter(|| {
            let on = !panel.is_on();
            panel.set_on(on, true);
            while panel.tick(black_box(1.0 / 60.0)) {}
        })
    });
}

fn bench_panel_layout(c: &mut Criterion) {
    let mut panel = panel();
    let bounds = Rect::new(0.0, 0.0, 1280.0, 720.0);

    c.bench_function("panel_layout", |b| {
        b.iter(|| panel.layout(black_box(bounds)))
    });
}

fn bench_panel_paint_revealing(c: &mut Criterion) {
    let mut panel = panel();
    panel.set_on(true, true);
    panel.tick(0.1);

    c.bench_function("panel_paint_revealing", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            panel.paint(&mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(
    benches,
    bench_covering_radius,
    bench_reveal_cycle,
    bench_panel_layout,
    bench_panel_paint_revealing,
);

criterion_main!(benches);
