//! Benchmarks for the pure per-note math.

use std::hint::black_box;

use criterion::Criterion;
use midiroll::{
    geometry::{flip_rect, note_rect, Envelope, EnvelopeTiming},
    Note, RenderConfig, Size,
};

pub fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let size = Size::new(1920.0, 1080.0);
    let note = Note::new(60, 1.0, 2.0, 0);
    let config = RenderConfig::default();
    let vertical = config.with_vertical(true);

    let envelope = Envelope::new(30.0, 100.0, 80.0);
    let timing = EnvelopeTiming::default();
    group.bench_function("envelope", |b| {
        b.iter(|| envelope.value(black_box(&timing), black_box(1.0), black_box(2.0), black_box(1.3)))
    });

    group.bench_function("note_rect", |b| {
        b.iter(|| note_rect(black_box(size), black_box(&note), black_box(1.3), black_box(&config)))
    });

    group.bench_function("note_rect_flipped", |b| {
        b.iter(|| {
            let rect = note_rect(black_box(size), black_box(&note), black_box(1.3), black_box(&vertical));
            flip_rect(rect, size)
        })
    });

    group.finish();
}
