//! Benchmarks for whole frames through each render driver.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use midiroll::{
    render::{DeclarativeRenderer, ElementList, TimerRenderer},
    FrameContext, RenderConfig, Size,
};

use crate::{song, NOTE_COUNTS};

const SIZE: Size = Size::new(1920.0, 1080.0);

pub fn bench_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("drivers");
    let config = RenderConfig::default();

    for &count in NOTE_COUNTS {
        let set = song(count);
        let elapsed = set.duration_sec() / 2.0;

        let mut surface = ElementList::new();
        let mut renderer = DeclarativeRenderer::new();
        renderer.init(&mut surface, &set.notes);
        let paused = FrameContext::new(elapsed, set.all_enabled(), false);
        group.bench_with_input(BenchmarkId::new("declarative_paused", count), &count, |b, _| {
            b.iter(|| renderer.update(&mut surface, black_box(&set.notes), SIZE, &config, black_box(&paused)))
        });

        // Playing: warm the cull cache once, then measure steady-state frames
        let playing = FrameContext::new(elapsed, set.all_enabled(), true);
        renderer.invalidate();
        renderer.update(&mut surface, &set.notes, SIZE, &config, &playing);
        group.bench_with_input(BenchmarkId::new("declarative_playing", count), &count, |b, _| {
            b.iter(|| renderer.update(&mut surface, black_box(&set.notes), SIZE, &config, black_box(&playing)))
        });

        let mut surface = ElementList::new();
        let mut timer = TimerRenderer::with_defaults();
        timer.init(&mut surface, &set.notes, SIZE);
        group.bench_with_input(BenchmarkId::new("timer_tick", count), &count, |b, _| {
            b.iter(|| timer.tick(&mut surface, black_box(&set.notes), SIZE, black_box(elapsed)))
        });
    }

    group.finish();
}
