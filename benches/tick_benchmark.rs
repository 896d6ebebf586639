//! Per-frame cost benchmarks: timer dispatch, strip layout and hit testing.
//!
//! A frame is one `fire_due` plus a `visible` call; both must stay far below
//! the 15ms narrow tick period even for long brand lists.
//!
//! Run with: cargo bench --bench tick_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use brandstrip::engine::{EngineConfig, ScrollEngine, Scheduler};
use brandstrip::model::{BrandEntry, Logo};
use brandstrip::view_state::StripLayout;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::{Duration, Instant};

fn make_brands(count: usize) -> Vec<BrandEntry> {
    (0..count)
        .map(|i| {
            BrandEntry::new(
                format!("Brand {i}"),
                format!("https://brand{i}.example"),
                Logo::Url(format!("https://brand{i}.example/logo.png")),
            )
        })
        .collect()
}

fn bench_tick_dispatch(c: &mut Criterion) {
    c.bench_function("tick_dispatch_1000", |b| {
        b.iter(|| {
            let scheduler = Scheduler::new();
            let start = Instant::now();
            let mut engine =
                ScrollEngine::new(EngineConfig::default(), false, scheduler.clone(), start);
            let mut now = start;
            for _ in 0..1000 {
                now += Duration::from_millis(30);
                for id in scheduler.fire_due(now) {
                    engine.on_timer(id);
                }
            }
            black_box(engine.position())
        });
    });
}

fn bench_visible_cards(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_cards");

    for &count in &[10usize, 100, 1_000] {
        let brands = make_brands(count);
        let layout = StripLayout::new(&brands);
        let shift = layout.shift_for(73.4);

        group.bench_with_input(BenchmarkId::from_parameter(count), &layout, |b, layout| {
            b.iter(|| black_box(layout.visible(black_box(shift), 200)));
        });
    }

    group.finish();
}

fn bench_card_at(c: &mut Criterion) {
    let brands = make_brands(1_000);
    let layout = StripLayout::new(&brands);
    let shift = layout.shift_for(50.0);

    c.bench_function("card_at_1000_brands", |b| {
        b.iter(|| black_box(layout.card_at(black_box(shift), black_box(150))));
    });
}

criterion_group!(benches, bench_tick_dispatch, bench_visible_cards, bench_card_at);
criterion_main!(benches);
