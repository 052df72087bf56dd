use criterion::{black_box, criterion_group, criterion_main, Criterion};

use learnhub_core::catalog;
use learnhub_core::dispatch::{dispatch, SessionOptions};
use learnhub_core::event::ActivityEvent;
use learnhub_core::registry;

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let options = SessionOptions {
        shuffle_seed: Some(1),
        ..SessionOptions::default()
    };
    let ctx = catalog::resolve(Some("science"), Some("5"));

    group.bench_function("all_modes_generic", |b| {
        b.iter(|| {
            for mode_id in registry::standard().mode_ids() {
                black_box(dispatch(black_box(mode_id), None, &options).ok());
            }
        })
    });

    group.bench_function("all_modes_with_context", |b| {
        b.iter(|| {
            for mode_id in registry::standard().mode_ids() {
                black_box(dispatch(black_box(mode_id), ctx.as_ref(), &options).ok());
            }
        })
    });

    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let lines = ["select 2", "check", "next", "input New Delhi", "toggle 1 3", "right 4"];

    c.bench_function("parse_events", |b| {
        b.iter(|| {
            for line in lines {
                black_box(line.parse::<ActivityEvent>().ok());
            }
        })
    });

    c.bench_function("quiz_round", |b| {
        b.iter(|| {
            let Ok(mut quiz) = dispatch("mcq", None, &SessionOptions::default()) else {
                return;
            };
            for event in [
                ActivityEvent::Select(2),
                ActivityEvent::Check,
                ActivityEvent::Next,
                ActivityEvent::Select(1),
                ActivityEvent::Check,
                ActivityEvent::Next,
            ] {
                black_box(quiz.handle(event).ok());
            }
            black_box(quiz.score());
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_events);
criterion_main!(benches);
