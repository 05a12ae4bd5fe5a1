//! Scheduling benchmarks
//!
//! Benchmarks for the SM-2 recurrence and full session application using
//! Criterion. Run with: cargo bench

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sm2_scheduler::sm2::{due_offset, grown_interval, next_easiness_factor};
use sm2_scheduler::{Item, ManualClock, Review, Scheduler, Session};

fn bench_recurrence(c: &mut Criterion) {
    c.bench_function("next_easiness_factor", |b| {
        b.iter(|| {
            for score in 0..=5 {
                black_box(next_easiness_factor(black_box(2.5), score));
            }
        })
    });

    c.bench_function("grown_interval", |b| {
        b.iter(|| black_box(grown_interval(black_box(17.0), black_box(2.9))))
    });

    c.bench_function("due_offset_fractional", |b| {
        b.iter(|| black_box(due_offset(black_box(13.731))))
    });
}

fn bench_apply_session(c: &mut Criterion) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
    let mut scheduler = Scheduler::with_clock(Box::new(clock));

    // 1000 items, each stumbling once then recovering, so repeated
    // application reaches a fixed point instead of growing intervals
    // without bound across bench iterations
    let mut session = Session::new();
    for _ in 0..1000 {
        let item = Item::new();
        let id = item.id;
        scheduler.add_item(item);
        session.apply_review(Review::new(id, 0));
        session.apply_review(Review::new(id, 5));
    }

    c.bench_function("apply_session_1000_items", |b| {
        b.iter(|| scheduler.apply_session(black_box(&session)))
    });
}

criterion_group!(benches, bench_recurrence, bench_apply_session);
criterion_main!(benches);
