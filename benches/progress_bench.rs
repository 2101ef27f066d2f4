// ABOUTME: Criterion benchmarks for the progress aggregator
// ABOUTME: Measures single-exercise aggregation and workout fan-out over synthetic mixed-unit logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Criterion benchmarks for progress aggregation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ironlog_core::models::WeightUnit;
use ironlog_intelligence::{ExerciseSeries, ProgressAggregator, ProgressOptions, RawLogEntry};
use uuid::Uuid;

/// Synthetic logs: every third entry in pounds, every seventh without a weight
#[allow(clippy::cast_precision_loss)]
fn generate_logs(count: usize) -> Vec<RawLogEntry> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    (0..count)
        .map(|index| {
            let weight_unit = if index % 3 == 0 {
                WeightUnit::Lbs
            } else {
                WeightUnit::Kg
            };
            RawLogEntry {
                date: start
                    .checked_add_days(Days::new((index / 2) as u64))
                    .unwrap_or(start),
                weight: (index % 7 != 0).then(|| 60.0 + (index % 40) as f64 * 1.25),
                weight_unit,
                reps: Some(5),
                sets: Some(3),
            }
        })
        .collect()
}

fn bench_exercise_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("exercise_aggregation");
    let aggregator = ProgressAggregator::new(WeightUnit::Kg, ProgressOptions::default());
    let exercise_id = Uuid::new_v4();

    for size in [10_usize, 100, 1_000, 10_000] {
        let logs = generate_logs(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &logs, |b, logs| {
            b.iter(|| aggregator.aggregate(black_box(exercise_id), "Squat", black_box(logs)));
        });
    }

    group.finish();
}

fn bench_workout_aggregation(c: &mut Criterion) {
    let aggregator = ProgressAggregator::new(WeightUnit::Lbs, ProgressOptions::default());
    let series: Vec<ExerciseSeries> = (0..12)
        .map(|index| ExerciseSeries {
            exercise_id: Uuid::new_v4(),
            exercise_name: format!("Exercise {index}"),
            logs: if index % 4 == 0 {
                Vec::new()
            } else {
                generate_logs(200)
            },
        })
        .collect();

    c.bench_function("workout_aggregation_12_exercises", |b| {
        b.iter(|| aggregator.aggregate_workout(black_box(series.clone())));
    });
}

criterion_group!(
    benches,
    bench_exercise_aggregation,
    bench_workout_aggregation
);
criterion_main!(benches);
