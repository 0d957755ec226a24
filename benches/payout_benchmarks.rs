//! Performance benchmarks for the Student Payout Engine.
//!
//! Measures payout aggregation over generated attendance logs of increasing
//! size, plus the single-record allowance path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use student_payout::calculation::{AllowanceEngine, PayoutAggregator};
use student_payout::config::{RateTable, RoundingPolicy};
use student_payout::models::{AttendanceRow, AttendanceStatus, WorkplaceRow};

const STATUSES: [&str; 5] = ["WORKED", "WORKED", "AL", "CSL", "USL"];

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Creates a directory of `count` workplaces spread along the x axis.
fn create_workplaces(count: usize) -> Vec<WorkplaceRow> {
    (0..count)
        .map(|i| WorkplaceRow::new(i.to_string(), format!("({},0)", i * 3)))
        .collect()
}

/// Creates `count` attendance rows for 50 students across the workplaces.
fn create_attendances(count: usize, workplaces: usize) -> Vec<AttendanceRow> {
    (0..count)
        .map(|i| {
            AttendanceRow::new(
                (i % 50).to_string(),
                format!("{}-06-15", 1995 + (i % 12)),
                STATUSES[i % STATUSES.len()],
                format!("({},{})", i % 17, i % 11),
                (i % workplaces).to_string(),
            )
        })
        .collect()
}

fn bench_single_record(c: &mut Criterion) {
    let rates = RateTable::default();
    let engine = AllowanceEngine::new(&rates);
    let status = AttendanceStatus::from("WORKED");

    c.bench_function("compute_allowances_worked", |b| {
        b.iter(|| {
            engine.compute_allowances(
                black_box(25),
                black_box(&status),
                black_box("(0,8)"),
                black_box("(0,0)"),
            )
        })
    });
}

fn bench_aggregation(c: &mut Criterion) {
    let rates = RateTable::default();
    let aggregator = PayoutAggregator::new(&rates, RoundingPolicy::PerRecord);
    let workplaces = create_workplaces(20);

    let mut group = c.benchmark_group("aggregate_attendance");
    for size in [100usize, 1_000, 10_000] {
        let attendances = create_attendances(size, workplaces.len());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &attendances, |b, rows| {
            b.iter(|| aggregator.calculate_as_of(black_box(&workplaces), black_box(rows), as_of()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_record, bench_aggregation);
criterion_main!(benches);
