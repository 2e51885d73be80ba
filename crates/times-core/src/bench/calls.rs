//! Dispatch-style benchmark runner.
//!
//! Each benchmark times one `times(count, add_five, 0)` call per sample:
//! - `generic_direct`: `add_five` as a function item, monomorphised and inlinable
//! - `fn_pointer`: `add_five` as an opaque `fn(i64) -> i64`
//! - `dyn_fn`: `add_five` behind an opaque `&dyn Fn(i64) -> i64`

use super::{codes, BenchParams, BenchReport, BenchResult, BenchWarning};
use crate::bench::stats::compute_stats;
use crate::iterate::{add_five, times};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Default number of measured iterations.
pub const DEFAULT_ITERS: u32 = 50;

/// Default number of warmup iterations.
pub const DEFAULT_WARMUP: u32 = 10;

/// Default applications per measured call; matches the driver.
pub const DEFAULT_COUNT: u64 = crate::config::DEFAULT_COUNT;

/// Minimum allowed applications per call.
pub const MIN_COUNT: u64 = 1;

/// Maximum allowed applications per call.
pub const MAX_COUNT: u64 = 10_000_000;

/// Run all dispatch-style benchmarks.
///
/// # Arguments
/// - `iters`: Number of measured iterations (raised to 1 if zero)
/// - `warmup`: Number of warmup iterations (not measured)
/// - `count`: Applications of `add_five` per measured call
#[must_use]
pub fn run_call_benchmarks(iters: u32, warmup: u32, count: u64) -> BenchReport {
    let mut warnings = Vec::new();

    if iters < 10 {
        warnings.push(BenchWarning::info(
            codes::LOW_ITERS,
            format!("Low iteration count ({iters}); results may have high variance"),
        ));
    }
    let iters = iters.max(1);

    let clamped_count = count.clamp(MIN_COUNT, MAX_COUNT);
    if clamped_count != count {
        warnings.push(BenchWarning::info(
            codes::COUNT_CLAMPED,
            format!("Count clamped from {count} to {clamped_count}"),
        ));
    }

    let params = BenchParams {
        iters,
        warmup,
        count: clamped_count,
    };

    let results = vec![
        bench_generic_direct(iters, warmup, clamped_count),
        bench_fn_pointer(iters, warmup, clamped_count),
        bench_dyn_fn(iters, warmup, clamped_count),
    ];

    BenchReport::new(params, results, warnings)
}

/// Truncation only matters past ~585 years.
#[allow(clippy::cast_possible_truncation)]
fn duration_to_nanos(d: Duration) -> u64 {
    d.as_nanos() as u64
}

/// Warm up, then time `iters` calls of `op`.
fn measure<F>(name: &str, iters: u32, warmup: u32, op: F) -> BenchResult
where
    F: Fn() -> i64,
{
    for _ in 0..warmup {
        black_box(op());
    }

    let mut samples = Vec::with_capacity(iters as usize);
    let mut value = 0;
    for _ in 0..iters {
        let start = Instant::now();
        value = black_box(op());
        samples.push(duration_to_nanos(start.elapsed()));
    }

    BenchResult::new(name, iters, compute_stats(&samples), value)
}

fn bench_generic_direct(iters: u32, warmup: u32, count: u64) -> BenchResult {
    measure("generic_direct", iters, warmup, || {
        times(black_box(count), add_five, black_box(0))
    })
}

fn bench_fn_pointer(iters: u32, warmup: u32, count: u64) -> BenchResult {
    let f = black_box(add_five as fn(i64) -> i64);
    measure("fn_pointer", iters, warmup, || {
        times(black_box(count), f, black_box(0))
    })
}

fn bench_dyn_fn(iters: u32, warmup: u32, count: u64) -> BenchResult {
    let dynamic: &dyn Fn(i64) -> i64 = &add_five;
    let f = black_box(dynamic);
    measure("dyn_fn", iters, warmup, || {
        times(black_box(count), f, black_box(0))
    })
}
