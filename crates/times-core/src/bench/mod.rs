//! Call-overhead timing harness.
//!
//! Times whole `times(count, add_five, 0)` invocations under different
//! dispatch styles. This is NOT a full benchmarking suite - use `times-bench`
//! (Criterion) for that.
//!
//! ## Design Principles
//! - No subprocess calls
//! - No allocation inside the measured region
//! - Low noise: warmup runs + multiple iterations + simple statistics

use serde::{Deserialize, Serialize};

pub mod calls;
pub mod stats;

pub use calls::{run_call_benchmarks, DEFAULT_COUNT, DEFAULT_ITERS, DEFAULT_WARMUP};
pub use stats::compute_stats;

/// Bench report schema version. Bump when changing JSON structure.
pub const BENCH_SCHEMA_VERSION: u32 = 1;

/// Severity levels for bench warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
}

/// A benchmark warning with a stable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchWarning {
    /// Stable warning code (e.g., `LOW_ITERS`).
    pub code: String,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl BenchWarning {
    #[must_use]
    pub fn info(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: Severity::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warn(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: Severity::Warn,
            message: message.into(),
        }
    }
}

/// Warning codes for bench.
pub mod codes {
    pub const LOW_ITERS: &str = "LOW_ITERS";
    pub const COUNT_CLAMPED: &str = "COUNT_CLAMPED";
}

/// Runtime information for the benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchRuntimeInfo {
    pub times_version: String,
    pub os: String,
    pub arch: String,
}

/// Benchmark parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchParams {
    pub iters: u32,
    pub warmup: u32,
    /// Applications of `add_five` per measured call.
    pub count: u64,
}

/// Statistics for a single benchmark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BenchStats {
    pub min_ns: u64,
    pub median_ns: u64,
    pub p95_ns: u64,
    pub max_ns: u64,
}

/// Result of a single benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    /// Stable identifier (e.g., `fn_pointer`).
    pub name: String,
    /// Unit of measurement.
    pub unit: String,
    /// Number of samples taken.
    pub samples: u32,
    /// Minimum time in nanoseconds.
    pub min_ns: u64,
    /// Median time in nanoseconds.
    pub median_ns: u64,
    /// 95th percentile time in nanoseconds.
    pub p95_ns: u64,
    /// Maximum time in nanoseconds.
    pub max_ns: u64,
    /// Value returned by the measured call.
    pub value: i64,
}

impl BenchResult {
    /// Create a new bench result from stats.
    #[must_use]
    pub fn new(name: impl Into<String>, samples: u32, stats: BenchStats, value: i64) -> Self {
        Self {
            name: name.into(),
            unit: "ns/op".to_string(),
            samples,
            min_ns: stats.min_ns,
            median_ns: stats.median_ns,
            p95_ns: stats.p95_ns,
            max_ns: stats.max_ns,
            value,
        }
    }
}

/// Complete benchmark report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Schema version for this report format.
    pub bench_schema_version: u32,
    /// Runtime information.
    pub runtime: BenchRuntimeInfo,
    /// Benchmark parameters.
    pub params: BenchParams,
    /// Benchmark results.
    pub results: Vec<BenchResult>,
    /// Warnings encountered during benchmarking.
    pub warnings: Vec<BenchWarning>,
}

impl BenchReport {
    /// Create a new benchmark report.
    #[must_use]
    pub fn new(
        params: BenchParams,
        results: Vec<BenchResult>,
        warnings: Vec<BenchWarning>,
    ) -> Self {
        Self {
            bench_schema_version: BENCH_SCHEMA_VERSION,
            runtime: BenchRuntimeInfo {
                times_version: crate::version::VERSION.to_string(),
                os: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            },
            params,
            results,
            warnings,
        }
    }
}
