use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use times_core::bench::{run_call_benchmarks, BenchReport, Severity};
use tracing::debug;

pub use times_core::bench::{DEFAULT_COUNT, DEFAULT_ITERS, DEFAULT_WARMUP};

/// Run the bench command.
///
/// When `json` is true, outputs a single JSON object to stdout.
/// Otherwise, outputs human-readable formatted text to stdout.
pub fn run(iters: u32, warmup: u32, count: u64, json: bool) -> Result<()> {
    debug!(iters, warmup, count, "running call benchmarks");
    let report = run_call_benchmarks(iters, warmup, count);

    if json {
        print_json(&report)?;
    } else {
        print_human(&report)?;
    }

    Ok(())
}

fn print_json(report: &BenchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn print_human(report: &BenchReport) -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "\x1b[1mtimes bench\x1b[0m").into_diagnostic()?;
    writeln!(
        out,
        "Params: iters={} warmup={} count={}",
        report.params.iters, report.params.warmup, report.params.count
    )
    .into_diagnostic()?;
    writeln!(out).into_diagnostic()?;

    for result in &report.results {
        writeln!(
            out,
            "\x1b[32m{:<16}\x1b[0m median={:<10} p95={:<10} per_call={:<10} \x1b[90mmin={:<10} max={:<10} value={}\x1b[0m",
            result.name,
            format_duration(result.median_ns),
            format_duration(result.p95_ns),
            format_per_call(result.median_ns, report.params.count),
            format_duration(result.min_ns),
            format_duration(result.max_ns),
            result.value,
        )
        .into_diagnostic()?;
    }

    if !report.warnings.is_empty() {
        writeln!(out).into_diagnostic()?;
        writeln!(
            out,
            "\x1b[1mWarnings\x1b[0m ({} total)",
            report.warnings.len()
        )
        .into_diagnostic()?;
        for warning in &report.warnings {
            let prefix = match warning.severity {
                Severity::Info => "\x1b[34minfo\x1b[0m",
                Severity::Warn => "\x1b[33mwarn\x1b[0m",
            };
            writeln!(out, "  [{prefix}] {}: {}", warning.code, warning.message)
                .into_diagnostic()?;
        }
    }

    out.flush().into_diagnostic()?;
    Ok(())
}

/// Format a duration in nanoseconds to a human-readable string.
fn format_duration(ns: u64) -> String {
    if ns >= 1_000_000_000 {
        format!("{:.2}s", ns as f64 / 1_000_000_000.0)
    } else if ns >= 1_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else if ns >= 1_000 {
        format!("{:.2}us", ns as f64 / 1_000.0)
    } else {
        format!("{ns}ns")
    }
}

/// Average time of one application of the transformation.
fn format_per_call(total_ns: u64, count: u64) -> String {
    format!("{:.3}ns", total_ns as f64 / count.max(1) as f64)
}
