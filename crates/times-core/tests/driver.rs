//! End-to-end checks of the driver through the public API.

use times_core::bench::{run_call_benchmarks, BenchReport};
use times_core::{add_five, times, Config, Error, OverflowPolicy};

#[test]
fn test_driver_literal_output() {
    assert_eq!(times(1000, add_five, 0), 5000);
    assert_eq!(Config::default().evaluate(), Ok(5000));
}

#[test]
fn test_checked_config_surfaces_core_error() {
    let config = Config::new()
        .with_count(10)
        .with_initial(i64::MAX - 7)
        .with_overflow(OverflowPolicy::Checked);

    let err = config.evaluate().unwrap_err();
    assert_eq!(
        err,
        Error::Overflow {
            iteration: 1,
            value: i64::MAX - 2
        }
    );
}

#[test]
fn test_config_json_roundtrip_keeps_policy() {
    let config = Config::new()
        .with_count(7)
        .with_overflow(OverflowPolicy::Checked);

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"overflow\":\"checked\""));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_bench_report_deserializes() {
    let report = run_call_benchmarks(3, 0, 20);
    let json = serde_json::to_string(&report).unwrap();
    let parsed: BenchReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.results.len(), 3);
    assert!(parsed.results.iter().all(|r| r.value == 100));
    assert_eq!(parsed.warnings.len(), report.warnings.len());
}
