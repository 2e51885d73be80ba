use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::io::{self, Write};
use times_core::Config;
use tracing::debug;

/// JSON shape of `times run --json`.
#[derive(Debug, Serialize)]
struct RunOutput {
    count: u64,
    initial: i64,
    overflow: &'static str,
    value: i64,
}

/// Evaluate the driver and print the result.
///
/// Plain output is the bare decimal value and a newline.
pub fn run(config: &Config, json: bool) -> Result<()> {
    debug!(
        count = config.count,
        initial = config.initial,
        overflow = config.overflow.as_str(),
        "evaluating"
    );

    let value = config.evaluate().into_diagnostic()?;
    debug!(value, "evaluated");

    let mut out = io::stdout().lock();
    if json {
        let output = RunOutput {
            count: config.count,
            initial: config.initial,
            overflow: config.overflow.as_str(),
            value,
        };
        let json = serde_json::to_string(&output).into_diagnostic()?;
        writeln!(out, "{json}").into_diagnostic()?;
    } else {
        writeln!(out, "{value}").into_diagnostic()?;
    }

    out.flush().into_diagnostic()?;
    Ok(())
}
