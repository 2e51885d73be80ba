use crate::error::Error;
use crate::iterate::{add_five, checked_add_five, times, try_times};
use serde::{Deserialize, Serialize};

/// Iteration count used by the default driver.
pub const DEFAULT_COUNT: u64 = 1000;

/// Initial accumulator used by the default driver.
pub const DEFAULT_INITIAL: i64 = 0;

/// Runtime configuration for the times CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of applications of the sample transformation.
    pub count: u64,

    /// Initial accumulator value.
    pub initial: i64,

    /// What happens when the accumulator leaves the i64 range.
    pub overflow: OverflowPolicy,

    /// Whether to emit JSON logs.
    pub json_logs: bool,

    /// Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE).
    pub verbosity: u8,
}

/// Integer overflow policy for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, never reported.
    #[default]
    Wrapping,
    /// Stop and report the failing iteration.
    Checked,
}

impl OverflowPolicy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrapping => "wrapping",
            Self::Checked => "checked",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            initial: DEFAULT_INITIAL,
            overflow: OverflowPolicy::default(),
            json_logs: false,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Create a config that reproduces the default driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set iteration count.
    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Set initial accumulator.
    #[must_use]
    pub fn with_initial(mut self, initial: i64) -> Self {
        self.initial = initial;
        self
    }

    /// Set overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON log output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Apply the sample transformation `count` times starting from `initial`.
    ///
    /// Only [`OverflowPolicy::Checked`] can fail.
    pub fn evaluate(&self) -> Result<i64, Error> {
        match self.overflow {
            OverflowPolicy::Wrapping => Ok(times(self.count, add_five, self.initial)),
            OverflowPolicy::Checked => try_times(self.count, checked_add_five, self.initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_reproduces_driver() {
        assert_eq!(Config::default().evaluate(), Ok(5000));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new().with_count(1000).with_initial(-5000);
        assert_eq!(config.evaluate(), Ok(0));
    }

    #[test]
    fn test_wrapping_policy_never_fails() {
        let config = Config::new().with_count(1).with_initial(i64::MAX);
        assert_eq!(config.evaluate(), Ok(i64::MIN + 4));
    }

    #[test]
    fn test_checked_policy_reports_overflow() {
        let config = Config::new()
            .with_count(1)
            .with_initial(i64::MAX)
            .with_overflow(OverflowPolicy::Checked);

        assert_eq!(
            config.evaluate(),
            Err(Error::Overflow {
                iteration: 0,
                value: i64::MAX
            })
        );
    }

    #[test]
    fn test_overflow_policy_serializes_lowercase() {
        let json = serde_json::to_string(&OverflowPolicy::Checked).unwrap();
        assert_eq!(json, "\"checked\"");
        assert_eq!(OverflowPolicy::Wrapping.as_str(), "wrapping");
    }
}
