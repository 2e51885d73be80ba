use thiserror::Error;

/// Core error type for times operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("overflow at iteration {iteration}: applying the transformation to {value} left the i64 range")]
    Overflow { iteration: u64, value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_names_iteration_and_value() {
        let err = Error::Overflow {
            iteration: 3,
            value: i64::MAX,
        };
        let msg = err.to_string();

        assert!(msg.contains("iteration 3"));
        assert!(msg.contains(&i64::MAX.to_string()));
    }
}
