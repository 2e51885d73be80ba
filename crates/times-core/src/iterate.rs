//! Iterated application of a one-argument integer transformation.
//!
//! `times(n, f, x)` computes `f^n(x)`: the accumulator starts at `x` and each
//! iteration feeds the previous output back into `f`. The loop itself does no
//! arithmetic on the accumulator, so overflow behaviour belongs to `f`.
//! [`add_five`] wraps; [`checked_add_five`] pairs with [`try_times`] for a
//! checked run.

use crate::error::Error;

/// Apply `f` to `x` exactly `n` times, in sequence.
///
/// `times(0, f, x) == x`. Accepts any `Fn(i64) -> i64`, so function items,
/// `fn` pointers, closures and `&dyn Fn` all work.
#[inline]
#[must_use]
pub fn times<F>(n: u64, f: F, x: i64) -> i64
where
    F: Fn(i64) -> i64,
{
    let mut val = x;
    for _ in 0..n {
        val = f(val);
    }
    val
}

/// Checked variant of [`times`].
///
/// Stops at the first application that returns `None` and reports the
/// 0-based iteration index together with the accumulator that was fed in.
///
/// # Errors
/// Returns [`Error::Overflow`] when `f` yields `None`.
pub fn try_times<F>(n: u64, f: F, x: i64) -> Result<i64, Error>
where
    F: Fn(i64) -> Option<i64>,
{
    let mut val = x;
    for iteration in 0..n {
        val = f(val).ok_or(Error::Overflow {
            iteration,
            value: val,
        })?;
    }
    Ok(val)
}

/// Sample transformation: `x + 5`, wrapping on overflow.
#[inline]
#[must_use]
pub fn add_five(x: i64) -> i64 {
    x.wrapping_add(5)
}

/// `x + 5`, or `None` on overflow.
#[inline]
#[must_use]
pub fn checked_add_five(x: i64) -> Option<i64> {
    x.checked_add(5)
}
