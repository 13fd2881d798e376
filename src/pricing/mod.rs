//! Fare quoting.
//!
//! Both entry points are pure: no I/O, no logging, no shared state. Every
//! numeric input passes through the coercions below before it is used, so
//! malformed values degrade to a zero contribution instead of an error.
//!
//! The two entry points intentionally disagree:
//!
//! * [`calc_quote_cents`] honors vehicle rate overrides and the vehicle's
//!   minimum hours, and charges the base fee on point-to-point trips.
//! * [`quote_service_type`] works on service rates alone, never charges the
//!   base fee on point-to-point trips, and bills fractional hours as-is.
//!
//! Callers choose one deliberately; they are not interchangeable.

mod breakdown;
mod calculator;

pub use breakdown::{quote_service_type, Breakdown, BreakdownInput, BreakdownQuote};
pub use calculator::{calc_quote_cents, effective_rates, EffectiveRates, QuoteInput, QuoteResult};

/// Coerces to a finite, non-negative real. Missing, NaN, infinite and
/// negative values all become zero.
pub fn safe_number(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Clamps an integer cents amount at zero.
pub fn safe_cents(value: i64) -> u64 {
    value.max(0) as u64
}

/// Safe number truncated to whole hours.
pub fn whole_hours(value: Option<f64>) -> u64 {
    safe_number(value).floor() as u64
}

/// Rounds one non-negative term to the nearest cent. Casts saturate, so an
/// overflowing product settles at `u64::MAX` rather than wrapping.
fn round_cents(value: f64) -> u64 {
    value.round() as u64
}

/// `quantity * rate`, rounded on its own before it is summed with other terms.
fn term_cents(quantity: f64, rate: u64) -> u64 {
    round_cents(quantity * rate as f64)
}
