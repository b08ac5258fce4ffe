//! Closed-form per-dose solutions for the one-compartment model
//!
//! Each function returns the contribution of a single dose to the body amount
//! at time `t`. Contributions are exactly zero before the dose's own time;
//! totals over a schedule follow by superposition.

/// Body amount contributed by a bolus dose under first-order elimination
///
/// `amount * exp(-ke * (t - dose_time))` for `t >= dose_time`, else 0.
/// At `t == dose_time` this is exactly `amount`.
#[inline]
pub fn bolus(amount: f64, ke: f64, t: f64, dose_time: f64) -> f64 {
    if t < dose_time {
        return 0.0;
    }
    amount * (-ke * (t - dose_time)).exp()
}

/// Body amount contributed by an oral dose with first-order absorption
///
/// `amount * ka / (ka - ke) * (exp(-ke * dt) - exp(-ka * dt))` with
/// `dt = t - dose_time`, for `t >= dose_time`, else 0. Callers must ensure
/// `ka != ke`; [crate::Model] enforces this at construction.
#[inline]
pub fn with_absorption(amount: f64, ka: f64, ke: f64, t: f64, dose_time: f64) -> f64 {
    if t < dose_time {
        return 0.0;
    }
    let dt = t - dose_time;
    amount * ka / (ka - ke) * ((-ke * dt).exp() - (-ka * dt).exp())
}
