//! Exposure metrics over a simulated profile
//!
//! Peak amount (Cmax), time of peak (Tmax), and area under the curve (AUC)
//! by linear trapezoidal integration.

use serde::{Deserialize, Serialize};

use crate::simulator::ConcentrationSeries;

/// Derived metrics for a concentration-time profile
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SummaryMetrics {
    /// Maximum body amount over the window (mg)
    pub cmax: f64,
    /// Grid time at which the maximum first occurs (h)
    pub tmax: f64,
    /// Area under the curve over the full window (mg * h)
    pub auc: f64,
}

/// Linear trapezoidal AUC for a single segment
///
/// Returns 0.0 for invalid time intervals (t2 <= t1).
#[inline]
pub fn auc_segment(t1: f64, c1: f64, t2: f64, c2: f64) -> f64 {
    let dt = t2 - t1;
    if dt <= 0.0 {
        return 0.0;
    }
    (c1 + c2) / 2.0 * dt
}

/// Linear trapezoidal AUC over a full profile
///
/// # Panics
///
/// Panics if `times` and `amounts` have different lengths.
pub fn auc_trapezoidal(times: &[f64], amounts: &[f64]) -> f64 {
    assert_eq!(
        times.len(),
        amounts.len(),
        "times and amounts must have the same length"
    );

    let mut auc = 0.0;
    for i in 1..times.len() {
        auc += auc_segment(times[i - 1], amounts[i - 1], times[i], amounts[i]);
    }
    auc
}

/// Compute [SummaryMetrics] for a series
///
/// On ties, the earliest peak wins. An empty series yields all-zero metrics.
pub fn summarize(series: &ConcentrationSeries) -> SummaryMetrics {
    let times = series.times();
    let amounts = series.amounts();

    let mut cmax = 0.0;
    let mut tmax = 0.0;
    if let Some(&first) = amounts.first() {
        cmax = first;
        tmax = times[0];
        for (&t, &c) in times.iter().zip(amounts.iter()).skip(1) {
            if c > cmax {
                cmax = c;
                tmax = t;
            }
        }
    }

    SummaryMetrics {
        cmax,
        tmax,
        auc: auc_trapezoidal(times, amounts),
    }
}
