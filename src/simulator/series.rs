use serde::{Deserialize, Serialize};

use crate::summary::{self, SummaryMetrics};

/// A simulated amount-vs-time profile over a uniform grid
///
/// Times and amounts are parallel vectors of equal length. The series is
/// immutable after creation.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
pub struct ConcentrationSeries {
    times: Vec<f64>,
    amounts: Vec<f64>,
}

impl ConcentrationSeries {
    pub(crate) fn new(times: Vec<f64>, amounts: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), amounts.len());
        ConcentrationSeries { times, amounts }
    }

    /// Grid times in hours
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Body amounts in mg, one per grid point
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over `(time, amount)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.amounts.iter().copied())
    }

    /// Derive peak and exposure metrics for this series
    pub fn summary(&self) -> SummaryMetrics {
        summary::summarize(self)
    }
}
