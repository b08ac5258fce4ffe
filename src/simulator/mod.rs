//! One-compartment kinetics engine
//!
//! The engine evaluates closed-form superposition solutions on a uniform time
//! grid. There is no ODE solving and no shared state; every call to
//! [Model::simulate] is an independent, deterministic computation.

pub mod model;
pub mod one_compartment;
pub mod series;

pub use model::{Model, ModelKind};
pub use series::ConcentrationSeries;

use serde::{Deserialize, Serialize};

use crate::error::DosesimError;

/// Uniform time grid specification for a simulation run
///
/// Defines the closed grid `t_i = i * step` for `i = 0..=n`, where `n` is the
/// smallest index such that `n * step` reaches `duration`. The grid always
/// contains 0 and an endpoint at or just past `duration`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SimulationWindow {
    duration: f64,
    step: f64,
}

impl SimulationWindow {
    /// Create a simulation window
    ///
    /// # Arguments
    ///
    /// * `duration` - Length of the simulated period in hours (must be > 0)
    /// * `step` - Grid spacing in hours (must be > 0)
    pub fn new(duration: f64, step: f64) -> Result<Self, DosesimError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(DosesimError::InvalidParameter {
                param: "duration",
                value: duration,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(DosesimError::InvalidParameter {
                param: "step",
                value: step,
            });
        }
        Ok(SimulationWindow { duration, step })
    }

    /// Get the window duration in hours
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Get the grid spacing in hours
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Materialize the time grid
    ///
    /// The fuzz term keeps a duration that divides the step evenly from
    /// gaining a spurious extra point to float rounding.
    pub fn grid(&self) -> Vec<f64> {
        let n = ((self.duration / self.step) - 1e-9).ceil().max(1.0) as usize;
        (0..=n).map(|i| i as f64 * self.step).collect()
    }
}

impl Default for SimulationWindow {
    /// 48 hours at 0.1 hour resolution
    fn default() -> Self {
        SimulationWindow {
            duration: 48.0,
            step: 0.1,
        }
    }
}
