use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data::Regimen;
use crate::error::DosesimError;
use crate::simulator::{one_compartment, ConcentrationSeries, SimulationWindow};

/// Relative tolerance at which `ka` is considered equal to the elimination
/// constant, which would make the two-exponential form singular.
const KA_KE_REL_TOL: f64 = 1e-10;

/// Which closed-form solution drives the simulation
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum ModelKind {
    /// Instantaneous input: each dose appears in the body at its full amount
    Bolus,
    /// First-order oral absorption with rate constant `ka` (1/h)
    FirstOrderAbsorption { ka: f64 },
}

/// A one-compartment kinetic model
///
/// Carries the half-life and the model variant. Both constructors validate
/// their parameters, so a built model always simulates to finite values.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Model {
    half_life: f64,
    kind: ModelKind,
}

impl Model {
    /// Create a bolus (instantaneous-input) model
    ///
    /// # Arguments
    ///
    /// * `half_life` - Elimination half-life in hours (must be > 0)
    pub fn bolus(half_life: f64) -> Result<Self, DosesimError> {
        validate_half_life(half_life)?;
        Ok(Model {
            half_life,
            kind: ModelKind::Bolus,
        })
    }

    /// Create a first-order absorption model
    ///
    /// # Arguments
    ///
    /// * `half_life` - Elimination half-life in hours (must be > 0)
    /// * `ka` - Absorption rate constant in 1/h (must be > 0 and differ from
    ///   the elimination constant `ln(2) / half_life`)
    pub fn with_absorption(half_life: f64, ka: f64) -> Result<Self, DosesimError> {
        validate_half_life(half_life)?;
        if !ka.is_finite() || ka <= 0.0 {
            return Err(DosesimError::InvalidParameter {
                param: "ka",
                value: ka,
            });
        }
        let ke = std::f64::consts::LN_2 / half_life;
        if (ka - ke).abs() <= KA_KE_REL_TOL * ke.max(ka) {
            return Err(DosesimError::InvalidParameter {
                param: "ka",
                value: ka,
            });
        }
        Ok(Model {
            half_life,
            kind: ModelKind::FirstOrderAbsorption { ka },
        })
    }

    /// Get the elimination half-life in hours
    pub fn half_life(&self) -> f64 {
        self.half_life
    }

    /// Get the model variant
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// First-order elimination rate constant `ln(2) / half_life`
    pub fn elimination_rate(&self) -> f64 {
        std::f64::consts::LN_2 / self.half_life
    }

    /// Simulate the body amount over the window grid
    ///
    /// Evaluates the model's closed-form solution for every dose at every grid
    /// point and sums the contributions (superposition). The computation is
    /// O(doses x grid points) and allocates only the output series.
    pub fn simulate(&self, regimen: &Regimen, window: &SimulationWindow) -> ConcentrationSeries {
        let ke = self.elimination_rate();
        let times = window.grid();
        let amounts: Vec<f64> = times
            .iter()
            .map(|&t| {
                regimen
                    .doses()
                    .iter()
                    .map(|dose| match self.kind {
                        ModelKind::Bolus => {
                            one_compartment::bolus(dose.amount(), ke, t, dose.time())
                        }
                        ModelKind::FirstOrderAbsorption { ka } => one_compartment::with_absorption(
                            dose.amount(),
                            ka,
                            ke,
                            t,
                            dose.time(),
                        ),
                    })
                    .sum()
            })
            .collect();

        trace!(
            doses = regimen.len(),
            points = times.len(),
            "simulated one-compartment profile"
        );

        ConcentrationSeries::new(times, amounts)
    }
}

fn validate_half_life(half_life: f64) -> Result<(), DosesimError> {
    if !half_life.is_finite() || half_life <= 0.0 {
        return Err(DosesimError::InvalidParameter {
            param: "half_life",
            value: half_life,
        });
    }
    Ok(())
}
