use argmin::{
    core::{CostFunction, Error, Executor, State},
    solver::brent::BrentRoot,
};
use tracing::{trace, warn};

use crate::error::DosesimError;

/// Upper end of the search bracket for `ka` (1/h). Absorption faster than
/// this is not physiologically meaningful for oral dosing.
const KA_BRACKET_MAX: f64 = 10.0;

/// Offset above the elimination constant for the lower bracket end; the
/// peak-time formula is singular at `ka == ke`.
const KA_BRACKET_EPS: f64 = 1e-6;

/// Interval tolerance handed to the Brent solver.
const KA_TOL: f64 = 1e-8;

/// Residual bound used to confirm convergence of the returned root.
const RESIDUAL_TOL: f64 = 1e-6;

/// Residual of the analytic peak-time relation for a single oral dose
///
/// Under first-order absorption, the peak occurs at
/// `Tmax = (ln(ka) - ln(ke)) / (ka - ke)`. The root of this residual in `ka`
/// reproduces the observed Tmax.
struct PeakTimeResidual {
    ke: f64,
    tmax: f64,
}

impl PeakTimeResidual {
    fn residual(&self, ka: f64) -> f64 {
        if ka <= self.ke {
            return f64::INFINITY;
        }
        (ka.ln() - self.ke.ln()) / (ka - self.ke) - self.tmax
    }
}

impl CostFunction for PeakTimeResidual {
    type Param = f64;
    type Output = f64;

    fn cost(&self, ka: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.residual(*ka))
    }
}

/// Estimate the absorption rate constant from an observed time of peak
///
/// Solves the single-dose peak-time relation for `ka` with Brent's method on
/// the bracket `(ke + 1e-6, 10]`, where `ke = ln(2) / half_life`.
///
/// # Arguments
///
/// * `tmax` - Observed time of peak concentration in hours (must be > 0)
/// * `half_life` - Elimination half-life in hours (must be > 0)
///
/// # Errors
///
/// [DosesimError::RootFindNotConverged] when no `ka` in the bracket satisfies
/// the relation, e.g. a very early Tmax that would require `ka > 10`. No NaN
/// or fallback value is ever returned.
pub fn estimate_ka(tmax: f64, half_life: f64) -> Result<f64, DosesimError> {
    if !tmax.is_finite() || tmax <= 0.0 {
        return Err(DosesimError::InvalidParameter {
            param: "tmax",
            value: tmax,
        });
    }
    if !half_life.is_finite() || half_life <= 0.0 {
        return Err(DosesimError::InvalidParameter {
            param: "half_life",
            value: half_life,
        });
    }

    let ke = std::f64::consts::LN_2 / half_life;
    let lower = ke + KA_BRACKET_EPS;
    if lower >= KA_BRACKET_MAX {
        return Err(DosesimError::RootFindNotConverged {
            reason: format!("elimination constant {ke:.4} leaves no bracket for ka"),
        });
    }

    let problem = PeakTimeResidual { ke, tmax };
    let solver = BrentRoot::new(lower, KA_BRACKET_MAX, KA_TOL);
    let init = (lower + KA_BRACKET_MAX) / 2.0;

    let res = Executor::new(problem, solver)
        .configure(|state| state.param(init).max_iters(100))
        .run()
        .map_err(|e| {
            warn!(tmax, half_life, "ka estimation failed: {e}");
            DosesimError::RootFindNotConverged {
                reason: e.to_string(),
            }
        })?;

    let ka = res
        .state()
        .get_best_param()
        .copied()
        .ok_or_else(|| DosesimError::RootFindNotConverged {
            reason: "solver returned no parameter".to_string(),
        })?;

    // Confirm the root rather than trusting the iteration count alone.
    let check = PeakTimeResidual { ke, tmax };
    let residual = check.residual(ka);
    if !ka.is_finite() || residual.abs() > RESIDUAL_TOL {
        warn!(tmax, half_life, ka, residual, "ka estimate rejected");
        return Err(DosesimError::RootFindNotConverged {
            reason: format!("residual {residual:.2e} exceeds tolerance at ka = {ka:.4}"),
        });
    }

    trace!(tmax, half_life, ka, "estimated absorption rate constant");
    Ok(ka)
}
