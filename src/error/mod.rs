use thiserror::Error;

/// Errors produced by the kinetics engine
///
/// All errors are synchronous and local to the failing call; a failed
/// simulation or estimate never poisons later runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DosesimError {
    /// A kinetic parameter, dose, or window value failed validation
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: &'static str, value: f64 },

    /// A regimen must contain at least one dose
    #[error("Regimen contains no doses")]
    EmptyRegimen,

    /// The Tmax -> ka root-finder failed to bracket or converge
    #[error("Absorption rate estimation did not converge: {reason}")]
    RootFindNotConverged { reason: String },
}
