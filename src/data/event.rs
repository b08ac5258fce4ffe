use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DosesimError;

/// Represents a single administered dose
///
/// A [DoseEvent] is a discrete amount of drug given at a specific time,
/// measured in hours since the start of the simulation window.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
pub struct DoseEvent {
    time: f64,
    amount: f64,
}

impl DoseEvent {
    /// Create a new dose event
    ///
    /// # Arguments
    ///
    /// * `time` - Time of administration in hours since t = 0 (must be >= 0)
    /// * `amount` - Amount of drug administered in mg (must be > 0)
    pub fn new(time: f64, amount: f64) -> Result<Self, DosesimError> {
        if !time.is_finite() || time < 0.0 {
            return Err(DosesimError::InvalidParameter {
                param: "time",
                value: time,
            });
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DosesimError::InvalidParameter {
                param: "amount",
                value: amount,
            });
        }
        Ok(DoseEvent { time, amount })
    }

    /// Get the time of administration
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Get the amount of drug in the dose
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for DoseEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dose at time {:.2} h with amount {:.2} mg",
            self.time, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dose_creation() {
        let dose = DoseEvent::new(2.5, 10.0).unwrap();
        assert_eq!(dose.time(), 2.5);
        assert_eq!(dose.amount(), 10.0);
    }

    #[test]
    fn test_dose_at_time_zero() {
        let dose = DoseEvent::new(0.0, 5.0).unwrap();
        assert_eq!(dose.time(), 0.0);
    }

    #[test]
    fn test_negative_time_rejected() {
        let err = DoseEvent::new(-1.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            DosesimError::InvalidParameter {
                param: "time",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_nonpositive_amount_rejected() {
        assert!(DoseEvent::new(0.0, 0.0).is_err());
        assert!(DoseEvent::new(0.0, -5.0).is_err());
    }

    #[test]
    fn test_nonfinite_values_rejected() {
        assert!(DoseEvent::new(f64::NAN, 10.0).is_err());
        assert!(DoseEvent::new(0.0, f64::INFINITY).is_err());
    }
}
