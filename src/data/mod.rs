//! Dose schedule data structures
//!
//! A [Regimen] is an ordered collection of [DoseEvent]s. Order is kept for
//! display only; the superposition math is insensitive to it.

pub mod builder;
pub mod event;

pub use builder::RegimenBuilder;
pub use event::DoseEvent;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DosesimError;

/// An ordered multi-dose schedule
///
/// Regimens are immutable once built; each simulation run takes a regimen by
/// reference and produces a fresh series.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
pub struct Regimen {
    doses: Vec<DoseEvent>,
}

impl Regimen {
    /// Create a regimen from a list of dose events
    ///
    /// Fails with [DosesimError::EmptyRegimen] when `doses` is empty.
    pub fn new(doses: Vec<DoseEvent>) -> Result<Self, DosesimError> {
        if doses.is_empty() {
            return Err(DosesimError::EmptyRegimen);
        }
        Ok(Regimen { doses })
    }

    /// Create a [RegimenBuilder] for fluent construction
    pub fn builder() -> RegimenBuilder {
        RegimenBuilder::new()
    }

    /// Get the dose events in insertion order
    pub fn doses(&self) -> &[DoseEvent] {
        &self.doses
    }

    /// Number of doses in the regimen
    pub fn len(&self) -> usize {
        self.doses.len()
    }

    /// Whether the regimen contains no doses (never true for a built regimen)
    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }

    /// Time of the latest dose in the schedule
    pub fn last_dose_time(&self) -> f64 {
        self.doses
            .iter()
            .map(|d| d.time())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Total amount administered over the whole schedule
    pub fn total_amount(&self) -> f64 {
        self.doses.iter().map(|d| d.amount()).sum()
    }
}

impl fmt::Display for Regimen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Regimen with {} dose(s):", self.doses.len())?;
        for dose in &self.doses {
            writeln!(f, "  {}", dose)?;
        }
        Ok(())
    }
}
