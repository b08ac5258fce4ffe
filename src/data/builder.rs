use crate::data::{DoseEvent, Regimen};
use crate::error::DosesimError;

/// Fluent builder for [Regimen]
///
/// ```
/// use dosesim::Regimen;
///
/// let regimen = Regimen::builder()
///     .dose(0.0, 10.0)
///     .dose(4.0, 5.0)
///     .repeat(2, 4.0)
///     .build()
///     .unwrap();
/// assert_eq!(regimen.len(), 4);
/// ```
pub struct RegimenBuilder {
    doses: Vec<DoseEvent>,
    error: Option<DosesimError>,
}

impl RegimenBuilder {
    pub(crate) fn new() -> Self {
        RegimenBuilder {
            doses: Vec::new(),
            error: None,
        }
    }

    /// Add a dose at `time` hours with `amount` mg
    ///
    /// Invalid values are remembered and reported by [build](Self::build).
    pub fn dose(mut self, time: f64, amount: f64) -> Self {
        match DoseEvent::new(time, amount) {
            Ok(dose) => self.doses.push(dose),
            Err(e) => self.error = self.error.or(Some(e)),
        }
        self
    }

    /// Repeat the last dose `n` more times, spaced `delta` hours apart
    pub fn repeat(mut self, n: usize, delta: f64) -> Self {
        let last = match self.doses.last() {
            Some(dose) => dose.clone(),
            None => {
                self.error = self
                    .error
                    .or(Some(DosesimError::EmptyRegimen));
                return self;
            }
        };
        for i in 1..=n {
            self = self.dose(last.time() + delta * i as f64, last.amount());
        }
        self
    }

    /// Finish building, surfacing the first validation error if any
    pub fn build(self) -> Result<Regimen, DosesimError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Regimen::new(self.doses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let regimen = Regimen::builder()
            .dose(0.0, 10.0)
            .dose(12.0, 10.0)
            .build()
            .unwrap();
        assert_eq!(regimen.len(), 2);
    }

    #[test]
    fn test_builder_repeat() {
        let regimen = Regimen::builder()
            .dose(12.0, 5.0)
            .repeat(3, 4.0)
            .build()
            .unwrap();
        assert_eq!(regimen.len(), 4);
        assert_eq!(regimen.doses()[3].time(), 24.0);
        assert_eq!(regimen.doses()[3].amount(), 5.0);
    }

    #[test]
    fn test_builder_surfaces_first_error() {
        let err = Regimen::builder()
            .dose(-1.0, 10.0)
            .dose(0.0, 10.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DosesimError::InvalidParameter {
                param: "time",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_builder_empty() {
        assert_eq!(
            Regimen::builder().build().unwrap_err(),
            DosesimError::EmptyRegimen
        );
    }

    #[test]
    fn test_repeat_without_dose() {
        assert!(Regimen::builder().repeat(2, 4.0).build().is_err());
    }
}
