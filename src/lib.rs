//! dosesim: one-compartment multi-dose pharmacokinetic simulation
//!
//! Computes the time-course of drug amount in the body for a user-specified
//! dose schedule under a one-compartment model, using closed-form
//! superposition over a uniform time grid. Two model variants are supported:
//! instantaneous input ([bolus](ModelKind::Bolus)) and first-order oral
//! absorption ([FirstOrderAbsorption](ModelKind::FirstOrderAbsorption)).
//!
//! The crate is a pure computational library: no I/O, no shared state, no
//! concurrency. A presentation layer (web form, CLI, batch script) constructs
//! the inputs and consumes the resulting series and metrics.
//!
//! # Example
//!
//! ```
//! use dosesim::prelude::*;
//!
//! let regimen = Regimen::builder()
//!     .dose(0.0, 10.0)
//!     .dose(12.0, 10.0)
//!     .build()
//!     .unwrap();
//!
//! let model = Model::with_absorption(3.0, 1.5).unwrap();
//! let window = SimulationWindow::default();
//!
//! let series = model.simulate(&regimen, &window);
//! let metrics = series.summary();
//! assert!(metrics.cmax > 0.0);
//! ```

pub mod data;
pub mod error;
pub mod optimize;
pub mod simulator;
pub mod summary;

pub use crate::data::{DoseEvent, Regimen, RegimenBuilder};
pub use crate::optimize::estimate_ka;
pub use crate::simulator::{ConcentrationSeries, Model, ModelKind, SimulationWindow};
pub use crate::summary::SummaryMetrics;
pub use error::DosesimError;

pub mod prelude {
    pub use crate::data::{DoseEvent, Regimen, RegimenBuilder};
    pub use crate::error::DosesimError;
    pub use crate::optimize::estimate_ka;
    pub use crate::simulator::{ConcentrationSeries, Model, ModelKind, SimulationWindow};
    pub use crate::summary::SummaryMetrics;
}
