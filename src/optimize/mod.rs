//! Numerical estimation routines

pub mod ka;

pub use ka::estimate_ka;
