//! HiGHS backend for the opal modeling layer.
//!
//! [`HighsAdapter`] implements [`opal_core::SolverAdapter`]: it lowers
//! a flat model into a HiGHS problem, runs one blocking solve, and
//! translates the engine's status and solution back into the generic
//! boundary types. All HiGHS-specific encodings stay inside this crate.

pub mod adapter;
mod status;

pub use adapter::HighsAdapter;
