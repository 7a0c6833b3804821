//! Secret selection and guess suggestion
//!
//! A dictionary-backed stand-in for the external solver that consumes the constraint payload.

mod local;

pub use local::LocalSolver;
