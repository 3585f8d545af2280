#![warn(missing_docs)]
//! Sortbench Logic - Cross-Strategy Verification
//!
//! Strategies cannot be checked against a ground truth without trusting one
//! of them, so verification only asks whether every strategy in a run agrees
//! with the first one that finished. Disagreement is a warning: timings stay
//! valid and the run continues.

mod verification;

pub use verification::{Mismatch, MismatchDetail, VerificationReport, verify};
