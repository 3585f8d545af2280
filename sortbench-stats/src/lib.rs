#![warn(missing_docs)]
//! Sortbench Statistics
//!
//! Numeric summaries over elapsed times:
//! - Percentiles by linear interpolation between nearest ranks
//! - Arithmetic mean
//!
//! Empty input has no summary. Every entry point returns `None` for it
//! instead of inventing a zero.

mod percentiles;
mod summary;

pub use percentiles::{compute_percentile, median};
pub use summary::mean;
