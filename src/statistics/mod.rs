//! Summary statistics over profile samples
//!
//! # Organization
//!
//! - [`operations`]: reductions over the valid samples of a sequence
//! - [`summary`]: per-profile summary rows for a filtered selection

pub mod operations;
pub mod summary;

pub use operations::{SampleReduction, StatOperation};
pub use summary::{pressure_range, summarize, ProfileSummary};
