//! Statistical reductions over a [`NumericBuffer`](crate::buffer::NumericBuffer)
//!
//! Both execution modes compute the same four statistics (min, max, sum, mean)
//! and agree on the result: extrema exactly, including the chosen index, and
//! sums up to floating-point reassociation.
//!
//! # Organization
//!
//! - [`operations`]: Result types, shared scan/merge kernels, and the [`Reducer`] trait
//! - [`sequential`]: Single-pass, single-threaded implementation
//! - [`partitioned`]: Range-partitioned implementation on a rayon pool

pub mod operations;
pub mod partitioned;
pub mod sequential;

// Re-export the main types and functions for convenience
pub use operations::{measure_reduction, Extremum, Reducer, StatOperation, StatValue};
pub use partitioned::PartitionedReducer;
pub use sequential::SequentialReducer;
