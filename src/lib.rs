//! vector_stats: sequential and thread-partitioned reductions over a numeric buffer
//!
//! A fixed-length [`NumericBuffer`] is filled once (constant, uniform random, or
//! imported from text) and then queried for its minimum, maximum, sum, and mean.
//! Every query can run in two execution modes that are guaranteed to agree:
//!
//! - [`SequentialReducer`]: one left-to-right pass on the calling thread
//! - [`PartitionedReducer`]: contiguous ranges scanned in parallel on a rayon pool,
//!   with partial results merged so that ties resolve to the first index exactly
//!   like the sequential scan
//!
//! ## Module Organization
//!
//! - [`buffer`]: The buffer, its lifecycle gate, and text import/export
//! - [`statistics`]: Result types, the [`Reducer`] trait, and both reducers
//! - [`partition`]: Splitting `[0, n)` into worker ranges
//! - [`parallel`]: Worker count and thread pool configuration
//! - [`timing`]: Wall-clock measurement of reduction calls
//! - [`scalar`]: Element types a buffer can hold
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vector_stats::prelude::*;
//!
//! let buffer = NumericBuffer::<f64>::new(1_000_000).unwrap();
//! buffer.fill_random(0.0, 5.0).unwrap();
//!
//! let sequential = SequentialReducer::new();
//! let partitioned = PartitionedReducer::new(8).unwrap();
//!
//! assert_eq!(
//!     sequential.find_min(&buffer).unwrap(),
//!     partitioned.find_min(&buffer).unwrap()
//! );
//! ```

// Core modules
pub mod buffer;
pub mod errors;
pub mod parallel;
pub mod partition;
pub mod scalar;
pub mod statistics;
pub mod timing;

// Direct re-exports for the public API
pub use buffer::*;
pub use errors::*;
pub use parallel::*;
pub use partition::*;
pub use scalar::*;
pub use statistics::*;
pub use timing::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::buffer::NumericBuffer;
    pub use crate::errors::{Result, VectorStatsError};
    pub use crate::parallel::ParallelConfig;
    pub use crate::statistics::{
        Extremum, PartitionedReducer, Reducer, SequentialReducer, StatOperation, StatValue,
    };
}
