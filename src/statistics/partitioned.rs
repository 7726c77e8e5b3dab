//! Parallel computation implementations for statistical operations
//!
//! The buffer is cut into contiguous ranges (see [`partition`]) and each range
//! becomes one task on the reducer's rayon pool. A task sees only a view of its
//! own range and returns its partial result by value; `collect` keeps the
//! partials in partition order and only returns once every task has finished,
//! so the merge never observes an unfinished worker.

use super::operations::{accumulate_all, merge_extrema, scan_extremum, Direction, Extremum, Reducer};
use crate::buffer::ReadyBuffer;
use crate::errors::{Result, VectorStatsError};
use crate::parallel::ParallelConfig;
use crate::partition::partition;
use crate::scalar::Scalar;
use log::debug;
use ndarray::{s, ArrayView1};
use rayon::prelude::*;
use rayon::ThreadPool;

/// Thread-partitioned execution mode
#[derive(Debug)]
pub struct PartitionedReducer {
    workers: usize,
    pool: ThreadPool,
}

impl PartitionedReducer {
    /// Create a reducer that splits buffers into `workers` partitions
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::InvalidWorkerCount`] if `workers` is zero, or
    /// [`VectorStatsError::ThreadPoolError`] if the pool cannot be built.
    pub fn new(workers: usize) -> Result<Self> {
        Self::with_config(&ParallelConfig::with_workers(workers))
    }

    /// Create a reducer from a [`ParallelConfig`]
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_config(config: &ParallelConfig) -> Result<Self> {
        let workers = config.resolved_workers()?;
        let pool = config.build_pool(workers)?;
        Ok(Self { workers, pool })
    }

    /// Requested worker count (before clamping to the buffer length)
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// OS threads backing the workers
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `work` once per partition and collect the partials in partition order.
    ///
    /// `work` receives the partition's view and the global index of its first element.
    fn dispatch<T, P, F>(&self, values: ArrayView1<'_, T>, work: F) -> Result<Vec<P>>
    where
        T: Scalar,
        P: Send,
        F: Fn(ArrayView1<'_, T>, usize) -> P + Sync,
    {
        let ranges = partition(values.len(), self.workers)?;
        debug!("dispatching {} partitions over {} elements", ranges.len(), values.len());

        let partials: Vec<P> = self.pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| work(values.slice(s![range.start..range.end]), range.start))
                .collect()
        });
        Ok(partials)
    }

    fn extremum<T: Scalar>(&self, ready: &ReadyBuffer<'_, T>, direction: Direction) -> Result<Extremum<T>> {
        let partials = self.dispatch(ready.values(), |view, offset| {
            scan_extremum(view, offset, direction)
        })?;

        // Unreachable: partitions are non-empty and there is at least one
        merge_extrema(partials.into_iter().flatten(), direction)
            .ok_or(VectorStatsError::InvalidSize { requested: 0 })
    }
}

impl<T: Scalar> Reducer<T> for PartitionedReducer {
    fn label(&self) -> String {
        format!("partitioned({})", self.workers)
    }

    fn min_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<Extremum<T>> {
        self.extremum(ready, Direction::Min)
    }

    fn max_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<Extremum<T>> {
        self.extremum(ready, Direction::Max)
    }

    fn sum_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<T> {
        let partials = self.dispatch(ready.values(), |view, _| accumulate_all(view.iter().copied()))?;
        Ok(accumulate_all(partials))
    }
}
