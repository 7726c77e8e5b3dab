//! Parallel processing configuration and management
//!
//! This module resolves how many workers a partitioned reduction splits its
//! buffer into, and how many rayon threads back those workers.

use crate::errors::{Result, VectorStatsError};
use log::info;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Configuration for parallel processing
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
    /// Requested worker count; `None` means one worker per CPU core
    pub num_workers: Option<usize>,
}

impl ParallelConfig {
    /// Create a new parallel configuration
    pub fn new(num_workers: Option<usize>) -> Self {
        Self { num_workers }
    }

    /// Create a configuration that uses all available CPU cores
    pub fn all_cores() -> Self {
        Self {
            num_workers: Some(num_cpus::get()),
        }
    }

    /// Create a configuration that uses a specific number of workers
    pub fn with_workers(num_workers: usize) -> Self {
        Self {
            num_workers: Some(num_workers),
        }
    }

    /// Worker count to partition into
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::InvalidWorkerCount`] for an explicit count of zero.
    pub fn resolved_workers(&self) -> Result<usize> {
        match self.num_workers {
            Some(0) => Err(VectorStatsError::InvalidWorkerCount { requested: 0 }),
            Some(n) => Ok(n),
            None => Ok(num_cpus::get()),
        }
    }

    /// Build a dedicated thread pool for `workers` partitions.
    ///
    /// The pool never has more threads than there are CPU cores; extra partitions
    /// queue as tasks on the same threads.
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::ThreadPoolError`] if the pool cannot be created.
    pub fn build_pool(&self, workers: usize) -> Result<ThreadPool> {
        let threads = pool_threads(workers);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("vector-stats-{i}"))
            .build()
            .map_err(|e| {
                VectorStatsError::ThreadPoolError(format!(
                    "Failed to initialize thread pool with {} threads: {}",
                    threads, e
                ))
            })?;

        info!("configured partitioned reducer: {workers} workers on {threads} threads");
        Ok(pool)
    }
}

fn pool_threads(workers: usize) -> usize {
    workers.clamp(1, num_cpus::get().max(1))
}

/// Get information about the current parallel configuration
pub fn get_parallel_info() -> ParallelInfo {
    ParallelInfo {
        current_threads: rayon::current_num_threads(),
        available_cores: num_cpus::get(),
        available_parallelism: std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1),
    }
}

/// Information about the parallel processing environment
#[derive(Debug, Clone)]
pub struct ParallelInfo {
    /// Threads in rayon's global pool. Each `PartitionedReducer` runs on its own
    /// pool instead; see `PartitionedReducer::threads`.
    pub current_threads: usize,
    pub available_cores: usize,
    pub available_parallelism: usize,
}

impl ParallelInfo {
    /// Log parallel processing information
    pub fn log_info(&self) {
        info!(
            "parallel environment: {} global rayon threads, {} CPU cores, {} available parallelism",
            self.current_threads, self.available_cores, self.available_parallelism
        );
    }
}
