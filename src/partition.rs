//! Splitting `[0, n)` into contiguous worker ranges
//!
//! Every range is `n / w` long, with the final range also taking the
//! `n % w` leftover elements. The worker count is clamped to `n` first, so
//! no range is ever empty and no worker indexes past the end of the buffer.

use crate::errors::{Result, VectorStatsError};
use log::warn;
use std::ops::Range;

/// Half-open index ranges covering `[0, len)` exactly once, in increasing order.
///
/// Returns `min(workers, len)` ranges, and none at all for an empty input.
///
/// # Errors
///
/// Returns [`VectorStatsError::InvalidWorkerCount`] if `workers` is zero.
pub fn partition(len: usize, workers: usize) -> Result<Vec<Range<usize>>> {
    if workers == 0 {
        return Err(VectorStatsError::InvalidWorkerCount { requested: workers });
    }
    if len == 0 {
        return Ok(Vec::new());
    }

    let effective = effective_workers(len, workers);
    if effective < workers {
        warn!("clamping {workers} workers to {effective} for {len} elements");
    }

    let chunk = len / effective;
    let ranges = (0..effective)
        .map(|i| {
            let start = i * chunk;
            let end = if i == effective - 1 { len } else { start + chunk };
            start..end
        })
        .collect();

    Ok(ranges)
}

/// Number of partitions actually dispatched for `len` elements
#[inline]
pub fn effective_workers(len: usize, workers: usize) -> usize {
    workers.min(len)
}
