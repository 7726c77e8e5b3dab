//! Single-threaded reductions in one left-to-right pass

use super::operations::{accumulate_all, scan_extremum, Direction, Extremum, Reducer};
use crate::buffer::ReadyBuffer;
use crate::errors::{Result, VectorStatsError};
use crate::scalar::Scalar;

/// Reference execution mode: every statistic is one scan over the whole buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialReducer;

impl SequentialReducer {
    pub fn new() -> Self {
        Self
    }

    fn extremum<T: Scalar>(ready: &ReadyBuffer<'_, T>, direction: Direction) -> Result<Extremum<T>> {
        // Unreachable: a buffer cannot be constructed with zero elements
        scan_extremum(ready.values(), 0, direction)
            .ok_or(VectorStatsError::InvalidSize { requested: 0 })
    }
}

impl<T: Scalar> Reducer<T> for SequentialReducer {
    fn label(&self) -> String {
        "sequential".to_string()
    }

    fn min_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<Extremum<T>> {
        Self::extremum(ready, Direction::Min)
    }

    fn max_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<Extremum<T>> {
        Self::extremum(ready, Direction::Max)
    }

    fn sum_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<T> {
        Ok(accumulate_all(ready.values().iter().copied()))
    }
}
