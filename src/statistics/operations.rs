//! Core statistical operations and traits
//!
//! This module defines the result types, the scan and merge kernels shared by
//! both execution modes, and the [`Reducer`] trait they implement.

use crate::buffer::{NumericBuffer, ReadyBuffer};
use crate::errors::{Result, VectorStatsError};
use crate::scalar::Scalar;
use crate::timing::{measure, Measured};
use ndarray::ArrayView1;
use std::fmt;

/// Supported statistical operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Smallest element and its first index
    Min,
    /// Largest element and its first index
    Max,
    /// Sum of values
    Sum,
    /// Arithmetic mean
    Mean,
}

impl StatOperation {
    pub const ALL: [StatOperation; 4] = [Self::Min, Self::Max, Self::Sum, Self::Mean];

    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "minimum",
            Self::Max => "maximum",
            Self::Sum => "sum",
            Self::Mean => "mean",
        }
    }
}

impl fmt::Display for StatOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extremal value and the index it was found at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<T> {
    pub value: T,
    pub index: usize,
}

/// Result of any [`StatOperation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue<T> {
    Extremum(Extremum<T>),
    Scalar(T),
}

impl<T: fmt::Display> fmt::Display for StatValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Extremum(e) => write!(f, "{} at index {}", e.value, e.index),
            StatValue::Scalar(v) => write!(f, "{}", v),
        }
    }
}

/// Which end of the ordering an extremum search looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Min,
    Max,
}

impl Direction {
    /// Strictly better, so the earlier of two equal values is kept
    #[inline]
    fn better<T: PartialOrd>(self, candidate: &T, current: &T) -> bool {
        match self {
            Direction::Min => candidate < current,
            Direction::Max => candidate > current,
        }
    }
}

/// Left-to-right scan of `values`; reported indices are shifted by `offset`.
///
/// `None` only for an empty view, which neither reducer ever passes.
pub(crate) fn scan_extremum<T: Scalar>(
    values: ArrayView1<'_, T>,
    offset: usize,
    direction: Direction,
) -> Option<Extremum<T>> {
    let mut iter = values.iter().enumerate();
    let (_, &first) = iter.next()?;
    let mut best = Extremum {
        value: first,
        index: offset,
    };

    for (i, &value) in iter {
        if direction.better(&value, &best.value) {
            best = Extremum {
                value,
                index: offset + i,
            };
        }
    }

    Some(best)
}

/// Combine per-partition extrema into the buffer-wide one.
///
/// Ties on value go to the smaller global index, whatever order the
/// partials arrive in.
pub(crate) fn merge_extrema<T: Scalar>(
    partials: impl IntoIterator<Item = Extremum<T>>,
    direction: Direction,
) -> Option<Extremum<T>> {
    partials.into_iter().reduce(|best, candidate| {
        let wins = direction.better(&candidate.value, &best.value)
            || (candidate.value == best.value && candidate.index < best.index);
        if wins {
            candidate
        } else {
            best
        }
    })
}

/// In-order accumulation starting from zero
#[inline]
pub(crate) fn accumulate_all<T: Scalar>(values: impl IntoIterator<Item = T>) -> T {
    values
        .into_iter()
        .fold(T::zero(), |acc, value| acc.accumulate(value))
}

/// A strategy for computing the four reductions over an initialized buffer.
///
/// Implementors supply the kernels over a [`ReadyBuffer`]; the provided methods
/// check the lifecycle flag, time the call, and log the measurement.
pub trait Reducer<T: Scalar> {
    /// Name used in timing output
    fn label(&self) -> String;

    /// First occurrence of the smallest element
    fn min_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<Extremum<T>>;

    /// First occurrence of the largest element
    fn max_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<Extremum<T>>;

    fn sum_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<T>;

    /// Sum divided by the element count
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::ScalarConversion`] if the count does not fit `T`.
    fn mean_of(&self, ready: &ReadyBuffer<'_, T>) -> Result<T> {
        let count = ready.len();
        self.sum_of(ready)?
            .divide_by_count(count)
            .ok_or(VectorStatsError::ScalarConversion { count })
    }

    /// Dispatch `operation` against an already-checked buffer
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected kernel.
    fn reduce_ready(
        &self,
        ready: &ReadyBuffer<'_, T>,
        operation: StatOperation,
    ) -> Result<StatValue<T>> {
        match operation {
            StatOperation::Min => self.min_of(ready).map(StatValue::Extremum),
            StatOperation::Max => self.max_of(ready).map(StatValue::Extremum),
            StatOperation::Sum => self.sum_of(ready).map(StatValue::Scalar),
            StatOperation::Mean => self.mean_of(ready).map(StatValue::Scalar),
        }
    }

    /// # Errors
    ///
    /// Returns [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized.
    fn find_min(&self, buffer: &NumericBuffer<T>) -> Result<Extremum<T>> {
        let ready = buffer.ready()?;
        timed(&self.label(), StatOperation::Min, || self.min_of(&ready))
    }

    /// # Errors
    ///
    /// Returns [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized.
    fn find_max(&self, buffer: &NumericBuffer<T>) -> Result<Extremum<T>> {
        let ready = buffer.ready()?;
        timed(&self.label(), StatOperation::Max, || self.max_of(&ready))
    }

    /// # Errors
    ///
    /// Returns [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized.
    fn sum(&self, buffer: &NumericBuffer<T>) -> Result<T> {
        let ready = buffer.ready()?;
        timed(&self.label(), StatOperation::Sum, || self.sum_of(&ready))
    }

    /// # Errors
    ///
    /// Returns [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized,
    /// or [`VectorStatsError::ScalarConversion`] if the length does not fit `T`.
    fn mean(&self, buffer: &NumericBuffer<T>) -> Result<T> {
        let ready = buffer.ready()?;
        timed(&self.label(), StatOperation::Mean, || self.mean_of(&ready))
    }

    /// Run any [`StatOperation`]
    ///
    /// # Errors
    ///
    /// Same as the corresponding `find_min`/`find_max`/`sum`/`mean` method.
    fn reduce(&self, buffer: &NumericBuffer<T>, operation: StatOperation) -> Result<StatValue<T>> {
        Ok(measure_reduction(self, buffer, operation)?.value)
    }
}

fn timed<V>(label: &str, operation: StatOperation, f: impl FnOnce() -> Result<V>) -> Result<V> {
    measure(&format!("{label} {operation}"), f).value
}

/// Run `operation` and hand back its wall-clock time along with the result
///
/// # Errors
///
/// Same as [`Reducer::reduce`].
pub fn measure_reduction<T, R>(
    reducer: &R,
    buffer: &NumericBuffer<T>,
    operation: StatOperation,
) -> Result<Measured<StatValue<T>>>
where
    T: Scalar,
    R: Reducer<T> + ?Sized,
{
    let ready = buffer.ready()?;
    measure(&format!("{} {operation}", reducer.label()), || {
        reducer.reduce_ready(&ready, operation)
    })
    .transpose()
}
