//! Wall-clock measurement of reduction calls
//!
//! Timings are a side channel: they are logged, and optionally handed back to
//! callers that want to print them, but they never affect a result.

use log::debug;
use std::time::{Duration, Instant};

/// A value together with how long it took to produce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Measured<T> {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl<T, E> Measured<std::result::Result<T, E>> {
    /// Keep the timing of a successful call, or pass its error through
    pub fn transpose(self) -> std::result::Result<Measured<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Measured { value, elapsed })
    }
}

/// Run `f`, log its elapsed time under `label`, and return both
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> Measured<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    debug!("{label} took {:.6} s", elapsed.as_secs_f64());
    Measured { value, elapsed }
}
