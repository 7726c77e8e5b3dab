//! Fixed-length numeric buffer with a guarded initialization lifecycle
//!
//! A [`NumericBuffer`] starts out uninitialized and becomes readable exactly once,
//! through a constant fill, a random fill, or a successful import. Reads go through
//! a [`ReadyBuffer`], which can only be obtained after that transition and which
//! holds a shared lock for as long as it lives. Mutations take the exclusive lock.

use crate::errors::{Result, VectorStatsError};
use crate::scalar::Scalar;
use log::{debug, info};
use ndarray::{Array1, ArrayView1};
use parking_lot::{RwLock, RwLockReadGuard};
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
struct State<T> {
    data: Array1<T>,
    initialized: bool,
}

/// Owned, fixed-length sequence of scalars
#[derive(Debug)]
pub struct NumericBuffer<T: Scalar> {
    len: usize,
    state: RwLock<State<T>>,
}

/// Read access to an initialized buffer.
///
/// Holds the buffer's shared lock, so no fill or import can run while it is alive.
pub struct ReadyBuffer<'a, T: Scalar> {
    guard: RwLockReadGuard<'a, State<T>>,
}

impl<'a, T: Scalar> ReadyBuffer<'a, T> {
    /// View over all elements in index order
    pub fn values(&self) -> ArrayView1<'_, T> {
        self.guard.data.view()
    }

    pub fn len(&self) -> usize {
        self.guard.data.len()
    }

    /// Always false: buffers have at least one element
    pub fn is_empty(&self) -> bool {
        self.guard.data.is_empty()
    }
}

impl<T: Scalar> NumericBuffer<T> {
    /// Allocate an uninitialized buffer of `len` elements
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::InvalidSize`] if `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(VectorStatsError::InvalidSize { requested: len });
        }

        debug!("allocating buffer of {len} elements");
        Ok(Self {
            len,
            state: RwLock::new(State {
                data: Array1::from_elem(len, T::zero()),
                initialized: false,
            }),
        })
    }

    /// Number of elements, fixed at construction
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a zero-length buffer cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    /// Shared read access, available only once the buffer is initialized
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::UninitializedAccess`] before the first successful
    /// fill or import.
    ///
    /// # Deadlocks
    ///
    /// The returned guard holds the buffer's shared lock. Calling any `fill_*` or
    /// `import_*` method on the same thread while it is alive will deadlock.
    pub fn ready(&self) -> Result<ReadyBuffer<'_, T>> {
        let guard = self.state.read();
        if !guard.initialized {
            return Err(VectorStatsError::UninitializedAccess);
        }
        Ok(ReadyBuffer { guard })
    }

    /// Copy of the current contents
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        Ok(self.ready()?.values().to_vec())
    }

    /// Overwrite every element with `value` and mark the buffer initialized
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::NotANumber`] if `value` is NaN; the buffer is left untouched.
    pub fn fill_constant(&self, value: T) -> Result<()> {
        if value.is_nan() {
            return Err(VectorStatsError::NotANumber { index: 0 });
        }

        let mut state = self.state.write();
        state.data.fill(value);
        state.initialized = true;
        info!("filled {} elements with constant {}", self.len, value);
        Ok(())
    }

    /// Overwrite every element with an independent uniform draw from `[min, max]`
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::InvalidRange`] if `min > max` or a float bound is not finite.
    pub fn fill_random(&self, min: T, max: T) -> Result<()> {
        self.fill_random_with(min, max, &mut rand::rng())
    }

    /// Same as [`fill_random`](Self::fill_random), drawing from a caller-supplied generator
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::InvalidRange`] if `min > max` or a float bound is not finite.
    pub fn fill_random_with<R: Rng + ?Sized>(&self, min: T, max: T, rng: &mut R) -> Result<()> {
        let dist = Uniform::new_inclusive(min, max).map_err(|_| VectorStatsError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        })?;

        let mut state = self.state.write();
        state.data.iter_mut().for_each(|x| *x = dist.sample(rng));
        state.initialized = true;
        info!("filled {} elements uniformly from [{}, {}]", self.len, min, max);
        Ok(())
    }

    /// Read `len` whitespace-separated values from the file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`VectorStatsError::SourceUnavailable`] if the file cannot be opened or read,
    /// plus every error of [`import_from_reader`](Self::import_from_reader).
    pub fn import_from<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(VectorStatsError::SourceUnavailable)?;
        debug!("importing {} values from {}", self.len, path.display());
        self.import_from_reader(BufReader::new(file))
    }

    /// Read `len` whitespace-separated values from `reader`; anything after them is ignored.
    ///
    /// Values are staged and committed only when all of them parsed, so a failed import
    /// leaves both the contents and the initialized flag as they were.
    ///
    /// # Errors
    ///
    /// - [`VectorStatsError::SourceUnavailable`] if reading fails
    /// - [`VectorStatsError::ParseError`] for a token that is not valid UTF-8 or not a valid scalar
    /// - [`VectorStatsError::NotANumber`] for a NaN token
    /// - [`VectorStatsError::InsufficientData`] if the reader ends before `len` values
    pub fn import_from_reader<R: BufRead>(&self, reader: R) -> Result<()> {
        let mut staged = Vec::with_capacity(self.len);

        // Lines stay raw bytes so that nothing past the last needed token is decoded
        'lines: for line in reader.split(b'\n') {
            let line = line.map_err(VectorStatsError::SourceUnavailable)?;
            for raw in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
                let index = staged.len();
                let value: T = std::str::from_utf8(raw)
                    .ok()
                    .and_then(|token| token.parse().ok())
                    .ok_or_else(|| VectorStatsError::ParseError {
                        index,
                        token: String::from_utf8_lossy(raw).into_owned(),
                    })?;
                if value.is_nan() {
                    return Err(VectorStatsError::NotANumber { index });
                }
                staged.push(value);
                if staged.len() == self.len {
                    break 'lines;
                }
            }
        }

        if staged.len() < self.len {
            return Err(VectorStatsError::InsufficientData {
                expected: self.len,
                found: staged.len(),
            });
        }

        let mut state = self.state.write();
        state.data = Array1::from_vec(staged);
        state.initialized = true;
        info!("imported {} values", self.len);
        Ok(())
    }

    /// Write one value per line, in index order, to the file at `path`
    ///
    /// # Errors
    ///
    /// - [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized
    ///   (checked before the file is created)
    /// - [`VectorStatsError::SinkUnavailable`] if the file cannot be created or written
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let ready = self.ready()?;
        let path = path.as_ref();
        let file = File::create(path).map_err(VectorStatsError::SinkUnavailable)?;
        debug!("exporting {} values to {}", self.len, path.display());
        write_values(&ready, BufWriter::new(file))
    }

    /// Write one value per line, in index order, to `writer`
    ///
    /// # Errors
    ///
    /// - [`VectorStatsError::UninitializedAccess`] if the buffer is not initialized
    /// - [`VectorStatsError::SinkUnavailable`] if writing fails
    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let ready = self.ready()?;
        write_values(&ready, writer)
    }
}

fn write_values<T: Scalar, W: Write>(ready: &ReadyBuffer<'_, T>, mut writer: W) -> Result<()> {
    for value in ready.values().iter() {
        writeln!(writer, "{}", value).map_err(VectorStatsError::SinkUnavailable)?;
    }
    writer.flush().map_err(VectorStatsError::SinkUnavailable)
}
