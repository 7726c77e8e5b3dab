//! Defines command-line interface options using `clap` for the vector-stats driver.

use clap::Parser;
use std::path::PathBuf;

/// Compare sequential and partitioned reductions over a numeric buffer
#[derive(Parser, Debug)]
#[command(
    version,
    name = "vector-stats",
    about = "Fill a numeric buffer and compare sequential and partitioned reductions"
)]
pub struct Args {
    /// Number of elements in the buffer
    #[arg(short = 'n', long, default_value_t = 10_000_000)]
    pub size: usize,

    /// Number of workers for the partitioned reductions. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub workers: Option<usize>,

    /// Lower bound of the uniform random fill
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Upper bound of the uniform random fill
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Fill every element with this value instead of random values
    #[arg(long, conflicts_with = "import", allow_negative_numbers = true)]
    pub constant: Option<f64>,

    /// Read the buffer from a text file (one value per line) instead of filling it
    #[arg(long)]
    pub import: Option<PathBuf>,

    /// Write the buffer to a text file after it is initialized
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
