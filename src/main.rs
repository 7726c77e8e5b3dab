//! Entry point for the vector-stats driver.
//! Initializes a buffer, runs every reduction in both modes, and reports results and timings.

use clap::Parser;
use log::info;
use vector_stats::prelude::*;
use vector_stats::{get_parallel_info, measure_reduction};

mod cli;

use cli::Args;

/// Relative tolerance when comparing sums and means across modes
const TOLERANCE: f64 = 1e-9;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    get_parallel_info().log_info();

    let buffer = NumericBuffer::<f64>::new(args.size)?;
    if let Some(path) = &args.import {
        buffer.import_from(path)?;
    } else if let Some(value) = args.constant {
        buffer.fill_constant(value)?;
    } else {
        buffer.fill_random(args.min, args.max)?;
    }

    if let Some(path) = &args.export {
        buffer.export_to(path)?;
        info!("saved buffer to {}", path.display());
    }

    let sequential = SequentialReducer::new();
    let partitioned = PartitionedReducer::with_config(&ParallelConfig::new(args.workers))?;
    info!(
        "partitioned mode: {} workers on {} dedicated threads",
        partitioned.workers(),
        partitioned.threads()
    );

    println!(
        "{:<8} {:<40} {:>12}   {:<40} {:>12}   {}",
        "stat",
        "sequential",
        "seconds",
        Reducer::<f64>::label(&partitioned),
        "seconds",
        "agree"
    );
    for operation in StatOperation::ALL {
        let seq = measure_reduction(&sequential, &buffer, operation)?;
        let par = measure_reduction(&partitioned, &buffer, operation)?;
        println!(
            "{:<8} {:<40} {:>12.6}   {:<40} {:>12.6}   {}",
            operation.as_str(),
            seq.value.to_string(),
            seq.seconds(),
            par.value.to_string(),
            par.seconds(),
            if agree(&seq.value, &par.value) { "yes" } else { "NO" }
        );
    }

    Ok(())
}

fn agree(a: &StatValue<f64>, b: &StatValue<f64>) -> bool {
    match (a, b) {
        (StatValue::Extremum(x), StatValue::Extremum(y)) => x == y,
        (StatValue::Scalar(x), StatValue::Scalar(y)) => {
            (x - y).abs() <= TOLERANCE * x.abs().max(y.abs()).max(1.0)
        }
        _ => false,
    }
}
