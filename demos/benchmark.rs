//! Simple benchmark showing how partitioned reductions scale with the worker count.
//!
//! Fills a buffer with uniform random values and times each statistic sequentially
//! and with an increasing number of workers.

use vector_stats::prelude::*;
use vector_stats::{get_parallel_info, measure_reduction};

fn main() -> Result<()> {
    println!("vector_stats parallel reduction benchmark");
    println!("==========================================\n");

    let info = get_parallel_info();
    println!(
        "System has {} logical CPU cores available\n",
        info.available_cores
    );

    let data_sizes = [1_000_000, 5_000_000, 10_000_000];
    let worker_counts = [1, 2, 4, 8, 16];
    let sequential = SequentialReducer::new();

    for data_size in data_sizes {
        println!("Testing with {} data points:", data_size);
        println!("-------------------------------------------");

        let buffer = NumericBuffer::<f64>::new(data_size)?;
        buffer.fill_random(0.0, 5.0)?;

        for operation in StatOperation::ALL {
            let seq = measure_reduction(&sequential, &buffer, operation)?;
            println!("{:<8} sequential     {:.6} s   {}", operation.as_str(), seq.seconds(), seq.value);

            for workers in worker_counts {
                let reducer = PartitionedReducer::new(workers)?;
                let par = measure_reduction(&reducer, &buffer, operation)?;
                println!(
                    "{:<8} {:>2} workers     {:.6} s   {}   speedup {:.2}x",
                    "",
                    workers,
                    par.seconds(),
                    par.value,
                    seq.seconds() / par.seconds().max(f64::EPSILON)
                );
            }
        }
        println!("=========================================\n");
    }

    println!("Key takeaways:");
    println!("   - Larger buffers benefit more from partitioning");
    println!("   - Extrema match the sequential scan exactly, including the index");
    println!("   - Use --workers in vector-stats to control parallelism");

    Ok(())
}
