//! Unit tests for the supporting modules: errors, configuration, partitioning,
//! scalar arithmetic and timing.

use vector_stats::{
    errors::{Result, VectorStatsError},
    parallel::{get_parallel_info, ParallelConfig},
    partition::{effective_workers, partition},
    scalar::Scalar,
    statistics::{Extremum, PartitionedReducer, Reducer, SequentialReducer, StatOperation, StatValue},
    timing::measure,
};

#[test]
fn test_error_types() {
    let size_err = VectorStatsError::InvalidSize { requested: 0 };
    assert!(format!("{}", size_err).contains("Invalid buffer size 0"));

    let uninit_err = VectorStatsError::UninitializedAccess;
    assert_eq!(format!("{}", uninit_err), "Buffer is not initialized");

    let data_err = VectorStatsError::InsufficientData {
        expected: 10,
        found: 4,
    };
    assert!(format!("{}", data_err).contains("expected 10 values, found 4"));

    let worker_err = VectorStatsError::InvalidWorkerCount { requested: 0 };
    assert!(format!("{}", worker_err).contains("at least one worker"));

    let parse_err = VectorStatsError::ParseError {
        index: 3,
        token: "abc".to_string(),
    };
    assert!(format!("{}", parse_err).contains("'abc' at position 3"));

    let io_err = VectorStatsError::SourceUnavailable(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing",
    ));
    assert!(format!("{}", io_err).contains("Import source unavailable"));
    assert!(std::error::Error::source(&io_err).is_some());
    assert!(std::error::Error::source(&uninit_err).is_none());
}

#[test]
fn test_parallel_config() -> Result<()> {
    // Default configuration uses every core
    let default_config = ParallelConfig::default();
    assert!(default_config.num_workers.is_none());
    assert_eq!(default_config.resolved_workers()?, num_cpus::get());

    let config_4 = ParallelConfig::with_workers(4);
    assert_eq!(config_4.num_workers, Some(4));
    assert_eq!(config_4.resolved_workers()?, 4);

    let all_cores_config = ParallelConfig::all_cores();
    assert!(all_cores_config.num_workers.unwrap() > 0);

    let zero = ParallelConfig::with_workers(0);
    assert!(matches!(
        zero.resolved_workers(),
        Err(VectorStatsError::InvalidWorkerCount { requested: 0 })
    ));

    Ok(())
}

#[test]
fn test_parallel_info() {
    let info = get_parallel_info();
    assert!(info.current_threads > 0);
    assert!(info.available_cores > 0);
    assert!(info.available_parallelism > 0);

    // Logging without an installed logger must not panic
    info.log_info();
}

#[test]
fn test_partitioned_reducer_construction() -> Result<()> {
    assert!(matches!(
        PartitionedReducer::new(0),
        Err(VectorStatsError::InvalidWorkerCount { requested: 0 })
    ));

    let reducer = PartitionedReducer::new(4)?;
    assert_eq!(reducer.workers(), 4);
    assert_eq!(Reducer::<f64>::label(&reducer), "partitioned(4)");

    // Far more workers than cores still gets a bounded pool
    let wide = PartitionedReducer::new(1_000)?;
    assert_eq!(wide.workers(), 1_000);
    assert!(wide.threads() >= 1);
    assert!(wide.threads() <= num_cpus::get());

    // Each reducer owns its pool, independent of rayon's global one
    let single = PartitionedReducer::new(1)?;
    assert_eq!(single.threads(), 1);
    assert_eq!(get_parallel_info().current_threads, rayon::current_num_threads());

    assert_eq!(Reducer::<f64>::label(&SequentialReducer::new()), "sequential");
    Ok(())
}

#[test]
fn test_partition_example() -> Result<()> {
    assert_eq!(partition(6, 3)?, vec![0..2, 2..4, 4..6]);
    assert_eq!(partition(10, 3)?, vec![0..3, 3..6, 6..10]);
    assert_eq!(partition(5, 1)?, vec![0..5]);
    Ok(())
}

#[test]
fn test_partition_covers_range_exactly() -> Result<()> {
    for len in 1..=64 {
        for workers in 1..=80 {
            let ranges = partition(len, workers)?;
            let effective = effective_workers(len, workers);
            assert_eq!(ranges.len(), effective, "len={len} workers={workers}");

            // Contiguous, non-empty, in order, and covering [0, len)
            assert_eq!(ranges[0].start, 0);
            assert_eq!(ranges[ranges.len() - 1].end, len);
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "len={len} workers={workers}");
            }
            assert!(ranges.iter().all(|r| r.start < r.end));

            // Equal chunks, remainder appended to the last one
            let chunk = len / effective;
            for range in &ranges[..ranges.len() - 1] {
                assert_eq!(range.len(), chunk);
            }
            assert_eq!(ranges[ranges.len() - 1].len(), chunk + len % effective);
        }
    }
    Ok(())
}

#[test]
fn test_partition_edge_cases() -> Result<()> {
    assert!(partition(0, 4)?.is_empty());
    assert!(matches!(
        partition(5, 0),
        Err(VectorStatsError::InvalidWorkerCount { requested: 0 })
    ));

    // More workers than elements: one element per range
    assert_eq!(partition(3, 10)?, vec![0..1, 1..2, 2..3]);
    Ok(())
}

#[test]
fn test_scalar_arithmetic() {
    assert_eq!(7.0f64.divide_by_count(2), Some(3.5));
    assert_eq!(23i64.divide_by_count(6), Some(3));
    assert_eq!(7i64.divide_by_count(0), None);
    assert_eq!(10u32.divide_by_count(usize::MAX), None);

    // Integer accumulation wraps instead of overflowing
    assert_eq!(i32::MAX.accumulate(1), i32::MIN);
    assert_eq!(1.5f32.accumulate(2.0), 3.5);

    assert!(f64::NAN.is_nan());
    assert!(!0u64.is_nan());
    assert_eq!(<i64 as Scalar>::zero(), 0);
}

#[test]
fn test_stat_operation() {
    assert_eq!(StatOperation::ALL.len(), 4);
    assert_eq!(StatOperation::Min.as_str(), "minimum");
    assert_eq!(format!("{}", StatOperation::Mean), "mean");
    assert_eq!(format!("{:?}", StatOperation::Sum), "Sum");

    let extremum = StatValue::Extremum(Extremum { value: 9, index: 5 });
    assert_eq!(extremum.to_string(), "9 at index 5");
    assert_eq!(StatValue::Scalar(23).to_string(), "23");
}

#[test]
fn test_measure() {
    let measured = measure("square", || 12 * 12);
    assert_eq!(measured.value, 144);
    assert!(measured.seconds() >= 0.0);


    let ok = measure("parse", || "145".parse::<i32>()).transpose();
    assert_eq!(ok.map(|m| m.value), Ok(145));

    let failed = measure("parse", || "x".parse::<i32>()).transpose();
    assert!(failed.is_err());
}
