//! Statistical helpers shared by the bingo scoring crates.
//!
//! This crate provides the small set of numeric tools the scoring engine needs:
//!
//! - **Normalized scores**: A `[0, 1]` score that explicitly records the "no data" case
//! - **Percentile ranks**: Fractional rank of a value within a comparison pool
//! - **Descriptive statistics**: Sum, mean, median, spread of a dataset
//!
//! # Modules
//!
//! - [`normalized`]: Normalized score with a neutral default for missing data
//! - [`percentiles`]: Percentile-rank normalization over a pool of observations
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ## Percentile-rank normalization
//!
//! ```
//! use bingo_stats::percentiles::PercentileRank;
//!
//! let pool = PercentileRank::new([10.0, 20.0, 30.0, 40.0]);
//! assert_eq!(pool.rank(Some(20.0)).value(), 0.5);
//! assert_eq!(pool.rank(None).value(), 0.5);
//! assert_eq!(pool.rank(Some(40.0)).value(), 1.0);
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use bingo_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.sum, 15.0);
//! ```

pub mod descriptive;
pub mod normalized;
pub mod percentiles;
