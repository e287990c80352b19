//! sdtest-stats - Statistical core for stochastic dominance testing
//!
//! This crate implements a grid-based test for second-order stochastic
//! dominance (SSD) between two empirical distributions:
//!
//! - **ECDF**: Empirical Cumulative Distribution Function, evaluated on a
//!   shared grid spanning both samples
//! - **SSD statistic**: maximum of the running integral of CDF_X - CDF_Y
//! - **Bootstrap**: pooled resampling under the null hypothesis, yielding
//!   a one-sided upper-tail p-value
//!
//! # Design Philosophy
//!
//! The crate is the numeric core only: it has no plotting, file loading,
//! or reporting surface. Every result struct exposes its curves in grid
//! order so renderers can consume them directly, and every run is
//! reproducible from an explicit seed.

pub mod bootstrap;
pub mod ecdf;
pub mod error;
pub mod ssd;

pub use bootstrap::*;
pub use ecdf::*;
pub use error::*;
pub use ssd::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
