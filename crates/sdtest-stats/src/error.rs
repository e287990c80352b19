//! Error types for sdtest-stats
//!
//! Covers the failure modes of the dominance test:
//! - Empty or non-finite input samples
//! - Invalid grid resolution
//! - Invalid bootstrap replicate count
//!
//! A zero-width combined sample range is deliberately NOT an error: the
//! statistic is defined as 0 in that case and the result carries a
//! `degenerate` flag instead (see [`crate::ssd::SsdCurves`]).

use thiserror::Error;

/// Main error type for sdtest-stats operations
#[derive(Error, Debug)]
pub enum StatsError {
    /// A sample was empty
    #[error("Sample '{name}' is empty")]
    EmptySample { name: String },

    /// A sample contained a NaN or infinite value
    #[error("Sample '{name}' contains a non-finite value at index {index}: {value}")]
    NonFiniteValue {
        name: String,
        index: usize,
        value: f64,
    },

    /// An ECDF was evaluated on an empty grid
    #[error("Evaluation grid is empty")]
    EmptyGrid,

    /// Grid resolution too small to define a spacing
    #[error("Grid resolution must be at least 2, got {grid_points}")]
    InvalidGridResolution { grid_points: usize },

    /// Bootstrap replicate count below 1
    #[error("Bootstrap replicate count must be at least 1, got {replicates}")]
    InvalidReplicateCount { replicates: usize },
}

/// Result type alias for sdtest-stats operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Validation utilities
///
/// All validation happens before any computation begins, so a failed call
/// never produces partial output.
pub mod validation {
    use super::*;

    /// Validate that a sample is non-empty and all-finite
    pub fn validate_sample(name: &str, data: &[f64]) -> StatsResult<()> {
        if data.is_empty() {
            return Err(StatsError::EmptySample {
                name: name.to_string(),
            });
        }
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(StatsError::NonFiniteValue {
                    name: name.to_string(),
                    index,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Validate that a grid has enough points to define a spacing
    pub fn validate_grid_resolution(grid_points: usize) -> StatsResult<()> {
        if grid_points < 2 {
            return Err(StatsError::InvalidGridResolution { grid_points });
        }
        Ok(())
    }

    /// Validate the bootstrap replicate count
    pub fn validate_replicates(replicates: usize) -> StatsResult<()> {
        if replicates < 1 {
            return Err(StatsError::InvalidReplicateCount { replicates });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_display() {
        let err = StatsError::EmptySample {
            name: "x".to_string(),
        };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = StatsError::NonFiniteValue {
            name: "y".to_string(),
            index: 3,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_validate_sample() {
        assert!(validation::validate_sample("x", &[1.0, 2.0]).is_ok());
        assert!(matches!(
            validation::validate_sample("x", &[]),
            Err(StatsError::EmptySample { .. })
        ));
        assert!(matches!(
            validation::validate_sample("x", &[1.0, f64::INFINITY]),
            Err(StatsError::NonFiniteValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_grid_resolution() {
        assert!(validation::validate_grid_resolution(2).is_ok());
        assert!(validation::validate_grid_resolution(100).is_ok());
        assert!(matches!(
            validation::validate_grid_resolution(1),
            Err(StatsError::InvalidGridResolution { grid_points: 1 })
        ));
    }

    #[test]
    fn test_validate_replicates() {
        assert!(validation::validate_replicates(1).is_ok());
        assert!(matches!(
            validation::validate_replicates(0),
            Err(StatsError::InvalidReplicateCount { replicates: 0 })
        ));
    }
}
