//! Empirical Cumulative Distribution Function (ECDF)
//!
//! The ECDF is a step function that estimates the underlying CDF of a
//! sample. For a sample of n values, ECDF(x) = (number of values <= x) / n.
//!
//! Evaluation is right-continuous: a point exactly equal to a sample value
//! counts that value (and every duplicate of it). The dominance test
//! evaluates two ECDFs on a shared grid, so [`Ecdf::evaluate_on_grid`] is
//! the main entry point; [`Ecdf::evaluate`] answers single-point queries
//! in O(log n).

use serde::{Deserialize, Serialize};

use crate::error::{validation, StatsError, StatsResult};

/// Empirical Cumulative Distribution Function
///
/// Built once from a sample (O(n log n) sort), then evaluated at arbitrary
/// points by binary search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecdf {
    /// Sorted sample values (duplicates kept)
    values: Vec<f64>,
    /// CDF value (0 to 1] reached at each sorted value
    cdf: Vec<f64>,
}

impl Ecdf {
    /// Build an ECDF from a sample
    ///
    /// Fails on an empty sample or on NaN/infinite values: the empirical
    /// fraction is undefined without a positive, finite sample size.
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        validation::validate_sample("sample", data)?;

        let mut values: Vec<f64> = data.to_vec();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let n = values.len();
        let cdf: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();

        Ok(Self { values, cdf })
    }

    /// Evaluate the ECDF at a point
    ///
    /// Returns the fraction of sample values <= x. Right-continuous:
    /// `evaluate(v)` for a sample value v includes v itself and all of
    /// its duplicates.
    pub fn evaluate(&self, x: f64) -> f64 {
        let count = self.values.partition_point(|&v| v <= x);
        count as f64 / self.values.len() as f64
    }

    /// Evaluate the ECDF at every point of a grid
    ///
    /// Returns a vector of the same length as `grid`, in grid order, so
    /// renderers can plot it directly. The grid need not be sorted, though
    /// the dominance test always passes a strictly increasing one.
    pub fn evaluate_on_grid(&self, grid: &[f64]) -> StatsResult<Vec<f64>> {
        if grid.is_empty() {
            return Err(StatsError::EmptyGrid);
        }
        Ok(grid.iter().map(|&g| self.evaluate(g)).collect())
    }

    /// Get the number of sample values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the ECDF is empty (never true for a constructed ECDF)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the sorted sample values for plotting
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the CDF values for plotting
    pub fn cdf_values(&self) -> &[f64] {
        &self.cdf
    }

    /// Get points for step-function plotting (x, y pairs)
    ///
    /// Returns coordinates suitable for plotting as a right-continuous
    /// step function, starting at (min, 0).
    pub fn plot_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(self.values.len() * 2 + 1);

        points.push((self.values[0], 0.0));
        for i in 0..self.values.len() {
            if i > 0 {
                points.push((self.values[i], self.cdf[i - 1]));
            }
            points.push((self.values[i], self.cdf[i]));
        }

        points
    }
}
