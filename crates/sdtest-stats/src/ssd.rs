//! Second-order stochastic dominance (SSD) statistic
//!
//! Given two samples X and Y, both ECDFs are evaluated on a shared grid
//! spanning the combined range, and the running integral of
//! CDF_X - CDF_Y is accumulated left to right. The statistic is the
//! maximum of that cumulative area: a positive value means X's CDF
//! exceeds Y's cumulatively somewhere, i.e. evidence against Y
//! second-order dominating X. The X/Y ordering is part of the contract
//! and is never flipped internally.
//!
//! The integral is a left Riemann sum with the uniform grid spacing as
//! the step. Downstream comparisons (observed vs. bootstrap replicates)
//! depend on this exact approximation, so it is not replaced by a
//! trapezoidal rule.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ecdf::Ecdf;
use crate::error::{validation, StatsResult};

/// Full output of one SSD statistic evaluation
///
/// All vectors have the same length as `grid` and are in grid order, so a
/// renderer can plot them directly without resorting or interpolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsdCurves {
    /// Evenly spaced evaluation grid over the combined sample range
    pub grid: Vec<f64>,
    /// ECDF of X on the grid
    pub cdf_x: Vec<f64>,
    /// ECDF of Y on the grid
    pub cdf_y: Vec<f64>,
    /// Pointwise CDF_X - CDF_Y
    pub diff: Vec<f64>,
    /// Running integral of `diff` (left Riemann sum)
    pub area: Vec<f64>,
    /// Maximum of `area` over the grid
    pub statistic: f64,
    /// True when the combined sample range had zero width
    ///
    /// The statistic is structurally 0 in that case (the integral of a
    /// zero-width interval), which is not the same as a genuine negative
    /// result; callers should check this flag before interpreting 0.
    pub degenerate: bool,
}

impl SsdCurves {
    /// Grid indices where the CDF difference changes sign
    ///
    /// Index i is reported when sign(diff[i]) != sign(diff[i+1]), with 0
    /// treated as its own sign. Returned in grid order for crossing-point
    /// annotation.
    pub fn crossings(&self) -> Vec<usize> {
        self.diff
            .windows(2)
            .enumerate()
            .filter(|(_, w)| sign(w[0]) != sign(w[1]))
            .map(|(i, _)| i)
            .collect()
    }
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// N evenly spaced points from `start` to `stop`, endpoints inclusive
///
/// Caller guarantees n >= 2. The last point is set to `stop` exactly
/// rather than trusting accumulated rounding.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    grid[n - 1] = stop;
    grid
}

/// Compute the SSD statistic and all intermediate curves
///
/// Validates both samples (non-empty, finite) and the grid resolution
/// (`grid_points >= 2`) before any computation; on failure no partial
/// output is produced.
pub fn ssd_statistic(x: &[f64], y: &[f64], grid_points: usize) -> StatsResult<SsdCurves> {
    validation::validate_sample("x", x)?;
    validation::validate_sample("y", y)?;
    validation::validate_grid_resolution(grid_points)?;

    let lo = x
        .iter()
        .chain(y.iter())
        .copied()
        .fold(f64::INFINITY, f64::min);
    let hi = x
        .iter()
        .chain(y.iter())
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let grid = linspace(lo, hi, grid_points);
    let cdf_x = Ecdf::from_data(x)?.evaluate_on_grid(&grid)?;
    let cdf_y = Ecdf::from_data(y)?.evaluate_on_grid(&grid)?;

    let diff: Vec<f64> = cdf_x
        .iter()
        .zip(cdf_y.iter())
        .map(|(fx, fy)| fx - fy)
        .collect();

    let step = grid[1] - grid[0];
    let degenerate = step == 0.0;

    let (area, statistic) = if degenerate {
        warn!(
            value = lo,
            "combined sample range has zero width; SSD statistic defined as 0"
        );
        (vec![0.0; grid_points], 0.0)
    } else {
        let mut running = 0.0;
        let area: Vec<f64> = diff
            .iter()
            .map(|d| {
                running += d;
                running * step
            })
            .collect();
        let statistic = area.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (area, statistic)
    };

    Ok(SsdCurves {
        grid,
        cdf_x,
        cdf_y,
        diff,
        area,
        statistic,
        degenerate,
    })
}
