//! Bootstrap significance test for the SSD statistic
//!
//! The null hypothesis is that X and Y come from the same distribution.
//! Both samples are pooled; each replicate redraws n_x + n_y values with
//! replacement from the pool, splits them back into a synthetic (X, Y)
//! pair of the original sizes, and recomputes the statistic. The p-value
//! is the upper-tail fraction of replicate statistics at or above the
//! observed one.
//!
//! Each replicate rebuilds its own grid over its own min/max rather than
//! reusing the observed grid. Reusing the observed grid would give
//! tighter comparability, but it would also change what the null
//! distribution measures, so the per-replicate grid is kept.
//!
//! The generator is a ChaCha8 stream seeded once per run and threaded
//! explicitly through the draw loop, so a fixed (samples, config) pair
//! reproduces the run bit for bit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{validation, StatsResult};
use crate::ssd::{ssd_statistic, SsdCurves};

/// Configuration for a bootstrap run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Number of grid points for every statistic evaluation (default 100)
    pub grid_points: usize,
    /// Number of bootstrap replicates (default 1000)
    pub replicates: usize,
    /// Seed for the ChaCha8 generator (default 42)
    pub seed: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            grid_points: 100,
            replicates: 1000,
            seed: 42,
        }
    }
}

/// Result of a bootstrap significance test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsdBootstrap {
    /// Statistic and intermediate curves for the observed (non-resampled) data
    pub observed: SsdCurves,
    /// Upper-tail p-value: fraction of replicate statistics >= observed
    pub p_value: f64,
    /// Replicate statistics in draw order
    pub null_distribution: Vec<f64>,
}

/// Run the SSD bootstrap test
///
/// Validates everything up front (non-empty finite samples,
/// `grid_points >= 2`, `replicates >= 1`); a failed run returns the
/// triggering condition and no partial output.
pub fn bootstrap_ssd(x: &[f64], y: &[f64], config: &BootstrapConfig) -> StatsResult<SsdBootstrap> {
    validation::validate_sample("x", x)?;
    validation::validate_sample("y", y)?;
    validation::validate_grid_resolution(config.grid_points)?;
    validation::validate_replicates(config.replicates)?;

    debug!(
        n_x = x.len(),
        n_y = y.len(),
        grid_points = config.grid_points,
        replicates = config.replicates,
        seed = config.seed,
        "starting SSD bootstrap"
    );

    let observed = ssd_statistic(x, y, config.grid_points)?;

    let pooled: Vec<f64> = x.iter().chain(y.iter()).copied().collect();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let null_distribution: Vec<f64> = (0..config.replicates)
        .map(|_| replicate_statistic(&mut rng, &pooled, x.len(), config.grid_points))
        .collect::<StatsResult<_>>()?;

    let exceeding = null_distribution
        .iter()
        .filter(|&&s| s >= observed.statistic)
        .count();
    let p_value = exceeding as f64 / config.replicates as f64;

    debug!(
        statistic = observed.statistic,
        p_value, "SSD bootstrap finished"
    );

    Ok(SsdBootstrap {
        observed,
        p_value,
        null_distribution,
    })
}

/// One replicate: redraw the pool with replacement, split, recompute
fn replicate_statistic(
    rng: &mut ChaCha8Rng,
    pooled: &[f64],
    n_x: usize,
    grid_points: usize,
) -> StatsResult<f64> {
    let draw: Vec<f64> = (0..pooled.len())
        .map(|_| pooled[rng.random_range(0..pooled.len())])
        .collect();

    let curves = ssd_statistic(&draw[..n_x], &draw[n_x..], grid_points)?;
    Ok(curves.statistic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    fn samples() -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..20).map(|i| (i as f64 * 0.37).sin() * 2.0 + 1.0).collect();
        let y: Vec<f64> = (0..15).map(|i| (i as f64 * 0.53).cos() * 3.0).collect();
        (x, y)
    }

    #[test]
    fn test_bootstrap_reproducible() {
        let (x, y) = samples();
        let config = BootstrapConfig {
            grid_points: 50,
            replicates: 200,
            seed: 7,
        };

        let a = bootstrap_ssd(&x, &y, &config).unwrap();
        let b = bootstrap_ssd(&x, &y, &config).unwrap();

        assert_eq!(a.p_value, b.p_value);
        assert_eq!(a.null_distribution, b.null_distribution);
        assert_eq!(a.observed.statistic, b.observed.statistic);
    }

    #[test]
    fn test_bootstrap_seed_changes_null_distribution() {
        let (x, y) = samples();
        let base = BootstrapConfig {
            grid_points: 50,
            replicates: 200,
            seed: 7,
        };
        let other = BootstrapConfig { seed: 8, ..base };

        let a = bootstrap_ssd(&x, &y, &base).unwrap();
        let b = bootstrap_ssd(&x, &y, &other).unwrap();

        assert_ne!(a.null_distribution, b.null_distribution);
        // The observed statistic never depends on the seed.
        assert_eq!(a.observed.statistic, b.observed.statistic);
    }

    #[test]
    fn test_p_value_bounds() {
        let (x, y) = samples();
        let config = BootstrapConfig {
            grid_points: 40,
            replicates: 100,
            ..Default::default()
        };

        let result = bootstrap_ssd(&x, &y, &config).unwrap();
        assert!(result.p_value >= 0.0);
        assert!(result.p_value <= 1.0);
        assert_eq!(result.null_distribution.len(), 100);
    }

    #[test]
    fn test_identical_samples_high_p_value() {
        // X == Y gives an observed statistic of 0 on the diff curve's
        // final plateau at most; replicates can only match or exceed it
        // often, so the test should not reject.
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let config = BootstrapConfig {
            grid_points: 50,
            replicates: 200,
            seed: 3,
        };

        let result = bootstrap_ssd(&x, &x, &config).unwrap();
        assert!(result.observed.statistic.abs() < 1e-12);
        assert!(result.p_value > 0.5);
    }

    #[test]
    fn test_degenerate_samples_run_to_completion() {
        // All replicates also see a zero-width range; nothing divides by 0.
        let x = vec![5.0, 5.0, 5.0];
        let config = BootstrapConfig {
            grid_points: 10,
            replicates: 50,
            seed: 1,
        };

        let result = bootstrap_ssd(&x, &x, &config).unwrap();
        assert!(result.observed.degenerate);
        assert_eq!(result.observed.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_validation_rejections() {
        let (x, y) = samples();

        assert!(matches!(
            bootstrap_ssd(&[], &y, &BootstrapConfig::default()),
            Err(StatsError::EmptySample { .. })
        ));
        assert!(matches!(
            bootstrap_ssd(
                &x,
                &y,
                &BootstrapConfig {
                    replicates: 0,
                    ..Default::default()
                }
            ),
            Err(StatsError::InvalidReplicateCount { replicates: 0 })
        ));
        assert!(matches!(
            bootstrap_ssd(
                &x,
                &y,
                &BootstrapConfig {
                    grid_points: 1,
                    ..Default::default()
                }
            ),
            Err(StatsError::InvalidGridResolution { grid_points: 1 })
        ));
    }

    #[test]
    fn test_default_config() {
        let config = BootstrapConfig::default();
        assert_eq!(config.grid_points, 100);
        assert_eq!(config.replicates, 1000);
        assert_eq!(config.seed, 42);
    }
}
