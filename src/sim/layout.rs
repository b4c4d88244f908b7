//! Platform layout generation
//!
//! Rejection sampling: draw candidate platforms until one fits the
//! non-overlap and vertical-separation constraints, then move on to the next
//! index. The loop is bounded by `SimConfig::max_layout_attempts` so an
//! infeasible playfield surfaces as an error instead of stalling the frame.

use rand::Rng;
use rand_pcg::Pcg32;
use std::fmt;

use super::state::Platform;
use crate::config::SimConfig;
use crate::consts::{HOSE_DEPTH, PLATFORM_GAP, PLAT_HEIGHT};

/// Layout generation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The playfield cannot fit the requested platforms within the attempt
    /// budget (or the sampling ranges are empty outright).
    Infeasible { attempts: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Infeasible { attempts } => write!(
                f,
                "no feasible platform layout found after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Generate a full platform layout.
///
/// Candidate ranges:
/// - width uniform in `[W/10, W/10 + W/3)`
/// - x uniform so the platform stays within `[2 * HOSE_DEPTH, W]`
/// - y uniform in `[PLAT_HEIGHT, H - PLAT_HEIGHT)`
///
/// A candidate is accepted only if it overlaps none of the platforms placed
/// so far and differs from each of them vertically by at least
/// `PLATFORM_GAP + PLAT_HEIGHT`.
pub fn generate_platforms(
    config: &SimConfig,
    rng: &mut Pcg32,
) -> Result<Vec<Platform>, LayoutError> {
    let y_min = PLAT_HEIGHT;
    let y_max = config.height - PLAT_HEIGHT;
    if y_max <= y_min {
        return Err(LayoutError::Infeasible { attempts: 0 });
    }

    let mut platforms = Vec::with_capacity(config.max_platforms);
    let mut attempts = 0u32;

    while platforms.len() < config.max_platforms {
        attempts += 1;
        if attempts > config.max_layout_attempts {
            return Err(LayoutError::Infeasible {
                attempts: config.max_layout_attempts,
            });
        }

        let width = config.width / 10.0 + rng.random_range(0.0..config.width / 3.0);
        let x_min = HOSE_DEPTH * 2.0;
        let x_max = config.width - width;
        if x_max <= x_min {
            continue;
        }

        let candidate = Platform::new(
            rng.random_range(x_min..x_max),
            rng.random_range(y_min..y_max),
            width,
        );

        let fits = platforms.iter().all(|placed: &Platform| {
            !candidate.rect().overlaps(&placed.rect())
                && (candidate.pos.y - placed.pos.y).abs() >= PLATFORM_GAP + PLAT_HEIGHT
        });
        if fits {
            platforms.push(candidate);
        }
    }

    log::debug!(
        "generated {} platforms in {attempts} attempts",
        platforms.len()
    );
    Ok(platforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn assert_layout_valid(platforms: &[Platform], config: &SimConfig) {
        assert_eq!(platforms.len(), config.max_platforms);
        for (i, a) in platforms.iter().enumerate() {
            assert!(a.pos.x >= HOSE_DEPTH * 2.0);
            assert!(a.rect().right() <= config.width);
            assert!(a.pos.y >= PLAT_HEIGHT);
            assert!(a.pos.y < config.height - PLAT_HEIGHT);
            for b in &platforms[i + 1..] {
                assert!(!a.rect().overlaps(&b.rect()));
                assert!((a.pos.y - b.pos.y).abs() >= PLATFORM_GAP + PLAT_HEIGHT);
            }
        }
    }

    #[test]
    fn test_default_playfield_layout() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let platforms = generate_platforms(&config, &mut rng).unwrap();
        assert_layout_valid(&platforms, &config);
    }

    #[test]
    fn test_regeneration_replaces_layout() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let first = generate_platforms(&config, &mut rng).unwrap();
        let second = generate_platforms(&config, &mut rng).unwrap();
        // Same RNG stream, different draws: the layouts differ
        assert!(
            first
                .iter()
                .zip(&second)
                .any(|(a, b)| a.pos != b.pos || a.width != b.width)
        );
    }

    #[test]
    fn test_short_playfield_is_infeasible() {
        // Three platforms separated by >= 120 cannot fit in a 160px band
        let config = SimConfig {
            height: 200.0,
            ..SimConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let err = generate_platforms(&config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Infeasible {
                attempts: config.max_layout_attempts
            }
        );
    }

    #[test]
    fn test_degenerate_height_fails_fast() {
        let config = SimConfig {
            height: PLAT_HEIGHT * 2.0,
            ..SimConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(4);
        assert_eq!(
            generate_platforms(&config, &mut rng),
            Err(LayoutError::Infeasible { attempts: 0 })
        );
    }

    proptest! {
        #[test]
        fn prop_layout_constraints_hold_for_any_seed(seed in any::<u64>()) {
            let config = SimConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let platforms = generate_platforms(&config, &mut rng).unwrap();
            prop_assert_eq!(platforms.len(), config.max_platforms);
            for (i, a) in platforms.iter().enumerate() {
                for b in &platforms[i + 1..] {
                    prop_assert!(!a.rect().overlaps(&b.rect()));
                    prop_assert!((a.pos.y - b.pos.y).abs() >= PLATFORM_GAP + PLAT_HEIGHT);
                }
            }
        }
    }
}
