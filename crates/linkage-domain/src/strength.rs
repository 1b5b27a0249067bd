//! Strength computation module
//!
//! Scores relationships on a single 0-100 scale. Paths decay with hop count
//! and are scaled by how well connected the participants along them are;
//! direct edges always score [`DIRECT_STRENGTH`].

use serde::{Deserialize, Serialize};

/// Strength of every direct (one-hop) path
pub const DIRECT_STRENGTH: u8 = 100;

/// Neighbor count at which a hop stops penalizing the path
pub const DENSITY_DIVISOR: f64 = 10.0;

/// Smallest density factor a path can be scaled by
pub const DENSITY_FLOOR: f64 = 0.1;

/// Configuration for path strength scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Divisor applied to the smaller neighbor count of each hop
    pub density_divisor: f64,
    /// Lower clamp of the density product
    pub density_floor: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            density_divisor: DENSITY_DIVISOR,
            density_floor: DENSITY_FLOOR,
        }
    }
}

impl StrengthConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.density_divisor.is_nan() || self.density_divisor <= 0.0 {
            return Err("density_divisor must be greater than 0".to_string());
        }
        if self.density_floor.is_nan() || self.density_floor <= 0.0 || self.density_floor > 1.0 {
            return Err("density_floor must be in (0, 1]".to_string());
        }
        Ok(())
    }
}

/// Score a path given the neighbor counts of its nodes, in path order
///
/// A two-node path is a direct connection and always scores
/// [`DIRECT_STRENGTH`]. Longer paths start from `100 / hops` and are scaled
/// by the density factor. Paths with fewer than two nodes score 0.
///
/// # Examples
///
/// ```
/// use linkage_domain::strength::path_strength;
/// use linkage_domain::StrengthConfig;
///
/// let config = StrengthConfig::default();
/// assert_eq!(path_strength(&[1, 4], &config), 100);
/// // Well-connected intermediary: no density penalty
/// assert_eq!(path_strength(&[12, 30, 15], &config), 50);
/// ```
pub fn path_strength(neighbor_counts: &[usize], config: &StrengthConfig) -> u8 {
    match neighbor_counts.len() {
        0 | 1 => 0,
        2 => DIRECT_STRENGTH,
        len => {
            let hops = (len - 1) as f64;
            let base = 100.0 / hops;
            let density = density_factor(neighbor_counts, config);
            (base * density).round().clamp(0.0, 100.0) as u8
        }
    }
}

/// Product of `min(deg_a, deg_b) / divisor` over consecutive pairs, clamped
fn density_factor(neighbor_counts: &[usize], config: &StrengthConfig) -> f64 {
    let product: f64 = neighbor_counts
        .windows(2)
        .map(|hop| hop[0].min(hop[1]) as f64 / config.density_divisor)
        .product();

    product.clamp(config.density_floor, 1.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Path strength always stays in [0, 100]
        #[test]
        fn test_strength_range(counts in prop::collection::vec(0usize..200, 0..6)) {
            let strength = path_strength(&counts, &StrengthConfig::default());
            prop_assert!(strength <= 100);
        }

        /// Property: Longer paths never outscore the undiscounted base
        #[test]
        fn test_strength_bounded_by_base(counts in prop::collection::vec(0usize..200, 3..6)) {
            let hops = (counts.len() - 1) as f64;
            let strength = path_strength(&counts, &StrengthConfig::default());
            prop_assert!(f64::from(strength) <= (100.0 / hops).round());
        }

        /// Property: The density floor keeps indirect paths above zero
        #[test]
        fn test_floor_prevents_collapse(counts in prop::collection::vec(0usize..3, 3..5)) {
            let strength = path_strength(&counts, &StrengthConfig::default());
            prop_assert!(strength > 0);
        }
    }
}
