//! Land type classification: mapping a scalar terrain-noise sample to one of
//! the three land types via an ordered threshold ladder, grounded on
//! `BiomeRegistry::get_biome_at`'s threshold-ladder pattern (`n if n < -0.4
//! => "tundra"`) generalized to the insertion-order `LandHeights` rule the
//! original `to_land_type` uses (`for k, v in land_heights.items(): if x > v:
//! return k` — first match wins, not the best match).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    Rock,
    Grass,
    Water,
}

impl LandType {
    /// Single-character code used to build the four-character corner-code
    /// keys the classifier looks up.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            LandType::Rock => 'r',
            LandType::Grass => 'g',
            LandType::Water => 'w',
        }
    }
}

/// Ordered list of `(LandType, threshold)` pairs. `classify` walks this list
/// in order and returns the first type whose threshold the sample exceeds,
/// matching the original's insertion-order semantics rather than picking the
/// numerically closest threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandHeights {
    pub thresholds: Vec<(LandType, f64)>,
}

impl LandHeights {
    #[must_use]
    pub fn new(thresholds: Vec<(LandType, f64)>) -> Self {
        Self { thresholds }
    }

    /// The core's default thresholds (`ROCK=0.1, GRASS=0.0, WATER=-inf`),
    /// in the highest-to-lowest insertion order `classify` requires.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new(vec![(LandType::Rock, 0.1), (LandType::Grass, 0.0), (LandType::Water, f64::NEG_INFINITY)])
    }

    /// Classify a terrain-noise sample `x`. Returns `None` if `x` does not
    /// exceed any threshold (the original's `to_land_type` falls off the end
    /// of its loop and implicitly returns `None` in that case too).
    #[must_use]
    pub fn classify(&self, x: f64) -> Option<LandType> {
        self.thresholds.iter().find(|(_, v)| x > *v).map(|(t, _)| *t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_exceeded_threshold_wins() {
        let lh = LandHeights::new(vec![
            (LandType::Rock, 0.5),
            (LandType::Grass, 0.0),
            (LandType::Water, -1.0),
        ]);
        assert_eq!(lh.classify(0.9), Some(LandType::Rock));
        assert_eq!(lh.classify(0.2), Some(LandType::Grass));
        assert_eq!(lh.classify(-0.5), Some(LandType::Water));
    }

    #[test]
    fn below_all_thresholds_is_none() {
        let lh = LandHeights::new(vec![(LandType::Water, -1.0)]);
        assert_eq!(lh.classify(-2.0), None);
    }

    #[test]
    fn default_thresholds_match_documented_scenario() {
        // S2: {ROCK: 0.1, GRASS: 0.0, WATER: -inf}, strict `>`.
        let lh = LandHeights::defaults();
        assert_eq!(lh.classify(0.2), Some(LandType::Rock));
        assert_eq!(lh.classify(0.05), Some(LandType::Grass));
        assert_eq!(lh.classify(-0.3), Some(LandType::Water));
        assert_eq!(lh.classify(0.1), Some(LandType::Grass));
    }
}
