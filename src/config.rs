//! Typed, validated configuration for a world-generation run: the world
//! seed, the terrain and biome noise stacks, land-height thresholds, the
//! forest threshold, and cache sizing. Deserializes from JSON per the
//! external-interfaces wire format; `validate()` collects every violation
//! instead of stopping at the first, unlike the original CLI's one-shot
//! `argparse` type-function exceptions.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::landtype::{LandHeights, LandType};
use crate::noise_stack::{self, NoiseArgs};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub world_seed: u64,
    pub terrain_noise: Vec<NoiseArgs>,
    pub biome_noise: Vec<NoiseArgs>,
    pub land_heights: Vec<(LandType, f64)>,
    pub forest_threshold: f64,
    /// Number of chunks loaded at once around a viewer, the `h`/`w` window
    /// size `ChunkCache::chunks_around` is called with.
    pub load_radius_chunks: u32,
}

impl GenerationConfig {
    /// Validate the configuration, collecting every violation rather than
    /// bailing on the first one.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut issues = Vec::new();

        noise_stack::validate_noise_args(&self.terrain_noise, &mut issues);
        noise_stack::validate_noise_args(&self.biome_noise, &mut issues);

        for required in [LandType::Grass, LandType::Water] {
            if !self.land_heights.iter().any(|(t, _)| *t == required) {
                issues.push(ValidationError::MissingLandHeightsKey {
                    key: match required {
                        LandType::Grass => "grass",
                        LandType::Water => "water",
                        LandType::Rock => "rock",
                    },
                });
            }
        }

        if self.load_radius_chunks == 0 {
            issues.push(ValidationError::ZeroChunkSize);
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    #[must_use]
    pub fn land_heights(&self) -> LandHeights {
        LandHeights::new(self.land_heights.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GenerationConfig {
        GenerationConfig {
            world_seed: 1,
            terrain_noise: vec![NoiseArgs { amplitude: 1.0, octaves: 3.0 }],
            biome_noise: vec![NoiseArgs { amplitude: 1.0, octaves: 2.0 }],
            land_heights: vec![(LandType::Rock, 0.5), (LandType::Grass, 0.0), (LandType::Water, -1.0)],
            forest_threshold: 0.2,
            load_radius_chunks: 4,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn collects_every_violation_instead_of_stopping_at_the_first() {
        let mut config = valid_config();
        config.terrain_noise = vec![];
        config.land_heights = vec![];
        config.load_radius_chunks = 0;

        let issues = config.validate().unwrap_err();
        assert!(issues.iter().any(|i| matches!(i, ValidationError::EmptyNoiseStack)));
        assert!(issues.iter().any(|i| matches!(i, ValidationError::MissingLandHeightsKey { .. })));
        assert!(issues.iter().any(|i| matches!(i, ValidationError::ZeroChunkSize)));
    }
}
