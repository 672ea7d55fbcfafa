//! Multi-octave noise stack: a weighted sum of independently-seeded `Fbm`
//! generators, sampled at `(i / CHUNK_SIZE, j / CHUNK_SIZE, z)` so values
//! depend only on global cell coordinates — the seam-continuity requirement.
//! Each octave seeds its own `Fbm<Perlin>` the way the teacher's
//! `Chunk::generate` seeds `Fbm`, `RidgedMulti`, `Simplex` with `seed + k`
//! offsets.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One octave's JSON arguments: a weight (`amplitude`) and an octave count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseArgs {
    pub amplitude: f64,
    pub octaves: f64,
}

/// A weighted sum of `Fbm<Perlin>` generators built from a list of
/// `NoiseArgs`, each seeded from a shared world seed offset by its index.
pub struct NoiseStack {
    layers: Vec<(f64, Fbm<Perlin>)>,
}

impl NoiseStack {
    /// Build a stack from validated noise arguments and a world seed.
    #[must_use]
    pub fn build(args: &[NoiseArgs], world_seed: u32) -> Self {
        let layers = args
            .iter()
            .enumerate()
            .map(|(k, a)| {
                let seed = world_seed.wrapping_add(k as u32);
                let octaves = a.octaves.round().max(1.0) as usize;
                let fbm = Fbm::<Perlin>::new(seed).set_octaves(octaves);
                (a.amplitude, fbm)
            })
            .collect();
        Self { layers }
    }

    /// Sample the stack at chunk-relative coordinates, matching the
    /// original's `sum(weight * n([i / CHUNK_SIZE, j / CHUNK_SIZE, z]))`.
    #[must_use]
    pub fn sample(&self, i: f64, j: f64, z: f64) -> f64 {
        self.layers.iter().map(|(w, n)| w * n.get([i, j, z])).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Validate a noise argument list, collecting every violation rather than
/// stopping at the first (per `GenerationConfig::validate`'s contract).
pub fn validate_noise_args(args: &[NoiseArgs], issues: &mut Vec<ValidationError>) {
    if args.is_empty() {
        issues.push(ValidationError::EmptyNoiseStack);
        return;
    }
    for (index, a) in args.iter().enumerate() {
        if !a.amplitude.is_finite() {
            issues.push(ValidationError::NonFiniteAmplitude { index, amplitude: a.amplitude });
        }
        if !(a.octaves.is_finite() && a.octaves > 0.0) {
            issues.push(ValidationError::NonPositiveOctaves { index, octaves: a.octaves });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_coordinates_and_seed_give_same_sample() {
        let args = vec![NoiseArgs { amplitude: 1.0, octaves: 3.0 }];
        let a = NoiseStack::build(&args, 7);
        let b = NoiseStack::build(&args, 7);
        assert_eq!(a.sample(3.0, 4.0, 0.0), b.sample(3.0, 4.0, 0.0));
    }

    #[test]
    fn empty_args_is_rejected() {
        let mut issues = Vec::new();
        validate_noise_args(&[], &mut issues);
        assert!(matches!(issues[0], ValidationError::EmptyNoiseStack));
    }

    #[test]
    fn non_finite_amplitude_is_rejected() {
        let mut issues = Vec::new();
        validate_noise_args(&[NoiseArgs { amplitude: f64::NAN, octaves: 2.0 }], &mut issues);
        assert!(issues.iter().any(|i| matches!(i, ValidationError::NonFiniteAmplitude { .. })));
    }
}
