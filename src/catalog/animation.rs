//! Animation registry: resolves a tile id to its animation frame sequence.
//!
//! Mirrors the original `get_animation_steps` contract: looking a tile id up
//! must find exactly one animation entry, never zero, never more than one.

use super::{Animation, AnimationStep, TileId};
use crate::error::AnimationError;

#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    pub animations: Vec<Animation>,
}

impl AnimationRegistry {
    #[must_use]
    pub fn new(animations: Vec<Animation>) -> Self {
        Self { animations }
    }

    /// Return the ordered frame sequence for `id`, requiring exactly one
    /// matching `Animation` entry.
    pub fn steps_for(&self, id: TileId) -> Result<&[AnimationStep], AnimationError> {
        let matches: Vec<&Animation> = self.animations.iter().filter(|a| a.id == id).collect();
        match matches.as_slice() {
            [only] => Ok(&only.animation),
            other => Err(AnimationError::AmbiguousOrMissing(id, other.len())),
        }
    }

    /// Select the active frame at animation tick `t`, using the original
    /// `(t // ANIMATION_INV_SPEED) % ANIMATION_SEQUENCE_LEN` formula
    /// generalized to the sequence's own length.
    pub fn frame_at(&self, id: TileId, t: u64, inv_speed: u64) -> Result<TileId, AnimationError> {
        let steps = self.steps_for(id)?;
        if steps.is_empty() {
            return Err(AnimationError::AmbiguousOrMissing(id, 0));
        }
        let inv_speed = inv_speed.max(1);
        let idx = ((t / inv_speed) % steps.len() as u64) as usize;
        Ok(steps[idx].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim(id: u32, frame_ids: &[u32]) -> Animation {
        Animation {
            id: TileId(id),
            animation: frame_ids
                .iter()
                .map(|&i| AnimationStep { id: TileId(i), duration: 1 })
                .collect(),
        }
    }

    #[test]
    fn steps_for_requires_exactly_one_match() {
        let reg = AnimationRegistry::new(vec![anim(0, &[10, 11])]);
        assert!(reg.steps_for(TileId(0)).is_ok());
        assert!(reg.steps_for(TileId(1)).is_err());
    }

    #[test]
    fn frame_at_cycles_through_sequence() {
        let reg = AnimationRegistry::new(vec![anim(0, &[10, 11, 12, 13])]);
        assert_eq!(reg.frame_at(TileId(0), 0, 5).unwrap(), TileId(10));
        assert_eq!(reg.frame_at(TileId(0), 5, 5).unwrap(), TileId(11));
        assert_eq!(reg.frame_at(TileId(0), 20, 5).unwrap(), TileId(10));
    }
}
