//! Chunk cache and loader: a FIFO pending queue plus a cache map, processed
//! one chunk per `step()` call so generation cost amortizes across ticks
//! instead of stalling the caller. Grounded on the teacher's streaming
//! pending-queue/budget pattern and `bloodtide`'s `ChunkManager`
//! (`world_to_chunk`, `chunks_in_load_radius`), generalized from Bevy `Vec2`
//! world positions to a plain `(f64, f64)` pair and from voxel chunks to
//! this crate's 2D `Chunk`.

use std::collections::{HashMap, HashSet, VecDeque};

use rayon::prelude::*;

use super::generator::ChunkGenerator;
use super::{Chunk, ChunkCoord, CHUNK_SIZE};
use crate::error::Diagnostic;

/// World-space tile size used to convert a world position into chunk
/// coordinates. The renderer owns the actual pixel tile size; this is only
/// used for `chunks_around`'s position-to-chunk math.
const TILE_SIZE: f64 = 1.0;

#[derive(Default)]
pub struct ChunkCache {
    cache: HashMap<ChunkCoord, Chunk>,
    pending: VecDeque<ChunkCoord>,
    queued: HashSet<ChunkCoord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ChunkCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.cache.get(&coord)
    }

    #[must_use]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.cache.contains_key(&coord)
    }

    /// Queue `coord` for generation, unless it's already cached or already
    /// queued. Never regenerates a chunk already in the cache.
    pub fn request(&mut self, coord: ChunkCoord) {
        if self.cache.contains_key(&coord) || self.queued.contains(&coord) {
            return;
        }
        self.queued.insert(coord);
        self.pending.push_back(coord);
    }

    /// Generate and cache at most one pending chunk. Returns the coordinate
    /// generated, or `None` if the pending queue was empty.
    pub fn step(&mut self, generator: &ChunkGenerator) -> Option<ChunkCoord> {
        let coord = self.pending.pop_front()?;
        self.queued.remove(&coord);
        if self.cache.contains_key(&coord) {
            return Some(coord);
        }
        let (chunk, diags) = generator.generate(coord, 0.0);
        self.diagnostics.extend(diags);
        self.cache.insert(coord, chunk);
        Some(coord)
    }

    /// Opt-in parallel batch generation for a set of coordinates not yet
    /// cached, using `rayon`, grounded on the teacher's use of `rayon` for
    /// independent background work. Chunks are independent given an
    /// immutable catalog and deterministic noise stack, so this does not
    /// change the result versus calling `step()` repeatedly, only the
    /// wall-clock cost.
    pub fn generate_many(&mut self, coords: &[ChunkCoord], generator: &ChunkGenerator) {
        let todo: Vec<ChunkCoord> = coords.iter().copied().filter(|c| !self.cache.contains_key(c)).collect();
        let results: Vec<(ChunkCoord, Chunk, Vec<Diagnostic>)> = todo
            .par_iter()
            .map(|&coord| {
                let (chunk, diags) = generator.generate(coord, 0.0);
                (coord, chunk, diags)
            })
            .collect();
        for (coord, chunk, diags) in results {
            self.queued.remove(&coord);
            self.diagnostics.extend(diags);
            self.cache.insert(coord, chunk);
        }
    }

    /// Convert a world position into chunk-grid coordinates.
    #[must_use]
    pub fn world_to_chunk(pos: (f64, f64)) -> ChunkCoord {
        let span = CHUNK_SIZE as f64 * TILE_SIZE;
        ChunkCoord::new((pos.0 / span).floor() as i32, (pos.1 / span).floor() as i32)
    }

    /// The window of chunk coordinates around `pos` spanning `h` chunks
    /// vertically and `w` chunks horizontally, per the original
    /// `chunks_around(pos, h=..., w=...)`.
    #[must_use]
    pub fn chunks_around(pos: (f64, f64), h: i32, w: i32) -> Vec<ChunkCoord> {
        let center = Self::world_to_chunk(pos);
        let half_h = h / 2 + 1;
        let half_w = w / 2 + 1;
        let mut out = Vec::new();
        for di in -half_h..half_h {
            for dj in -half_w..half_w {
                out.push(ChunkCoord::new(center.i + di, center.j + dj));
            }
        }
        out
    }
}
