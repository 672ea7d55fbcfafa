//! Core world-generation library: tile catalog, noise-driven chunked terrain,
//! and a Wave Function Collapse solver over the same tile catalog.
//!
//! The renderer, asset decoding, CLI and logging configuration are external
//! collaborators; this crate only produces data (`Tile`, `Chunk`, `Cell`)
//! for something else to draw.

pub mod catalog;
pub mod adjacency;
pub mod landtype;
pub mod classifier;
pub mod forest;
pub mod noise_stack;
pub mod chunk;
pub mod wfc;
pub mod config;
pub mod error;
pub mod render;
pub mod rng;

pub use catalog::{Animation, AnimationStep, Character, SpriteHandle, Tile, TileCatalog, TileId};
pub use chunk::{Cell, Chunk, ChunkCache, ChunkCoord};
pub use config::GenerationConfig;
pub use error::{AnimationError, CatalogError, Diagnostic, ValidationError, WfcError};
pub use landtype::{LandHeights, LandType};
pub use wfc::{WfcConfig, WfcSolver};
