//! Error taxonomy for the catalog, animation, and configuration layers, plus
//! the non-fatal diagnostics produced during generation.

use thiserror::Error;

use crate::catalog::TileId;

/// Failures that can occur while loading or querying a tile catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed tileset manifest: {reason}")]
    Malformed { reason: String },

    #[error("duplicate tile id {id}")]
    DuplicateTileId { id: u32 },

    #[error("duplicate tile name {name:?}")]
    DuplicateTileName { name: String },

    #[error("expected exactly one tile with id {id}, found {found}")]
    AmbiguousOrMissing { id: u32, found: usize },

    #[error("tileset image source {source:?} is not a recognized asset handle")]
    UnknownImageSource { source: String },

    #[error("sheet has non-positive tile dimensions: {columns}x{tile_width}x{tile_height}")]
    InvalidSheetDimensions {
        columns: u32,
        tile_width: u32,
        tile_height: u32,
    },
}

/// Failures that can occur while querying the animation registry.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("expected exactly one animation for tile id {0:?}, found {1}")]
    AmbiguousOrMissing(TileId, usize),
}

/// Failures that can occur while validating a JSON-sourced `GenerationConfig`.
///
/// Unlike the original CLI's argparse type functions, `validate` collects
/// every violation instead of stopping at the first one.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("noise stack must not be empty")]
    EmptyNoiseStack,

    #[error("noise octave {index}: amplitude must be finite, found {amplitude}")]
    NonFiniteAmplitude { index: usize, amplitude: f64 },

    #[error("noise octave {index}: octaves must be positive, found {octaves}")]
    NonPositiveOctaves { index: usize, octaves: f64 },

    #[error("land heights missing required key {key:?}")]
    MissingLandHeightsKey { key: &'static str },

    #[error("chunk size must be nonzero")]
    ZeroChunkSize,
}

/// Failures that can occur while running the WFC solver.
#[derive(Debug, Error)]
pub enum WfcError {
    #[error("WFC tile subset must not be empty")]
    EmptyTileSubset,

    #[error("WFC grid dimensions must be nonzero ({width}x{height})")]
    ZeroSizedGrid { width: usize, height: usize },

    #[error("WFC failed to converge after {attempts} attempt(s)")]
    ExhaustedRetries { attempts: u32 },
}

/// Non-fatal events surfaced during chunk generation or WFC solving. These
/// are collected into a `Vec<Diagnostic>` returned alongside the generated
/// data, and also logged through `log::warn!` so a caller that ignores the
/// return value still sees them.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The corner classifier had no entry for this four-character land code.
    ClassifierMiss { i: i64, j: i64, code: String },
    /// The forest stamper had no entry for this nine-bit neighborhood mask.
    ForestMaskMiss { i: i64, j: i64, mask: String },
    /// A WFC run hit a contradiction and restarted from scratch.
    WfcContradiction { cell_index: usize, attempt: u32 },
}

impl Diagnostic {
    pub fn log(&self) {
        match self {
            Diagnostic::ClassifierMiss { i, j, code } => {
                log::warn!("classifier miss at ({i}, {j}): no tile for code {code:?}");
            }
            Diagnostic::ForestMaskMiss { i, j, mask } => {
                log::warn!("forest mask miss at ({i}, {j}): no tile for mask {mask:?}");
            }
            Diagnostic::WfcContradiction { cell_index, attempt } => {
                log::warn!("WFC contradiction at cell {cell_index} on attempt {attempt}, restarting");
            }
        }
    }
}
