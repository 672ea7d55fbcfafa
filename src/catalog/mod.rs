//! Tile catalog: tile metadata, animation groups, and passive character
//! sprite records, loaded once from a JSON manifest.
//!
//! Pixel data is explicitly out of scope here: the catalog only tracks which
//! `SpriteHandle` a tile uses and the bookkeeping (`columns`, tile size) a
//! caller needs to cut that sprite out of its own asset table.
//!
//! ```
//! use tilecraft::catalog::TileCatalog;
//!
//! let manifest = r#"{
//!   "overworld": {
//!     "image": { "source": "overworld.png", "tile_width": 16, "tile_height": 16, "columns": 8 },
//!     "tiles": {
//!       "grass_1": { "id": 0, "x": "gggggggg", "transparent": false, "animation": false }
//!     },
//!     "animations": []
//!   },
//!   "characters": {}
//! }"#;
//! let catalog = TileCatalog::load_from_json(manifest).unwrap();
//! assert!(catalog.get("grass_1").is_some());
//! ```

pub mod animation;
pub mod loader;
pub mod registry;

pub use animation::AnimationRegistry;
pub use registry::TileCatalog;

use serde::{Deserialize, Serialize};

/// Compact numeric identifier for a tile, analogous to the teacher's
/// `BlockId`, widened to `u32` since tile catalogs in this domain are not
/// bounded to 256 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// Opaque handle into a caller-owned sprite table. The catalog never decodes
/// images; it only remembers which handle a tile maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

/// A single tile definition as loaded from the manifest.
///
/// Two equivalent edge encodings are supported, per the eight-point vs.
/// four-edge duality: the four-edge fields (`north`/`east`/`south`/`west`,
/// each independently nullable), or the eight-point `x` string. When a tile
/// carries both, `x` is authoritative and the four-edge fields are ignored
/// for compatibility purposes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub id: TileId,
    /// Eight-point corner/edge connector code (`nw,n,ne,e,se,s,sw,w`), when
    /// present.
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub north: Option<String>,
    #[serde(default)]
    pub east: Option<String>,
    #[serde(default)]
    pub south: Option<String>,
    #[serde(default)]
    pub west: Option<String>,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub animation: bool,
}

impl Tile {
    /// Extract the three-character edge code for a cardinal direction.
    /// Prefers the eight-point `x` string when present, per the index rules:
    /// `n = x[0..3]`, `e = x[2..5]`, `s = reverse(x[4..7])`, `w = (x[0], x[7], x[6])`.
    /// Falls back to the matching four-edge field otherwise.
    #[must_use]
    pub fn edge_code(&self, dir: Direction) -> Option<String> {
        if let Some(code) = self.eight_point_edge_code(dir) {
            return Some(code);
        }
        match dir {
            Direction::North => self.north.clone(),
            Direction::East => self.east.clone(),
            Direction::South => self.south.clone(),
            Direction::West => self.west.clone(),
        }
    }

    fn eight_point_edge_code(&self, dir: Direction) -> Option<String> {
        let x: Vec<char> = self.x.as_ref()?.chars().collect();
        if x.len() < 8 {
            return None;
        }
        Some(match dir {
            Direction::North => [x[0], x[1], x[2]].iter().collect(),
            Direction::East => [x[2], x[3], x[4]].iter().collect(),
            Direction::South => [x[6], x[5], x[4]].iter().collect(),
            Direction::West => [x[0], x[7], x[6]].iter().collect(),
        })
    }
}

/// The four cardinal directions a tile edge can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// One frame of an animation sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationStep {
    pub id: TileId,
    pub duration: u32,
}

/// A named sequence of animation frames for a single tile id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub id: TileId,
    pub animation: Vec<AnimationStep>,
}

/// A passive record of named animation sequences for a playable or NPC
/// character, untouched by generation logic.
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub actions: std::collections::HashMap<String, Vec<SpriteHandle>>,
}

/// Reserved tile name used as a fallback marker when the corner classifier
/// or forest stamper has no entry for a computed code.
pub const RESERVED_FALLBACK_TILE: &str = "spell_red";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_point_form_derives_edges_matching_explicit_four_edge_siblings() {
        // S1-adjacent: a tile carrying both forms must agree between them.
        let t = Tile {
            x: Some("01234567".to_string()),
            north: Some("012".to_string()),
            east: Some("234".to_string()),
            south: Some("654".to_string()),
            west: Some("076".to_string()),
            ..Tile::default()
        };
        assert_eq!(t.edge_code(Direction::North), t.north);
        assert_eq!(t.edge_code(Direction::East), t.east);
        assert_eq!(t.edge_code(Direction::South), t.south);
        assert_eq!(t.edge_code(Direction::West), t.west);
    }

    #[test]
    fn eight_point_form_is_authoritative_over_a_disagreeing_sibling() {
        let t = Tile { x: Some("01234567".to_string()), north: Some("xxx".to_string()), ..Tile::default() };
        assert_eq!(t.edge_code(Direction::North), Some("012".to_string()));
    }

    #[test]
    fn four_edge_form_is_used_when_no_eight_point_form_is_present() {
        let t = Tile { north: Some("aaa".to_string()), east: None, ..Tile::default() };
        assert_eq!(t.edge_code(Direction::North), Some("aaa".to_string()));
        assert_eq!(t.edge_code(Direction::East), None);
    }
}
