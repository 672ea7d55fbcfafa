//! The `TileCatalog`: owns every loaded `Tile` and resolves them by name or
//! id, mirroring the teacher's `BlockRegistry` (`blocks` + `blocks_by_id`
//! dual-indexed maps, `missing_id`-style sentinel lookups).

use std::collections::HashMap;

use super::{Animation, Direction, Tile, TileId};
use crate::error::CatalogError;

/// Owns the full set of tiles loaded from a manifest, indexed both by name
/// and by numeric id.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    pub tiles: HashMap<String, Tile>,
    pub tiles_by_id: HashMap<TileId, String>,
    pub animations: Vec<Animation>,
    pub sheet_columns: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl TileCatalog {
    /// Register a single tile, failing on id or name collisions.
    pub fn register(&mut self, tile: Tile) -> Result<(), CatalogError> {
        if self.tiles_by_id.contains_key(&tile.id) {
            return Err(CatalogError::DuplicateTileId { id: tile.id.0 });
        }
        if self.tiles.contains_key(&tile.name) {
            return Err(CatalogError::DuplicateTileName { name: tile.name.clone() });
        }
        self.tiles_by_id.insert(tile.id, tile.name.clone());
        self.tiles.insert(tile.name.clone(), tile);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tile> {
        self.tiles.get(name)
    }

    #[must_use]
    pub fn get_by_id(&self, id: TileId) -> Option<&Tile> {
        self.tiles_by_id.get(&id).and_then(|name| self.tiles.get(name))
    }

    /// Look up a tile by id, requiring there be exactly one match (the
    /// original Python's `get_tile` semantics: any count other than one is
    /// an error, not just zero).
    pub fn get_tile_strict(&self, id: TileId) -> Result<&Tile, CatalogError> {
        let found = self.tiles.values().filter(|t| t.id == id).count();
        if found != 1 {
            return Err(CatalogError::AmbiguousOrMissing { id: id.0, found });
        }
        Ok(self.get_by_id(id).expect("exactly one match was just counted"))
    }

    /// Three-character edge code for `tile` facing `dir`, using the
    /// eight-point form when present.
    #[must_use]
    pub fn edge_code(&self, tile: &Tile, dir: Direction) -> Option<String> {
        tile.edge_code(dir)
    }

    /// Sentinel id to use when a requested tile name is missing.
    #[must_use]
    pub fn missing_id(&self) -> TileId {
        TileId(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(name: &str, id: u32, x: &str) -> Tile {
        Tile {
            name: name.to_string(),
            id: TileId(id),
            x: Some(x.to_string()),
            ..Tile::default()
        }
    }

    #[test]
    fn register_rejects_duplicate_id() {
        let mut cat = TileCatalog::default();
        cat.register(tile("a", 0, "gggggggg")).unwrap();
        let err = cat.register(tile("b", 0, "gggggggg")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTileId { id: 0 }));
    }

    #[test]
    fn register_rejects_duplicate_name() {
        let mut cat = TileCatalog::default();
        cat.register(tile("a", 0, "gggggggg")).unwrap();
        let err = cat.register(tile("a", 1, "gggggggg")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTileName { .. }));
    }

    #[test]
    fn get_tile_strict_requires_unique_id() {
        let mut cat = TileCatalog::default();
        cat.register(tile("a", 0, "gggggggg")).unwrap();
        assert!(cat.get_tile_strict(TileId(0)).is_ok());
        assert!(cat.get_tile_strict(TileId(99)).is_err());
    }

    #[test]
    fn get_by_id_round_trips_to_the_registered_name() {
        let mut cat = TileCatalog::default();
        cat.register(tile("grass", 3, "gggggggg")).unwrap();
        cat.register(tile("water", 7, "wwwwwwww")).unwrap();
        assert_eq!(cat.get_by_id(TileId(3)).unwrap().name, "grass");
        assert_eq!(cat.get_by_id(TileId(7)).unwrap().name, "water");
    }

    #[test]
    fn edge_code_extracts_north_edge() {
        let t = tile("a", 0, "01234567");
        assert_eq!(cat_edge(&t, Direction::North), Some("012".to_string()));
        assert_eq!(cat_edge(&t, Direction::East), Some("234".to_string()));
        assert_eq!(cat_edge(&t, Direction::South), Some("654".to_string()));
        assert_eq!(cat_edge(&t, Direction::West), Some("076".to_string()));
    }

    fn cat_edge(t: &Tile, dir: Direction) -> Option<String> {
        t.edge_code(dir)
    }
}
