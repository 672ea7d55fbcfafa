//! Loads a `TileCatalog` (plus its `AnimationRegistry` and passive
//! `Character` records) from the JSON tileset manifest spec.md's External
//! Interfaces section describes. Loading happens once at startup; there is
//! no hot-reload watcher here, unlike the teacher's RON loader, because the
//! manifest is treated as immutable for the lifetime of a generation run.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::{Animation, AnimationRegistry, AnimationStep, Character, SpriteHandle, Tile, TileCatalog, TileId};
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct Manifest {
    overworld: Overworld,
    #[serde(default)]
    characters: HashMap<String, CharacterDef>,
}

#[derive(Debug, Deserialize)]
struct Overworld {
    image: ImageDef,
    tiles: HashMap<String, TileDef>,
    #[serde(default)]
    animations: Vec<AnimationDef>,
}

#[derive(Debug, Deserialize)]
struct ImageDef {
    #[serde(default)]
    source: String,
    tile_width: u32,
    tile_height: u32,
    columns: u32,
}

#[derive(Debug, Deserialize)]
struct TileDef {
    id: u32,
    /// Eight-point form. Authoritative over `n`/`e`/`s`/`w` when present.
    #[serde(default)]
    x: Option<String>,
    #[serde(default, rename = "n")]
    north: Option<String>,
    #[serde(default, rename = "e")]
    east: Option<String>,
    #[serde(default, rename = "s")]
    south: Option<String>,
    #[serde(default, rename = "w")]
    west: Option<String>,
    #[serde(default)]
    transparent: bool,
    #[serde(default)]
    animation: bool,
}

#[derive(Debug, Deserialize)]
struct AnimationDef {
    id: u32,
    animation: Vec<AnimationStepDef>,
}

#[derive(Debug, Deserialize)]
struct AnimationStepDef {
    id: u32,
    duration: u32,
}

#[derive(Debug, Deserialize)]
struct CharacterDef {
    #[serde(default)]
    image: Option<ImageDef>,
    #[serde(default)]
    animations: HashMap<String, Vec<u32>>,
}

/// Everything a manifest load produces: the tile catalog, its animation
/// registry, and the passive character sprite table.
pub struct LoadedTileset {
    pub catalog: TileCatalog,
    pub animations: AnimationRegistry,
    pub characters: HashMap<String, Character>,
}

impl TileCatalog {
    /// Load a catalog (and its sibling animation/character data) from a JSON
    /// manifest string.
    pub fn load_from_json(source: &str) -> Result<LoadedTileset, CatalogError> {
        let manifest: Manifest = serde_json::from_str(source)
            .map_err(|e| CatalogError::Malformed { reason: e.to_string() })?;

        let image = &manifest.overworld.image;
        if image.columns == 0 || image.tile_width == 0 || image.tile_height == 0 {
            return Err(CatalogError::InvalidSheetDimensions {
                columns: image.columns,
                tile_width: image.tile_width,
                tile_height: image.tile_height,
            });
        }

        let mut catalog = TileCatalog {
            sheet_columns: image.columns,
            tile_width: image.tile_width,
            tile_height: image.tile_height,
            ..TileCatalog::default()
        };

        for (name, def) in &manifest.overworld.tiles {
            catalog.register(Tile {
                name: name.clone(),
                id: TileId(def.id),
                x: def.x.clone(),
                north: def.north.clone(),
                east: def.east.clone(),
                south: def.south.clone(),
                west: def.west.clone(),
                transparent: def.transparent,
                animation: def.animation,
            })?;
        }

        catalog.animations = manifest
            .overworld
            .animations
            .iter()
            .map(|a| Animation {
                id: TileId(a.id),
                animation: a
                    .animation
                    .iter()
                    .map(|s| AnimationStep { id: TileId(s.id), duration: s.duration })
                    .collect(),
            })
            .collect();

        let animations = AnimationRegistry::new(catalog.animations.clone());

        let characters = manifest
            .characters
            .into_iter()
            .map(|(name, def)| {
                let actions = def
                    .animations
                    .into_iter()
                    .map(|(action, ids)| {
                        (action, ids.into_iter().map(SpriteHandle).collect())
                    })
                    .collect();
                (name, Character { actions })
            })
            .collect();

        Ok(LoadedTileset { catalog, animations, characters })
    }

    /// Load from a manifest file on disk.
    pub fn load_from_path(path: &Path) -> Result<LoadedTileset, CatalogError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Malformed { reason: e.to_string() })?;
        Self::load_from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "overworld": {
            "image": { "source": "overworld.png", "tile_width": 16, "tile_height": 16, "columns": 4 },
            "tiles": {
                "grass_1": { "id": 0, "x": "gggggggg", "transparent": false, "animation": false },
                "water": { "id": 1, "x": "wwwwwwww", "transparent": false, "animation": true }
            },
            "animations": [
                { "id": 1, "animation": [ { "id": 1, "duration": 1 }, { "id": 2, "duration": 1 } ] }
            ]
        },
        "characters": {
            "hero": { "animations": { "walk": [10, 11, 12] } }
        }
    }"#;

    #[test]
    fn loads_tiles_animations_and_characters() {
        let loaded = TileCatalog::load_from_json(MANIFEST).unwrap();
        assert!(loaded.catalog.get("grass_1").is_some());
        assert_eq!(loaded.catalog.sheet_columns, 4);
        assert!(loaded.animations.steps_for(TileId(1)).is_ok());
        assert_eq!(loaded.characters["hero"].actions["walk"].len(), 3);
    }

    #[test]
    fn rejects_zero_columns() {
        let bad = MANIFEST.replace("\"columns\": 4", "\"columns\": 0");
        assert!(TileCatalog::load_from_json(&bad).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(TileCatalog::load_from_json("not json").is_err());
    }

    #[test]
    fn loads_four_edge_form_tiles() {
        let manifest = r#"{
            "overworld": {
                "image": { "source": "overworld.png", "tile_width": 16, "tile_height": 16, "columns": 4 },
                "tiles": {
                    "plain": { "id": 0, "n": "aaa", "e": null, "s": "bbb", "w": null, "transparent": false, "animation": false }
                },
                "animations": []
            },
            "characters": {}
        }"#;
        let loaded = TileCatalog::load_from_json(manifest).unwrap();
        let tile = loaded.catalog.get("plain").unwrap();
        assert_eq!(tile.edge_code(crate::catalog::Direction::North), Some("aaa".to_string()));
        assert_eq!(tile.edge_code(crate::catalog::Direction::East), None);
    }
}
