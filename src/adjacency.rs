//! Adjacency oracle: given a tile, which other tiles can legally sit to its
//! north/east/south/west. Grounded on `EdgeSide::opposite` /
//! `Connector::matches` (opposite-edge equality) generalized from the Manhattan
//! grid connector rule to the catalog's three-character edge-code strings.

use crate::catalog::{Direction, Tile, TileCatalog};

/// The set of tile names compatible with a given tile on each of its four
/// sides.
#[derive(Debug, Clone, Default)]
pub struct Neighbours {
    pub north: Vec<String>,
    pub east: Vec<String>,
    pub south: Vec<String>,
    pub west: Vec<String>,
}

impl Neighbours {
    #[must_use]
    pub fn side(&self, dir: Direction) -> &[String] {
        match dir {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }
}

/// Two tiles are compatible across `dir` when `a`'s edge facing `dir`
/// equals `b`'s edge facing the opposite direction.
#[must_use]
pub fn edges_match(catalog: &TileCatalog, a: &Tile, dir: Direction, b: &Tile) -> bool {
    match (a.edge_code(dir), b.edge_code(dir.opposite())) {
        (Some(x), Some(y)) => x == y,
        _ => {
            let _ = catalog;
            false
        }
    }
}

/// Compute the full `Neighbours` set for `tile` against every tile in the
/// catalog, one direction at a time.
#[must_use]
pub fn compute_neighbours(catalog: &TileCatalog, tile: &Tile) -> Neighbours {
    let mut out = Neighbours::default();
    for other in catalog.tiles.values() {
        if edges_match(catalog, tile, Direction::North, other) {
            out.north.push(other.name.clone());
        }
        if edges_match(catalog, tile, Direction::East, other) {
            out.east.push(other.name.clone());
        }
        if edges_match(catalog, tile, Direction::South, other) {
            out.south.push(other.name.clone());
        }
        if edges_match(catalog, tile, Direction::West, other) {
            out.west.push(other.name.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileId;

    fn tile(name: &str, id: u32, x: &str) -> Tile {
        Tile { name: name.to_string(), id: TileId(id), x: Some(x.to_string()), ..Tile::default() }
    }

    #[test]
    fn uniform_tiles_are_mutually_compatible_on_every_side() {
        let mut cat = TileCatalog::default();
        cat.register(tile("grass", 0, "gggggggg")).unwrap();
        let grass = cat.get("grass").unwrap().clone();
        let n = compute_neighbours(&cat, &grass);
        assert_eq!(n.north, vec!["grass".to_string()]);
        assert_eq!(n.east, vec!["grass".to_string()]);
        assert_eq!(n.south, vec!["grass".to_string()]);
        assert_eq!(n.west, vec!["grass".to_string()]);
    }

    #[test]
    fn mismatched_edges_are_not_neighbours() {
        let mut cat = TileCatalog::default();
        cat.register(tile("grass", 0, "gggggggg")).unwrap();
        cat.register(tile("water", 1, "wwwwwwww")).unwrap();
        let grass = cat.get("grass").unwrap().clone();
        let n = compute_neighbours(&cat, &grass);
        assert!(!n.north.contains(&"water".to_string()));
    }

    #[test]
    fn eight_point_form_is_authoritative_over_four_edge_siblings() {
        // S1-shaped: A's south edge ("sss") matches B's north edge ("sss"),
        // while A's north edge ("nnn") does not match B's south edge ("ttt"),
        // so B is a south neighbour of A but not a north one.
        let mut cat = TileCatalog::default();
        cat.register(tile("a", 0, "nnnmsssm")).unwrap();
        cat.register(tile("b", 1, "sssmtttm")).unwrap();
        let a = cat.get("a").unwrap().clone();
        let b = cat.get("b").unwrap().clone();
        let na = compute_neighbours(&cat, &a);
        assert!(na.south.contains(&"b".to_string()));
        assert!(na.north.is_empty());
        let nb = compute_neighbours(&cat, &b);
        assert!(nb.north.contains(&"a".to_string()));
    }

    #[test]
    fn adjacency_is_symmetric_across_opposite_directions() {
        // Property 2: b in neighbors(a)[D] iff a in neighbors(b)[opposite(D)].
        let mut cat = TileCatalog::default();
        cat.register(tile("a", 0, "nnnmsssm")).unwrap();
        cat.register(tile("b", 1, "sssmtttm")).unwrap();
        cat.register(tile("c", 2, "gggggggg")).unwrap();
        let tiles: Vec<Tile> = cat.tiles.values().cloned().collect();
        for t in &tiles {
            let neighbours = compute_neighbours(&cat, t);
            for dir in [Direction::North, Direction::East, Direction::South, Direction::West] {
                for name in neighbours.side(dir) {
                    let other = cat.get(name).unwrap();
                    let back = compute_neighbours(&cat, other);
                    assert!(
                        back.side(dir.opposite()).contains(&t.name),
                        "{} in neighbours({})[{dir:?}] but {} not in neighbours({})[{:?}]",
                        name,
                        t.name,
                        t.name,
                        name,
                        dir.opposite()
                    );
                }
            }
        }
    }

    #[test]
    fn null_four_edge_yields_no_neighbours_in_that_direction() {
        let mut cat = TileCatalog::default();
        cat.register(Tile { name: "lone".to_string(), id: TileId(0), north: None, east: Some("x".to_string()), ..Tile::default() }).unwrap();
        cat.register(Tile { name: "other".to_string(), id: TileId(1), south: Some("x".to_string()), ..Tile::default() }).unwrap();
        let lone = cat.get("lone").unwrap().clone();
        let n = compute_neighbours(&cat, &lone);
        assert!(n.north.is_empty());
    }
}
