//! Corner classifier: maps the four land types surrounding a cell's corners
//! (`nw`, `ne`, `sw`, `se`) to a `(background, foreground)` tile-name pair,
//! via the literal `TILEMAP` table ported from the original generator.
//!
//! Per the packed-integer design note, each four-character code (`"gggg"`,
//! `"wwwr"`, ...) is packed into a base-3 `u8` at table-build time so lookup
//! is an array index rather than a string hash; the literal string table is
//! kept as the single source of truth and a test asserts the packed table
//! agrees with it (Testable Property 5).

use std::sync::OnceLock;

use crate::catalog::RESERVED_FALLBACK_TILE;
use crate::landtype::LandType;

/// One candidate `(background, foreground)` tile-name pair for a corner
/// code. `None` foreground means no overlay tile.
pub type TileCandidate = (&'static str, Option<&'static str>);

fn code_digit(c: char) -> u8 {
    match c {
        'g' => 0,
        'r' => 1,
        'w' => 2,
        _ => unreachable!("TILEMAP keys only use g/r/w"),
    }
}

/// Pack a four-character code (`nw`, `ne`, `sw`, `se`) into a base-3 `u8`.
#[must_use]
pub fn pack_code(nw: LandType, ne: LandType, sw: LandType, se: LandType) -> u8 {
    let d = |t: LandType| match t {
        LandType::Grass => 0,
        LandType::Rock => 1,
        LandType::Water => 2,
    };
    d(nw) * 27 + d(ne) * 9 + d(sw) * 3 + d(se)
}

fn pack_str(key: &str) -> u8 {
    let chars: Vec<char> = key.chars().collect();
    assert_eq!(chars.len(), 4);
    code_digit(chars[0]) * 27 + code_digit(chars[1]) * 9 + code_digit(chars[2]) * 3 + code_digit(chars[3])
}

macro_rules! tilemap {
    ($($key:literal => [$(($bg:literal, $fg:expr)),+ $(,)?]),+ $(,)?) => {
        &[$(($key, &[$(($bg, $fg)),+] as &[TileCandidate])),+]
    };
}

#[rustfmt::skip]
static TILEMAP_SOURCE: &[(&str, &[TileCandidate])] = tilemap! {
    // iiii
    "gggg" => [("grass_1", None), ("grass_2", None), ("grass_3", None), ("grass_4", None), ("grass_5", None), ("grass_6", None), ("grass_7", None), ("grass_8", None), ("grass_9", None)],
    "wwww" => [("water", None)],
    "rrrr" => [("grass_1", None)],

    // iiij
    "gggw" => [("river_corner_north_west", None)],
    "ggwg" => [("river_corner_north_east", None)],
    "gwgg" => [("river_corner_south_west", None)],
    "wggg" => [("river_corner_south_east", None)],

    "wwwg" => [("river_inv_corner_south_east", None)],
    "wwgw" => [("river_inv_corner_south_west", None)],
    "wgww" => [("river_inv_corner_north_east", None)],
    "gwww" => [("river_inv_corner_north_west", None)],

    "gggr" => [("rock_north_west", None)],
    "ggrg" => [("rock_north_east", None)],
    "grgg" => [("rock_south_west", None)],
    "rggg" => [("rock_south_east", None)],

    "wwwr" => [("water", Some("rock_north_west_2"))],
    "wwrw" => [("water", Some("rock_north_east_2"))],
    "wrww" => [("water", Some("rock_south_west_2"))],
    "rwww" => [("water", Some("rock_south_east_2"))],

    "rrrw" => [("water", Some("rock_corner_south_east_2"))],
    "rrwr" => [("water", Some("rock_corner_south_west_2"))],
    "rwrr" => [("water", Some("rock_corner_north_east_2"))],
    "wrrr" => [("water", Some("rock_corner_north_west_2"))],

    "rrrg" => [("rock_corner_south_east", None)],
    "rrgr" => [("rock_corner_south_west", None)],
    "rgrr" => [("rock_corner_north_east", None)],
    "grrr" => [("rock_corner_north_west", None)],

    // iijj
    "wggw" => [("river_diag_anti", None)],
    "gwwg" => [("river_diag", None)],
    "ggww" => [("river_north", None)],
    "gwgw" => [("river_west", None)],
    "wgwg" => [("river_east", None)],
    "wwgg" => [("river_south", None)],

    "wrrw" => [("water", Some("rock_diag_anti_2"))],
    "rwwr" => [("water", Some("rock_diag_2"))],
    "rrww" => [("water", Some("rock_south_2"))],
    "rwrw" => [("water", Some("rock_east_2"))],
    "wrwr" => [("water", Some("rock_west_2"))],
    "wwrr" => [("water", Some("rock_north_2"))],

    "rggr" => [("rock_diag", None)],
    "grrg" => [("rock_diag_anti", None)],
    "ggrr" => [("rock_north", None)],
    "grgr" => [("rock_west", None)],
    "rgrg" => [("rock_east", None)],
    "rrgg" => [("rock_south", None)],

    // iijk
    "wwgr" => [("river_south", Some("rock_north_west_2"))],
    "gwrw" => [("river_west", Some("rock_north_east_2"))],
    "rgww" => [("river_north", Some("rock_south_east_2"))],
    "wrwg" => [("river_east", Some("rock_south_west_2"))],

    "wwrg" => [("river_south", Some("rock_north_east_2"))],
    "rwgw" => [("river_west", Some("rock_south_east_2"))],
    "grww" => [("river_north", Some("rock_south_west_2"))],
    "wgwr" => [("river_east", Some("rock_north_west_2"))],

    "rrwg" => [("river_east", Some("rock_south_2"))],
    "wrgr" => [("river_corner_south_east", Some("rock_west_2"))],
    "gwrr" => [("river_west", Some("rock_north_2"))],
    "rgrw" => [("river_corner_north_west", Some("rock_east_2"))],

    "rrgw" => [("river_corner_north_west", Some("rock_south_2"))],
    "grwr" => [("river_corner_north_east", Some("rock_west_2"))],
    "wgrr" => [("river_east", Some("rock_north_2"))],
    "rwrg" => [("river_south", Some("rock_east_2"))],

    "ggwr" => [("river_corner_north_east", Some("rock_north_west_2"))],
    "wgrg" => [("river_corner_south_east", Some("rock_north_east_2"))],
    "rwgg" => [("river_corner_south_west", Some("rock_south_east_2"))],
    "grgw" => [("river_corner_north_west", Some("rock_south_west_2"))],

    "ggrw" => [("river_corner_north_west", Some("rock_north_east_2"))],
    "rgwg" => [("river_corner_north_east", Some("rock_south_east_2"))],
    "wrgg" => [("river_corner_south_east", Some("rock_south_west_2"))],
    "gwgr" => [("river_corner_south_west", Some("rock_north_west_2"))],

    "gwrg" => [("river_corner_south_west", Some("rock_north_east_2"))],
    "rggw" => [("river_corner_north_west", Some("rock_south_east_2"))],
    "grwg" => [("river_corner_north_east", Some("rock_south_west_2"))],
    "wggr" => [("river_corner_south_east", Some("rock_north_west_2"))],

    "wgrw" => [("river_inv_corner_north_east", Some("rock_north_east_2"))],
    "rwwg" => [("river_inv_corner_south_east", Some("rock_south_east_2"))],
    "wrgw" => [("river_inv_corner_south_west", Some("rock_south_west_2"))],
    "gwwr" => [("river_inv_corner_north_west", Some("rock_north_west_2"))],

    "rwgr" => [("river_corner_south_west", Some("rock_diag_2"))],
    "grrw" => [("river_corner_north_west", Some("rock_diag_anti_2"))],
    "rgwr" => [("river_corner_north_east", Some("rock_diag_2"))],
    "wrrg" => [("river_corner_south_east", Some("rock_diag_anti_2"))],
};

static TILEMAP_PACKED: OnceLock<Vec<Option<&'static [TileCandidate]>>> = OnceLock::new();

fn packed_table() -> &'static [Option<&'static [TileCandidate]>] {
    TILEMAP_PACKED.get_or_init(|| {
        let mut table: Vec<Option<&'static [TileCandidate]>> = vec![None; 81];
        for (key, candidates) in TILEMAP_SOURCE {
            table[pack_str(key) as usize] = Some(candidates);
        }
        table
    })
}

/// Classify a cell's four corners into a `(background, foreground)` tile
/// candidate list. Returns `None` when the code has no entry; the caller is
/// expected to fall back to `RESERVED_FALLBACK_TILE` and record a
/// `Diagnostic::ClassifierMiss`.
#[must_use]
pub fn classify(nw: LandType, ne: LandType, sw: LandType, se: LandType) -> Option<&'static [TileCandidate]> {
    packed_table()[pack_code(nw, ne, sw, se) as usize]
}

/// The candidate list to use when `classify` returns `None`.
#[must_use]
pub fn fallback_candidates() -> &'static [TileCandidate] {
    &[(RESERVED_FALLBACK_TILE, None)]
}
