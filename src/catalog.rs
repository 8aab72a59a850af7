//! Static game catalog: board layouts, ship shapes, kinds and descriptions.

use alloc::format;
use alloc::string::String;

use crate::common::{Coord, GameError};

/// Carpet bombs available per game.
pub const MAX_BOMBS: u8 = 3;

/// Symmetry class of a ship shape, governing its distinct variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// Rotations are geometrically identical; a single variant.
    Fixed,
    /// Four variants reached by repeated 90-degree rotation.
    Axis,
    /// Four variants: base, rotated, flipped, rotated flip. A flip is not
    /// reachable by rotation alone for this class.
    Diagonal,
    /// Straight piece; horizontal and vertical only.
    Linear,
}

/// Terrain requirement of a ship letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipKind {
    /// Must sit entirely on sea cells.
    Sea,
    /// Must sit entirely on land cells.
    Ground,
    /// May occupy sea or land.
    Air,
}

impl ShipKind {
    /// Verb used in sunk announcements for this kind.
    pub fn sunk_verb(&self) -> &'static str {
        match self {
            ShipKind::Sea => "Sunk",
            ShipKind::Ground => "Destroyed",
            ShipKind::Air => "Shot Down",
        }
    }
}

/// Base definition of a ship shape, shared by all ships of its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub letter: char,
    pub symmetry: Symmetry,
    /// Cell offsets relative to an implicit origin.
    pub cells: &'static [Coord],
}

/// A board layout: dimensions, required ship counts and land terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayout {
    pub title: &'static str,
    pub rows: i32,
    pub cols: i32,
    /// Ships required per letter.
    pub counts: &'static [(char, u8)],
    /// Land row-spans as (row, col_start, col_end), both columns inclusive.
    pub land: &'static [(i32, i32, i32)],
}

impl MapLayout {
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    pub fn is_land(&self, row: i32, col: i32) -> bool {
        self.land
            .iter()
            .any(|&(r, c0, c1)| r == row && c0 <= col && col <= c1)
    }

    pub fn count_for(&self, letter: char) -> u8 {
        self.counts
            .iter()
            .find(|&&(l, _)| l == letter)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }
}

/// Terrain requirement for a ship letter, if known.
pub fn kind_of(letter: char) -> Option<ShipKind> {
    match letter {
        'A' | 'B' | 'C' | 'D' => Some(ShipKind::Sea),
        'P' => Some(ShipKind::Air),
        'G' | 'U' => Some(ShipKind::Ground),
        _ => None,
    }
}

/// Display name for a ship letter, if known.
pub fn description_of(letter: char) -> Option<&'static str> {
    match letter {
        'A' => Some("Aircraft Carrier"),
        'B' => Some("Battleship"),
        'C' => Some("Cruiser"),
        'D' => Some("Destroyer"),
        'P' => Some("Airplane"),
        'G' => Some("Anti-Aircraft Gun"),
        'U' => Some("Underground Bunker"),
        _ => None,
    }
}

/// Full sunk announcement, e.g. "Airplane Shot Down".
pub fn sunk_description(letter: char) -> Option<String> {
    let description = description_of(letter)?;
    let kind = kind_of(letter)?;
    Some(format!("{} {}", description, kind.sunk_verb()))
}

pub static SHAPES: &[ShapeDef] = &[
    ShapeDef {
        letter: 'U',
        symmetry: Symmetry::Axis,
        cells: &[(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (0, 4)],
    },
    ShapeDef {
        letter: 'G',
        symmetry: Symmetry::Fixed,
        cells: &[(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)],
    },
    ShapeDef {
        letter: 'A',
        symmetry: Symmetry::Diagonal,
        cells: &[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
        ],
    },
    ShapeDef {
        letter: 'P',
        symmetry: Symmetry::Axis,
        cells: &[(0, 0), (1, 0), (2, 0), (1, 1)],
    },
    ShapeDef {
        letter: 'B',
        symmetry: Symmetry::Linear,
        cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    },
    ShapeDef {
        letter: 'C',
        symmetry: Symmetry::Linear,
        cells: &[(0, 0), (0, 1), (0, 2), (0, 3)],
    },
    ShapeDef {
        letter: 'D',
        symmetry: Symmetry::Linear,
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
];

pub static MAPS: &[MapLayout] = &[
    MapLayout {
        title: "Jaggered Coast SS",
        rows: 7,
        cols: 18,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 1),
            ('D', 1),
            ('P', 2),
            ('G', 1),
            ('U', 1),
        ],
        land: &[
            (2, 16, 17),
            (2, 0, 2),
            (3, 0, 3),
            (3, 15, 17),
            (4, 15, 17),
            (5, 15, 17),
            (6, 15, 17),
            (4, 0, 7),
            (5, 0, 8),
            (6, 0, 8),
        ],
    },
    MapLayout {
        title: "Jaggered Coast S",
        rows: 7,
        cols: 19,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 1),
            ('D', 2),
            ('P', 2),
            ('G', 1),
            ('U', 1),
        ],
        land: &[
            (1, 16, 18),
            (2, 0, 2),
            (2, 16, 18),
            (3, 0, 3),
            (3, 15, 18),
            (4, 15, 18),
            (5, 15, 18),
            (6, 15, 18),
            (4, 0, 7),
            (5, 0, 8),
            (6, 0, 8),
        ],
    },
    MapLayout {
        title: "Jaggered Coast MS",
        rows: 8,
        cols: 18,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 1),
            ('D', 2),
            ('P', 2),
            ('G', 1),
            ('U', 1),
        ],
        land: &[
            (2, 14, 16),
            (3, 0, 2),
            (3, 14, 17),
            (4, 0, 3),
            (4, 14, 17),
            (5, 14, 17),
            (6, 14, 17),
            (7, 14, 17),
            (5, 0, 8),
            (6, 0, 10),
            (7, 0, 10),
        ],
    },
    MapLayout {
        title: "Jaggered Coast M",
        rows: 9,
        cols: 17,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 1),
            ('D', 1),
            ('P', 2),
            ('G', 2),
            ('U', 1),
        ],
        land: &[
            (3, 13, 15),
            (4, 0, 2),
            (4, 13, 16),
            (5, 0, 3),
            (5, 13, 16),
            (6, 0, 9),
            (6, 13, 16),
            (7, 0, 16),
            (8, 0, 16),
        ],
    },
    MapLayout {
        title: "Jaggered Coast ML",
        rows: 9,
        cols: 18,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 1),
            ('D', 2),
            ('P', 2),
            ('G', 2),
            ('U', 1),
        ],
        land: &[
            (3, 14, 16),
            (4, 0, 2),
            (4, 14, 17),
            (5, 0, 3),
            (5, 14, 17),
            (6, 0, 10),
            (6, 14, 17),
            (7, 0, 17),
            (8, 0, 17),
        ],
    },
    MapLayout {
        title: "Jaggered Coast L",
        rows: 10,
        cols: 18,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 2),
            ('D', 2),
            ('P', 2),
            ('G', 2),
            ('U', 1),
        ],
        land: &[
            (4, 14, 16),
            (5, 0, 2),
            (5, 14, 17),
            (6, 0, 3),
            (6, 14, 17),
            (7, 0, 10),
            (7, 14, 17),
            (8, 0, 17),
            (9, 0, 17),
        ],
    },
    MapLayout {
        title: "Narrow Coast S",
        rows: 11,
        cols: 17,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 2),
            ('D', 2),
            ('P', 3),
            ('G', 1),
            ('U', 1),
        ],
        land: &[
            (7, 13, 16),
            (7, 1, 5),
            (8, 13, 16),
            (8, 0, 10),
            (9, 0, 16),
            (10, 0, 16),
        ],
    },
    MapLayout {
        title: "Jaggered Coast LL",
        rows: 10,
        cols: 20,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 2),
            ('D', 2),
            ('P', 3),
            ('G', 2),
            ('U', 1),
        ],
        land: &[
            (4, 16, 18),
            (5, 1, 4),
            (5, 16, 19),
            (6, 1, 6),
            (6, 16, 19),
            (7, 0, 13),
            (7, 16, 19),
            (8, 0, 19),
            (9, 0, 19),
        ],
    },
    MapLayout {
        title: "Narrow Coast M",
        rows: 12,
        cols: 17,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 2),
            ('D', 3),
            ('P', 4),
            ('G', 1),
            ('U', 1),
        ],
        land: &[
            (8, 13, 16),
            (8, 1, 5),
            (9, 13, 16),
            (9, 0, 10),
            (10, 0, 16),
            (11, 0, 16),
        ],
    },
    MapLayout {
        title: "Jaggered Coast VL",
        rows: 10,
        cols: 21,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 2),
            ('D', 2),
            ('P', 4),
            ('G', 2),
            ('U', 1),
        ],
        land: &[
            (4, 16, 18),
            (5, 1, 4),
            (5, 16, 19),
            (6, 1, 6),
            (6, 16, 19),
            (7, 0, 13),
            (7, 16, 19),
            (8, 0, 20),
            (9, 0, 20),
        ],
    },
    MapLayout {
        title: "Jaggered Coast XL",
        rows: 10,
        cols: 22,
        counts: &[
            ('A', 1),
            ('B', 1),
            ('C', 2),
            ('D', 3),
            ('P', 4),
            ('G', 2),
            ('U', 1),
        ],
        land: &[
            (4, 16, 18),
            (5, 1, 4),
            (5, 16, 19),
            (6, 1, 6),
            (6, 16, 19),
            (7, 0, 13),
            (7, 16, 19),
            (8, 0, 21),
            (9, 0, 21),
        ],
    },
];

/// The game catalog: every layout and shape the engine knows.
#[derive(Debug)]
pub struct Catalog {
    pub maps: &'static [MapLayout],
    pub shapes: &'static [ShapeDef],
}

static CATALOG: Catalog = Catalog {
    maps: MAPS,
    shapes: SHAPES,
};

impl Catalog {
    /// The standard catalog, cross-checked so configuration errors surface
    /// at load time instead of deep inside gameplay.
    pub fn validated() -> Result<&'static Catalog, GameError> {
        for shape in CATALOG.shapes {
            if shape.cells.is_empty()
                || kind_of(shape.letter).is_none()
                || description_of(shape.letter).is_none()
            {
                return Err(GameError::UnknownLetter(shape.letter));
            }
        }
        Ok(&CATALOG)
    }

    pub fn layout(&self, index: usize) -> Result<&'static MapLayout, GameError> {
        self.maps.get(index).ok_or(GameError::UnknownMap(index))
    }

    pub fn shape(&self, letter: char) -> Option<&'static ShapeDef> {
        self.shapes.iter().find(|s| s.letter == letter)
    }
}
