//! Occupancy grid and the placement validator: bounds, terrain matching
//! and the no-touch adjacency rule.

use alloc::vec;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{kind_of, MapLayout, ShapeDef, ShipKind};
use crate::common::Coord;
use crate::shape::variants_of;

/// Random (origin, variant) trials before a single ship is given up on.
pub const PLACEMENT_TRIALS: usize = 20_000;

/// Occupant of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOwner {
    pub id: u8,
    pub letter: char,
}

/// Per-player ship occupancy, rebuilt on every new game and read-only
/// during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: i32,
    cols: i32,
    cells: Vec<Option<CellOwner>>,
}

impl OccupancyGrid {
    pub fn new(layout: &MapLayout) -> Self {
        Self {
            rows: layout.rows,
            cols: layout.cols,
            cells: vec![None; (layout.rows * layout.cols) as usize],
        }
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row * self.cols + col) as usize)
    }

    /// Occupant at (row, col); `None` for empty or out-of-bounds cells.
    pub fn owner_at(&self, row: i32, col: i32) -> Option<CellOwner> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Whether `variant` anchored at (row0, col0) may legally occupy this
    /// grid: every cell must be in bounds, match the letter's terrain
    /// requirement, and have no occupied cell anywhere in its 3x3
    /// neighbourhood. Any failing cell fails the whole placement.
    pub fn can_place(
        &self,
        layout: &MapLayout,
        variant: &[Coord],
        row0: i32,
        col0: i32,
        letter: char,
    ) -> bool {
        let Some(kind) = kind_of(letter) else {
            return false;
        };
        for &(dr, dc) in variant {
            let (rr, cc) = (row0 + dr, col0 + dc);
            if !layout.in_bounds(rr, cc) {
                return false;
            }
            let land = layout.is_land(rr, cc);
            match kind {
                ShipKind::Ground if !land => return false,
                ShipKind::Sea if land => return false,
                _ => {}
            }
            for nr in rr - 1..=rr + 1 {
                for nc in cc - 1..=cc + 1 {
                    if self.owner_at(nr, nc).is_some() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Write `{id, letter}` into every cell of `variant` anchored at
    /// (row0, col0) and return the absolute cells. Assumes `can_place`
    /// already passed; performs no validation of its own.
    pub fn place_variant(
        &mut self,
        variant: &[Coord],
        row0: i32,
        col0: i32,
        letter: char,
        id: u8,
    ) -> Vec<Coord> {
        let mut placed = Vec::with_capacity(variant.len());
        for &(dr, dc) in variant {
            let (rr, cc) = (row0 + dr, col0 + dc);
            if let Some(i) = self.index(rr, cc) {
                self.cells[i] = Some(CellOwner { id, letter });
                placed.push((rr, cc));
            }
        }
        placed
    }
}

/// Randomly place one ship: shuffle its variant list, then try random
/// origins until a legal spot is found or the trial budget runs out.
pub fn random_place_ship<R: Rng>(
    grid: &mut OccupancyGrid,
    layout: &MapLayout,
    shape: &ShapeDef,
    id: u8,
    rng: &mut R,
) -> Option<Vec<Coord>> {
    let mut variants = variants_of(shape);
    variants.shuffle(rng);
    for _ in 0..PLACEMENT_TRIALS {
        for variant in &variants {
            let max_r = variant.iter().map(|&(r, _)| r).max().unwrap_or(0);
            let max_c = variant.iter().map(|&(_, c)| c).max().unwrap_or(0);
            if max_r >= layout.rows || max_c >= layout.cols {
                continue;
            }
            let row0 = rng.random_range(0..layout.rows - max_r);
            let col0 = rng.random_range(0..layout.cols - max_c);
            if grid.can_place(layout, variant, row0, col0, shape.letter) {
                return Some(grid.place_variant(variant, row0, col0, shape.letter, id));
            }
        }
    }
    None
}
