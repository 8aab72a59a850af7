//! Variant generation for ship shapes: rotation, reflection and the
//! table-driven orientation cursor used by interactive placement.

use alloc::vec;
use alloc::vec::Vec;

use crate::catalog::{ShapeDef, Symmetry};
use crate::common::Coord;

/// Rotate a cell sequence 90 degrees: (r, c) -> (c, -r).
pub fn rotated(cells: &[Coord]) -> Vec<Coord> {
    cells.iter().map(|&(r, c)| (c, -r)).collect()
}

/// Reflect a cell sequence vertically: (r, c) -> (-r, c).
pub fn flipped(cells: &[Coord]) -> Vec<Coord> {
    cells.iter().map(|&(r, c)| (-r, c)).collect()
}

/// Shift a cell sequence so its minimum row and column are both zero.
pub fn normalized(cells: &[Coord]) -> Vec<Coord> {
    let min_r = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_c = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    cells.iter().map(|&(r, c)| (r - min_r, c - min_c)).collect()
}

/// All distinct orientations of a shape, normalized, in a fixed order.
/// Fixed yields 1 variant, Linear 2, Axis and Diagonal 4.
pub fn variants_of(shape: &ShapeDef) -> Vec<Vec<Coord>> {
    match shape.symmetry {
        Symmetry::Fixed => vec![normalized(shape.cells)],
        Symmetry::Linear => {
            vec![normalized(shape.cells), normalized(&rotated(shape.cells))]
        }
        Symmetry::Axis => {
            let mut variants = Vec::with_capacity(4);
            let mut current = shape.cells.to_vec();
            for _ in 0..4 {
                variants.push(normalized(&current));
                current = rotated(&current);
            }
            variants
        }
        Symmetry::Diagonal => {
            let flip = flipped(shape.cells);
            vec![
                normalized(shape.cells),
                normalized(&rotated(shape.cells)),
                normalized(&flip),
                normalized(&rotated(&flip)),
            ]
        }
    }
}

/// Index into a shape's variant sequence, with rotate/flip transitions per
/// symmetry class. The tables are deliberately explicit: the diagonal
/// class pairs {base, rotated} and {flip, rotated-flip}, with rotation
/// toggling within a pair and flip swapping pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantCursor {
    symmetry: Symmetry,
    index: usize,
}

impl VariantCursor {
    pub fn new(symmetry: Symmetry) -> Self {
        Self { symmetry, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_rotate(&self) -> bool {
        matches!(
            self.symmetry,
            Symmetry::Axis | Symmetry::Diagonal | Symmetry::Linear
        )
    }

    pub fn can_flip(&self) -> bool {
        matches!(self.symmetry, Symmetry::Axis | Symmetry::Diagonal)
    }

    pub fn rotate(&mut self) {
        self.index = match self.symmetry {
            Symmetry::Fixed => self.index,
            Symmetry::Linear => {
                if self.index == 0 {
                    1
                } else {
                    0
                }
            }
            Symmetry::Axis => (self.index + 1) % 4,
            Symmetry::Diagonal => match self.index {
                0 => 1,
                1 => 0,
                2 => 3,
                _ => 2,
            },
        };
    }

    pub fn rotate_left(&mut self) {
        self.index = match self.symmetry {
            Symmetry::Fixed => self.index,
            Symmetry::Linear => {
                if self.index == 0 {
                    1
                } else {
                    0
                }
            }
            // Wraps 0 -> 3; the other values step down by one.
            Symmetry::Axis => match self.index {
                0 => 3,
                i => i - 1,
            },
            // A left rotation lands on the same orientation as a right
            // rotation for this class: toggle within the pair.
            Symmetry::Diagonal => match self.index {
                0 => 1,
                1 => 0,
                2 => 3,
                _ => 2,
            },
        };
    }

    pub fn flip(&mut self) {
        self.index = match self.symmetry {
            Symmetry::Axis => (self.index + 2) % 4,
            Symmetry::Diagonal => match self.index {
                0 => 2,
                1 => 3,
                2 => 0,
                _ => 1,
            },
            Symmetry::Fixed | Symmetry::Linear => self.index,
        };
    }
}
