//! Common types for the game core: shot outcomes and errors.

use core::fmt;

/// Board coordinate as (row, col). Signed so neighbour walks can step off
/// the board and get rejected by a bounds check instead of underflowing.
pub type Coord = (i32, i32);

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water (or on unoccupied land).
    Miss,
    /// Shot hit a ship that still has unhit cells.
    Hit,
    /// Shot hit the last unhit cell of a ship, carrying its letter.
    Sunk(char),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn sunk_letter(&self) -> Option<char> {
        match self {
            ShotOutcome::Sunk(letter) => Some(*letter),
            _ => None,
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate falls outside the current board layout.
    OutOfBounds,
    /// A shot was already recorded at this coordinate.
    AlreadyFired,
    /// Shots are not allowed until every ship is placed.
    FleetNotPlaced,
    /// The board is destroyed; no further shots are processed.
    BoardDestroyed,
    /// Random fleet placement exhausted its retry budget.
    UnplaceableFleet,
    /// A catalog entry references a ship letter with no kind or description.
    UnknownLetter(char),
    /// No ship with this id exists in the fleet.
    UnknownShip(u8),
    /// Map index outside the catalog.
    UnknownMap(usize),
    /// All carpet bombs have been used.
    NoBombsLeft,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::AlreadyFired => write!(f, "A shot was already fired here"),
            GameError::FleetNotPlaced => write!(f, "Fleet placement is not complete"),
            GameError::BoardDestroyed => write!(f, "Board is already destroyed"),
            GameError::UnplaceableFleet => {
                write!(f, "Unable to place the fleet within the retry budget")
            }
            GameError::UnknownLetter(letter) => {
                write!(f, "Catalog has no kind or description for ship '{}'", letter)
            }
            GameError::UnknownShip(id) => write!(f, "No ship with id {} in the fleet", id),
            GameError::UnknownMap(index) => write!(f, "No map at index {}", index),
            GameError::NoBombsLeft => write!(f, "No carpet bombs left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
