//! Notifications emitted toward the UI boundary. The core never formats
//! presentation beyond the human-readable sunk descriptions.

use alloc::string::String;

/// How a single cell result should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Placed,
    Hit,
    Miss,
    /// Miss recorded automatically around a just-sunk ship, excluded from
    /// the visible shot tally.
    AutoMiss,
    Sunk,
}

/// Discrete notification for an external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Cell { row: i32, col: i32, mark: CellMark },
    ShipSunk { letter: char, description: String },
    FleetDestroyed,
    BombStatus { used: u8, left: u8 },
}
