//! Game session: layout selection, board lifecycle, manual fire, carpet
//! bombs and the placement entry point.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Board, BoardPhase};
use crate::catalog::{sunk_description, Catalog, MapLayout, MAX_BOMBS};
use crate::common::{Coord, GameError, ShotOutcome};
use crate::events::GameEvent;

/// How this session's fleet gets onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Fleet is placed automatically on every new game.
    Random,
    /// Fleet is placed ship by ship through `place_attempt`.
    Manual,
}

/// Aggregated result of one carpet bomb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BombReport {
    pub hits: u32,
    pub sunk: Vec<char>,
}

impl BombReport {
    pub fn summary(&self) -> String {
        if self.hits == 0 {
            return String::from("The carpet bomb missed everything!");
        }
        if self.sunk.is_empty() {
            return format!("{} hits", self.hits);
        }
        if let [letter] = self.sunk[..] {
            return format!(
                "{} hits and {}",
                self.hits,
                sunk_description(letter).unwrap_or_default()
            );
        }
        let mut message = format!("{} hits,", self.hits);
        for &letter in &self.sunk {
            message.push_str(" and ");
            message.push_str(&sunk_description(letter).unwrap_or_default());
        }
        message.push_str(" destroyed");
        message
    }
}

/// One game against one board. Sessions are independent; several can run
/// side by side with different layouts.
pub struct GameSession {
    map_index: usize,
    layout: &'static MapLayout,
    placement: Placement,
    board: Board,
    bombs_used: u8,
    carpet_mode: bool,
    pending: Vec<GameEvent>,
}

impl GameSession {
    pub fn new<R: Rng>(
        map_index: usize,
        placement: Placement,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let catalog = Catalog::validated()?;
        let layout = catalog.layout(map_index)?;
        let mut session = GameSession {
            map_index,
            layout,
            placement,
            board: Board::new(layout),
            bombs_used: 0,
            carpet_mode: false,
            pending: Vec::new(),
        };
        session.new_game(rng)?;
        Ok(session)
    }

    /// Reset fleet, shots and occupancy for the current layout.
    pub fn new_game<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.board = Board::new(self.layout);
        self.bombs_used = 0;
        self.carpet_mode = false;
        self.pending.clear();
        if self.placement == Placement::Random {
            self.board.place_randomly(rng)?;
        }
        log::info!("new game on '{}'", self.layout.title);
        Ok(())
    }

    /// Switch to another layout; this always starts a new game.
    pub fn change_map<R: Rng>(&mut self, map_index: usize, rng: &mut R) -> Result<(), GameError> {
        let catalog = Catalog::validated()?;
        self.layout = catalog.layout(map_index)?;
        self.map_index = map_index;
        self.new_game(rng)
    }

    pub fn map_index(&self) -> usize {
        self.map_index
    }

    pub fn layout(&self) -> &'static MapLayout {
        self.layout
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn shots_taken(&self) -> usize {
        self.board.shots_taken()
    }

    pub fn bombs_used(&self) -> u8 {
        self.bombs_used
    }

    pub fn bombs_left(&self) -> u8 {
        MAX_BOMBS - self.bombs_used
    }

    pub fn carpet_mode(&self) -> bool {
        self.carpet_mode
    }

    /// Manual single shot.
    pub fn fire(&mut self, row: i32, col: i32) -> Result<ShotOutcome, GameError> {
        self.board.fire(row, col)
    }

    /// Toggle carpet-bomb mode; ignored once the board is finished or the
    /// bombs are spent. Returns the resulting mode.
    pub fn toggle_carpet_mode(&mut self) -> bool {
        if self.bombs_used < MAX_BOMBS && !self.board.is_destroyed() {
            self.carpet_mode = !self.carpet_mode;
            self.pending.push(GameEvent::BombStatus {
                used: self.bombs_used,
                left: self.bombs_left(),
            });
        }
        self.carpet_mode
    }

    /// Drop one carpet bomb on the 3x3 block centred on (row, col). The
    /// use is consumed up front; duplicate cells inside the blast are
    /// skipped silently. Reverts to single-shot mode when the last bomb
    /// is spent.
    pub fn carpet_fire(&mut self, row: i32, col: i32) -> Result<BombReport, GameError> {
        // No use is consumed before the fleet is down; mirrors the
        // single-shot rejection during the placing phase.
        if self.board.phase() == BoardPhase::Placing {
            return Err(GameError::FleetNotPlaced);
        }
        if self.board.is_destroyed() {
            return Err(GameError::BoardDestroyed);
        }
        if self.bombs_used >= MAX_BOMBS {
            return Err(GameError::NoBombsLeft);
        }
        if !self.layout.in_bounds(row, col) {
            return Err(GameError::OutOfBounds);
        }
        self.bombs_used += 1;
        let mut report = BombReport {
            hits: 0,
            sunk: Vec::new(),
        };
        for dr in -1..=1 {
            for dc in -1..=1 {
                let (nr, nc) = (row + dr, col + dc);
                if !self.layout.in_bounds(nr, nc) {
                    continue;
                }
                match self.board.fire(nr, nc) {
                    Ok(outcome) => {
                        if outcome.is_hit() {
                            report.hits += 1;
                        }
                        if let Some(letter) = outcome.sunk_letter() {
                            report.sunk.push(letter);
                        }
                    }
                    // Duplicate cell, or the fleet went down mid-blast.
                    Err(_) => {}
                }
            }
        }
        if self.bombs_used >= MAX_BOMBS {
            self.carpet_mode = false;
        }
        self.pending.push(GameEvent::BombStatus {
            used: self.bombs_used,
            left: self.bombs_left(),
        });
        Ok(report)
    }

    /// Placement entry point for manually placed sessions. Returns the
    /// absolute cells, or `None` on any illegal placement (no mutation).
    pub fn place_attempt(
        &mut self,
        ship_id: u8,
        variant_index: usize,
        row: i32,
        col: i32,
    ) -> Option<Vec<Coord>> {
        if self.placement != Placement::Manual {
            return None;
        }
        self.board.place_attempt(ship_id, variant_index, row, col)
    }

    /// Give up and expose the fleet; ends the game.
    pub fn reveal(&mut self) {
        log::info!("fleet revealed on '{}'", self.layout.title);
        self.board.reveal();
    }

    /// Drain pending notifications: board events first, then session
    /// level ones (bomb status), in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let mut events = self.board.drain_events();
        events.append(&mut self.pending);
        events
    }
}
