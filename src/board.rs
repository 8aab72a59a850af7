//! One player's board: fleet, occupancy, shot log and the shot resolver.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::Rng;

use crate::catalog::{sunk_description, MapLayout};
use crate::common::{Coord, GameError, ShotOutcome};
use crate::events::{CellMark, GameEvent};
use crate::fleet::Fleet;
use crate::grid::OccupancyGrid;
use crate::shape::variants_of;

/// Lifecycle of a board. Destroyed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Placing,
    Playing,
    Destroyed,
}

/// Shots fired at one board. Auto-misses around sunk ships are tallied
/// separately and excluded from the visible shot count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotLog {
    fired: BTreeSet<Coord>,
    auto_misses: usize,
}

impl ShotLog {
    pub fn contains(&self, at: Coord) -> bool {
        self.fired.contains(&at)
    }

    fn record(&mut self, at: Coord) -> bool {
        self.fired.insert(at)
    }

    fn record_auto(&mut self, at: Coord) -> bool {
        if self.fired.insert(at) {
            self.auto_misses += 1;
            true
        } else {
            false
        }
    }

    pub fn auto_misses(&self) -> usize {
        self.auto_misses
    }

    /// Visible shot tally.
    pub fn shots_taken(&self) -> usize {
        self.fired.len() - self.auto_misses
    }
}

/// Board state for one player, with the shot resolver as its only
/// play-phase mutation path.
#[derive(Debug, Clone)]
pub struct Board {
    layout: &'static MapLayout,
    fleet: Fleet,
    grid: OccupancyGrid,
    shots: ShotLog,
    phase: BoardPhase,
    events: Vec<GameEvent>,
}

impl Board {
    pub fn new(layout: &'static MapLayout) -> Self {
        Self::with_fleet(layout, Fleet::create(layout))
    }

    pub fn with_fleet(layout: &'static MapLayout, fleet: Fleet) -> Self {
        Board {
            layout,
            fleet,
            grid: OccupancyGrid::new(layout),
            shots: ShotLog::default(),
            phase: BoardPhase::Placing,
            events: Vec::new(),
        }
    }

    pub fn layout(&self) -> &'static MapLayout {
        self.layout
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == BoardPhase::Destroyed
    }

    pub fn shots(&self) -> &ShotLog {
        &self.shots
    }

    pub fn was_fired(&self, row: i32, col: i32) -> bool {
        self.shots.contains((row, col))
    }

    pub fn shots_taken(&self) -> usize {
        self.shots.shots_taken()
    }

    /// Drain pending notifications for the renderer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Place the whole fleet at random and enter the play phase.
    pub fn place_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.fleet.place_all(self.layout, &mut self.grid, rng)?;
        self.phase = BoardPhase::Playing;
        Ok(())
    }

    /// Attempt to place one ship during the placing phase. Returns the
    /// absolute cells on success and `None` on any illegal placement,
    /// leaving all state untouched.
    pub fn place_attempt(
        &mut self,
        ship_id: u8,
        variant_index: usize,
        row0: i32,
        col0: i32,
    ) -> Option<Vec<Coord>> {
        if self.phase != BoardPhase::Placing {
            return None;
        }
        let ship = self.fleet.ship(ship_id)?;
        if ship.is_placed() {
            return None;
        }
        let letter = ship.letter();
        let variants = variants_of(ship.def());
        let variant = variants.get(variant_index)?;
        if !self.grid.can_place(self.layout, variant, row0, col0, letter) {
            return None;
        }
        let cells = self.grid.place_variant(variant, row0, col0, letter, ship_id);
        self.fleet.ship_mut(ship_id)?.place(cells.clone());
        for &(row, col) in &cells {
            self.events.push(GameEvent::Cell {
                row,
                col,
                mark: CellMark::Placed,
            });
        }
        if self.fleet.all_placed() {
            self.phase = BoardPhase::Playing;
        }
        Some(cells)
    }

    /// Resolve a shot at (row, col). Duplicates and out-of-bounds shots
    /// are rejected without mutation. A sinking shot marks the 3x3
    /// surround of every ship cell as automatic misses and may transition
    /// the board to Destroyed.
    pub fn fire(&mut self, row: i32, col: i32) -> Result<ShotOutcome, GameError> {
        if self.phase == BoardPhase::Placing {
            return Err(GameError::FleetNotPlaced);
        }
        if !self.layout.in_bounds(row, col) {
            return Err(GameError::OutOfBounds);
        }
        // Duplicate rejection comes before the terminal-phase check so a
        // repeated coordinate reports "already fired" even after the game
        // has ended.
        if self.shots.contains((row, col)) {
            return Err(GameError::AlreadyFired);
        }
        if self.phase == BoardPhase::Destroyed {
            return Err(GameError::BoardDestroyed);
        }
        let Some(owner) = self.grid.owner_at(row, col) else {
            self.shots.record((row, col));
            self.events.push(GameEvent::Cell {
                row,
                col,
                mark: CellMark::Miss,
            });
            return Ok(ShotOutcome::Miss);
        };

        // The ship lookup comes before any mutation so an inconsistent
        // grid owner cannot leave a half-recorded shot behind.
        let (letter, sunk, cells) = {
            let ship = self
                .fleet
                .ship_mut(owner.id)
                .ok_or(GameError::UnknownShip(owner.id))?;
            ship.record_hit((row, col));
            if ship.hits().len() == ship.cells().len() {
                ship.set_sunk();
                (ship.letter(), true, ship.cells().to_vec())
            } else {
                (ship.letter(), false, Vec::new())
            }
        };
        self.shots.record((row, col));
        self.events.push(GameEvent::Cell {
            row,
            col,
            mark: CellMark::Hit,
        });
        if !sunk {
            return Ok(ShotOutcome::Hit);
        }

        self.events.push(GameEvent::ShipSunk {
            letter,
            description: sunk_description(letter).unwrap_or_default(),
        });
        self.mark_surround(&cells);
        if self.fleet.all_sunk() {
            self.phase = BoardPhase::Destroyed;
            self.events.push(GameEvent::FleetDestroyed);
        }
        Ok(ShotOutcome::Sunk(letter))
    }

    /// Record automatic misses on every unfired in-bounds neighbour of a
    /// sunk ship's cells and re-mark the cells themselves as sunk.
    fn mark_surround(&mut self, cells: &[Coord]) {
        for &(row, col) in cells {
            for nr in row - 1..=row + 1 {
                for nc in col - 1..=col + 1 {
                    if self.layout.in_bounds(nr, nc) && self.shots.record_auto((nr, nc)) {
                        self.events.push(GameEvent::Cell {
                            row: nr,
                            col: nc,
                            mark: CellMark::AutoMiss,
                        });
                    }
                }
            }
            self.events.push(GameEvent::Cell {
                row,
                col,
                mark: CellMark::Sunk,
            });
        }
    }

    /// Give up: expose the fleet and end the game. No further shots are
    /// processed.
    pub fn reveal(&mut self) {
        self.phase = BoardPhase::Destroyed;
    }
}
