//! Ships and the fleet: identity, placed cells, hit tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::Rng;

use crate::catalog::{MapLayout, ShapeDef, Symmetry, SHAPES};
use crate::common::{Coord, GameError};
use crate::grid::{random_place_ship, OccupancyGrid};

/// Whole-board placement retries before a layout is declared unplaceable.
pub const FLEET_PLACEMENT_RETRIES: usize = 100;

/// One ship instance: shared shape definition plus per-game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: u8,
    def: &'static ShapeDef,
    cells: Vec<Coord>,
    hits: BTreeSet<Coord>,
    sunk: bool,
}

impl Ship {
    pub fn new(id: u8, def: &'static ShapeDef) -> Self {
        Self {
            id,
            def,
            cells: Vec::new(),
            hits: BTreeSet::new(),
            sunk: false,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn letter(&self) -> char {
        self.def.letter
    }

    pub fn symmetry(&self) -> Symmetry {
        self.def.symmetry
    }

    pub fn def(&self) -> &'static ShapeDef {
        self.def
    }

    /// Absolute placed cells; empty until the ship is placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn hits(&self) -> &BTreeSet<Coord> {
        &self.hits
    }

    pub fn sunk(&self) -> bool {
        self.sunk
    }

    pub(crate) fn place(&mut self, cells: Vec<Coord>) {
        self.cells = cells;
        self.hits.clear();
        self.sunk = false;
    }

    pub(crate) fn record_hit(&mut self, at: Coord) {
        self.hits.insert(at);
    }

    pub(crate) fn set_sunk(&mut self) {
        self.sunk = true;
    }
}

/// Ordered set of ships for one player, ids sequential from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Build the fleet a layout requires: one ship per required copy of
    /// each catalog shape.
    pub fn create(layout: &MapLayout) -> Self {
        let mut ships = Vec::new();
        let mut id = 1u8;
        for def in SHAPES {
            for _ in 0..layout.count_for(def.letter) {
                ships.push(Ship::new(id, def));
                id += 1;
            }
        }
        Fleet { ships }
    }

    /// Build a fleet from an explicit shape list. Mostly useful for tests
    /// and scripted scenarios.
    pub fn from_shapes(defs: &[&'static ShapeDef]) -> Self {
        let ships = defs
            .iter()
            .enumerate()
            .map(|(i, def)| Ship::new(i as u8 + 1, def))
            .collect();
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: u8) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub(crate) fn ship_mut(&mut self, id: u8) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.id == id)
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(|s| s.is_placed())
    }

    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.sunk)
    }

    /// Hit coordinates on ships that are not yet sunk. These anchor the
    /// hunter's chase mode.
    pub fn active_hits(&self) -> Vec<Coord> {
        self.ships
            .iter()
            .filter(|s| !s.sunk)
            .flat_map(|s| s.hits.iter().copied())
            .collect()
    }

    /// Place every ship at random, retrying the whole board from scratch
    /// when any single ship cannot be fitted.
    pub(crate) fn place_all<R: Rng>(
        &mut self,
        layout: &MapLayout,
        grid: &mut OccupancyGrid,
        rng: &mut R,
    ) -> Result<(), GameError> {
        for _ in 0..FLEET_PLACEMENT_RETRIES {
            *grid = OccupancyGrid::new(layout);
            for ship in &mut self.ships {
                ship.place(Vec::new());
            }
            let mut ok = true;
            for ship in &mut self.ships {
                match random_place_ship(grid, layout, ship.def, ship.id, rng) {
                    Some(cells) => ship.place(cells),
                    None => {
                        ok = false;
                        break;
                    }
                }
            }
            if ok {
                return Ok(());
            }
        }
        Err(GameError::UnplaceableFleet)
    }
}
