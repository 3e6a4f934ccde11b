//! One side's board: ship occupancy, placement and attack history.

use std::collections::HashMap;

use log::debug;

use crate::common::{AttackError, AttackMark, AttackOutcome, ConfigError, Coordinate, PlacementError};
use crate::ship::{Orientation, Ship, ShipId};

/// Serializable snapshot of a board for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardState {
    pub size: usize,
    /// Row-major occupancy, `size * size` entries.
    pub grid: Vec<Option<ShipId>>,
    pub ships: Vec<Ship>,
    pub misses: Vec<Coordinate>,
    pub hits: Vec<Coordinate>,
}

/// Cell count of a `size`×`size` grid, or `None` if the size is zero or the
/// grid could not be allocated.
pub(crate) fn grid_cells(size: usize) -> Option<usize> {
    let cells = size.checked_mul(size).filter(|_| size >= 1)?;
    let bytes = cells.checked_mul(std::mem::size_of::<Option<ShipId>>())?;
    (bytes <= isize::MAX as usize).then_some(cells)
}

/// Main board state: ship placements, hits, misses.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    grid: Vec<Option<ShipId>>,
    ships: Vec<Ship>,
    attacks: HashMap<Coordinate, AttackMark>,
    misses: Vec<Coordinate>,
    hits: Vec<Coordinate>,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        let cells = grid_cells(size).ok_or(ConfigError::InvalidBoardSize(size))?;
        Ok(Board {
            size,
            grid: vec![None; cells],
            ships: Vec::new(),
            attacks: HashMap::new(),
            misses: Vec::new(),
            hits: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.x * self.size + coord.y)
        } else {
            None
        }
    }

    /// Occupant of a cell. `None` if the coordinate is out of bounds,
    /// `Some(None)` for open water.
    pub fn cell(&self, coord: Coordinate) -> Option<Option<ShipId>> {
        self.index(coord).map(|i| self.grid[i])
    }

    /// Rows of the grid, each cell holding the occupying ship if any.
    pub fn snapshot(&self) -> Vec<Vec<Option<ShipId>>> {
        self.grid.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Number of placed ships not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Coordinates that were attacked and found water, in attack order.
    pub fn missed_attacks(&self) -> &[Coordinate] {
        &self.misses
    }

    /// Coordinates that were attacked and found a ship, in attack order.
    pub fn hit_coordinates(&self) -> &[Coordinate] {
        &self.hits
    }

    /// What an earlier attack at `coord` found, if it was attacked.
    pub fn attack_mark(&self, coord: Coordinate) -> Option<AttackMark> {
        self.attacks.get(&coord).copied()
    }

    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.attacks.contains_key(&coord)
    }

    /// All in-bounds coordinates not attacked yet, row by row.
    pub fn unattacked_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |x| (0..size).map(move |y| Coordinate::new(x, y)))
            .filter(move |c| !self.attacks.contains_key(c))
    }

    /// Returns `true` when every placed ship is sunk. Vacuously `true` before
    /// any ship is placed.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Cells a ship of `length` would occupy from `start` along `orientation`.
    /// Ignores occupancy.
    pub fn placement_cells(
        &self,
        length: usize,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, PlacementError> {
        if length < 1 {
            return Err(PlacementError::InvalidLength(length));
        }
        (0..length)
            .map(|i| {
                let cell = match orientation {
                    Orientation::Horizontal => start.y.checked_add(i).map(|y| Coordinate::new(start.x, y)),
                    Orientation::Vertical => start.x.checked_add(i).map(|x| Coordinate::new(x, start.y)),
                };
                cell.filter(|&c| self.in_bounds(c))
                    .ok_or(PlacementError::OutOfBounds)
            })
            .collect()
    }

    /// Place a ship of `length` starting at `start`. Returns `true` on success;
    /// a refused placement leaves the board untouched.
    pub fn place_ship(&mut self, length: usize, start: Coordinate, orientation: Orientation) -> bool {
        self.try_place_ship(length, start, orientation).is_ok()
    }

    /// Place a ship, reporting why a refused placement was refused.
    pub fn try_place_ship(
        &mut self,
        length: usize,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, PlacementError> {
        if !self.attacks.is_empty() {
            return Err(PlacementError::AttacksStarted);
        }
        let ship = Ship::new(length)?;
        let cells = self.placement_cells(length, start, orientation)?;
        if let Some(&taken) = cells.iter().find(|&&c| self.cell(c) != Some(None)) {
            return Err(PlacementError::Overlap(taken));
        }

        // every cell is validated, commit
        let id = ShipId(self.ships.len());
        for c in cells {
            let i = c.x * self.size + c.y;
            self.grid[i] = Some(id);
        }
        self.ships.push(ship);
        debug!(
            "placed ship {} (length {}) at {} {:?}",
            id.0, length, start, orientation
        );
        Ok(id)
    }

    /// Every position a ship of `length` could be placed at right now.
    /// Length-one ships are only listed horizontally.
    pub fn legal_placements(&self, length: usize) -> Vec<(Coordinate, Orientation)> {
        if length < 1 || !self.attacks.is_empty() {
            return Vec::new();
        }
        let all = Orientation::ALL;
        let orientations = if length == 1 { &all[..1] } else { &all[..] };
        let mut found = Vec::new();
        for x in 0..self.size {
            for y in 0..self.size {
                let start = Coordinate::new(x, y);
                for &orientation in orientations {
                    let fits = self
                        .placement_cells(length, start, orientation)
                        .map(|cells| cells.iter().all(|&c| self.cell(c) == Some(None)))
                        .unwrap_or(false);
                    if fits {
                        found.push((start, orientation));
                    }
                }
            }
        }
        found
    }

    /// Process an attack at `coord`, marking the hit or miss and reporting the result.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, AttackError> {
        let Some(i) = self.index(coord) else {
            return Err(AttackError::OutOfBounds(coord));
        };
        // prevent duplicates
        match self.attacks.get(&coord) {
            Some(AttackMark::Miss) => return Err(AttackError::AlreadyMissed(coord)),
            Some(AttackMark::Hit) => return Err(AttackError::AlreadyHit(coord)),
            None => {}
        }

        let outcome = match self.grid[i] {
            Some(id) => {
                let ship = &mut self.ships[id.0];
                ship.hit();
                self.hits.push(coord);
                self.attacks.insert(coord, AttackMark::Hit);
                AttackOutcome::Hit {
                    coord,
                    id,
                    ship: *ship,
                }
            }
            None => {
                self.misses.push(coord);
                self.attacks.insert(coord, AttackMark::Miss);
                AttackOutcome::Miss { coord }
            }
        };
        debug!("attack at {}: {}", coord, outcome);
        Ok(outcome)
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size,
            grid: b.grid.clone(),
            ships: b.ships.clone(),
            misses: b.misses.clone(),
            hits: b.hits.clone(),
        }
    }
}
