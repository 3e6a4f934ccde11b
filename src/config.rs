use crate::board::grid_cells;
use crate::common::ConfigError;
use crate::game::Side;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Display name for a ship of the given length in the standard fleet.
pub fn ship_name(length: usize) -> &'static str {
    match length {
        5 => "Carrier",
        4 => "Battleship",
        3 => "Destroyer/Submarine",
        2 => "Patrol Boat",
        _ => "ship",
    }
}

/// Construction-time parameters of a match. Both sides use the same board
/// size and fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_size: usize,
    /// Ship lengths each side must place before play starts.
    pub fleet: Vec<usize>,
    /// Side that attacks first.
    pub first: Side,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            first: Side::One,
        }
    }
}

impl MatchConfig {
    pub fn new(board_size: usize, fleet: Vec<usize>) -> Self {
        Self {
            board_size,
            fleet,
            first: Side::One,
        }
    }

    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    /// Check that the board is non-empty and addressable, and that every ship
    /// can fit on it.
    ///
    /// Whether the whole fleet fits at once is not checked; that depends on
    /// where the ships go.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if grid_cells(self.board_size).is_none() {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for &length in &self.fleet {
            if length < 1 {
                return Err(ConfigError::InvalidShipLength(length));
            }
            if length > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    length,
                    board_size: self.board_size,
                });
            }
        }
        Ok(())
    }

    /// Total number of ship cells in one fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}
