//! Common types for broadside: coordinates, attack outcomes and errors.

use core::fmt;

use crate::ship::{Ship, ShipId};

/// A cell on a board. `x` selects the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What an earlier attack on a cell found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttackMark {
    Hit,
    Miss,
}

/// Result of an accepted attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum AttackOutcome {
    /// Attack struck a ship. `ship` is the ship's state after the hit.
    Hit {
        coord: Coordinate,
        id: ShipId,
        ship: Ship,
    },
    /// Attack found open water.
    Miss { coord: Coordinate },
}

impl AttackOutcome {
    /// Attacked coordinate.
    pub fn coord(&self) -> Coordinate {
        match *self {
            AttackOutcome::Hit { coord, .. } | AttackOutcome::Miss { coord } => coord,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }

    /// Returns `true` if this attack sank the ship it hit.
    pub fn sunk(&self) -> bool {
        match self {
            AttackOutcome::Hit { ship, .. } => ship.is_sunk(),
            AttackOutcome::Miss { .. } => false,
        }
    }

    /// The ship that was hit, if any.
    pub fn ship(&self) -> Option<(ShipId, Ship)> {
        match *self {
            AttackOutcome::Hit { id, ship, .. } => Some((id, ship)),
            AttackOutcome::Miss { .. } => None,
        }
    }

    pub fn mark(&self) -> AttackMark {
        if self.is_hit() {
            AttackMark::Hit
        } else {
            AttackMark::Miss
        }
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::Hit { ship, .. } if ship.is_sunk() => {
                write!(f, "Hit! Sunk {}!", crate::config::ship_name(ship.length()))
            }
            AttackOutcome::Hit { .. } => write!(f, "Hit!"),
            AttackOutcome::Miss { .. } => write!(f, "Miss!"),
        }
    }
}

/// Errors returned by ship construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// Ship length must be at least one.
    InvalidLength(usize),
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidLength(len) => {
                write!(f, "Ship length must be at least 1, got {}", len)
            }
        }
    }
}

impl std::error::Error for ShipError {}

/// Errors returned when validating board or match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size is zero or too large to allocate.
    InvalidBoardSize(usize),
    /// A match needs at least one ship per fleet.
    EmptyFleet,
    /// A fleet entry has length zero.
    InvalidShipLength(usize),
    /// A fleet entry cannot fit on the board in any orientation.
    ShipTooLong { length: usize, board_size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize(size) => {
                write!(f, "Invalid board size {}", size)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::InvalidShipLength(len) => {
                write!(f, "Ship length must be at least 1, got {}", len)
            }
            ConfigError::ShipTooLong { length, board_size } => write!(
                f,
                "Ship of length {} does not fit on a {}x{} board",
                length, board_size, board_size
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ShipError> for ConfigError {
    fn from(err: ShipError) -> Self {
        match err {
            ShipError::InvalidLength(len) => ConfigError::InvalidShipLength(len),
        }
    }
}

/// Reasons a ship placement was refused. Refused placements never mutate the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship length must be at least one.
    InvalidLength(usize),
    /// At least one cell would fall outside the board.
    OutOfBounds,
    /// At least one cell is already occupied by another ship.
    Overlap(Coordinate),
    /// The board has already received attacks.
    AttacksStarted,
    /// The match is no longer accepting placements.
    WrongPhase,
    /// No ship of this length is still waiting to be placed in the fleet.
    NotInFleet(usize),
    /// No legal position exists for a ship of this length.
    NoRoom(usize),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength(len) => {
                write!(f, "Ship length must be at least 1, got {}", len)
            }
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap(coord) => {
                write!(f, "Ship placement overlaps another ship at {}", coord)
            }
            PlacementError::AttacksStarted => {
                write!(f, "Ships cannot be placed after attacks have started")
            }
            PlacementError::WrongPhase => write!(f, "Ship placement is closed"),
            PlacementError::NotInFleet(len) => {
                write!(f, "No unplaced ship of length {} in the fleet", len)
            }
            PlacementError::NoRoom(len) => {
                write!(f, "No room left for a ship of length {}", len)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

impl From<ShipError> for PlacementError {
    fn from(err: ShipError) -> Self {
        match err {
            ShipError::InvalidLength(len) => PlacementError::InvalidLength(len),
        }
    }
}

/// Reasons an attack was rejected. Rejected attacks never change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttackError {
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// Coordinate was attacked before and found water.
    AlreadyMissed(Coordinate),
    /// Coordinate was attacked before and found a ship.
    AlreadyHit(Coordinate),
    /// The attacker is not the active player, or the match is not in progress.
    NotYourTurn,
}

impl AttackError {
    /// Returns `true` for the repeat-attack rejections.
    pub fn is_already_attacked(&self) -> bool {
        matches!(self, AttackError::AlreadyMissed(_) | AttackError::AlreadyHit(_))
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds(_) => write!(f, "Coordinates out of bounds."),
            AttackError::AlreadyMissed(_) => write!(f, "Already missed this spot."),
            AttackError::AlreadyHit(_) => write!(f, "Already hit this spot."),
            AttackError::NotYourTurn => write!(f, "It is not your turn."),
        }
    }
}

impl std::error::Error for AttackError {}
