//! Ship damage tracking and placement orientation.

use crate::common::ShipError;

/// Orientation of a ship on the board.
///
/// Horizontal ships extend along `y` (across a row), vertical ships extend
/// along `x` (down a column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Identifier of a ship on a single board: its index in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of the ship in its board's placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single vessel of fixed length and its accumulated damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Fails for a zero length.
    pub fn new(length: usize) -> Result<Self, ShipError> {
        if length < 1 {
            return Err(ShipError::InvalidLength(length));
        }
        Ok(Ship { length, hits: 0 })
    }

    /// Register one hit. No-op once the ship is sunk.
    pub fn hit(&mut self) {
        if !self.is_sunk() {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (damage reached its length).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of hits taken so far, never above `length`.
    pub fn hits(&self) -> usize {
        self.hits
    }
}
