use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackOutcome, Coordinate, PlacementError},
    ship::Orientation,
};

/// Interface implemented by automated strategies that drive one side.
///
/// A strategy only ever reads boards; every mutation goes through
/// [`Board`] or [`crate::Match`] so illegal choices are rejected there.
pub trait Player: Send {
    /// Pick a position for a ship of `length` on `board`, or `None` if no
    /// legal position exists.
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        length: usize,
    ) -> Option<(Coordinate, Orientation)>;

    /// Choose the next coordinate to attack on the opponent's board. `None`
    /// declines the move, e.g. when every cell has been attacked.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coordinate>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _coord: Coordinate, _outcome: &AttackOutcome) {}

    /// Place all of `lengths` onto a standalone board.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<(), PlacementError> {
        for &length in lengths {
            let (start, orientation) = self
                .choose_placement(rng, board, length)
                .ok_or(PlacementError::NoRoom(length))?;
            board.try_place_ship(length, start, orientation)?;
        }
        Ok(())
    }
}
