use rand::{rngs::SmallRng, Rng};

use crate::{board::Board, common::Coordinate, player::Player, ship::Orientation};

/// Automated player that picks uniformly among legal choices.
///
/// Placement and targeting draw from the board's own lists of legal
/// positions and unattacked cells, so every choice is valid when made.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn pick<T: Copy>(rng: &mut SmallRng, items: &[T]) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.random_range(0..items.len())])
    }
}

impl Player for RandomPlayer {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        length: usize,
    ) -> Option<(Coordinate, Orientation)> {
        pick(rng, &board.legal_placements(length))
    }

    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coordinate> {
        let open: Vec<Coordinate> = board.unattacked_coordinates().collect();
        pick(rng, &open)
    }
}
