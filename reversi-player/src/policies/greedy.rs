use super::Policy;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi_explore::{ChildBoards, Turn};

/// Picks the choice that leaves the mover with the most discs.
/// Ties are broken uniformly at random.
pub struct GreedyPolicy {
    rng: StdRng,
}

impl GreedyPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, turn: Turn, choices: &ChildBoards) -> Option<usize> {
        let best: Vec<usize> = choices
            .iter()
            .enumerate()
            .max_set_by_key(|(_, child)| child.pieces(turn).count_occupied())
            .into_iter()
            .map(|(index, _)| index)
            .collect();

        best.choose(&mut self.rng).copied()
    }
}
