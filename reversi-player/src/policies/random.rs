use super::Policy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reversi_explore::{ChildBoards, Turn};

/// Picks uniformly among the choices.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _turn: Turn, choices: &ChildBoards) -> Option<usize> {
        if choices.is_empty() {
            return None;
        }
        Some(self.rng.gen_range(0..choices.len()))
    }
}
