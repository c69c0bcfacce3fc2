//! Flat Monte Carlo move selection: score every choice by random playouts.

use super::Policy;
use arrayvec::ArrayVec;
use itertools::Itertools;
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use reversi_explore::{ChildBoards, Game, Outcome, Turn, MAX_CHILDREN};

/// Plays `playouts` uniformly random games from every choice and picks the one
/// with the best average result for the mover.
pub struct MonteCarloPolicy {
    playouts: usize,
    rng: StdRng,
}

impl MonteCarloPolicy {
    pub fn new(playouts: usize, seed: u64) -> Self {
        Self {
            playouts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Average playout value of `choice` for `turn`: 1 per win, 0.5 per tie.
    fn evaluate(&mut self, turn: Turn, choice: Game) -> f64 {
        let total: f64 = (0..self.playouts)
            .map(|_| value_for(turn, random_playout(choice.clone(), &mut self.rng)))
            .sum();
        total / self.playouts.max(1) as f64
    }
}

impl Policy for MonteCarloPolicy {
    fn choose(&mut self, turn: Turn, choices: &ChildBoards) -> Option<usize> {
        let values: ArrayVec<f64, MAX_CHILDREN> = choices
            .iter()
            .map(|&child| self.evaluate(turn, Game::new(child, !turn)))
            .collect();
        trace!("average playout values: {:.3?}", values);

        values.iter().position_max_by(|a, b| a.total_cmp(b))
    }
}

/// Play uniformly random moves until neither side can move.
fn random_playout<R: Rng + ?Sized>(mut game: Game, rng: &mut R) -> Outcome {
    while let Some(&child) = game.children().choose(rng) {
        game.advance(child);
    }
    Outcome::of(game.board())
}

fn value_for(turn: Turn, outcome: Outcome) -> f64 {
    match outcome.winner() {
        None => 0.5,
        Some(winner) if winner == turn => 1.0,
        _ => 0.0,
    }
}
