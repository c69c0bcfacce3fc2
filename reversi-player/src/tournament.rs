//! Games between two policies, and tallies over many games.

use crate::policies::Policy;
use log::{debug, info, warn};
use reversi_explore::{Game, Outcome, Turn};
use std::fmt;

/// Win/loss/tie counts over a series of games.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub black_wins: u32,
    pub white_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::BlackWon => self.black_wins += 1,
            Outcome::WhiteWon => self.white_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.ties
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "black {} / white {} / tie {} ({} games)",
            self.black_wins,
            self.white_wins,
            self.ties,
            self.games()
        )
    }
}

/// Play one game from the opening to the end and return the finished record.
///
/// A policy that answers `None` or an index past its choices while it has a
/// move gets the first child played for it, with a warning logged.
pub fn play_game<B, W>(black: &mut B, white: &mut W) -> Game
where
    B: Policy + ?Sized,
    W: Policy + ?Sized,
{
    let mut game = Game::default();

    while !game.is_finished() {
        let turn = game.turn();
        let children = game.children();
        let choice = match turn {
            Turn::Black => black.choose(turn, &children),
            Turn::White => white.choose(turn, &children),
        };

        let child = choice.and_then(|index| children.get(index)).or_else(|| {
            warn!(
                "{:?} policy made no valid choice ({:?}) among {} children; playing the first",
                turn,
                choice,
                children.len()
            );
            children.first()
        });

        match child {
            Some(&child) => game.advance(child),
            None => break,
        }
    }

    game
}

/// Play `games` games with `black` always moving first, and count the results.
pub fn play_tournament<B, W>(black: &mut B, white: &mut W, games: u32) -> Tally
where
    B: Policy + ?Sized,
    W: Policy + ?Sized,
{
    let mut tally = Tally::default();

    for index in 0..games {
        let game = play_game(black, white);
        let outcome = Outcome::of(game.board());
        debug!(
            "game {}: {:?} after {} plies",
            index + 1,
            outcome,
            game.num_plies()
        );
        tally.record(outcome);
    }

    info!("tournament finished: {}", tally);
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{GreedyPolicy, RandomPolicy};
    use reversi_explore::{ChildBoards, MAX_CHILDREN};

    /// Never picks a playable index.
    struct Stubborn {
        answer: Option<usize>,
    }

    impl Policy for Stubborn {
        fn choose(&mut self, _turn: Turn, _choices: &ChildBoards) -> Option<usize> {
            self.answer
        }
    }

    #[test]
    fn games_run_to_completion() {
        let mut black = RandomPolicy::new(0);
        let mut white = GreedyPolicy::new(1);
        let game = play_game(&mut black, &mut white);
        assert!(game.is_finished());
        assert!(game.outcome().is_some());
        assert!(game.num_plies() <= 60);
    }

    #[test]
    fn invalid_choices_fall_back_to_the_first_child() {
        for answer in [None, Some(usize::MAX), Some(MAX_CHILDREN)] {
            let mut black = Stubborn { answer };
            let mut white = RandomPolicy::new(6);
            let game = play_game(&mut black, &mut white);
            assert!(game.is_finished());

            let mut positions = game.history().to_vec();
            positions.push(game.board());

            let mut replay = Game::default();
            for pair in positions.windows(2) {
                assert_eq!(replay.board(), pair[0]);
                if replay.turn() == Turn::Black {
                    assert_eq!(pair[1], replay.children()[0]);
                }
                replay.advance(pair[1]);
            }
            assert_eq!(replay.board(), game.board());
        }
    }

    #[test]
    fn tally_counts_every_game() {
        let mut black = RandomPolicy::new(2);
        let mut white = RandomPolicy::new(3);
        let tally = play_tournament(&mut black, &mut white, 25);
        assert_eq!(tally.games(), 25);
    }

    #[test]
    fn boxed_policies_play() {
        let mut black = crate::policies::PolicyKind::Greedy.build(4);
        let mut white = crate::policies::PolicyKind::Random.build(5);
        let tally = play_tournament(black.as_mut(), white.as_mut(), 3);
        assert_eq!(tally.games(), 3);
    }

    #[test]
    fn record_outcomes() {
        let mut tally = Tally::default();
        tally.record(Outcome::BlackWon);
        tally.record(Outcome::Tie);
        tally.record(Outcome::Tie);
        assert_eq!(
            tally,
            Tally {
                black_wins: 1,
                white_wins: 0,
                ties: 2
            }
        );
    }
}
