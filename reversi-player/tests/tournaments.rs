//! Long-running matches between policies.

use indicatif::ProgressIterator;
use reversi_player::policies::{GreedyPolicy, MonteCarloPolicy, Policy, RandomPolicy};
use reversi_player::{play_game, play_tournament};

/// Play `games` games and check every one ends in a consistent final position.
fn consistent_games<B: Policy, W: Policy>(mut black: B, mut white: W, games: usize) {
    for _ in (0..games).progress() {
        let game = play_game(&mut black, &mut white);
        assert!(game.is_finished());

        let (blacks, whites) = game.board().count_pieces();
        assert!(blacks + whites <= 64);
        assert_eq!(game.history().len(), game.num_plies());
        assert_eq!(game.board().count_occupied() as usize, 4 + game.num_plies());
    }
}

#[test]
fn random_vs_random() {
    consistent_games(RandomPolicy::new(10), RandomPolicy::new(11), 500);
}

#[test]
fn greedy_vs_random() {
    consistent_games(GreedyPolicy::new(12), RandomPolicy::new(13), 500);
}

#[test]
fn monte_carlo_beats_random() {
    let mut monte_carlo = MonteCarloPolicy::new(16, 16);
    let mut random = RandomPolicy::new(17);
    let tally = play_tournament(&mut monte_carlo, &mut random, 20);
    assert!(tally.black_wins > tally.white_wins);
}
