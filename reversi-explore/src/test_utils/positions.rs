use crate::game::Game;
use rand::seq::SliceRandom;
use rand::Rng;

/// Play up to `num_plies` uniformly random moves from the opening.
/// Stops early if the game ends; passes are taken automatically.
pub fn random_position<R: Rng + ?Sized>(num_plies: usize, rng: &mut R) -> Game {
    let mut game = Game::default();

    for _ in 0..num_plies {
        let children = game.children();
        match children.choose(rng) {
            Some(&child) => game.advance(child),
            None => break,
        }
    }

    game
}
