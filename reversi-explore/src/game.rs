//! Implements game-level Reversi logic: whose turn it is, passing, and final outcomes.
//!
//! Exploration code works on bare [`Board`]s and [`Turn`]s; [`Game`] is the
//! higher-level record used by players and tournaments.

use crate::board::Board;
use crate::movegen::{self, ChildBoards};
use std::fmt;

/// The side to move.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Turn {
    Black,
    White,
}

impl Default for Turn {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Turn {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Turn::Black => Turn::White,
            Turn::White => Turn::Black,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Black => f.write_str("Black"),
            Turn::White => f.write_str("White"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    BlackWon,
    WhiteWon,
    Tie,
}

impl Outcome {
    /// Classify a final position by disc count.
    pub fn of(board: Board) -> Self {
        let (blacks, whites) = board.count_pieces();
        match blacks.cmp(&whites) {
            std::cmp::Ordering::Greater => Outcome::BlackWon,
            std::cmp::Ordering::Less => Outcome::WhiteWon,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Turn> {
        match self {
            Outcome::BlackWon => Some(Turn::Black),
            Outcome::WhiteWon => Some(Turn::White),
            Outcome::Tie => None,
        }
    }
}

/// A game in progress: the current position, the side to move, and every
/// earlier position in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Turn,
    history: Vec<Board>,
}

impl Default for Game {
    /// The opening position with Black to move.
    fn default() -> Self {
        Self::new(Board::opening(), Turn::default())
    }
}

impl Game {
    /// Start a game from an arbitrary position. If `turn` cannot move but the
    /// other side can, the turn passes immediately.
    pub fn new(board: Board, turn: Turn) -> Self {
        let mut game = Self {
            board,
            turn,
            history: Vec::new(),
        };
        game.settle_turn();
        game
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Positions played before the current one, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of discs placed since the game started.
    pub fn num_plies(&self) -> usize {
        self.history.len()
    }

    /// The positions the side to move can reach this ply, in move-generation order.
    pub fn children(&self) -> ChildBoards {
        movegen::generate_children(self.board, self.turn, false)
    }

    /// Play the move that leads to `child`, which must be one of [`Game::children`].
    pub fn advance(&mut self, child: Board) {
        debug_assert!(self.children().contains(&child), "not a legal successor");
        self.history.push(self.board);
        self.board = child;
        self.turn = !self.turn;
        self.settle_turn();
    }

    /// Returns true once neither side has a legal move.
    pub fn is_finished(&self) -> bool {
        !movegen::has_any_move(self.board)
    }

    /// The result of the game, or `None` while it is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_finished() {
            Some(Outcome::of(self.board))
        } else {
            None
        }
    }

    /// Pass the turn if the side to move is blocked but the other side is not.
    fn settle_turn(&mut self) {
        if movegen::legal_moves(self.board, self.turn).is_empty()
            && !movegen::legal_moves(self.board, !self.turn).is_empty()
        {
            self.turn = !self.turn;
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.outcome().map(Outcome::winner) {
            Some(Some(winner)) => write!(f, "Game over: {} won", winner),
            Some(None) => f.write_str("Game over: tie"),
            None => write!(f, "{} to move", self.turn),
        }
    }
}
