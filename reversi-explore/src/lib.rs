//! `reversi-explore` enumerates and samples the state space of Reversi.
//!
//! This package is organized in three layers:
//!
//!  - [`bitboard`] contains the raw bit-parallel operations on single-color masks:
//!    directional shifts and fills, and the board symmetries.
//!  - [`Board`] and [`movegen`] implement positions, their canonical forms under the
//!    eight symmetries of the square, and successor generation.
//!  - [`BoardSequence`], [`BoardSet`] and [`explore`] store boards in bulk and walk the
//!    game tree breadth-first or by random depth-first sampling.
//!
//! [`Game`] is a higher-level record with automatic passing and outcomes, used by players.

pub mod bitboard;
pub mod explore;
pub mod hash;
pub mod movegen;
pub mod test_utils;

mod board;
mod game;
mod location;
mod sequence;
mod set;
mod utils;

pub use board::*;
pub use explore::ExploreError;
pub use game::*;
pub use location::*;
pub use movegen::{ChildBoards, MAX_CHILDREN};
pub use sequence::*;
pub use set::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
