//! `reversi-player` plays Reversi on top of `reversi-explore`: move-selection
//! policies, single games, and tournaments between two policies.

pub mod policies;

mod tournament;

pub use tournament::*;
