//! Legal-move and successor-board generation.
//!
//! Legal destinations are found independently for each of the eight ray
//! directions with a shift-and-mask flood from the mover's discs across the
//! opponent's; a destination is legal if some ray ends on it. Captures are then
//! collected by walking back along each ray that made the destination legal.

use crate::bitboard::{Bitboard, Direction};
use crate::board::Board;
use crate::game::Turn;
use crate::location::LocationList;
use arrayvec::ArrayVec;
use derive_more::Deref;

/// Upper bound on successors of a single position: one per empty square.
pub const MAX_CHILDREN: usize = 60;

/// The successor boards of one ply, in move-generation order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deref)]
pub struct ChildBoards(ArrayVec<Board, MAX_CHILDREN>);

impl ChildBoards {
    /// The successors as a plain slice.
    #[inline]
    pub fn as_slice(&self) -> &[Board] {
        self.0.as_slice()
    }

    /// Append `board` unless an equal board is already present.
    // A linear scan is cheaper than hashing for at most 60 entries.
    #[inline]
    fn push_unique(&mut self, board: Board) {
        if !self.0.contains(&board) {
            self.0.push(board);
        }
    }
}

impl<'a> IntoIterator for &'a ChildBoards {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ChildBoards {
    type Item = Board;
    type IntoIter = arrayvec::IntoIter<Board, MAX_CHILDREN>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Legal destinations per direction, indexed like [`Direction::ALL`].
/// A square is set in `rays[i]` if placing there captures along `Direction::ALL[i]`
/// walked backward.
type Rays = [Bitboard; 8];

/// Compute, for every direction, the empty squares reachable from a mover disc
/// across one or more contiguous opponent discs.
#[inline]
fn capture_rays(mover: Bitboard, opponent: Bitboard) -> Rays {
    let empty = !(mover | opponent);
    let mut rays = [Bitboard::default(); 8];
    for (ray, &direction) in rays.iter_mut().zip(Direction::ALL.iter()) {
        let run = mover.fill(opponent, direction) & opponent;
        *ray = run.step(direction) & empty;
    }
    rays
}

#[inline]
fn union(rays: &Rays) -> Bitboard {
    rays.iter().fold(Bitboard::default(), |acc, &ray| acc | ray)
}

/// Get the legal moves for `turn`.
#[inline]
pub fn legal_moves(board: Board, turn: Turn) -> LocationList {
    let (mover, opponent) = board.split(turn);
    LocationList::from(union(&capture_rays(mover, opponent)))
}

/// Returns true if either side has a legal move.
#[inline]
pub fn has_any_move(board: Board) -> bool {
    !legal_moves(board, Turn::Black).is_empty() || !legal_moves(board, Turn::White).is_empty()
}

/// Generate every board reachable by one move of `turn`.
///
/// With `canonical`, each child is reduced to its canonical form and children
/// equal to an earlier one are dropped, so symmetric moves appear once.
/// An empty result means `turn` has no legal move and must pass.
pub fn generate_children(board: Board, turn: Turn, canonical: bool) -> ChildBoards {
    let (mover, opponent) = board.split(turn);
    let rays = capture_rays(mover, opponent);
    let mut children = ChildBoards::default();

    for location in LocationList::from(union(&rays)) {
        let placed: Bitboard = location.into();
        let mut flips = placed;

        for (&ray, &direction) in rays.iter().zip(Direction::ALL.iter()) {
            if (ray & placed).is_empty() {
                continue;
            }

            // The ray is legal here, so the walk ends on a mover disc.
            let back = direction.opposite();
            let mut cursor = placed.step(back);
            while !(cursor & opponent).is_empty() {
                flips |= cursor;
                cursor = cursor.step(back);
            }
        }

        let child = board.claim(turn, flips);
        if canonical {
            children.push_unique(child.canonicalize());
        } else {
            children.0.push(child);
        }
    }

    children
}

/// Shorthand for `generate_children(board, turn, true)`.
#[inline]
pub fn generate_canonical_children(board: Board, turn: Turn) -> ChildBoards {
    generate_children(board, turn, true)
}
