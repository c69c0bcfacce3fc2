//! Low-level bitboard operations.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board, and uses row-major order: square
//! `(x, y)` lives at bit `63 - (8 * y + x)`, counting from the LSB.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on a Reversi board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(pub(crate) u64);

/// Every column except the leftmost (x = 0).
const NOT_LEFT_COLUMN: u64 = 0x7f7f7f7f7f7f7f7f;

/// Every column except the rightmost (x = 7).
const NOT_RIGHT_COLUMN: u64 = 0xfefefefefefefefe;

const FULL_MASK: u64 = 0xffffffffffffffff;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Mirror the rows: row `y` swaps with row `7 - y`.
    #[inline]
    pub fn flip_top_bottom(self) -> Self {
        Self(self.0.swap_bytes())
    }

    /// Reflect across the main diagonal: square `(x, y)` moves to `(y, x)`.
    // Delta-swap transpose from the Chess Programming Wiki ("Flip about the Diagonal").
    #[inline]
    pub fn transpose(self) -> Self {
        const K1: u64 = 0x5500550055005500;
        const K2: u64 = 0x3333000033330000;
        const K4: u64 = 0x0f0f0f0f00000000;

        let mut bits = self.0;
        bits = delta_swap(bits, K4, 28);
        bits = delta_swap(bits, K2, 14);
        bits = delta_swap(bits, K1, 7);
        Self(bits)
    }

    /// Rotate a quarter turn counter-clockwise: square `(x, y)` of the result
    /// holds square `(7 - y, x)` of `self`.
    #[inline]
    pub fn rotate_ccw(self) -> Self {
        self.transpose().flip_top_bottom()
    }

    /// Move every bit one square in `direction`, dropping bits that would
    /// leave the board or wrap onto the opposite edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (amount, toward_msb) = direction.shift();
        let shifted = if toward_msb {
            self.0 << amount
        } else {
            self.0 >> amount
        };
        Self(shifted & direction.landing_mask())
    }

    /// Flood `self` along `direction` through contiguous runs of `propagators`,
    /// returning `self` plus every propagator square reached.
    // Kogge-Stone occluded fill: the propagator set is doubled up each round so a
    // run of any length on an 8x8 board is covered in three shift-and-mask steps.
    #[inline]
    pub fn fill(self, propagators: Bitboard, direction: Direction) -> Self {
        let (amount, toward_msb) = direction.shift();
        let shift = |bits: u64, by: u32| {
            if toward_msb {
                bits << by
            } else {
                bits >> by
            }
        };

        let mut generators = self.0;
        let mut pro = propagators.0 & direction.landing_mask();

        generators |= pro & shift(generators, amount);
        pro &= shift(pro, amount);
        generators |= pro & shift(generators, 2 * amount);
        pro &= shift(pro, 2 * amount);
        generators |= pro & shift(generators, 4 * amount);

        Self(generators)
    }
}

#[inline]
fn delta_swap(bits: u64, mask: u64, delta: u32) -> u64 {
    let tmp = mask & (bits ^ (bits << delta));
    bits ^ tmp ^ (tmp >> delta)
}

/// One of the eight directions a capture ray can run in.
/// North is toward row 0, east toward column 7.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Bit distance of one step, and whether the step shifts toward the MSB.
    #[inline]
    const fn shift(self) -> (u32, bool) {
        match self {
            Direction::North => (8, true),
            Direction::South => (8, false),
            Direction::East => (1, false),
            Direction::West => (1, true),
            Direction::NorthEast => (7, true),
            Direction::NorthWest => (9, true),
            Direction::SouthEast => (9, false),
            Direction::SouthWest => (7, false),
        }
    }

    /// Squares a single step in this direction may land on without wrapping.
    #[inline]
    const fn landing_mask(self) -> u64 {
        match self {
            Direction::North | Direction::South => FULL_MASK,
            Direction::East | Direction::NorthEast | Direction::SouthEast => NOT_LEFT_COLUMN,
            Direction::West | Direction::NorthWest | Direction::SouthWest => NOT_RIGHT_COLUMN,
        }
    }
}

/// Iterator for the bits in a [`Bitboard`], in row-major order from the upper-left.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: u32, y: u32) -> u64 {
        1u64 << (63 - (8 * y + x))
    }

    /// Coordinate-by-coordinate reference for geometric permutations.
    fn permute(bits: u64, source_of: impl Fn(u32, u32) -> (u32, u32)) -> u64 {
        let mut out = 0;
        for y in 0..8 {
            for x in 0..8 {
                let (sx, sy) = source_of(x, y);
                if bits & square(sx, sy) != 0 {
                    out |= square(x, y);
                }
            }
        }
        out
    }

    const SAMPLES: [u64; 5] = [
        0x0000000810000000,
        0x8000000000000001,
        0x0123456789abcdef,
        0xf0e1d2c3b4a59687,
        0x00ff00ff00ff00ff,
    ];

    #[test]
    fn transpose_matches_reference() {
        for bits in SAMPLES {
            assert_eq!(
                Bitboard(bits).transpose().0,
                permute(bits, |x, y| (y, x)),
                "{:#018x}",
                bits
            );
        }
    }

    #[test]
    fn rotate_matches_reference() {
        for bits in SAMPLES {
            assert_eq!(
                Bitboard(bits).rotate_ccw().0,
                permute(bits, |x, y| (7 - y, x))
            );
        }
    }

    #[test]
    fn flip_matches_reference() {
        for bits in SAMPLES {
            assert_eq!(
                Bitboard(bits).flip_top_bottom().0,
                permute(bits, |x, y| (x, 7 - y))
            );
        }
    }

    #[test]
    fn four_rotations_are_identity() {
        for bits in SAMPLES {
            let board = Bitboard(bits);
            let spun = board.rotate_ccw().rotate_ccw().rotate_ccw().rotate_ccw();
            assert_eq!(spun, board);
        }
    }

    #[test]
    fn rotate_moves_top_right_to_top_left() {
        assert_eq!(Bitboard(square(7, 0)).rotate_ccw(), Bitboard(square(0, 0)));
        assert_eq!(Bitboard(square(0, 0)).rotate_ccw(), Bitboard(square(0, 7)));
    }

    #[test]
    fn step_does_not_wrap() {
        assert!(Bitboard(square(7, 3)).step(Direction::East).is_empty());
        assert!(Bitboard(square(0, 3)).step(Direction::West).is_empty());
        assert!(Bitboard(square(7, 3)).step(Direction::NorthEast).is_empty());
        assert!(Bitboard(square(0, 3)).step(Direction::SouthWest).is_empty());
        assert!(Bitboard(square(3, 0)).step(Direction::North).is_empty());
        assert!(Bitboard(square(3, 7)).step(Direction::South).is_empty());
    }

    #[test]
    fn step_moves_one_square() {
        let center = Bitboard(square(3, 3));
        assert_eq!(center.step(Direction::North), Bitboard(square(3, 2)));
        assert_eq!(center.step(Direction::South), Bitboard(square(3, 4)));
        assert_eq!(center.step(Direction::East), Bitboard(square(4, 3)));
        assert_eq!(center.step(Direction::West), Bitboard(square(2, 3)));
        assert_eq!(center.step(Direction::NorthEast), Bitboard(square(4, 2)));
        assert_eq!(center.step(Direction::NorthWest), Bitboard(square(2, 2)));
        assert_eq!(center.step(Direction::SouthEast), Bitboard(square(4, 4)));
        assert_eq!(center.step(Direction::SouthWest), Bitboard(square(2, 4)));
    }

    #[test]
    fn opposite_steps_cancel() {
        let center = Bitboard(square(4, 4));
        for direction in Direction::ALL {
            assert_eq!(center.step(direction).step(direction.opposite()), center);
        }
    }

    #[test]
    fn fill_stops_at_gaps() {
        // Row 0: generator at x=0, propagators at x=1,2 and x=4.
        let generator = Bitboard(square(0, 0));
        let pro = Bitboard(square(1, 0) | square(2, 0) | square(4, 0));
        let filled = generator.fill(pro, Direction::East);
        assert_eq!(filled, Bitboard(square(0, 0) | square(1, 0) | square(2, 0)));
    }

    #[test]
    fn fill_covers_longest_run() {
        let generator = Bitboard(square(0, 5));
        let run: u64 = (1..7).map(|x| square(x, 5)).sum();
        let filled = generator.fill(Bitboard(run), Direction::East);
        assert_eq!(filled, Bitboard(run | square(0, 5)));
    }

    #[test]
    fn bits_are_row_major() {
        let bits: Vec<bool> = Bitboard(square(1, 0)).into_iter().collect();
        assert_eq!(bits.len(), 64);
        assert!(bits[1]);
        assert_eq!(bits.iter().filter(|&&b| b).count(), 1);
    }
}
