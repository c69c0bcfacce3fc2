//! The [`Board`] value type: one [`Bitboard`] per color plus its symmetry operations.
//!
//! Boards are small `Copy` values and are never mutated in place; every operation
//! returns a new board. By convention, the MSB is the upper-left of the board,
//! and uses row-major order.

use crate::bitboard::Bitboard;
use crate::game::Turn;
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// Starting bitboard for Black.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Glyphs used when rendering a [`Board`].
const MARK_BLACK: char = '#';
const MARK_WHITE: char = 'o';
const MARK_EMPTY: char = ' ';

/// A complete position, stored by color rather than by side to move.
///
/// The derived ordering compares `blacks` first and `whites` as a tiebreak,
/// which is the order canonicalization minimizes over.
/// No square may be set in both masks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Board {
    pub blacks: Bitboard,
    pub whites: Bitboard,
}

impl Board {
    /// The board with no discs at all. Never reachable by play, since every
    /// position keeps at least the four opening discs.
    pub const EMPTY: Board = Board {
        blacks: Bitboard(0),
        whites: Bitboard(0),
    };

    /// Build a board from raw color masks.
    #[inline]
    pub fn new(blacks: u64, whites: u64) -> Self {
        debug_assert_eq!(blacks & whites, 0, "a square cannot hold both colors");
        Self {
            blacks: Bitboard(blacks),
            whites: Bitboard(whites),
        }
    }

    /// The standard starting position: four center discs, two of each color.
    #[inline]
    pub const fn opening() -> Self {
        Self {
            blacks: BLACK_START,
            whites: WHITE_START,
        }
    }

    /// Returns true for the all-zero board.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.blacks.is_empty() && self.whites.is_empty()
    }

    /// Count the discs of each color: `(blacks, whites)`.
    #[inline]
    pub fn count_pieces(self) -> (u8, u8) {
        (self.blacks.count_occupied(), self.whites.count_occupied())
    }

    /// Total number of discs on the board.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.occupied_mask().count_occupied()
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.blacks | self.whites
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    /// The discs belonging to `turn`'s color.
    #[inline]
    pub fn pieces(self, turn: Turn) -> Bitboard {
        match turn {
            Turn::Black => self.blacks,
            Turn::White => self.whites,
        }
    }

    /// Split into `(mover, opponent)` masks from `turn`'s point of view.
    #[inline]
    pub fn split(self, turn: Turn) -> (Bitboard, Bitboard) {
        match turn {
            Turn::Black => (self.blacks, self.whites),
            Turn::White => (self.whites, self.blacks),
        }
    }

    /// Hand every square in `flips` to `turn`'s color, taking it from the opponent.
    /// Used to place a disc and turn the captured discs in one step.
    #[inline]
    pub fn claim(self, turn: Turn, flips: Bitboard) -> Self {
        match turn {
            Turn::Black => Self {
                blacks: self.blacks | flips,
                whites: self.whites & !flips,
            },
            Turn::White => Self {
                blacks: self.blacks & !flips,
                whites: self.whites | flips,
            },
        }
    }

    /// Rotate a quarter turn counter-clockwise.
    #[inline]
    pub fn rotate_ccw(self) -> Self {
        Self {
            blacks: self.blacks.rotate_ccw(),
            whites: self.whites.rotate_ccw(),
        }
    }

    /// Mirror the board top to bottom.
    #[inline]
    pub fn flip_top_bottom(self) -> Self {
        Self {
            blacks: self.blacks.flip_top_bottom(),
            whites: self.whites.flip_top_bottom(),
        }
    }

    /// All eight images under the symmetries of the square, in the order
    /// `[id, r, r², r³, f, f·r, f·r², f·r³]` where `r` is [`Board::rotate_ccw`]
    /// and `f` is [`Board::flip_top_bottom`] applied after the rotation.
    pub fn symmetries(self) -> [Board; 8] {
        let r1 = self.rotate_ccw();
        let r2 = r1.rotate_ccw();
        let r3 = r2.rotate_ccw();
        [
            self,
            r1,
            r2,
            r3,
            self.flip_top_bottom(),
            r1.flip_top_bottom(),
            r2.flip_top_bottom(),
            r3.flip_top_bottom(),
        ]
    }

    /// The smallest of the eight symmetric images, so every symmetry class
    /// has exactly one representative.
    #[inline]
    pub fn canonicalize(self) -> Self {
        let images = self.symmetries();
        let mut best = images[0];
        for image in &images[1..] {
            if *image < best {
                best = *image;
            }
        }
        best
    }

    /// Returns true if this board is already its own canonical form.
    #[inline]
    pub fn is_canonical(self) -> bool {
        self.canonicalize() == self
    }

    fn glyphs(self) -> impl Iterator<Item = char> {
        self.blacks
            .into_iter()
            .zip(self.whites)
            .map(|square| match square {
                (true, _) => MARK_BLACK,
                (false, true) => MARK_WHITE,
                (false, false) => MARK_EMPTY,
            })
    }
}

/// Render the board as a bordered 8x8 grid: `#` for black, `o` for white.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_framed(self.glyphs(), f)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "unrecognized square glyph {:?}", _0)]
    UnknownGlyph(#[error(not(source))] char),
}

/// Parse 64 square glyphs in row-major order from the upper-left.
/// `X`, `#` or `*` is black; `O` or `o` is white; `-`, `.` or `_` is empty.
/// Whitespace (including line breaks) is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(glyphs.len()));
        }

        let mut blacks = 0u64;
        let mut whites = 0u64;
        for (square, glyph) in glyphs.into_iter().enumerate() {
            let bit = 1u64 << (NUM_SPACES - 1 - square);
            match glyph {
                'X' | 'x' | '#' | '*' => blacks |= bit,
                'O' | 'o' => whites |= bit,
                '-' | '.' | '_' => {}
                other => return Err(ParseBoardError::UnknownGlyph(other)),
            }
        }

        Ok(Self::new(blacks, whites))
    }
}
