//! Code for working with [`Location`]s on the Reversi board.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A single square on the board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the board, which can be iterated to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`].
    #[inline]
    pub fn from_onehot(bitboard: Bitboard) -> Self {
        assert_eq!(bitboard.count_occupied(), 1);
        Self(bitboard)
    }

    /// Convert from a bit index counted from the LSB (0 is the lower-right square).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self(Bitboard::from(1 << index))
    }

    /// Convert into a bit index counted from the LSB.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Convert from column `x` and row `y`, both in `0..8`, with `(0, 0)` upper-left.
    pub fn from_xy(x: usize, y: usize) -> Self {
        assert!(x < EDGE_LENGTH && y < EDGE_LENGTH);
        let index = 63 - (y * EDGE_LENGTH + x);
        Self::from_index(index as u8)
    }

    /// Get the `(x, y)` coordinates.
    pub fn to_xy(self) -> (usize, usize) {
        let square = 63 - self.to_index() as usize;
        (square % EDGE_LENGTH, square / EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("A4": column letter, then row number).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_xy();
        let col_str = "ABCDEFGH".chars().nth(x).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(y).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        !(loc_bitboard & self.0).is_empty()
    }

    /// Returns whether the list holds no locations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if !(1..=8).contains(&row) || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_xy(col, row - 1))
    }
}

impl ExactSizeIterator for LocationList {}

/// Yields locations from the lowest bit upward (lower-right square first).
impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1 << bitboard.trailing_zeros()).into();
        self.0 ^= next_move;

        Some(Location(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_xy() {
        assert_eq!(Location::from_xy(0, 0), Location(Bitboard::from(1 << 63)));
        assert_eq!(Location::from_xy(7, 7), Location(Bitboard::from(1)));
        assert_eq!(Location::from_xy(1, 0), Location(Bitboard::from(1 << 62)));
        assert_eq!(Location::from_xy(0, 1), Location(Bitboard::from(1 << 55)));
    }

    #[test]
    #[should_panic]
    fn location_from_xy_fail() {
        Location::from_xy(8, 0);
    }

    #[test]
    fn location_to_xy() {
        assert_eq!(Location(Bitboard::from(1 << 63)).to_xy(), (0, 0));
        assert_eq!(Location(Bitboard::from(1)).to_xy(), (7, 7));
        assert_eq!(Location::from_xy(5, 2).to_xy(), (5, 2));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(
            Location::from_str("A1"),
            Ok(Location(Bitboard::from(1 << 63)))
        );
        assert_eq!(Location::from_str("h8"), Ok(Location(Bitboard::from(1))));
        assert_eq!(Location::from_str("D7"), Ok(Location::from_xy(3, 6)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(Bitboard::from(1)).to_string(), "H8");
        assert_eq!(Location(Bitboard::from(1 << 63)).to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
    }

    #[test]
    fn location_list_iterates_every_square() {
        let list = LocationList::from(Bitboard::from(0b1011));
        assert_eq!(list.len(), 3);
        let indices: Vec<u8> = list.map(Location::to_index).collect();
        assert_eq!(indices, vec![0, 1, 3]);
    }

    #[test]
    fn location_list_contains() {
        let list = LocationList::from(Bitboard::from(1 << 63));
        assert!(list.contains(Location::from_xy(0, 0)));
        assert!(!list.contains(Location::from_xy(1, 0)));
    }
}
