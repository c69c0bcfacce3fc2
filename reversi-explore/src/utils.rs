//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Border line drawn above and below a framed board.
pub const FRAME_BORDER: &str = "-----------------";

/// Format 64 characters into a grid with column letters and row numbers.
/// `piece_iter` must yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

/// Format 64 characters into a fixed-width grid framed by border lines:
///
/// ```text
/// -----------------
/// |       o #     |
/// ...
/// -----------------
/// ```
///
/// `piece_iter` must yield exactly 64 items.
pub fn format_framed<T: Iterator<Item = char>>(
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    writeln!(f, "{}", FRAME_BORDER)?;

    for _ in 0..EDGE_LENGTH {
        f.write_str("|")?;
        for col in 0..EDGE_LENGTH {
            write!(f, "{}", piece_iter.next().ok_or(fmt::Error)?)?;
            if col + 1 < EDGE_LENGTH {
                f.write_str(" ")?;
            }
        }
        writeln!(f, "|")?;
    }

    write!(f, "{}", FRAME_BORDER)?;

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
