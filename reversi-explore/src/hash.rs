//! 32-bit board hash functions and a bit-bias diagnostic for comparing them.

use crate::board::Board;

/// Maps a board to a 32-bit code. [`crate::BoardSet`] uses the low bits of the
/// code to choose a home slot, so those bits should be close to uniform.
pub trait BoardHasher {
    fn hash32(&self, board: &Board) -> u32;
}

/// The candidate hash functions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashFunction {
    /// Low 32 bits of the black mask.
    Blacks,
    /// Low 32 bits of the white mask.
    Whites,
    /// Low 32 bits of `blacks + whites`.
    Sum,
    /// Low 32 bits of `blacks * whites`.
    Product,
    /// Low 32 bits of `blacks ^ whites`.
    Xor,
    /// `blacks + whites`, folded by xoring its halves.
    FoldedSum,
    /// `blacks * whites`, folded by xoring its halves.
    FoldedProduct,
    /// `blacks - whites`, folded by xoring its halves.
    FoldedDifference,
    /// `(blacks - whites) * multiplier`, folded by xoring its halves.
    Multiplicative(u64),
}

impl HashFunction {
    /// Multiplier used by the default hash.
    pub const DEFAULT_MULTIPLIER: u64 = 0x114F20237E9B23C7;

    /// Every candidate, in a fixed order suitable for reports.
    pub const CANDIDATES: [HashFunction; 10] = [
        HashFunction::Blacks,
        HashFunction::Whites,
        HashFunction::Sum,
        HashFunction::Product,
        HashFunction::Xor,
        HashFunction::FoldedSum,
        HashFunction::FoldedProduct,
        HashFunction::FoldedDifference,
        HashFunction::Multiplicative(0x118F20237E9B23C7),
        HashFunction::Multiplicative(Self::DEFAULT_MULTIPLIER),
    ];
}

impl Default for HashFunction {
    fn default() -> Self {
        HashFunction::Multiplicative(Self::DEFAULT_MULTIPLIER)
    }
}

impl std::fmt::Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashFunction::Blacks => f.write_str("blacks"),
            HashFunction::Whites => f.write_str("whites"),
            HashFunction::Sum => f.write_str("sum"),
            HashFunction::Product => f.write_str("product"),
            HashFunction::Xor => f.write_str("xor"),
            HashFunction::FoldedSum => f.write_str("folded-sum"),
            HashFunction::FoldedProduct => f.write_str("folded-product"),
            HashFunction::FoldedDifference => f.write_str("folded-difference"),
            HashFunction::Multiplicative(multiplier) => {
                write!(f, "multiplicative({:#018x})", multiplier)
            }
        }
    }
}

#[inline]
fn fold(x: u64) -> u32 {
    (x as u32) ^ ((x >> 32) as u32)
}

impl BoardHasher for HashFunction {
    #[inline]
    fn hash32(&self, board: &Board) -> u32 {
        let blacks = u64::from(board.blacks);
        let whites = u64::from(board.whites);
        match *self {
            HashFunction::Blacks => blacks as u32,
            HashFunction::Whites => whites as u32,
            HashFunction::Sum => blacks.wrapping_add(whites) as u32,
            HashFunction::Product => blacks.wrapping_mul(whites) as u32,
            HashFunction::Xor => (blacks ^ whites) as u32,
            HashFunction::FoldedSum => fold(blacks.wrapping_add(whites)),
            HashFunction::FoldedProduct => fold(blacks.wrapping_mul(whites)),
            HashFunction::FoldedDifference => fold(blacks.wrapping_sub(whites)),
            HashFunction::Multiplicative(multiplier) => {
                fold(blacks.wrapping_sub(whites).wrapping_mul(multiplier))
            }
        }
    }
}

impl<F: Fn(&Board) -> u32> BoardHasher for F {
    #[inline]
    fn hash32(&self, board: &Board) -> u32 {
        self(board)
    }
}

/// Score how far `hasher`'s output bits are from fair coins over `boards`:
/// the largest `|fraction of codes with bit i set - 0.5|` across all 32 bits.
/// 0.0 is ideal, 0.5 means some bit never changes. Returns 0.0 for no boards.
pub fn bit_bias<I, H>(boards: I, hasher: &H) -> f64
where
    I: IntoIterator<Item = Board>,
    H: BoardHasher + ?Sized,
{
    let mut counts = [0u64; 32];
    let mut total = 0u64;

    for board in boards {
        let code = hasher.hash32(&board);
        for (bit, count) in counts.iter_mut().enumerate() {
            *count += u64::from((code >> bit) & 1);
        }
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    counts
        .iter()
        .map(|&count| (count as f64 / total as f64 - 0.5).abs())
        .fold(0.0, f64::max)
}
