//! [`BoardSet`]: a growable open-addressing hash set of boards.
//!
//! Slots are stored inline in a single buffer of `2^k` boards, probed linearly
//! from the home slot chosen by the low `k` bits of a 32-bit hash.
//!
//! An unused slot holds [`Board::EMPTY`]. That sentinel can never collide with
//! a stored board: every position reachable by play keeps at least the four
//! opening discs, and `add` rejects the empty board outright. Code reusing this
//! set for values without that guarantee needs a separate occupancy flag.

use crate::board::Board;
use crate::hash::{BoardHasher, HashFunction};
use log::debug;
use std::mem;

/// Capacity exponent of a fresh set (4096 slots).
pub const DEFAULT_LOG_CAPACITY: u32 = 12;

/// Load factor bound, as a fraction: `size <= 7/10 * capacity` at all times.
const MAX_LOAD_NUMERATOR: usize = 7;
const MAX_LOAD_DENOMINATOR: usize = 10;

enum Probe {
    /// The board is stored at this slot.
    Found(usize),
    /// The board is absent; this is the first free slot on its probe path.
    Vacant(usize),
    /// Every slot was visited without finding the board or a free slot.
    Saturated,
}

#[derive(Clone, Debug)]
pub struct BoardSet<H = HashFunction> {
    slots: Vec<Board>,
    size: usize,
    log_capacity: u32,
    hasher: H,
}

impl Default for BoardSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSet {
    /// Create an empty set with the default hash function and capacity.
    pub fn new() -> Self {
        Self::with_hash(HashFunction::default())
    }

    /// Create an empty set with `2^log_capacity` slots.
    pub fn with_log_capacity(log_capacity: u32) -> Self {
        Self::with_hasher_and_log_capacity(HashFunction::default(), log_capacity)
    }
}

impl<H: BoardHasher> BoardSet<H> {
    /// Create an empty set that places boards with `hasher`.
    pub fn with_hash(hasher: H) -> Self {
        Self::with_hasher_and_log_capacity(hasher, DEFAULT_LOG_CAPACITY)
    }

    pub fn with_hasher_and_log_capacity(hasher: H, log_capacity: u32) -> Self {
        assert!(
            log_capacity < usize::BITS,
            "capacity exponent {} is too large",
            log_capacity
        );
        Self {
            slots: vec![Board::EMPTY; 1 << log_capacity],
            size: 0,
            log_capacity,
            hasher,
        }
    }

    /// Number of boards stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The capacity exponent `k`, where `capacity() == 2^k`.
    #[inline]
    pub fn log_capacity(&self) -> u32 {
        self.log_capacity
    }

    /// Fraction of slots in use.
    pub fn load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Returns true if `board` is in the set.
    pub fn has(&self, board: &Board) -> bool {
        matches!(self.probe(board), Probe::Found(_))
    }

    /// Insert `board`, returning true if it was not already present.
    /// The empty board is never stored and always returns false.
    ///
    /// If the insert would push the load factor past 0.7, the set first
    /// doubles its capacity and rehashes every stored board.
    pub fn add(&mut self, board: Board) -> bool {
        if board.is_empty() || self.has(&board) {
            return false;
        }

        if (self.size + 1) * MAX_LOAD_DENOMINATOR > self.capacity() * MAX_LOAD_NUMERATOR {
            self.grow();
        }

        self.place(board);
        self.size += 1;
        true
    }

    /// Iterate over the stored boards in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Board> + '_ {
        self.slots.iter().copied().filter(|slot| !slot.is_empty())
    }

    /// Home slot of `board`: the low `k` bits of its hash.
    #[inline]
    fn home(&self, board: &Board) -> usize {
        let code = self.hasher.hash32(board) as usize;
        code & (self.capacity() - 1)
    }

    fn probe(&self, board: &Board) -> Probe {
        let mask = self.capacity() - 1;
        let home = self.home(board);
        let mut index = home;

        loop {
            let slot = &self.slots[index];
            if slot.is_empty() {
                return Probe::Vacant(index);
            }
            if slot == board {
                return Probe::Found(index);
            }

            index = (index + 1) & mask;
            if index == home {
                return Probe::Saturated;
            }
        }
    }

    /// Write `board` into the first free slot on its probe path.
    /// The caller guarantees `board` is absent and a free slot exists.
    fn place(&mut self, board: Board) {
        match self.probe(&board) {
            Probe::Vacant(index) => self.slots[index] = board,
            Probe::Found(_) => debug_assert!(false, "placing a board that is already stored"),
            Probe::Saturated => unreachable!("board set saturated despite load factor bound"),
        }
    }

    /// Double the capacity and reinsert every stored board.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        self.log_capacity += 1;
        let old_slots = mem::replace(&mut self.slots, vec![Board::EMPTY; 1 << self.log_capacity]);

        for board in old_slots.into_iter().filter(|slot| !slot.is_empty()) {
            self.place(board);
        }

        debug!(
            "board set grew from {} to {} slots holding {} boards",
            old_capacity,
            self.capacity(),
            self.size
        );
    }
}

impl<H: BoardHasher> Extend<Board> for BoardSet<H> {
    fn extend<T: IntoIterator<Item = Board>>(&mut self, iter: T) {
        for board in iter {
            self.add(board);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: u64) -> Board {
        Board::new(n << 1, 1)
    }

    #[test]
    fn starts_empty() {
        let set = BoardSet::new();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 4096);
        assert_eq!(set.log_capacity(), DEFAULT_LOG_CAPACITY);
        assert!(!set.has(&Board::opening()));
    }

    #[test]
    fn add_then_has() {
        let mut set = BoardSet::new();
        assert!(set.add(Board::opening()));
        assert!(set.has(&Board::opening()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn add_is_idempotent() {
        let mut set = BoardSet::new();
        assert!(set.add(board(7)));
        assert!(!set.add(board(7)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn empty_board_is_rejected() {
        let mut set = BoardSet::new();
        assert!(!set.add(Board::EMPTY));
        assert!(!set.has(&Board::EMPTY));
        assert!(set.is_empty());
    }

    #[test]
    fn grows_before_exceeding_load_factor() {
        let mut set = BoardSet::with_log_capacity(4);
        // 16 slots hold at most 11 boards at load 0.7.
        for n in 1..=11 {
            set.add(board(n));
        }
        assert_eq!(set.capacity(), 16);
        set.add(board(12));
        assert_eq!(set.capacity(), 32);
        assert_eq!(set.len(), 12);
        assert!(set.load() <= 0.7);
        for n in 1..=12 {
            assert!(set.has(&board(n)));
        }
    }

    #[test]
    fn many_inserts_survive_growth() {
        let mut set = BoardSet::with_log_capacity(2);
        let count = 5_000u64;
        for n in 1..=count {
            assert!(set.add(board(n)));
            assert!(set.load() <= 0.7);
        }
        assert_eq!(set.len(), count as usize);
        for n in 1..=count {
            assert!(set.has(&board(n)));
        }
        for n in count + 1..count + 100 {
            assert!(!set.has(&board(n)));
        }
    }

    #[test]
    fn colliding_hashes_fill_adjacent_slots() {
        let mut set = BoardSet::with_hasher_and_log_capacity(|_: &Board| 5u32, 4);
        for n in 1..=10 {
            assert!(set.add(board(n)));
        }
        assert_eq!(set.len(), 10);
        for n in 1..=10 {
            assert!(set.has(&board(n)));
        }
        assert!(!set.has(&board(11)));
    }

    #[test]
    fn lookups_wrap_around_the_end() {
        let mut set = BoardSet::with_hasher_and_log_capacity(|_: &Board| u32::MAX, 3);
        for n in 1..=5 {
            assert!(set.add(board(n)));
        }
        assert!((1..=5).all(|n| set.has(&board(n))));
        assert!(!set.has(&board(6)));
    }

    #[test]
    fn full_table_lookup_terminates() {
        let mut set = BoardSet::with_hasher_and_log_capacity(|_: &Board| 1u32, 2);
        for (index, slot) in set.slots.iter_mut().enumerate() {
            *slot = board(index as u64 + 1);
        }
        set.size = set.slots.len();

        assert!(set.has(&board(3)));
        assert!(!set.has(&board(9)));
        assert!(matches!(set.probe(&board(9)), Probe::Saturated));
    }

    #[test]
    #[should_panic(expected = "saturated")]
    fn placing_into_a_full_table_panics() {
        let mut set = BoardSet::with_hasher_and_log_capacity(|_: &Board| 1u32, 2);
        for (index, slot) in set.slots.iter_mut().enumerate() {
            *slot = board(index as u64 + 1);
        }
        set.place(board(9));
    }

    #[test]
    fn iter_yields_every_board() {
        let mut set = BoardSet::new();
        set.extend((1..=50).map(board));
        let mut stored: Vec<Board> = set.iter().collect();
        stored.sort();
        let mut expected: Vec<Board> = (1..=50).map(board).collect();
        expected.sort();
        assert_eq!(stored, expected);
    }
}
