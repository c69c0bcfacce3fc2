//! [`BoardSequence`]: an append-only run of boards stored in fixed-capacity buckets.
//!
//! Buckets are allocated once at full capacity and never reallocated, so
//! accumulating millions of boards never copies earlier ones. Reading is done
//! through a cursor that is independent of the write end: boards appended while
//! a reader is mid-way are still yielded once the cursor reaches them.

use crate::board::Board;
use crate::movegen::ChildBoards;
use log::trace;
use std::collections::VecDeque;

/// Boards per bucket unless configured otherwise.
pub const DEFAULT_BUCKET_CAPACITY: usize = 500_000;

/// Read position: a bucket index into the live buckets plus an offset in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    bucket: usize,
    offset: usize,
}

#[derive(Clone, Debug)]
pub struct BoardSequence {
    buckets: VecDeque<Vec<Board>>,
    bucket_capacity: usize,
    cursor: Cursor,
    /// Boards released by pruning, counted so absolute positions survive it.
    pruned: u64,
    /// Absolute index of the next board the cursor will yield.
    position: u64,
}

impl Default for BoardSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSequence {
    pub fn new() -> Self {
        Self::with_bucket_capacity(DEFAULT_BUCKET_CAPACITY)
    }

    /// Create a sequence whose buckets each hold `bucket_capacity` boards.
    pub fn with_bucket_capacity(bucket_capacity: usize) -> Self {
        assert!(bucket_capacity > 0, "buckets must hold at least one board");
        Self {
            buckets: VecDeque::new(),
            bucket_capacity,
            cursor: Cursor::default(),
            pruned: 0,
            position: 0,
        }
    }

    /// Add `board` at the end of the sequence.
    pub fn append(&mut self, board: Board) {
        let tail_full = self
            .buckets
            .back()
            .map_or(true, |bucket| bucket.len() >= self.bucket_capacity);

        if tail_full {
            trace!(
                "allocating bucket {} ({} boards)",
                self.buckets.len(),
                self.bucket_capacity
            );
            self.buckets
                .push_back(Vec::with_capacity(self.bucket_capacity));
        }

        if let Some(tail) = self.buckets.back_mut() {
            tail.push(board);
        }
    }

    /// Append every board in `children`, in order.
    pub fn append_all(&mut self, children: &ChildBoards) {
        for &child in children {
            self.append(child);
        }
    }

    /// Move the read cursor back to the first live board.
    pub fn reset_cursor(&mut self) {
        self.cursor = Cursor::default();
        self.position = self.pruned;
    }

    /// Yield the next unread board in insertion order, or `None` once the
    /// cursor has caught up with the write end.
    pub fn next_board(&mut self) -> Option<Board> {
        self.advance_past_full_bucket();

        let bucket = self.buckets.get(self.cursor.bucket)?;
        let board = *bucket.get(self.cursor.offset)?;
        self.cursor.offset += 1;
        self.position += 1;
        Some(board)
    }

    /// The most recently appended board.
    pub fn last_board(&self) -> Option<Board> {
        self.buckets.back().and_then(|bucket| bucket.last()).copied()
    }

    /// Number of live boards (appended and not yet pruned).
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Total boards ever appended, including pruned ones.
    pub fn appended(&self) -> u64 {
        self.pruned + self.len() as u64
    }

    /// Total boards yielded by the cursor since the start, including pruned ones.
    /// After [`BoardSequence::reset_cursor`] this restarts from the pruned count.
    pub fn consumed(&self) -> u64 {
        self.position
    }

    /// Number of live buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Release every bucket lying wholly behind the read cursor. Returns the
    /// number of boards released.
    pub fn prune_consumed_prefix(&mut self) -> usize {
        self.advance_past_full_bucket();

        let mut released = 0;
        while self.cursor.bucket > 0 {
            if let Some(bucket) = self.buckets.pop_front() {
                released += bucket.len();
            }
            self.cursor.bucket -= 1;
        }

        if released > 0 {
            trace!(
                "pruned {} boards, {} buckets remain",
                released,
                self.buckets.len()
            );
        }
        self.pruned += released as u64;
        released
    }

    /// Drop every board and bucket and rewind all counters.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.cursor = Cursor::default();
        self.pruned = 0;
        self.position = 0;
    }

    /// Iterate over the live boards in insertion order without moving the cursor.
    pub fn iter(&self) -> impl Iterator<Item = Board> + '_ {
        self.buckets.iter().flatten().copied()
    }

    /// Step the cursor into the next bucket once the current one is full and read.
    fn advance_past_full_bucket(&mut self) {
        while self.cursor.offset >= self.bucket_capacity
            && self.cursor.bucket + 1 < self.buckets.len()
        {
            self.cursor.bucket += 1;
            self.cursor.offset = 0;
        }
    }
}

impl Extend<Board> for BoardSequence {
    fn extend<T: IntoIterator<Item = Board>>(&mut self, iter: T) {
        for board in iter {
            self.append(board);
        }
    }
}
