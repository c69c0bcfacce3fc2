//! Bulk exploration of reachable positions.
//!
//! The breadth-first collectors expand a start position one ply at a time,
//! alternating the side to move after every layer, and store each layer's
//! canonical children. The depth-first samplers walk single random lines of play.
//!
//! A board whose side to move has no legal move contributes no children to the
//! next layer; the collectors never insert passes.

use crate::board::Board;
use crate::game::Turn;
use crate::hash::BoardHasher;
use crate::movegen::{self, generate_canonical_children};
use crate::sequence::BoardSequence;
use crate::set::BoardSet;
use derive_more::{Display, Error};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ExploreError {
    #[display(
        fmt = "invalid depth range: max_plies ({}) is less than min_plies ({})",
        max_plies,
        min_plies
    )]
    InvalidDepthRange { min_plies: usize, max_plies: usize },
}

/// Collect every canonical position reachable from `start` in exactly `num_plies`
/// alternating moves, starting with `turn`, into `sequence`.
///
/// `start` is appended as given. Boards already in `sequence` but not yet read
/// belong to the first layer along with it: they are expanded with `turn` too.
/// Each later layer follows in turn and earlier layers stay in the sequence. The
/// same position reached along different lines is stored once per appearance.
/// On return the read cursor sits at the first board of the final layer, so [`BoardSequence::next_board`] yields exactly that layer.
///
/// Returns the number of boards in the final layer.
pub fn collect_breadth_first(
    start: Board,
    turn: Turn,
    num_plies: usize,
    sequence: &mut BoardSequence,
) -> u64 {
    sequence.append(start);
    let mut turn = turn;
    let mut layer_size = sequence.appended() - sequence.consumed();

    for ply in 0..num_plies {
        let layer_end = sequence.appended();
        while sequence.consumed() < layer_end {
            match sequence.next_board() {
                Some(board) => sequence.append_all(&generate_canonical_children(board, turn)),
                None => break,
            }
        }

        layer_size = sequence.appended() - layer_end;
        debug!(
            "layer {}: {} boards, {} stored",
            ply + 1,
            layer_size,
            sequence.len()
        );
        turn = !turn;
    }

    info!(
        "collected {} boards at depth {} ({} stored in total)",
        layer_size,
        num_plies,
        sequence.len()
    );
    layer_size
}

/// Like [`collect_breadth_first`], but every position is visited and expanded at
/// most once: children already in `set` are dropped before they are queued.
///
/// `start` and every newly discovered child are added to `set`, so on return the
/// set holds each distinct position reachable within `num_plies` moves. Frontier
/// order is kept in a private queue whose consumed buckets are released after
/// every layer.
///
/// Returns the number of positions first discovered in the final layer.
pub fn collect_deduplicated_breadth_first<H: BoardHasher>(
    start: Board,
    turn: Turn,
    num_plies: usize,
    set: &mut BoardSet<H>,
) -> u64 {
    collect_deduplicated_through(start, turn, num_plies, set, &mut BoardSequence::new())
}

/// Deduplicated breadth-first search using `queue` for the frontier.
/// `queue` must start empty.
fn collect_deduplicated_through<H: BoardHasher>(
    start: Board,
    turn: Turn,
    num_plies: usize,
    set: &mut BoardSet<H>,
    queue: &mut BoardSequence,
) -> u64 {
    debug_assert!(queue.is_empty());
    set.add(start);
    queue.append(start);

    let mut turn = turn;
    let mut layer_size = 1;

    for ply in 0..num_plies {
        let layer_end = queue.appended();
        while queue.consumed() < layer_end {
            let board = match queue.next_board() {
                Some(board) => board,
                None => break,
            };
            for child in generate_canonical_children(board, turn) {
                if set.add(child) {
                    queue.append(child);
                }
            }
        }

        layer_size = queue.appended() - layer_end;
        queue.prune_consumed_prefix();
        debug!(
            "layer {}: {} new boards, {} distinct so far",
            ply + 1,
            layer_size,
            set.len()
        );
        turn = !turn;
    }

    info!(
        "collected {} distinct boards within depth {} ({} new at the last layer)",
        set.len(),
        num_plies,
        layer_size
    );
    layer_size
}

/// Play `num_plies` uniformly random canonical moves from `start` and return the
/// final position.
///
/// A side with no legal move passes without using up a ply. The walk stops early
/// once neither side can move.
pub fn sample_depth_first<R>(start: Board, turn: Turn, num_plies: usize, rng: &mut R) -> Board
where
    R: Rng + ?Sized,
{
    let mut board = start;
    let mut turn = turn;
    let mut played = 0;

    while played < num_plies {
        let children = generate_canonical_children(board, turn);
        match children.choose(rng) {
            Some(&child) => {
                board = child;
                played += 1;
            }
            None if movegen::legal_moves(board, !turn).is_empty() => break,
            None => {}
        }
        turn = !turn;
    }

    board
}

/// Append `num_samples` independent random walks from `start` to `sequence`,
/// each with a length drawn uniformly from `min_plies..=max_plies`.
pub fn sample_within_depth_range<R>(
    start: Board,
    turn: Turn,
    min_plies: usize,
    max_plies: usize,
    rng: &mut R,
    num_samples: usize,
    sequence: &mut BoardSequence,
) -> Result<(), ExploreError>
where
    R: Rng + ?Sized,
{
    if max_plies < min_plies {
        return Err(ExploreError::InvalidDepthRange {
            min_plies,
            max_plies,
        });
    }

    for _ in 0..num_samples {
        let num_plies = rng.gen_range(min_plies..=max_plies);
        sequence.append(sample_depth_first(start, turn, num_plies, rng));
    }

    info!(
        "sampled {} boards at depths {}..={}",
        num_samples, min_plies, max_plies
    );
    Ok(())
}
