use reversi_explore::{ChildBoards, Turn};

/// A way of choosing one successor out of the positions reachable this ply.
///
/// Policies own whatever state they need (random generators, statistics);
/// it is released when the policy is dropped.
pub trait Policy {
    /// Pick the index of the chosen board in `choices`.
    /// Returns `None` if and only if `choices` is empty.
    fn choose(&mut self, turn: Turn, choices: &ChildBoards) -> Option<usize>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose(&mut self, turn: Turn, choices: &ChildBoards) -> Option<usize> {
        (**self).choose(turn, choices)
    }
}
