use std::fmt;
use std::hash::Hash;

use crate::visited::Visited;

/// Contract between the A* engine and a problem domain.
///
/// A state value is an immutable snapshot of one configuration of the
/// domain. The engine never mutates states; successor generation produces
/// new values.
///
/// Step cost is uniform: every action costs 1, and the engine stamps
/// `g = parent.g + 1` and `f = g + estimate(goal)` on each successor.
pub trait SearchState: Clone {
    /// Canonical encoding of a state value, used for visited-set membership.
    ///
    /// Key equality must coincide with configuration equality as reported by
    /// [`matches`](Self::matches).
    type Key: Eq + Hash;

    /// Label for the action that produced a state.
    type Action: Copy + PartialEq + fmt::Debug;

    /// The canonical key for this state.
    fn key(&self) -> Self::Key;

    /// Whether two values represent the identical configuration.
    ///
    /// Must be reflexive and symmetric, and must compare the underlying
    /// representation, not derived quantities such as heuristic scores.
    fn matches(&self, other: &Self) -> bool;

    /// Heuristic estimate of the remaining cost to `goal`.
    ///
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, goal: &Self) -> i32;

    /// Append every legal successor of `self` that is not already in
    /// `visited`, tagged with the action that produced it. The caller clears
    /// `buf` before calling.
    ///
    /// Enumeration order is up to the implementation but must be
    /// deterministic, so that searches are reproducible.
    fn successors(&self, visited: &Visited<Self>, buf: &mut Vec<(Self, Self::Action)>);
}
