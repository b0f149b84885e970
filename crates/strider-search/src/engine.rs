use std::collections::BinaryHeap;

use crate::traits::SearchState;
use crate::visited::Visited;

/// One element of a reconstructed path, from the initial state (first) to
/// the goal (last).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "S: serde::Serialize, S::Action: serde::Serialize",
        deserialize = "S: serde::Deserialize<'de>, S::Action: serde::Deserialize<'de>"
    ))
)]
pub struct Step<S: SearchState> {
    /// The state reached at this step.
    pub state: S,
    /// The action that produced it, or `None` for the initial state.
    pub action: Option<S::Action>,
    /// Accumulated cost from the initial state (the g-score).
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node arena and open-heap references
// ---------------------------------------------------------------------------

/// Parent sentinel for the root of a search.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// An arena entry. Entries are immutable once pushed; "reaching a state
/// again" allocates a new entry rather than editing an old one.
pub(crate) struct NodeEntry<S: SearchState> {
    pub(crate) state: S,
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) action: Option<S::Action>,
    pub(crate) parent: usize,
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) id: usize,
    pub(crate) f: i32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first; ties
        // break toward the smaller arena id, i.e. insertion order.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Astar
// ---------------------------------------------------------------------------

/// A best-first search engine over a [`SearchState`] domain.
///
/// `Astar` owns all working state of a search (node arena, open heap,
/// visited set, successor scratch buffer) and reuses the allocations across
/// [`solve`](Astar::solve) calls. Nothing survives a call except the
/// returned path; one engine value services one search at a time.
pub struct Astar<S: SearchState> {
    pub(crate) nodes: Vec<NodeEntry<S>>,
    pub(crate) open: BinaryHeap<OpenRef>,
    pub(crate) visited: Visited<S>,
    pub(crate) sbuf: Vec<(S, S::Action)>,
}

impl<S: SearchState> Default for Astar<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> Astar<S> {
    /// Create a new engine.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            visited: Visited::new(),
            sbuf: Vec::with_capacity(8),
        }
    }

    /// Number of states expanded by the most recent search.
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }
}
