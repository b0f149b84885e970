//! Generic best-first graph search.
//!
//! This crate implements A* over an abstract state contract, so that any
//! domain able to enumerate successor states and estimate remaining cost can
//! be searched with the same engine:
//!
//! - [`SearchState`] — the contract a domain implements: canonical state
//!   keys, configuration equality, an admissible heuristic, and successor
//!   generation.
//! - [`Astar`] — the engine. It owns and reuses its internal caches (node
//!   arena, open heap, visited set, scratch buffers), so repeated
//!   [`solve`](Astar::solve) calls incur few allocations after warm-up.
//! - [`Visited`] — the set of already-expanded states, exposed to successor
//!   generation for pruning.
//! - [`Step`] — one element of a reconstructed path.
//!
//! Searches are fully synchronous and single-threaded; an engine value owns
//! all of its working state, so concurrent searches just use independent
//! engines.

mod astar;
mod engine;
mod traits;
mod visited;

pub use astar::solve;
pub use engine::{Astar, Step};
pub use traits::SearchState;
pub use visited::Visited;
