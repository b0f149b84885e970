//! Sliding-tile (N²−1) puzzle domain for the *strider* search engine.
//!
//! A [`Board`] is a square grid of distinct tiles with a single blank slot.
//! Moving means sliding the blank in one of four directions, swapping it
//! with the adjacent tile. The crate provides:
//!
//! - move generation and a Manhattan-distance heuristic, wired into the
//!   engine through the [`SearchState`](strider_search::SearchState) impl;
//! - caller-side pre-checks: configuration validity ([`Board::is_valid`]),
//!   tile-set agreement ([`Board::same_tile_set`]), and permutation-parity
//!   solvability ([`is_solvable`]). The engine itself validates nothing, so
//!   run these before searching — an unsolvable pair makes A* sweep the
//!   whole reachable component before reporting "no path".

mod board;
mod solvability;

pub use board::{BLANK, Board, Dir};
pub use solvability::{inversions, is_solvable};
