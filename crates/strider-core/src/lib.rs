//! **strider-core** — foundations shared across the *strider* workspace.
//!
//! This crate provides the geometry primitives the search and puzzle crates
//! build on: an integer [`Point`] and a half-open rectangle [`Range`].

pub mod geom;

pub use geom::{Point, Range};
