//! spire-core: deterministic dungeon-floor generation
//!
//! This crate turns an integer seed into a fully-connected grid of rooms and
//! corridors with placed stairs, traps, and chests. It contains no I/O and no
//! global state: every floor exclusively owns its grid, its room list, and its
//! RNG stream, so two floors built from the same seed are indistinguishable.
//!
//! Rendering, movement, combat, and spawning are external collaborators that
//! only ever call the read-only query methods on [`dungeon::Floor`].

pub mod config;
pub mod dungeon;

mod consts;
mod rng;

pub use consts::*;
pub use rng::FloorRng;
