//! Arcade simulation engine for STARFALL.
//!
//! Owns all session state, runs the ordered system pipeline on two
//! externally driven clocks (the fixed frame clock and the per-level
//! formation clock), and produces read-only snapshots for whatever
//! frontend is attached. Completely headless; rendering, timing, and
//! input live elsewhere.

pub mod engine;
pub mod levels;
pub mod systems;

pub use engine::{ArcadeConfig, ArcadeEngine};

#[cfg(test)]
mod tests;
