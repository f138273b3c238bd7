//! Galaxy mode for STARFALL: a turn-based journey toward the galactic
//! core.
//!
//! Star systems generate deterministically from their sector
//! coordinates, so the galaxy is stable without being stored. A
//! separate session RNG drives encounters, combat, and station stock.
//! The whole mode is headless; the terminal frontend renders the view
//! this crate exposes.

pub mod combat;
pub mod events;
pub mod game;
pub mod sector;
pub mod ship;
pub mod station;

pub use game::{GalaxyAction, GalaxyConfig, GalaxyGame, GalaxyPhase, GalaxyView};
