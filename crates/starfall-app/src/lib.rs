//! Starfall terminal application.
//!
//! This crate wires the simulation crates to a crossterm front end:
//! a dedicated input thread, the arcade frame and formation clocks,
//! and the menu-driven galaxy screens.

pub mod arcade;
pub mod galaxy_ui;
pub mod input;
pub mod render;
pub mod terminal;
