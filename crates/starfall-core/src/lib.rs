//! Core types and definitions for the STARFALL arcade simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, entities, commands, events, rules, and the snapshot the
//! frontend renders from. It has no dependency on any runtime, RNG, or
//! terminal framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod rules;
pub mod state;
pub mod types;
