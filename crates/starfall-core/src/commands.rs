//! Player commands sent from the input adapter to the simulation.
//!
//! Commands are queued as they arrive and processed at the next
//! frame-tick boundary, never mid-tick.

use serde::{Deserialize, Serialize};

/// All possible player intents.
///
/// The input adapter owns key repeat and rate limiting; by the time a
/// command reaches the engine it is a single discrete intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Step the ship left, clamped to the field.
    MoveLeft,
    /// Step the ship right, clamped to the field.
    MoveRight,
    /// Fire a bullet, subject to the live-bullet cap.
    Fire,
    /// Start a new session. Valid from `Start` or `GameOver` only.
    StartGame,
}
