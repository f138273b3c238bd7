//! Events emitted by the simulation for sound and UI feedback.
//!
//! Events are buffered inside the engine between frame-ticks and
//! drained into each snapshot, so the frontend sees every emission
//! exactly once.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A player bullet left the ship.
    PlayerFired,
    /// An enemy opened fire.
    EnemyFired,
    /// A player bullet connected.
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    /// An enemy bullet connected.
    PlayerHit { lives_remaining: u32 },
    /// The formation was wiped out; the next level is spawning.
    LevelCleared { level: u32 },
    /// A live enemy reached the invasion line.
    FormationLanded,
    /// The session ended.
    GameOver { score: u32 },
}
