//! Snapshot types: the complete visible state after a frame-tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase};
use crate::events::GameEvent;
use crate::types::Rect;

/// Read-only view of the whole session, rebuilt every frame-tick.
///
/// The presentation layer consumes this and nothing else; no mutation
/// path leads back into the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArcadeSnapshot {
    /// Frame-ticks elapsed since the session started.
    pub frame: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub player: Rect,
    /// Live player bullets in firing order.
    pub player_bullets: Vec<Rect>,
    /// Live enemy bullets in firing order.
    pub enemy_bullets: Vec<Rect>,
    /// Every enemy spawned for the current level, destroyed ones
    /// included. Renderers skip the destroyed.
    pub enemies: Vec<EnemyView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// One formation slot for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub rect: Rect,
    pub kind: EnemyKind,
    pub destroyed: bool,
}
