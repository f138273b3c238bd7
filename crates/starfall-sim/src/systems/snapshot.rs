//! Snapshot system: builds the read-only view of the session.
//!
//! Reads engine state and never modifies anything.

use starfall_core::events::GameEvent;
use starfall_core::state::{ArcadeSnapshot, EnemyView};

use crate::engine::ArcadeEngine;

/// Build a complete snapshot of the current session, attaching the
/// events drained by the engine for this tick.
pub fn build(engine: &ArcadeEngine, events: Vec<GameEvent>) -> ArcadeSnapshot {
    ArcadeSnapshot {
        frame: engine.frame,
        phase: engine.phase,
        score: engine.score,
        lives: engine.lives,
        level: engine.level,
        player: engine.player,
        player_bullets: engine.player_bullets.iter().map(|b| b.rect).collect(),
        enemy_bullets: engine.enemy_bullets.iter().map(|b| b.rect).collect(),
        enemies: engine
            .enemies
            .iter()
            .map(|e| EnemyView {
                rect: e.rect,
                kind: e.kind,
                destroyed: e.destroyed,
            })
            .collect(),
        events,
    }
}
