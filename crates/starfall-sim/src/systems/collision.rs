//! Collision system: a pure resolve pass followed by an atomic apply
//! in the engine.
//!
//! `resolve` only reads; it reports what happened as index lists so
//! the engine can mutate every collection in one place. Within a tick
//! all tests run against the same positions, so resolution order can
//! never let one removal hide another hit.

use starfall_core::entities::{Bullet, Enemy};
use starfall_core::types::Rect;

/// Everything one frame-tick of collision resolution produced.
/// Indices refer to the collections as they were when `resolve` ran.
#[derive(Debug, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Enemies to mark destroyed, with the points each awards.
    pub destroyed: Vec<(usize, u32)>,
    /// Player bullets consumed by a kill.
    pub spent_player_bullets: Vec<usize>,
    /// Enemy bullets consumed by hitting the player.
    pub spent_enemy_bullets: Vec<usize>,
    /// Lives lost this tick, one per connecting enemy bullet.
    pub hits_on_player: u32,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.destroyed.is_empty() && self.hits_on_player == 0
    }
}

/// Match player bullets against live enemies and enemy bullets against
/// the player.
///
/// Each live enemy takes the first player bullet (in collection order)
/// that overlaps it and is not already spent; a single bullet kills at
/// most one enemy, and the remaining bullets stay eligible for other
/// enemies in the same tick. First match wins, not nearest match.
pub fn resolve(
    player_bullets: &[Bullet],
    enemy_bullets: &[Bullet],
    enemies: &[Enemy],
    player: &Rect,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    for (enemy_index, enemy) in enemies.iter().enumerate() {
        if enemy.destroyed {
            continue;
        }
        let hit = player_bullets.iter().enumerate().find(|(bullet_index, bullet)| {
            !outcome.spent_player_bullets.contains(bullet_index)
                && bullet.rect.intersects(&enemy.rect)
        });
        if let Some((bullet_index, _)) = hit {
            outcome.spent_player_bullets.push(bullet_index);
            outcome.destroyed.push((enemy_index, enemy.kind.points()));
        }
    }

    for (bullet_index, bullet) in enemy_bullets.iter().enumerate() {
        if bullet.rect.intersects(player) {
            outcome.spent_enemy_bullets.push(bullet_index);
            outcome.hits_on_player += 1;
        }
    }

    outcome
}
