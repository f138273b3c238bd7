//! Entity value types for the arcade simulation.
//!
//! Plain data. Movement and collision logic live in the simulation
//! systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, SweepDirection};
use crate::types::Rect;

/// A projectile. Ownership (player or enemy) is implied by which
/// collection holds it, not stored on the bullet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    /// Signed vertical velocity in field units per frame-tick.
    /// Negative moves up (player fire), positive moves down (enemy
    /// fire).
    pub velocity: f32,
}

/// One enemy in the formation grid.
///
/// Enemies are never removed from the collection once spawned.
/// Destroyed ones keep their slot with the flag set and are inert for
/// the rest of the level, which keeps collection order stable for
/// collision matching and fire sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub kind: EnemyKind,
    pub destroyed: bool,
}

/// Shared sweep state of the enemy grid.
///
/// Speed is fixed for the lifetime of a level; only a level advance
/// recomputes it. Direction flips on edge bounces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub direction: SweepDirection,
    pub speed: f32,
}
