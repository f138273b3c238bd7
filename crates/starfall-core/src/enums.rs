//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session lifecycle phase.
///
/// `Playing` is the only phase in which entity state mutates; both tick
/// entry points gate on it so stale timers can never touch a finished
/// session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first `StartGame`.
    #[default]
    Start,
    /// Both clocks running.
    Playing,
    /// Terminal. Only `StartGame` leaves it.
    GameOver,
}

/// Enemy hull class, assigned from the spawn row.
///
/// The kind drives the score weight and the presentation color, nothing
/// else; all kinds move and fire identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Drone,
    Raider,
    Dreadnought,
}

impl EnemyKind {
    /// Kind for a formation row. Wraps every three rows.
    pub fn from_row(row: u32) -> Self {
        match row % 3 {
            0 => EnemyKind::Drone,
            1 => EnemyKind::Raider,
            _ => EnemyKind::Dreadnought,
        }
    }

    /// Zero-based score tier.
    pub fn tier(&self) -> u32 {
        match self {
            EnemyKind::Drone => 0,
            EnemyKind::Raider => 1,
            EnemyKind::Dreadnought => 2,
        }
    }

    /// Points awarded for destroying this kind.
    pub fn points(&self) -> u32 {
        crate::constants::SCORE_PER_TIER * (self.tier() + 1)
    }
}

/// Horizontal sweep direction of the enemy formation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    #[default]
    Right,
    Left,
}

impl SweepDirection {
    /// Signed unit factor for lateral movement.
    pub fn sign(&self) -> f32 {
        match self {
            SweepDirection::Right => 1.0,
            SweepDirection::Left => -1.0,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SweepDirection::Right => SweepDirection::Left,
            SweepDirection::Left => SweepDirection::Right,
        }
    }
}
