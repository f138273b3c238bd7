//! The rule set driving a session.
//!
//! Every tunable lives here instead of being read from globals, so a
//! test can shrink the field or force fire probabilities without
//! touching shared state. `Default` reproduces the canonical tuning
//! from `constants`.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Rect;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    /// Playfield size. All positions live in `[0, field.x] x [0, field.y]`.
    pub field: Vec2,

    // Player
    pub player_size: Vec2,
    /// Fixed vertical position of the player's top edge.
    pub player_y: f32,
    /// Horizontal distance per movement intent.
    pub player_step: f32,
    pub start_lives: u32,

    // Bullets
    pub bullet_size: Vec2,
    pub player_bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    pub player_bullet_cap: usize,

    // Formation
    pub enemy_size: Vec2,
    pub formation_origin: Vec2,
    pub formation_gap: f32,
    pub base_rows: u32,
    pub max_rows: u32,
    pub base_cols: u32,
    pub max_cols: u32,
    pub sweep_base_speed: f32,
    pub sweep_speed_per_level: f32,
    pub descent_step: f32,
    pub invasion_line: f32,
    pub enemy_fire_probability: f64,

    // Clocks
    pub formation_base_interval_ms: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            field: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_y: PLAYER_Y,
            player_step: PLAYER_STEP,
            start_lives: START_LIVES,
            bullet_size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            player_bullet_speed: PLAYER_BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            player_bullet_cap: PLAYER_BULLET_CAP,
            enemy_size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            formation_origin: Vec2::new(FORMATION_ORIGIN_X, FORMATION_ORIGIN_Y),
            formation_gap: FORMATION_GAP,
            base_rows: FORMATION_BASE_ROWS,
            max_rows: FORMATION_MAX_ROWS,
            base_cols: FORMATION_BASE_COLS,
            max_cols: FORMATION_MAX_COLS,
            sweep_base_speed: SWEEP_BASE_SPEED,
            sweep_speed_per_level: SWEEP_SPEED_PER_LEVEL,
            descent_step: DESCENT_STEP,
            invasion_line: INVASION_LINE,
            enemy_fire_probability: ENEMY_FIRE_PROBABILITY,
            formation_base_interval_ms: FORMATION_BASE_INTERVAL_MS,
        }
    }
}

impl GameRules {
    /// Grid rows for a level: `min(max, base + level / 2)`.
    pub fn rows_for_level(&self, level: u32) -> u32 {
        (self.base_rows + level / 2).min(self.max_rows)
    }

    /// Grid columns for a level: `min(max, base + level / 2)`.
    pub fn cols_for_level(&self, level: u32) -> u32 {
        (self.base_cols + level / 2).min(self.max_cols)
    }

    /// Lateral sweep distance per formation-tick for a level.
    pub fn sweep_speed_for_level(&self, level: u32) -> f32 {
        self.sweep_base_speed + self.sweep_speed_per_level * level as f32
    }

    /// Formation-tick period for a level. Shortens as levels climb.
    pub fn formation_period(&self, level: u32) -> Duration {
        Duration::from_millis(self.formation_base_interval_ms / u64::from(level.max(1)))
    }

    /// Largest x the player's left edge may reach.
    pub fn player_max_x(&self) -> f32 {
        self.field.x - self.player_size.x
    }

    /// Player box centered on the field at the fixed player line.
    pub fn player_spawn(&self) -> Rect {
        Rect::new(
            (self.field.x - self.player_size.x) / 2.0,
            self.player_y,
            self.player_size.x,
            self.player_size.y,
        )
    }
}
