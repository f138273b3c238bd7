//! Arcade tuning constants.
//!
//! `GameRules::default()` is assembled from these values; simulation
//! code reads the rules, never these constants directly, so tests can
//! run with altered tunings.

// --- Clocks ---

/// Frame-tick rate in Hz. Bullets advance and collisions resolve at
/// this rate.
pub const FRAME_RATE: u32 = 60;

/// Base formation-tick interval in milliseconds, divided by the level
/// number so higher levels sweep faster.
pub const FORMATION_BASE_INTERVAL_MS: u64 = 600;

// --- Field ---

/// Playfield width in field units.
pub const FIELD_WIDTH: f32 = 600.0;

/// Playfield height in field units.
pub const FIELD_HEIGHT: f32 = 520.0;

// --- Player ---

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 16.0;

/// Fixed vertical position of the player's top edge.
pub const PLAYER_Y: f32 = 480.0;

/// Horizontal distance covered by one movement intent.
pub const PLAYER_STEP: f32 = 12.0;

/// Lives at session start.
pub const START_LIVES: u32 = 3;

// --- Bullets ---

pub const BULLET_WIDTH: f32 = 3.0;
pub const BULLET_HEIGHT: f32 = 10.0;

/// Upward speed of player bullets, in field units per frame-tick.
pub const PLAYER_BULLET_SPEED: f32 = 10.0;

/// Downward speed of enemy bullets, in field units per frame-tick.
pub const ENEMY_BULLET_SPEED: f32 = 6.0;

/// Maximum simultaneous live player bullets.
pub const PLAYER_BULLET_CAP: usize = 3;

// --- Formation ---

pub const ENEMY_WIDTH: f32 = 32.0;
pub const ENEMY_HEIGHT: f32 = 20.0;

/// Top-left corner of a freshly spawned formation grid.
pub const FORMATION_ORIGIN_X: f32 = 40.0;
pub const FORMATION_ORIGIN_Y: f32 = 48.0;

/// Clearance between adjacent grid cells, both axes.
pub const FORMATION_GAP: f32 = 16.0;

/// Grid rows at level 1; grows every second level up to the max.
pub const FORMATION_BASE_ROWS: u32 = 2;
pub const FORMATION_MAX_ROWS: u32 = 4;

/// Grid columns at level 1; grows every second level up to the max.
pub const FORMATION_BASE_COLS: u32 = 6;
pub const FORMATION_MAX_COLS: u32 = 10;

/// Lateral sweep speed per formation-tick: base + per-level * level.
pub const SWEEP_BASE_SPEED: f32 = 10.0;
pub const SWEEP_SPEED_PER_LEVEL: f32 = 2.0;

/// Downward shift applied to the whole grid on an edge bounce.
pub const DESCENT_STEP: f32 = 24.0;

/// Once any live enemy's bottom edge reaches this line the formation
/// has landed and the session ends.
pub const INVASION_LINE: f32 = 440.0;

/// Per-enemy fire probability per formation-tick.
pub const ENEMY_FIRE_PROBABILITY: f64 = 0.02;

// --- Scoring ---

/// Points per kill scale linearly with the enemy kind tier.
pub const SCORE_PER_TIER: u32 = 10;
