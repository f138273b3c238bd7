//! Level spawning: lays out the enemy grid for a level.

use starfall_core::entities::{Enemy, Formation};
use starfall_core::enums::{EnemyKind, SweepDirection};
use starfall_core::rules::GameRules;
use starfall_core::types::Rect;

/// Build the formation for a level: a `rows x cols` grid in reading
/// order (row-major, left to right), all enemies live, sweeping right.
///
/// The layout is fully determined by the level and the rules; no
/// randomness is involved, so the same level always opens identically.
pub fn spawn_level(level: u32, rules: &GameRules) -> (Vec<Enemy>, Formation) {
    let rows = rules.rows_for_level(level);
    let cols = rules.cols_for_level(level);
    let pitch_x = rules.enemy_size.x + rules.formation_gap;
    let pitch_y = rules.enemy_size.y + rules.formation_gap;

    let mut enemies = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        let kind = EnemyKind::from_row(row);
        for col in 0..cols {
            let x = rules.formation_origin.x + col as f32 * pitch_x;
            let y = rules.formation_origin.y + row as f32 * pitch_y;
            enemies.push(Enemy {
                rect: Rect::new(x, y, rules.enemy_size.x, rules.enemy_size.y),
                kind,
                destroyed: false,
            });
        }
    }

    let formation = Formation {
        direction: SweepDirection::Right,
        speed: rules.sweep_speed_for_level(level),
    };

    (enemies, formation)
}
