//! Projectile system: bullet spawning and per-frame advancement.

use starfall_core::entities::{Bullet, Enemy};
use starfall_core::rules::GameRules;
use starfall_core::types::Rect;

/// Spawn a player bullet centered on the ship's top edge, unless the
/// live-bullet cap is already reached (then `None`, a deliberate
/// no-op rather than an error).
pub fn fire_player_bullet(player: &Rect, live_bullets: usize, rules: &GameRules) -> Option<Bullet> {
    if live_bullets >= rules.player_bullet_cap {
        return None;
    }
    let muzzle = player.center_top();
    Some(Bullet {
        rect: Rect::new(
            muzzle.x - rules.bullet_size.x / 2.0,
            muzzle.y - rules.bullet_size.y,
            rules.bullet_size.x,
            rules.bullet_size.y,
        ),
        velocity: -rules.player_bullet_speed,
    })
}

/// Spawn an enemy bullet at the firing enemy's bottom-center. Enemy
/// fire has no cap.
pub fn fire_enemy_bullet(enemy: &Enemy, rules: &GameRules) -> Bullet {
    let muzzle = enemy.rect.center_bottom();
    Bullet {
        rect: Rect::new(
            muzzle.x - rules.bullet_size.x / 2.0,
            muzzle.y,
            rules.bullet_size.x,
            rules.bullet_size.y,
        ),
        velocity: rules.enemy_bullet_speed,
    }
}

/// Advance every bullet by its own velocity, then drop the ones that
/// have fully left the field vertically. Removal happens in the same
/// tick the bullet crosses out.
pub fn advance(bullets: &mut Vec<Bullet>, rules: &GameRules) {
    for bullet in bullets.iter_mut() {
        bullet.rect.pos.y += bullet.velocity;
    }
    bullets.retain(|b| b.rect.bottom() > 0.0 && b.rect.pos.y < rules.field.y);
}
