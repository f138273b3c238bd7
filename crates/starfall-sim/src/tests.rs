//! Integration-style tests for the arcade engine.
//!
//! Tests drive the engine exactly as a frontend would (commands in,
//! snapshots out) and rig entity state directly where a scenario needs
//! a precise board position.

use starfall_core::commands::PlayerCommand;
use starfall_core::entities::{Bullet, Enemy};
use starfall_core::enums::{EnemyKind, GamePhase, SweepDirection};
use starfall_core::events::GameEvent;
use starfall_core::rules::GameRules;
use starfall_core::types::Rect;

use crate::engine::{ArcadeConfig, ArcadeEngine};

fn engine_with_seed(seed: u64) -> ArcadeEngine {
    ArcadeEngine::new(ArcadeConfig {
        seed,
        ..Default::default()
    })
}

/// Engine that has already processed `StartGame` and run one
/// frame-tick.
fn started_engine(seed: u64) -> ArcadeEngine {
    let mut engine = engine_with_seed(seed);
    engine.queue_command(PlayerCommand::StartGame);
    engine.frame_tick();
    engine
}

/// A motionless bullet for collision rigs. Velocity zero keeps it in
/// place through the advance step.
fn planted_bullet(rect: Rect) -> Bullet {
    Bullet {
        rect,
        velocity: 0.0,
    }
}

fn live_enemy(x: f32, y: f32, kind: EnemyKind) -> Enemy {
    Enemy {
        rect: Rect::new(x, y, 32.0, 20.0),
        kind,
        destroyed: false,
    }
}

// ---- Lifecycle ----

#[test]
fn test_start_game_enters_playing() {
    let mut engine = engine_with_seed(1);
    assert_eq!(engine.phase(), GamePhase::Start);

    engine.queue_command(PlayerCommand::StartGame);
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.lives, 3);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.enemies.len(), 12, "level 1 should spawn a 2x6 grid");
    assert!(snapshot.enemies.iter().all(|e| !e.destroyed));
    assert_eq!(snapshot.player.pos.x, 280.0, "player should spawn centered");
    assert_eq!(snapshot.player.pos.y, 480.0);
}

#[test]
fn test_commands_ignored_before_start() {
    let mut engine = engine_with_seed(1);
    engine.queue_commands([
        PlayerCommand::MoveLeft,
        PlayerCommand::Fire,
        PlayerCommand::MoveRight,
    ]);
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.phase, GamePhase::Start);
    assert_eq!(snapshot.player.pos.x, 280.0, "movement should not apply before start");
    assert!(snapshot.player_bullets.is_empty(), "fire should not apply before start");
    assert_eq!(snapshot.frame, 0, "frame counter should not advance outside Playing");
    assert!(snapshot.events.is_empty());
}

#[test]
fn test_start_game_is_noop_while_playing() {
    let mut engine = started_engine(1);
    engine.enemies[0].destroyed = true;
    engine.score = 50;

    engine.queue_command(PlayerCommand::StartGame);
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.score, 50, "mid-session StartGame must not reset anything");
    assert!(snapshot.enemies[0].destroyed);
}

#[test]
fn test_restart_after_game_over_resets_everything() {
    let mut engine = started_engine(1);
    engine.lives = 1;
    engine.score = 70;
    engine
        .enemy_bullets
        .push(planted_bullet(Rect::new(295.0, 482.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert!(snapshot
        .events
        .contains(&GameEvent::PlayerHit { lives_remaining: 0 }));
    assert!(snapshot.events.contains(&GameEvent::GameOver { score: 70 }));

    engine.queue_command(PlayerCommand::StartGame);
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.lives, 3);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.frame, 1);
    assert_eq!(snapshot.enemies.len(), 12);
    assert!(snapshot.enemies.iter().all(|e| !e.destroyed));
    assert!(snapshot.enemy_bullets.is_empty());
}

#[test]
fn test_frame_counts_only_while_playing() {
    let mut engine = engine_with_seed(1);
    engine.frame_tick();
    engine.frame_tick();
    assert_eq!(engine.frame(), 0);

    engine.queue_command(PlayerCommand::StartGame);
    engine.frame_tick();
    engine.frame_tick();
    assert_eq!(engine.frame(), 2);

    engine.phase = GamePhase::GameOver;
    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.frame, 2, "frozen sessions do not count frames");
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut a = engine_with_seed(7);
    let mut b = engine_with_seed(7);
    a.queue_command(PlayerCommand::StartGame);
    b.queue_command(PlayerCommand::StartGame);

    for tick in 1..=300u64 {
        if tick % 3 == 0 {
            a.queue_command(PlayerCommand::MoveLeft);
            b.queue_command(PlayerCommand::MoveLeft);
        }
        if tick % 7 == 0 {
            a.queue_command(PlayerCommand::Fire);
            b.queue_command(PlayerCommand::Fire);
        }
        if tick % 5 == 0 {
            a.formation_tick();
            b.formation_tick();
        }

        let snap_a = a.frame_tick();
        let snap_b = b.frame_tick();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "same seed and inputs diverged at tick {tick}");
    }
}

#[test]
fn test_determinism_different_seeds_diverge() {
    let mut a = engine_with_seed(1);
    let mut b = engine_with_seed(2);
    a.queue_command(PlayerCommand::StartGame);
    b.queue_command(PlayerCommand::StartGame);

    let mut diverged = false;
    for _ in 0..2000 {
        a.formation_tick();
        b.formation_tick();
        let snap_a = a.frame_tick();
        let snap_b = b.frame_tick();
        if serde_json::to_string(&snap_a).unwrap() != serde_json::to_string(&snap_b).unwrap() {
            diverged = true;
            break;
        }
    }

    assert!(diverged, "different seeds should produce different fire patterns");
}

// ---- Player movement and fire ----

#[test]
fn test_player_moves_and_clamps() {
    let mut engine = started_engine(1);

    engine.queue_command(PlayerCommand::MoveLeft);
    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.player.pos.x, 268.0);

    engine.player.pos.x = 4.0;
    engine.queue_command(PlayerCommand::MoveLeft);
    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.player.pos.x, 0.0, "left clamp should stop at the field edge");

    engine.player.pos.x = 556.0;
    engine.queue_command(PlayerCommand::MoveRight);
    let snapshot = engine.frame_tick();
    assert_eq!(
        snapshot.player.pos.x, 560.0,
        "right clamp should stop at field width minus ship width"
    );
}

#[test]
fn test_fire_spawns_bullet_at_muzzle() {
    let mut engine = started_engine(1);
    engine.queue_command(PlayerCommand::Fire);
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.player_bullets.len(), 1);
    // Spawned at the ship's top-center, then advanced once this tick.
    let bullet = snapshot.player_bullets[0];
    assert_eq!(bullet.pos.x, 298.5);
    assert_eq!(bullet.pos.y, 460.0);
    assert!(snapshot.events.contains(&GameEvent::PlayerFired));
}

#[test]
fn test_player_bullet_cap() {
    let mut engine = started_engine(1);
    engine.queue_commands([
        PlayerCommand::Fire,
        PlayerCommand::Fire,
        PlayerCommand::Fire,
        PlayerCommand::Fire,
    ]);
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.player_bullets.len(), 3, "fourth shot should be refused by the cap");
    let fired = snapshot
        .events
        .iter()
        .filter(|e| **e == GameEvent::PlayerFired)
        .count();
    assert_eq!(fired, 3, "refused shots emit no event");
}

#[test]
fn test_bullet_pruned_after_leaving_field() {
    let mut engine = started_engine(1);
    engine.enemies.clear();

    engine.queue_command(PlayerCommand::Fire);
    engine.frame_tick();
    for _ in 0..46 {
        engine.frame_tick();
    }
    assert_eq!(engine.player_bullets.len(), 1, "bullet should still be inside the field");

    let snapshot = engine.frame_tick();
    assert!(
        snapshot.player_bullets.is_empty(),
        "bullet should be dropped on the tick it fully leaves the field"
    );
}

// ---- Collisions ----

#[test]
fn test_kill_awards_points_by_kind() {
    let mut engine = started_engine(1);
    engine.enemies.clear();
    engine.enemies.push(live_enemy(100.0, 200.0, EnemyKind::Dreadnought));
    engine.enemies.push(live_enemy(400.0, 60.0, EnemyKind::Drone));
    engine
        .player_bullets
        .push(planted_bullet(Rect::new(110.0, 205.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.score, 30);
    assert!(snapshot.events.contains(&GameEvent::EnemyDestroyed {
        kind: EnemyKind::Dreadnought,
        points: 30,
    }));
    assert!(engine.enemies[0].destroyed);
    assert!(!engine.enemies[1].destroyed);
    assert!(snapshot.player_bullets.is_empty(), "the killing bullet is consumed");
}

#[test]
fn test_one_bullet_kills_at_most_one_enemy() {
    let mut engine = started_engine(1);
    engine.enemies.clear();
    engine.enemies.push(live_enemy(100.0, 100.0, EnemyKind::Drone));
    engine.enemies.push(live_enemy(110.0, 100.0, EnemyKind::Drone));
    engine
        .player_bullets
        .push(planted_bullet(Rect::new(115.0, 105.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();

    assert!(engine.enemies[0].destroyed, "first enemy in collection order takes the hit");
    assert!(!engine.enemies[1].destroyed, "one bullet never kills twice");
    assert_eq!(snapshot.score, 10);
}

#[test]
fn test_each_bullet_can_kill_within_one_tick() {
    let mut engine = started_engine(1);
    engine.enemies.clear();
    engine.enemies.push(live_enemy(100.0, 100.0, EnemyKind::Drone));
    engine.enemies.push(live_enemy(300.0, 100.0, EnemyKind::Drone));
    engine.enemies.push(live_enemy(500.0, 60.0, EnemyKind::Drone));
    engine
        .player_bullets
        .push(planted_bullet(Rect::new(110.0, 105.0, 3.0, 10.0)));
    engine
        .player_bullets
        .push(planted_bullet(Rect::new(310.0, 105.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();

    assert!(engine.enemies[0].destroyed);
    assert!(engine.enemies[1].destroyed);
    assert_eq!(snapshot.score, 20, "both kills land in the same tick");
    assert!(snapshot.player_bullets.is_empty());
}

#[test]
fn test_destroyed_enemy_is_transparent_to_bullets() {
    let mut engine = started_engine(1);
    engine.enemies.clear();
    let mut ghost = live_enemy(100.0, 100.0, EnemyKind::Drone);
    ghost.destroyed = true;
    engine.enemies.push(ghost);
    engine.enemies.push(live_enemy(400.0, 60.0, EnemyKind::Drone));
    engine
        .player_bullets
        .push(planted_bullet(Rect::new(110.0, 105.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.score, 0);
    assert_eq!(
        snapshot.player_bullets.len(),
        1,
        "a bullet passes through a destroyed slot unconsumed"
    );
}

#[test]
fn test_multiple_hits_decrement_lives_independently() {
    let mut engine = started_engine(1);
    engine
        .enemy_bullets
        .push(planted_bullet(Rect::new(290.0, 482.0, 3.0, 10.0)));
    engine
        .enemy_bullets
        .push(planted_bullet(Rect::new(300.0, 482.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.lives, 1);
    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert!(snapshot.enemy_bullets.is_empty(), "both connecting bullets are consumed");
    assert_eq!(
        snapshot.events,
        vec![
            GameEvent::PlayerHit { lives_remaining: 2 },
            GameEvent::PlayerHit { lives_remaining: 1 },
        ]
    );
}

#[test]
fn test_lives_zero_freezes_session() {
    let mut engine = started_engine(1);
    engine.lives = 1;
    engine
        .enemy_bullets
        .push(planted_bullet(Rect::new(295.0, 482.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    let frozen_x = snapshot.player.pos.x;
    let frozen_frame = snapshot.frame;

    let before: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();
    engine.formation_tick();
    let after: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();
    assert_eq!(before, after, "formation must not move after game over");

    engine.queue_commands([PlayerCommand::MoveRight, PlayerCommand::Fire]);
    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.player.pos.x, frozen_x, "movement must not apply after game over");
    assert!(snapshot.player_bullets.is_empty(), "fire must not apply after game over");
    assert_eq!(snapshot.frame, frozen_frame);
}

#[test]
fn test_game_over_takes_priority_over_level_clear() {
    let mut engine = started_engine(1);
    engine.lives = 1;
    engine.enemies.clear();
    engine.enemies.push(live_enemy(100.0, 100.0, EnemyKind::Drone));
    engine
        .player_bullets
        .push(planted_bullet(Rect::new(110.0, 105.0, 3.0, 10.0)));
    engine
        .enemy_bullets
        .push(planted_bullet(Rect::new(295.0, 482.0, 3.0, 10.0)));

    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert_eq!(snapshot.level, 1, "a dead player does not advance levels");
    assert!(snapshot.events.contains(&GameEvent::EnemyDestroyed {
        kind: EnemyKind::Drone,
        points: 10,
    }));
    assert!(snapshot
        .events
        .iter()
        .all(|e| !matches!(e, GameEvent::LevelCleared { .. })));
    assert!(snapshot.events.contains(&GameEvent::GameOver { score: 10 }));
}

// ---- Level advance ----

#[test]
fn test_level_advance_spawns_next_level() {
    let mut engine = started_engine(1);
    for enemy in engine.enemies.iter_mut().skip(1) {
        enemy.destroyed = true;
    }
    let last = engine.enemies[0].rect;
    engine.player_bullets.push(planted_bullet(last));

    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.level, 2);
    assert_eq!(snapshot.enemies.len(), 21, "level 2 should spawn a 3x7 grid");
    assert!(snapshot.enemies.iter().all(|e| !e.destroyed));
    assert!(snapshot.player_bullets.is_empty(), "bullets are wiped across levels");
    assert!(snapshot.enemy_bullets.is_empty());
    assert_eq!(snapshot.player.pos.x, 280.0, "player recenters on level start");
    assert_eq!(engine.formation.speed, 14.0);
    assert_eq!(engine.formation.direction, SweepDirection::Right);
    assert!(snapshot.events.contains(&GameEvent::LevelCleared { level: 1 }));

    // The fresh grid is live, so the advance cannot re-trigger.
    let snapshot = engine.frame_tick();
    assert_eq!(snapshot.level, 2);
    assert!(snapshot
        .events
        .iter()
        .all(|e| !matches!(e, GameEvent::LevelCleared { .. })));
}

#[test]
fn test_empty_formation_is_not_a_clearance() {
    let mut engine = started_engine(1);
    engine.enemies.clear();

    for _ in 0..5 {
        engine.frame_tick();
        engine.formation_tick();
    }

    assert_eq!(engine.level(), 1, "an empty collection must not count as cleared");
    assert_eq!(engine.phase(), GamePhase::Playing);
}

// ---- Formation movement ----

#[test]
fn test_formation_sweeps_right() {
    let mut engine = started_engine(1);
    let before: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();

    engine.formation_tick();

    for (old, enemy) in before.iter().zip(engine.enemies.iter()) {
        assert_eq!(enemy.rect.pos.x, old.pos.x + 12.0, "level 1 sweeps 12 units");
        assert_eq!(enemy.rect.pos.y, old.pos.y, "no descent without a bounce");
    }
    assert_eq!(engine.formation.direction, SweepDirection::Right);
}

#[test]
fn test_edge_bounce_flips_and_descends_atomically() {
    let mut engine = started_engine(1);
    for enemy in engine.enemies.iter_mut() {
        enemy.rect.pos.x += 280.0;
    }
    let before: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();

    engine.formation_tick();

    assert_eq!(engine.formation.direction, SweepDirection::Left);
    for (old, enemy) in before.iter().zip(engine.enemies.iter()) {
        assert_eq!(enemy.rect.pos.x, old.pos.x, "a bounce tick has no lateral movement");
        assert_eq!(enemy.rect.pos.y, old.pos.y + 24.0, "every live enemy descends together");
    }
}

#[test]
fn test_destroyed_enemies_ignored_by_edge_check() {
    let mut engine = started_engine(1);
    engine.enemies[11].destroyed = true;
    engine.enemies[11].rect.pos.x = 590.0;
    let live_before: Vec<Rect> = engine
        .enemies
        .iter()
        .filter(|e| !e.destroyed)
        .map(|e| e.rect)
        .collect();

    engine.formation_tick();

    assert_eq!(
        engine.formation.direction,
        SweepDirection::Right,
        "a destroyed enemy at the edge must not force a bounce"
    );
    let live_after: Vec<Rect> = engine
        .enemies
        .iter()
        .filter(|e| !e.destroyed)
        .map(|e| e.rect)
        .collect();
    for (old, new) in live_before.iter().zip(live_after.iter()) {
        assert_eq!(new.pos.x, old.pos.x + 12.0);
    }
    assert_eq!(engine.enemies[11].rect.pos.x, 590.0, "destroyed enemies never move");
}

#[test]
fn test_formation_lands_and_ends_session() {
    let mut engine = started_engine(1);
    engine.enemies[0].rect.pos.y = 420.0;
    let before: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();

    engine.formation_tick();
    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.phase, GamePhase::GameOver);
    let after: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();
    assert_eq!(before, after, "the landing tick skips movement");
    assert!(snapshot.events.contains(&GameEvent::FormationLanded));
    assert!(snapshot.events.contains(&GameEvent::GameOver { score: 0 }));
}

#[test]
fn test_invasion_check_uses_premove_positions() {
    // One unit above the line: the formation keeps moving.
    let mut engine = started_engine(1);
    engine.enemies[0].rect.pos.y = 419.0;
    engine.formation_tick();
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.enemies[0].rect.pos.x, 52.0, "non-landing ticks still sweep");

    // Exactly on the line: landed before any movement.
    let mut engine = started_engine(1);
    engine.enemies[0].rect.pos.y = 420.0;
    engine.formation_tick();
    assert_eq!(engine.phase(), GamePhase::GameOver);
}

// ---- Enemy fire ----

fn certain_fire_config(seed: u64) -> ArcadeConfig {
    ArcadeConfig {
        seed,
        rules: GameRules {
            enemy_fire_probability: 1.0,
            ..Default::default()
        },
    }
}

#[test]
fn test_enemy_fire_spawns_from_bottom_center() {
    let mut engine = ArcadeEngine::new(certain_fire_config(1));
    engine.queue_command(PlayerCommand::StartGame);
    engine.frame_tick();

    engine.formation_tick();

    assert_eq!(engine.enemy_bullets.len(), 12, "probability 1.0 makes every enemy fire");
    for (enemy, bullet) in engine.enemies.iter().zip(engine.enemy_bullets.iter()) {
        let muzzle = enemy.rect.center_bottom();
        assert_eq!(bullet.rect.pos.x, muzzle.x - 1.5);
        assert_eq!(bullet.rect.pos.y, muzzle.y, "enemy shots leave from the hull bottom");
        assert_eq!(bullet.velocity, 6.0);
    }

    let snapshot = engine.frame_tick();
    let fired = snapshot
        .events
        .iter()
        .filter(|e| **e == GameEvent::EnemyFired)
        .count();
    assert_eq!(fired, 12);
}

#[test]
fn test_destroyed_enemies_never_fire() {
    let mut engine = ArcadeEngine::new(certain_fire_config(1));
    engine.queue_command(PlayerCommand::StartGame);
    engine.frame_tick();
    for enemy in engine.enemies.iter_mut().take(6) {
        enemy.destroyed = true;
    }

    engine.formation_tick();

    assert_eq!(engine.enemy_bullets.len(), 6, "only live enemies sample fire");
}

// ---- Snapshots and clocks ----

#[test]
fn test_snapshot_retains_destroyed_enemies() {
    let mut engine = started_engine(1);
    engine.enemies[2].destroyed = true;

    let snapshot = engine.frame_tick();

    assert_eq!(snapshot.enemies.len(), 12);
    assert!(snapshot.enemies[2].destroyed);
    assert_eq!(snapshot.enemies.iter().filter(|e| e.destroyed).count(), 1);
}

#[test]
fn test_events_drain_exactly_once() {
    let mut engine = started_engine(1);
    engine.queue_command(PlayerCommand::Fire);

    let snapshot = engine.frame_tick();
    assert!(snapshot.events.contains(&GameEvent::PlayerFired));

    let snapshot = engine.frame_tick();
    assert!(snapshot.events.is_empty(), "events must not repeat across snapshots");
}

#[test]
fn test_formation_period_tracks_level() {
    let mut engine = started_engine(1);
    assert_eq!(engine.formation_period().as_millis(), 600);

    engine.level = 3;
    assert_eq!(engine.formation_period().as_millis(), 200);
}

#[test]
fn test_formation_tick_is_noop_outside_playing() {
    let mut engine = started_engine(1);
    engine.phase = GamePhase::GameOver;
    let before: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();

    engine.formation_tick();

    let after: Vec<Rect> = engine.enemies.iter().map(|e| e.rect).collect();
    assert_eq!(before, after);
    assert!(engine.enemy_bullets.is_empty());
}
