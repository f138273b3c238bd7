//! Arcade engine: the core of the game.
//!
//! `ArcadeEngine` owns every entity collection and the session
//! counters, processes queued player commands, runs the system
//! pipeline, and produces an `ArcadeSnapshot` per frame-tick. The two
//! clocks are driven externally: the frontend calls `frame_tick` at a
//! fixed rate and `formation_tick` on the cadence `formation_period`
//! reports for the current level. Both entry points gate on the phase,
//! so a stale timer can never mutate a finished session.

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::entities::{Bullet, Enemy, Formation};
use starfall_core::enums::GamePhase;
use starfall_core::events::GameEvent;
use starfall_core::rules::GameRules;
use starfall_core::state::ArcadeSnapshot;
use starfall_core::types::Rect;

use crate::levels;
use crate::systems;
use crate::systems::collision::CollisionOutcome;

/// Configuration for creating an engine.
#[derive(Debug, Clone)]
pub struct ArcadeConfig {
    /// RNG seed. Same seed and same inputs reproduce a session
    /// bit-for-bit.
    pub seed: u64,
    pub rules: GameRules,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: GameRules::default(),
        }
    }
}

/// The arcade engine. Owns all session state.
pub struct ArcadeEngine {
    pub(crate) rules: GameRules,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) phase: GamePhase,
    pub(crate) frame: u64,
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) level: u32,
    pub(crate) player: Rect,
    pub(crate) player_bullets: Vec<Bullet>,
    pub(crate) enemy_bullets: Vec<Bullet>,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) formation: Formation,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl ArcadeEngine {
    pub fn new(config: ArcadeConfig) -> Self {
        let player = config.rules.player_spawn();
        let lives = config.rules.start_lives;
        log::debug!("arcade engine created with seed {}", config.seed);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: GamePhase::Start,
            frame: 0,
            score: 0,
            lives,
            level: 1,
            player,
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            formation: Formation::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            rules: config.rules,
        }
    }

    /// Queue a player command for the next frame-tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame-tick and return the resulting snapshot.
    ///
    /// Pipeline order:
    /// 1. Drain and apply queued commands
    /// 2. Advance both bullet collections and prune leavers
    /// 3. Resolve collisions against post-move positions (pure)
    /// 4. Apply the collision outcome atomically
    /// 5. Evaluate terminal and level-advance conditions
    /// 6. Build the snapshot, draining buffered events
    pub fn frame_tick(&mut self) -> ArcadeSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            systems::projectiles::advance(&mut self.player_bullets, &self.rules);
            systems::projectiles::advance(&mut self.enemy_bullets, &self.rules);

            let outcome = systems::collision::resolve(
                &self.player_bullets,
                &self.enemy_bullets,
                &self.enemies,
                &self.player,
            );
            self.apply_collisions(outcome);

            // Running out of lives wins over clearing the level; a
            // terminal phase skips the advance entirely.
            if self.phase == GamePhase::Playing {
                self.check_level_clear();
            }

            self.frame += 1;
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(self, events)
    }

    /// Advance one formation-tick: sweep, bounce, or land the grid,
    /// then convert this tick's fire decisions into enemy bullets.
    ///
    /// Driven on its own clock with the period `formation_period`
    /// reports. No-op outside `Playing`.
    pub fn formation_tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let outcome = systems::formation::run(
            &mut self.enemies,
            &mut self.formation,
            &self.rules,
            &mut self.rng,
        );

        for &index in &outcome.shooters {
            let bullet = systems::projectiles::fire_enemy_bullet(&self.enemies[index], &self.rules);
            self.enemy_bullets.push(bullet);
            self.events.push(GameEvent::EnemyFired);
        }

        if outcome.landed {
            self.events.push(GameEvent::FormationLanded);
            self.end_session();
        }
    }

    /// Formation-tick period for the current level.
    pub fn formation_period(&self) -> Duration {
        self.rules.formation_period(self.level)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Apply one command. Commands that do not fit the current phase
    /// are dropped silently.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Start | GamePhase::GameOver) {
                    self.reset_session();
                }
            }
            PlayerCommand::MoveLeft => {
                if self.phase == GamePhase::Playing {
                    self.player.pos.x =
                        (self.player.pos.x - self.rules.player_step).clamp(0.0, self.rules.player_max_x());
                }
            }
            PlayerCommand::MoveRight => {
                if self.phase == GamePhase::Playing {
                    self.player.pos.x =
                        (self.player.pos.x + self.rules.player_step).clamp(0.0, self.rules.player_max_x());
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Playing {
                    if let Some(bullet) = systems::projectiles::fire_player_bullet(
                        &self.player,
                        self.player_bullets.len(),
                        &self.rules,
                    ) {
                        self.player_bullets.push(bullet);
                        self.events.push(GameEvent::PlayerFired);
                    }
                }
            }
        }
    }

    /// Fresh session: counters reset, level 1 grid spawned, player
    /// re-centered. Leftover events from the previous session are
    /// discarded rather than leaking into the new one.
    fn reset_session(&mut self) {
        self.phase = GamePhase::Playing;
        self.frame = 0;
        self.score = 0;
        self.lives = self.rules.start_lives;
        self.level = 1;
        self.player = self.rules.player_spawn();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.events.clear();
        let (enemies, formation) = levels::spawn_level(1, &self.rules);
        self.enemies = enemies;
        self.formation = formation;
        log::info!("session started: {} enemies at level 1", self.enemies.len());
    }

    /// Apply a resolved collision outcome in one place: mark kills,
    /// award score, remove spent bullets, then decrement lives once per
    /// connecting enemy bullet.
    fn apply_collisions(&mut self, outcome: CollisionOutcome) {
        for &(index, points) in &outcome.destroyed {
            let enemy = &mut self.enemies[index];
            enemy.destroyed = true;
            self.score += points;
            self.events.push(GameEvent::EnemyDestroyed {
                kind: enemy.kind,
                points,
            });
        }

        remove_spent(&mut self.player_bullets, outcome.spent_player_bullets);
        remove_spent(&mut self.enemy_bullets, outcome.spent_enemy_bullets);

        for _ in 0..outcome.hits_on_player {
            self.lives = self.lives.saturating_sub(1);
            self.events.push(GameEvent::PlayerHit {
                lives_remaining: self.lives,
            });
        }

        if outcome.hits_on_player > 0 && self.lives == 0 {
            self.end_session();
        }
    }

    /// Edge-triggered level advance. Fires at most once per clearance
    /// because the respawn immediately repopulates the grid with live
    /// enemies. An empty collection is not a clearance.
    fn check_level_clear(&mut self) {
        if self.enemies.is_empty() || self.enemies.iter().any(|e| !e.destroyed) {
            return;
        }

        let cleared = self.level;
        self.level += 1;
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.player = self.rules.player_spawn();
        let (enemies, formation) = levels::spawn_level(self.level, &self.rules);
        self.enemies = enemies;
        self.formation = formation;
        self.events.push(GameEvent::LevelCleared { level: cleared });
        log::info!(
            "level {} cleared, advancing to {} ({} enemies, sweep speed {})",
            cleared,
            self.level,
            self.enemies.len(),
            self.formation.speed
        );
    }

    /// Terminal transition. Entity state freezes as-is; only
    /// `StartGame` leaves this phase.
    fn end_session(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("game over at level {} with score {}", self.level, self.score);
    }
}

/// Remove bullets by index. Indices may arrive in any order; removal
/// runs highest-first so earlier removals cannot shift later ones.
fn remove_spent(bullets: &mut Vec<Bullet>, mut spent: Vec<usize>) {
    spent.sort_unstable();
    for index in spent.into_iter().rev() {
        bullets.remove(index);
    }
}
