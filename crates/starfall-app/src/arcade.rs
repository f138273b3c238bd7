//! The arcade session loop.
//!
//! Two clocks drive a session. The frame clock runs at the engine's
//! fixed rate and carries input, bullets and collisions; the formation
//! clock fires on its own deadline, which shortens as levels advance.
//! Both use absolute deadlines with a reset when the loop falls too
//! far behind, so a stall never causes a burst of catch-up ticks.

use std::io::{self, Write};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use starfall_core::commands::PlayerCommand;
use starfall_core::constants::FRAME_RATE;
use starfall_core::enums::GamePhase;
use starfall_sim::{ArcadeConfig, ArcadeEngine};

use crate::input::HeldKeys;
use crate::render;

/// Nominal duration of one frame.
const FRAME_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Min frames between queued moves while a direction key is held.
/// 3 frames at 60 FPS is 20 steps a second.
const MOVE_COOLDOWN: u32 = 3;

/// Min frames between queued shots while Space is held. Keeps the
/// three-bullet cap meaningful.
const FIRE_COOLDOWN: u32 = 8;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Advance a deadline by one period, resetting when the loop has
/// fallen more than a period behind the new deadline.
fn advance_deadline(deadline: Instant, period: Duration, now: Instant) -> Instant {
    let next = deadline + period;
    if now > next + period {
        now + period
    } else {
        next
    }
}

/// Run one arcade session until the player leaves.
///
/// Returns `true` to quit the program, `false` to go back to the menu.
pub fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, seed: u64) -> io::Result<bool> {
    let mut engine = ArcadeEngine::new(ArcadeConfig {
        seed,
        ..ArcadeConfig::default()
    });
    let field = engine.rules().field;
    log::info!("arcade session starting with seed {seed}");

    let mut held = HeldKeys::default();
    let mut move_cooldown: u32 = 0;
    let mut fire_cooldown: u32 = 0;
    let mut frame: u64 = 0;
    let mut next_frame = Instant::now() + FRAME_PERIOD;
    let mut next_formation: Option<Instant> = None;

    loop {
        frame += 1;

        // Drain all pending input events.
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            held.record(code, kind, frame);
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                    // The engine ignores this outside Start/GameOver.
                    engine.queue_command(PlayerCommand::StartGame);
                }
                _ => {}
            }
        }

        // Held keys queue commands every frame, throttled so a held
        // direction does not teleport the ship.
        if engine.phase() == GamePhase::Playing {
            let left = held.any_held(&LEFT_KEYS, frame);
            let right = held.any_held(&RIGHT_KEYS, frame);
            let fire = held.is_held(KeyCode::Char(' '), frame);

            if move_cooldown == 0 {
                if left {
                    engine.queue_command(PlayerCommand::MoveLeft);
                    move_cooldown = MOVE_COOLDOWN;
                } else if right {
                    engine.queue_command(PlayerCommand::MoveRight);
                    move_cooldown = MOVE_COOLDOWN;
                }
            }
            if fire_cooldown == 0 && fire {
                engine.queue_command(PlayerCommand::Fire);
                fire_cooldown = FIRE_COOLDOWN;
            }
        }
        move_cooldown = move_cooldown.saturating_sub(1);
        fire_cooldown = fire_cooldown.saturating_sub(1);

        let snapshot = engine.frame_tick();

        // The formation clock runs only while playing, and is re-armed
        // from scratch whenever a session (re-)starts.
        if snapshot.phase == GamePhase::Playing {
            let now = Instant::now();
            match next_formation {
                None => next_formation = Some(now + engine.formation_period()),
                Some(deadline) if now >= deadline => {
                    engine.formation_tick();
                    next_formation =
                        Some(advance_deadline(deadline, engine.formation_period(), now));
                }
                Some(_) => {}
            }
        } else {
            next_formation = None;
        }

        render::draw(out, &snapshot, field)?;

        next_frame += FRAME_PERIOD;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > FRAME_PERIOD * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_frame = now;
        }
    }
}
