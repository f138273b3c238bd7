//! Galaxy mode screens.
//!
//! Galaxy mode is turn-based, so there is no frame clock here: the
//! loop draws the current view, blocks for one key, applies at most
//! one action, and draws again. `map_key` is the whole keymap, kept
//! pure so the routing can be tested without a terminal.

use std::io::{self, Write};
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Color, Print};
use crossterm::{cursor, terminal, QueueableCommand};

use starfall_galaxy::station;
use starfall_galaxy::{GalaxyAction, GalaxyConfig, GalaxyGame, GalaxyPhase, GalaxyView};

use crate::render::centered;

/// What one key press means in the current phase.
#[derive(Debug, PartialEq)]
pub(crate) enum UiInput {
    Act(GalaxyAction),
    Leave,
}

/// Run one galaxy session until the player leaves.
///
/// Returns `true` to quit the program, `false` to go back to the menu.
pub fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, seed: u64) -> io::Result<bool> {
    let mut game = GalaxyGame::new(GalaxyConfig { seed });
    log::info!("galaxy session starting with seed {seed}");

    loop {
        let view = game.view();
        draw(out, &view)?;

        loop {
            let event = match rx.recv() {
                Ok(event) => event,
                Err(_) => return Ok(true),
            };
            let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(true);
            }
            match map_key(view.phase, code) {
                Some(UiInput::Leave) => return Ok(false),
                Some(UiInput::Act(action)) => {
                    game.apply(action);
                    break;
                }
                None => {}
            }
        }
    }
}

/// Route one key to an action for the given phase. Keys that mean
/// nothing in the phase map to `None` and are ignored.
pub(crate) fn map_key(phase: GalaxyPhase, code: KeyCode) -> Option<UiInput> {
    use GalaxyAction as A;

    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Some(UiInput::Leave);
    }

    let action = match (phase, code) {
        (GalaxyPhase::Start, KeyCode::Enter) => A::StartGame,
        (GalaxyPhase::Play, KeyCode::Up) => A::Jump { dx: 0, dy: -1 },
        (GalaxyPhase::Play, KeyCode::Down) => A::Jump { dx: 0, dy: 1 },
        (GalaxyPhase::Play, KeyCode::Left) => A::Jump { dx: -1, dy: 0 },
        (GalaxyPhase::Play, KeyCode::Right) => A::Jump { dx: 1, dy: 0 },
        (GalaxyPhase::Play, KeyCode::Char('s')) => A::Scan,
        (GalaxyPhase::Play, KeyCode::Char('c')) => A::Collect,
        (GalaxyPhase::Play, KeyCode::Char('e')) => A::RechargeShields,
        (GalaxyPhase::Play, KeyCode::Char('d')) => A::Dock,
        (GalaxyPhase::Play, KeyCode::Char(c @ '1'..='9')) => A::SellCargo {
            index: digit_index(c),
        },
        (GalaxyPhase::Station, KeyCode::Char('r')) => A::Repair,
        (GalaxyPhase::Station, KeyCode::Char('f')) => A::Refuel,
        (GalaxyPhase::Station, KeyCode::Char('l')) => A::Undock,
        (GalaxyPhase::Station, KeyCode::Char(c @ '1'..='9')) => A::Buy {
            index: digit_index(c),
        },
        (GalaxyPhase::Combat, KeyCode::Char('f')) => A::Flee,
        (GalaxyPhase::Combat, KeyCode::Char(c @ '1'..='9')) => A::Attack {
            weapon: digit_index(c),
        },
        (GalaxyPhase::Event, KeyCode::Char('1')) => A::Choose { option: 0 },
        (GalaxyPhase::Event, KeyCode::Char('2')) => A::Choose { option: 1 },
        (GalaxyPhase::GameOver, KeyCode::Enter) => A::NewGame,
        _ => return None,
    };
    Some(UiInput::Act(action))
}

fn digit_index(c: char) -> usize {
    (c as usize) - ('1' as usize)
}

/// Bucket a threat value into the word shown on the system readout.
pub(crate) fn threat_descriptor(threat: f64) -> &'static str {
    if threat < 0.3 {
        "calm"
    } else if threat < 0.6 {
        "contested"
    } else if threat < 0.9 {
        "dangerous"
    } else {
        "deadly"
    }
}

fn draw<W: Write>(out: &mut W, view: &GalaxyView) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    centered(out, width, 0, "═══ STARFALL : RUN TO THE CORE ═══", Color::Cyan)?;

    match view.phase {
        GalaxyPhase::Start => draw_start(out, width)?,
        GalaxyPhase::GameOver => draw_game_over(out, view, width)?,
        _ => {
            draw_header(out, view)?;
            match view.phase {
                GalaxyPhase::Play => draw_play(out, view)?,
                GalaxyPhase::Station => draw_station(out, view)?,
                GalaxyPhase::Combat => draw_combat(out, view)?,
                GalaxyPhase::Event => draw_event(out, view)?,
                _ => {}
            }
        }
    }

    draw_messages(out, view, height)?;
    draw_key_hint(out, view.phase, height)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn line<W: Write>(out: &mut W, row: u16, text: &str, color: Color) -> io::Result<()> {
    out.queue(cursor::MoveTo(2, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_header<W: Write>(out: &mut W, view: &GalaxyView) -> io::Result<()> {
    let system = &view.system;
    line(
        out,
        2,
        &format!(
            "Sector {},{}   {}  ({})   {:.1} sectors to the core",
            view.sector.0,
            view.sector.1,
            system.name,
            system.star.label(),
            view.distance_to_core
        ),
        Color::White,
    )?;
    let ship = &view.ship;
    line(
        out,
        3,
        &format!(
            "Hull {}/{}   Shields {}/{}   Energy {}/{}   Fuel {}/{}   Credits {}",
            ship.hull,
            ship.max_hull,
            ship.shields,
            ship.max_shields,
            ship.energy,
            ship.max_energy,
            ship.fuel,
            ship.max_fuel,
            ship.credits
        ),
        Color::Yellow,
    )?;
    Ok(())
}

fn draw_start<W: Write>(out: &mut W, width: u16) -> io::Result<()> {
    centered(
        out,
        width,
        4,
        "A lone ship on the galactic rim. The core is ten sectors away.",
        Color::White,
    )?;
    centered(
        out,
        width,
        5,
        "Jump sector to sector, mine what you find, outfight or outrun",
        Color::White,
    )?;
    centered(out, width, 6, "whatever finds you. Watch the fuel gauge.", Color::White)?;
    centered(out, width, 9, "ENTER - Launch", Color::Cyan)?;
    Ok(())
}

fn draw_play<W: Write>(out: &mut W, view: &GalaxyView) -> io::Result<()> {
    let system = &view.system;
    line(
        out,
        5,
        &format!(
            "{} planets   threat level: {}",
            system.planets,
            threat_descriptor(system.threat)
        ),
        Color::White,
    )?;

    let mut row = 6;
    if let Some(station) = &system.station_name {
        line(out, row, &format!("{station} hails you."), Color::Green)?;
        row += 1;
    }
    if !view.ship.cargo.is_empty() {
        row += 1;
        line(out, row, "Cargo bay:", Color::White)?;
        row += 1;
        for (i, item) in view.ship.cargo.iter().enumerate() {
            line(
                out,
                row,
                &format!("  [{}] {} ({} cr)", i + 1, item.name, item.sell_price),
                Color::Cyan,
            )?;
            row += 1;
        }
    }
    Ok(())
}

fn draw_station<W: Write>(out: &mut W, view: &GalaxyView) -> io::Result<()> {
    let name = view.system.station_name.as_deref().unwrap_or("the station");
    line(out, 5, &format!("Docked at {name}."), Color::Green)?;
    line(
        out,
        6,
        &format!(
            "[R] Repair {} hull for {} cr     [F] Refuel {} for {} cr",
            station::REPAIR_POINTS,
            station::REPAIR_POINTS * station::REPAIR_COST_PER_POINT,
            station::REFUEL_UNITS,
            station::REFUEL_UNITS * station::REFUEL_COST_PER_UNIT
        ),
        Color::White,
    )?;

    line(out, 8, "On offer:", Color::White)?;
    for (i, item) in view.stock.iter().enumerate() {
        line(
            out,
            9 + i as u16,
            &format!("  [{}] {:<22} {:>5} cr", i + 1, item.name, item.price),
            Color::Cyan,
        )?;
    }
    Ok(())
}

fn draw_combat<W: Write>(out: &mut W, view: &GalaxyView) -> io::Result<()> {
    let Some(enemy) = &view.enemy else {
        return Ok(());
    };
    line(
        out,
        5,
        &format!("{}   hull {}/{}", enemy.name, enemy.hull, enemy.max_hull),
        Color::Red,
    )?;
    line(out, 7, "Weapons:", Color::White)?;
    for (i, weapon) in view.ship.weapons.iter().enumerate() {
        line(
            out,
            8 + i as u16,
            &format!(
                "  [{}] {:<16} {} dmg, {} energy, {:.0}% to hit",
                i + 1,
                weapon.name,
                weapon.damage,
                weapon.energy_cost,
                weapon.hit_chance * 100.0
            ),
            Color::Cyan,
        )?;
    }
    Ok(())
}

fn draw_event<W: Write>(out: &mut W, view: &GalaxyView) -> io::Result<()> {
    let Some(event) = &view.event else {
        return Ok(());
    };
    line(out, 5, &event.title, Color::Magenta)?;
    line(out, 6, &event.description, Color::White)?;
    line(out, 8, &format!("  [1] {}", event.options[0]), Color::Cyan)?;
    line(out, 9, &format!("  [2] {}", event.options[1]), Color::Cyan)?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, view: &GalaxyView, width: u16) -> io::Result<()> {
    if view.won {
        centered(out, width, 4, "╔══════════════════════════╗", Color::Yellow)?;
        centered(out, width, 5, "║    THE CORE IS YOURS     ║", Color::Yellow)?;
        centered(out, width, 6, "╚══════════════════════════╝", Color::Yellow)?;
        centered(
            out,
            width,
            8,
            &format!("Credits amassed: {}", view.ship.credits),
            Color::White,
        )?;
    } else {
        centered(out, width, 4, "╔══════════════════════════╗", Color::Red)?;
        centered(out, width, 5, "║     LOST TO THE VOID     ║", Color::Red)?;
        centered(out, width, 6, "╚══════════════════════════╝", Color::Red)?;
    }
    centered(out, width, 10, "ENTER - New Run   Q - Menu", Color::DarkGrey)?;
    Ok(())
}

fn draw_messages<W: Write>(out: &mut W, view: &GalaxyView, height: u16) -> io::Result<()> {
    let mut row = height.saturating_sub(3);

    // Notices from the last action, newest nearest the bottom.
    for notice in view.notices.iter().rev() {
        line(out, row, notice, Color::White)?;
        row = row.saturating_sub(1);
    }

    // A short dimmed tail of the run log above them.
    for entry in view.log.iter().rev().take(3) {
        line(out, row, entry, Color::DarkGrey)?;
        row = row.saturating_sub(1);
    }
    Ok(())
}

fn draw_key_hint<W: Write>(out: &mut W, phase: GalaxyPhase, height: u16) -> io::Result<()> {
    let hint = match phase {
        GalaxyPhase::Start => "ENTER : Launch   Q : Menu",
        GalaxyPhase::Play => {
            "Arrows : Jump   S : Scan   C : Collect   E : Shields   D : Dock   1-9 : Sell   Q : Menu"
        }
        GalaxyPhase::Station => "R : Repair   F : Refuel   1-9 : Buy   L : Leave dock   Q : Menu",
        GalaxyPhase::Combat => "1-9 : Fire weapon   F : Flee   Q : Menu",
        GalaxyPhase::Event => "1 / 2 : Choose   Q : Menu",
        GalaxyPhase::GameOver => "ENTER : New run   Q : Menu",
    };
    out.queue(cursor::MoveTo(2, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print(hint))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_routes_by_phase() {
        assert_eq!(
            map_key(GalaxyPhase::Play, KeyCode::Up),
            Some(UiInput::Act(GalaxyAction::Jump { dx: 0, dy: -1 }))
        );
        assert_eq!(
            map_key(GalaxyPhase::Play, KeyCode::Char('5')),
            Some(UiInput::Act(GalaxyAction::SellCargo { index: 4 }))
        );
        assert_eq!(
            map_key(GalaxyPhase::Station, KeyCode::Char('3')),
            Some(UiInput::Act(GalaxyAction::Buy { index: 2 }))
        );
        assert_eq!(
            map_key(GalaxyPhase::Combat, KeyCode::Char('1')),
            Some(UiInput::Act(GalaxyAction::Attack { weapon: 0 }))
        );
        assert_eq!(
            map_key(GalaxyPhase::Combat, KeyCode::Char('f')),
            Some(UiInput::Act(GalaxyAction::Flee))
        );
        assert_eq!(
            map_key(GalaxyPhase::Event, KeyCode::Char('2')),
            Some(UiInput::Act(GalaxyAction::Choose { option: 1 }))
        );
        assert_eq!(
            map_key(GalaxyPhase::GameOver, KeyCode::Enter),
            Some(UiInput::Act(GalaxyAction::NewGame))
        );
    }

    #[test]
    fn test_quit_keys_leave_in_every_phase() {
        for phase in [
            GalaxyPhase::Start,
            GalaxyPhase::Play,
            GalaxyPhase::Station,
            GalaxyPhase::Combat,
            GalaxyPhase::Event,
            GalaxyPhase::GameOver,
        ] {
            assert_eq!(map_key(phase, KeyCode::Char('q')), Some(UiInput::Leave));
            assert_eq!(map_key(phase, KeyCode::Esc), Some(UiInput::Leave));
        }
    }

    #[test]
    fn test_keys_outside_their_phase_are_ignored() {
        assert_eq!(map_key(GalaxyPhase::Start, KeyCode::Char('s')), None);
        assert_eq!(map_key(GalaxyPhase::Play, KeyCode::Enter), None);
        assert_eq!(map_key(GalaxyPhase::Station, KeyCode::Up), None);
        assert_eq!(map_key(GalaxyPhase::Event, KeyCode::Char('3')), None);
    }

    #[test]
    fn test_threat_descriptor_buckets() {
        assert_eq!(threat_descriptor(0.0), "calm");
        assert_eq!(threat_descriptor(0.3), "contested");
        assert_eq!(threat_descriptor(0.6), "dangerous");
        assert_eq!(threat_descriptor(0.95), "deadly");
    }
}
