//! Arcade rendering. All terminal drawing for the arcade mode lives
//! here; no game logic is performed.
//!
//! The simulation runs on a fixed-size field, so every frame is
//! projected onto whatever interior the terminal currently offers:
//! row 0 is the HUD, row 1 and the bottom two rows are chrome, and the
//! rest is play area.

use std::io::{self, Write};

use crossterm::style::{self, Color, Print};
use crossterm::{cursor, terminal, QueueableCommand};
use glam::Vec2;

use starfall_core::enums::{EnemyKind, GamePhase};
use starfall_core::state::ArcadeSnapshot;

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_PLAYER_BULLET: Color = Color::Cyan;
const C_ENEMY_BULLET: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Projection from field coordinates onto the terminal interior.
pub(crate) struct FieldScale {
    cols: f32,
    rows: f32,
    field: Vec2,
}

impl FieldScale {
    pub(crate) fn new(term_width: u16, term_height: u16, field: Vec2) -> Self {
        // One column of wall each side; HUD, top bar, bottom bar and
        // hint row above and below.
        Self {
            cols: f32::from(term_width.saturating_sub(2).max(20)),
            rows: f32::from(term_height.saturating_sub(4).max(10)),
            field,
        }
    }

    /// Map a field point to an absolute terminal cell.
    pub(crate) fn cell(&self, point: Vec2) -> (u16, u16) {
        let col = (point.x / self.field.x * self.cols).clamp(0.0, self.cols - 1.0) as u16;
        let row = (point.y / self.field.y * self.rows).clamp(0.0, self.rows - 1.0) as u16;
        (col + 1, row + 2)
    }
}

/// Render one complete arcade frame.
pub fn draw<W: Write>(out: &mut W, snapshot: &ArcadeSnapshot, field: Vec2) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let scale = FieldScale::new(width, height, field);

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, width, height)?;
    draw_hud(out, snapshot, width)?;

    for enemy in &snapshot.enemies {
        if enemy.destroyed {
            continue;
        }
        let (glyph, color) = enemy_sprite(enemy.kind);
        draw_sprite(out, &scale, width, enemy.rect.center(), glyph, color)?;
    }
    for bullet in &snapshot.player_bullets {
        draw_glyph(out, &scale, bullet.center(), "|", C_PLAYER_BULLET)?;
    }
    for bullet in &snapshot.enemy_bullets {
        draw_glyph(out, &scale, bullet.center(), "!", C_ENEMY_BULLET)?;
    }
    draw_sprite(out, &scale, width, snapshot.player.center(), "/^\\", C_PLAYER)?;

    draw_hint(out, height)?;

    match snapshot.phase {
        GamePhase::Start => draw_start_overlay(out, width, height)?,
        GamePhase::GameOver => draw_game_over_overlay(out, snapshot, width, height)?,
        GamePhase::Playing => {}
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn enemy_sprite(kind: EnemyKind) -> (&'static str, Color) {
    match kind {
        EnemyKind::Drone => ("<o>", Color::Green),
        EnemyKind::Raider => ("{x}", Color::Yellow),
        EnemyKind::Dreadnought => ("[M]", Color::Red),
    }
}

/// Draw a three-column sprite centered on a field point, kept inside
/// the side walls.
fn draw_sprite<W: Write>(
    out: &mut W,
    scale: &FieldScale,
    width: u16,
    point: Vec2,
    glyph: &str,
    color: Color,
) -> io::Result<()> {
    let (col, row) = scale.cell(point);
    let start = col.saturating_sub(1).clamp(1, width.saturating_sub(4));
    out.queue(cursor::MoveTo(start, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_glyph<W: Write>(
    out: &mut W,
    scale: &FieldScale,
    point: Vec2,
    glyph: &str,
    color: Color,
) -> io::Result<()> {
    let (col, row) = scale.cell(point);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, snapshot: &ArcadeSnapshot, width: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", snapshot.score)))?;

    let level_str = format!("[ LEVEL {} ]", snapshot.level);
    let lx = (width / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(Color::Green))?;
    out.queue(Print(&level_str))?;

    let hearts: String = "♥".repeat(snapshot.lives as usize);
    let lives_str = format!("Lives:{hearts}");
    let rx = width.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, height: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Menu"))?;
    Ok(())
}

fn draw_start_overlay<W: Write>(out: &mut W, width: u16, height: u16) -> io::Result<()> {
    let cy = height / 2;
    centered(out, width, cy.saturating_sub(3), "╔══════════════════════╗", Color::Cyan)?;
    centered(out, width, cy.saturating_sub(2), "║   S T A R F A L L  ║", Color::Cyan)?;
    centered(out, width, cy.saturating_sub(1), "╚══════════════════════╝", Color::Cyan)?;
    centered(
        out,
        width,
        cy + 1,
        "Hold the line: stop the formation before it reaches you.",
        Color::White,
    )?;
    centered(out, width, cy + 3, "ENTER - Launch   Q - Menu", C_HINT)?;
    Ok(())
}

fn draw_game_over_overlay<W: Write>(
    out: &mut W,
    snapshot: &ArcadeSnapshot,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let cy = height / 2;
    centered(out, width, cy.saturating_sub(3), "╔════════════════════╗", Color::Red)?;
    centered(out, width, cy.saturating_sub(2), "║    GAME  OVER      ║", Color::Red)?;
    centered(out, width, cy.saturating_sub(1), "╚════════════════════╝", Color::Red)?;
    centered(
        out,
        width,
        cy,
        &format!("Final Score: {:>6}", snapshot.score),
        Color::Yellow,
    )?;
    centered(
        out,
        width,
        cy + 1,
        &format!("Reached Level {}", snapshot.level),
        Color::White,
    )?;
    centered(out, width, cy + 3, "ENTER - Retry   Q - Menu", C_HINT)?;
    Ok(())
}

pub(crate) fn centered<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    text: &str,
    color: Color,
) -> io::Result<()> {
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_corners_map_inside_the_border() {
        let field = Vec2::new(600.0, 520.0);
        let scale = FieldScale::new(80, 24, field);

        assert_eq!(scale.cell(Vec2::ZERO), (1, 2));
        // The far corner lands on the last interior cell, not the wall.
        assert_eq!(scale.cell(field), (78, 21));
    }

    #[test]
    fn test_field_center_maps_to_the_middle() {
        let scale = FieldScale::new(80, 24, Vec2::new(600.0, 520.0));
        assert_eq!(scale.cell(Vec2::new(300.0, 260.0)), (40, 12));
    }

    #[test]
    fn test_tiny_terminals_keep_a_minimum_interior() {
        let scale = FieldScale::new(4, 3, Vec2::new(600.0, 520.0));
        let (col, row) = scale.cell(Vec2::new(600.0, 520.0));
        assert_eq!((col, row), (20, 11), "the projection floor is 20x10 cells");
    }
}
