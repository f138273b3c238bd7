use std::io::{self, BufWriter, Write};
use std::sync::mpsc;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Color, Print};
use crossterm::{cursor, terminal, QueueableCommand};

use starfall_app::terminal::TerminalGuard;
use starfall_app::{arcade, galaxy_ui, input};

struct Options {
    seed: u64,
    galaxy: bool,
}

/// `--seed N` fixes the session RNG; `--galaxy` skips the mode menu.
fn parse_args() -> Options {
    let mut options = Options {
        seed: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(42),
        galaxy: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(seed) = args.next().and_then(|v| v.parse().ok()) {
                    options.seed = seed;
                }
            }
            "--galaxy" => options.galaxy = true,
            _ => {}
        }
    }
    options
}

enum Mode {
    Arcade,
    Galaxy,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let options = parse_args();
    log::info!("starfall starting with seed {}", options.seed);

    let _guard = TerminalGuard::enter()?;
    let rx = input::spawn_input_thread();
    let mut out = BufWriter::new(io::stdout());

    if options.galaxy {
        galaxy_ui::run(&mut out, &rx, options.seed)?;
        return Ok(());
    }

    run_menu(&mut out, &rx, options.seed)
}

fn run_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, seed: u64) -> io::Result<()> {
    loop {
        draw_menu(out)?;

        let mode = loop {
            let event = match rx.recv() {
                Ok(event) => event,
                Err(_) => return Ok(()),
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
            match code {
                KeyCode::Char('1') => break Mode::Arcade,
                KeyCode::Char('2') => break Mode::Galaxy,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                _ => {}
            }
        };

        let quit = match mode {
            Mode::Arcade => arcade::run(out, rx, seed)?,
            Mode::Galaxy => galaxy_ui::run(out, rx, seed)?,
        };
        if quit {
            return Ok(());
        }
    }
}

fn draw_menu<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "✦  S T A R F A L L  ✦";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let options: &[(&str, &str, Color, &str)] = &[
        ("1", "Arcade", Color::Green, "Hold the line against the descending formation"),
        ("2", "Galaxy", Color::Yellow, "Jump, trade and fight your way to the core"),
    ];
    for (i, (key, label, color, desc)) in options.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(24), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{key}] ")))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{label:<8}")))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(*desc))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(24), cy + 2))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("1 / 2 : Select   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
