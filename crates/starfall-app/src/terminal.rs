//! Terminal setup and teardown.

use std::io;

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, terminal, ExecutableCommand};

/// Puts the terminal into game mode on construction and restores it on
/// drop, so every exit path (including panics) leaves a usable shell.
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Ask for key-release and key-repeat events. Kitty-protocol
        // terminals honor this; everywhere else the held-key window in
        // the input layer covers for the missing releases.
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

        Ok(Self { keyboard_enhanced })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
