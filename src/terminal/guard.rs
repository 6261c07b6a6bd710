//! Scoped ownership of the terminal.
//!
//! Raw mode and a hidden cursor are process-wide state. [`TerminalGuard`]
//! acquires them once and gives them back in `Drop`, so every exit path,
//! including errors and panics, leaves the terminal usable.

use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Holds the terminal in raw mode with the cursor hidden.
pub struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the escape sequences fail. Whatever
    /// was already changed is restored before returning.
    pub fn acquire(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, Drop undoes everything.
        let guard = Self { alternate_screen };

        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        tracing::debug!(alternate_screen, "terminal acquired");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, crossterm::style::ResetColor, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            // Frames end without a newline; keep the shell prompt off the last row.
            let _ = execute!(stdout, crossterm::style::Print("\r\n"));
        }
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::error!(error = %e, "failed to leave raw mode");
        }
        tracing::debug!("terminal restored");
    }
}
