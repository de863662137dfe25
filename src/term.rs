use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Scoped ownership of the terminal's raw mode and alternate screen.
///
/// Dropping the guard restores cooked mode and the main screen, so the
/// terminal comes back on every exit path out of the interactive
/// region, including panics. Restore errors are swallowed in drop;
/// there is nowhere left to report them.
#[derive(Debug)]
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { restored: false })
    }

    /// Restore the terminal eagerly, reporting any error. Drop remains
    /// as the backstop for early returns and panics.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        Self::first_failure(
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen),
        )
    }

    // Both restore steps have already run by the time this selects a
    // result; a raw-mode failure must not leave the alternate screen
    // in place.
    fn first_failure(raw: io::Result<()>, screen: io::Result<()>) -> io::Result<()> {
        match (raw, screen) {
            (Ok(()), screen) => screen,
            (Err(e), _) => Err(e),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}
