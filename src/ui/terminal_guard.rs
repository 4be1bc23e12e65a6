//! Terminal setup for the Omnitrix screens.
//!
//! The gallery is scrolled with the mouse wheel as well as the keyboard, so
//! mouse capture is switched on together with raw mode and the alternate
//! screen. All of it has to be undone on exit, including after a panic, or
//! the shell is left swallowing wheel events as escape sequences.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Hands the terminal back to the shell exactly once, from whichever of
/// drop or the panic hook gets there first.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn arm(restore: Restore) -> Self {
        let guard = Self {
            restore: Arc::new(Mutex::new(Some(restore))),
        };

        let slot = Arc::clone(&guard.restore);
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&slot);
            previous_hook(info);
        }));

        guard
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) {
    if let Some(restore) = slot.lock().take() {
        restore();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

/// Leave the alternate screen with mouse capture off, so wheel scrolling
/// goes back to the shell's scrollback.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Enter raw mode on the alternate screen with wheel events captured for
/// gallery scrolling.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?
        .execute(TermClear(ClearType::All))?
        .execute(Hide)?;

    let guard = TerminalGuard::arm(Box::new(restore_terminal));
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
