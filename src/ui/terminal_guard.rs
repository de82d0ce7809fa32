use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

/// Gives the shell back its terminal when the storefront exits.
///
/// Raw mode swallows line editing and echo, so a panic while a visitor is
/// typing into the estimate form would otherwise leave their shell unusable.
/// The cleanup runs once: from the panic hook if one fires, else on drop.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<RestoreFn>>>,
}

type RestoreFn = Box<dyn FnOnce() + Send + 'static>;

fn run_once(slot: &Mutex<Option<RestoreFn>>) {
    if let Some(restore) = slot.lock().ok().and_then(|mut slot| slot.take()) {
        restore();
    }
}

impl TerminalGuard {
    fn new<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        }
    }

    /// Chain onto the existing hook so the panic message prints on the
    /// restored screen rather than inside the alternate one.
    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&restore);
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

/// Switch to raw mode on the alternate screen with the cursor hidden.
///
/// The form draws its own caret, so the hardware cursor stays hidden for the
/// whole session.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}
