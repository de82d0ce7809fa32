use crate::clipboard::ClipboardDialer;
use crate::config::Config;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;

/// Run the storefront until the user quits.
pub fn run(config: &Config) -> Result<(), AppError> {
    // Hosts the deferred form reset; the UI loop itself stays synchronous.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .map_err(|err| AppError::Runtime(err.to_string()))?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        config,
        runtime.handle().clone(),
        events.sender(),
        Box::new(ClipboardDialer::default()),
    );
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_terminal_resize(cols, rows);
    }
    tracing::info!("Storefront started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Storefront closed");
    Ok(())
}
