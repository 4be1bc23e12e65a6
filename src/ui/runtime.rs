use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::timer::SystemClock;
use anyhow::Context;
use std::sync::Arc;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(config, Arc::new(SystemClock)).context("Invalid alien catalog")?;
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(aliens = app.catalog().len(), "Omnitrix started");

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    app.teardown();
    drop(guard);
    tracing::info!("Omnitrix stopped");
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: std::time::Duration,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, &*app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => tracing::debug!("Terminal resized"),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
