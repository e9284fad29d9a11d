use crate::config::Config;
use crate::form::FormValues;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(Box::new(|values: &FormValues| {
        tracing::debug!(
            full_name_chars = values.full_name.chars().count(),
            "simulated submission delivered"
        );
    }));
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "form started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Paste(text)) => app.on_paste(&text),
            // The next draw picks up the new size.
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(?cols, ?rows, "terminal resized");
            }
            None => {}
        }
    }

    tracing::info!("form closed");
    drop(guard);
    Ok(())
}
