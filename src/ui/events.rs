use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
}

/// Polls terminal events on the UI thread.
///
/// Every interaction is read and handled on the same thread that draws, so
/// one key press is fully applied before the next is read.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next event. `Ok(None)` on timeout or for
    /// events the form does not use (focus, mouse).
    pub fn next(&self) -> io::Result<Option<AppEvent>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        let app_event = match event::read()? {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Paste(text) => Some(AppEvent::Paste(text)),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        };
        Ok(app_event)
    }
}
