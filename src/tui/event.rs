use std::io;
use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Blocking terminal event source with a tick fallback
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        EventHandler {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for a key press
    pub fn next(&mut self) -> io::Result<Event> {
        if crossterm::event::poll(self.tick_rate)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                // Filter for Press only (Windows compatibility)
                if key.kind == KeyEventKind::Press {
                    return Ok(Event::Key(key));
                }
            }
        }
        Ok(Event::Tick)
    }
}
