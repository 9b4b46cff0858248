use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// What woke the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press to hand to the input state machine
    Key(KeyEvent),
    /// The redraw interval elapsed
    Tick,
}

/// Merges terminal input with a fixed-interval tick on the calling thread.
///
/// Ticks are not starved by a stream of key presses: once the interval has
/// elapsed the next call yields `Tick` before reading more input.
pub struct EventSource {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventSource {
    pub fn new(tick_rate: Duration) -> Self {
        EventSource {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Block until the next key press or tick
    pub fn next_event(&mut self) -> io::Result<AppEvent> {
        loop {
            let elapsed = self.last_tick.elapsed();
            if elapsed >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(AppEvent::Tick);
            }

            // Release/repeat events and resizes are dropped; resize is
            // picked up by the next draw.
            if event::poll(self.tick_rate - elapsed)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(AppEvent::Key(key));
            }
        }
    }
}
