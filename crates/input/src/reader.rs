//! Background terminal reader.
//!
//! A dedicated thread blocks on `crossterm::event::read` and forwards the
//! events the game cares about over an mpsc channel. It never touches game
//! state; the main loop owns that and only dequeues events.
//!
//! The thread exits when the receiving side is dropped or the terminal
//! reports an error.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, warn};

/// Terminal events forwarded to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press (repeats and releases are dropped)
    Key(KeyEvent),
    /// The terminal was resized to `(width, height)`
    Resize(u16, u16),
}

impl InputEvent {
    /// Keep key presses and resizes; drop everything else.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key(key)),
            Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawn the reader thread and return the receiving end of its queue.
pub fn spawn_reader() -> io::Result<Receiver<InputEvent>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("input-reader".into())
        .spawn(move || loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "terminal read failed, stopping input reader");
                    return;
                }
            };
            let Some(input) = InputEvent::from_terminal(event) else {
                continue;
            };
            if tx.send(input).is_err() {
                debug!("input queue closed");
                return;
            }
        })?;
    Ok(rx)
}
