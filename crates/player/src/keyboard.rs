//! Line-based keyboard input for the desktop build.
//!
//! A reader thread turns stdin lines into [`InputEvent`]s and sends them over
//! a bounded channel; [`KeyboardInput::poll_event`] takes at most one per
//! tick without blocking. If the scheduler stalls and the channel fills up,
//! further events are dropped rather than blocking the reader.
//!
//! | Line            | Event           |
//! |-----------------|-----------------|
//! | `-` / `m`       | Minus           |
//! | `+` / `p`       | Plus            |
//! | `s` / empty     | Select          |
//! | `b`             | Back            |
//! | `t`             | Touched         |
//!
//! Appending `d` makes a double click and `l` a long click (`md`, `+l`).

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::thread;

use platform::{Button, Click, InputEvent, InputSource};

/// Depth of the reader → scheduler channel.
pub const CHANNEL_DEPTH: usize = 16;

/// Parse one input line.
pub fn parse_command(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return Some(InputEvent::single(Button::Select));
    };
    let button = match first.to_ascii_lowercase() {
        '-' | 'm' => Button::Minus,
        '+' | 'p' => Button::Plus,
        's' => Button::Select,
        'b' => Button::Back,
        't' => Button::Touched,
        _ => return None,
    };
    let click = match chars.as_str().to_ascii_lowercase().as_str() {
        "" => Click::Single,
        "d" => Click::Double,
        "l" => Click::Long,
        _ => return None,
    };
    Some(InputEvent::new(button, click))
}

/// Queue `event`, dropping it when the channel is full.
fn try_send_event(tx: &SyncSender<InputEvent>, event: InputEvent) -> bool {
    match tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(ev)) => {
            tracing::warn!(button = ev.button.name(), "input channel full, event dropped");
            true
        }
        Err(TrySendError::Disconnected(_)) => false,
    }
}

/// [`InputSource`] fed by a stdin reader thread.
pub struct KeyboardInput {
    rx: Receiver<InputEvent>,
}

impl KeyboardInput {
    /// Start reading stdin on a background thread.
    pub fn spawn() -> std::io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel(CHANNEL_DEPTH);
        thread::Builder::new()
            .name("keyboard".into())
            .spawn(move || read_lines(std::io::stdin().lock(), &tx))?;
        Ok(Self { rx })
    }

    /// Read events from any line source (used by tests).
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel(CHANNEL_DEPTH);
        thread::Builder::new()
            .name("keyboard".into())
            .spawn(move || read_lines(reader, &tx))?;
        Ok(Self { rx })
    }
}

fn read_lines(reader: impl BufRead, tx: &SyncSender<InputEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, "keyboard read failed");
                break;
            }
        };
        match parse_command(&line) {
            Some(event) => {
                if !try_send_event(tx, event) {
                    break;
                }
            }
            None => tracing::debug!(line = line.as_str(), "unrecognised key line"),
        }
    }
    tracing::debug!("keyboard reader finished");
}

impl InputSource for KeyboardInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
