//! Touch Music Player - desktop build
//!
//! Runs the navigation core against host collaborators: the music folder on
//! disk, a file-streaming audio engine, a text console instead of the touch
//! panel, keyboard lines instead of buttons and a TCP listener for uploads.
//!
//! # Architecture
//!
//! ```text
//! main.rs (clap, tracing-subscriber)
//!         ↓
//! Scheduler (one tick = audio quantum, remote service, one nav step)
//!         ↓
//! ui::Navigator + collaborators (library, playback, console, keyboard, remote)
//! ```
//!
//! # Example
//!
//! ```bash
//! MUSIC_PATH=~/Music cargo run -p player -- --tick-ms 5
//! ```

// Desktop crate: std throughout, println! only through the console writer.
#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)]

pub mod console;
pub mod keyboard;
pub mod remote;
pub mod scheduler;

pub use console::ConsoleRenderer;
pub use keyboard::{parse_command, KeyboardInput};
pub use remote::TcpRemote;
pub use scheduler::{Scheduler, SchedulerError};
