//! Collaborator abstractions for the touch music player.
//!
//! The navigation core never talks to hardware directly. Everything it needs
//! from the outside world is expressed as a small synchronous trait here, so
//! the same state machine runs against the touch panel on the appliance, the
//! desktop simulator, and the recording mocks used in tests.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (player crate: scheduler + desktop wiring)
//!         ↓
//! Feature Layers (ui, library, playback, bluetooth)
//!         ↓
//! Platform (this crate - trait abstractions)
//!         ↓
//! Hardware / host implementations
//! ```
//!
//! # Collaborators
//!
//! - [`InputSource`] / [`ClickClassifier`] - classified touch-button events
//! - [`AudioEngine`] - MP3 playback, volume, Bluetooth sink pairing
//! - [`Renderer`] - list, now-playing and message screens, backlight
//! - [`RemoteAccess`] - network join and the upload session
//!
//! # Features
//!
//! - `std`: Enable standard library support
//! - `mocks`: Recording mock collaborators (always on in unit tests)
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```
//! use platform::{Button, ButtonBank, Click, ClickClassifier, InputSource};
//!
//! #[derive(Default)]
//! struct Latch(Option<Click>);
//!
//! impl ClickClassifier for Latch {
//!     fn update(&mut self, pressed: bool) {
//!         if pressed {
//!             self.0 = Some(Click::Single);
//!         }
//!     }
//!     fn poll(&mut self) -> Option<Click> {
//!         self.0.take()
//!     }
//! }
//!
//! let mut bank: ButtonBank<Latch> = ButtonBank::default();
//! bank.update(|b| b == Button::Back || b == Button::Plus);
//! // Plus outranks Back when both fire in the same tick.
//! assert_eq!(bank.poll_event().map(|e| e.button), Some(Button::Plus));
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors - callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(any(test, feature = "mocks"))]
extern crate alloc;

pub mod audio;
pub mod audio_types;
pub mod config;
pub mod display;
pub mod input;
pub mod network;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

// Re-export main collaborator traits
pub use audio::AudioEngine;
pub use audio_types::{OutOfRangeError, VolumePercent};
pub use display::{ListView, NowPlayingView, Renderer, Row};
pub use input::{Button, ButtonBank, Click, ClickClassifier, InputEvent, InputSource};
pub use network::RemoteAccess;
