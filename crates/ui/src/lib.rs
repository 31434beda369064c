//! Application UI layer - the windowed list box, the navigation state
//! machine that drives it, and the now-playing model.
//!
//! This crate is `no_std` by default; catalogs and the accumulated path use
//! `alloc`.
//!
//! # Modules
//!
//! - [`list_box`] - `WindowedList`, the context stack and the random picker
//! - [`fairness`] - `VisitSet`, visited indices per picking cycle
//! - [`navigation`] - `Navigator`, `Devices`, `StepOutcome`
//! - [`screen`] - `NavState`, the closed set of navigation states
//! - [`now_playing`] - looping flag, action overlay, now-playing view

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

extern crate alloc;

pub mod fairness;
pub mod list_box;
pub mod navigation;
pub mod now_playing;
pub mod screen;

pub use fairness::VisitSet;
pub use list_box::{ContextError, MenuContext, WindowedList};
pub use navigation::{
    Devices, NavError, Navigator, NavigatorConfig, Operation, PlayMode, StepOutcome,
};
pub use now_playing::NowPlayingState;
pub use screen::{NavState, Phase, PlaybackOrigin};
