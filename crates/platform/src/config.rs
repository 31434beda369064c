//! Application configuration and constants
//!
//! This module defines central configuration values used across the
//! application. Runtime-tunable values (page size, timeouts, seed) start from
//! these defaults and are carried by `ui::NavigatorConfig`.

/// The application name
pub const APP_NAME: &str = "Touch Music Player";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ── List box ────────────────────────────────────────────────────────────────

/// Default number of list rows visible at once.
pub const PAGE_SIZE: usize = 8;

/// Upper bound for a configured page size.
pub const MAX_PAGE_SIZE: usize = 16;

/// Characters per list row in the list font.
pub const MAX_LINE_LENGTH: usize = 40;

/// Characters kept of a list title.
pub const MAX_TITLE_LENGTH: usize = 18;

/// Worst-case UTF-8 size of a full row.
pub const MAX_LINE_BYTES: usize = MAX_LINE_LENGTH * 4;

/// Worst-case UTF-8 size of a full title.
pub const MAX_TITLE_BYTES: usize = MAX_TITLE_LENGTH * 4;

/// Depth of the drill-down context stack (root → artists → albums → songs).
pub const CONTEXT_STACK_DEPTH: usize = 4;

/// Blind random draws before the fairness picker stops retrying.
pub const MAX_SPINS: u32 = 45;

/// Leading character that hides a catalog entry.
pub const HIDDEN_MARKER: char = '.';

// ── Timing ──────────────────────────────────────────────────────────────────

/// Backlight switches off after this long without input.
pub const DISPLAY_TIMEOUT_MS: u64 = 30_000;

/// Interval between Bluetooth pairing polls.
pub const PAIRING_POLL_MS: u64 = 500;

/// Network join attempts before giving up.
pub const NETWORK_JOIN_ATTEMPTS: u32 = 20;

/// Interval between network join attempts.
pub const NETWORK_RETRY_MS: u64 = 500;

/// How many times the network error is shown before restarting.
pub const NETWORK_ERROR_REPEATS: u32 = 3;

/// How long each network error message stays up.
pub const NETWORK_ERROR_DISPLAY_MS: u64 = 2_000;

/// Scheduler tick period on the desktop build.
pub const TICK_MS: u64 = 5;

// ── Audio ───────────────────────────────────────────────────────────────────

/// Bytes copied from source to sink per tick.
pub const AUDIO_COPY_QUANTUM: usize = 1024;

/// Output volume at power-on, in percent.
pub const DEFAULT_VOLUME: u8 = 50;
