//! Playback state machine.
//!
//! `PlaybackEngine` is a pure, `no_std`, allocation-free state machine that
//! tracks whether the current stream is stopped, playing or paused, how far
//! it has been copied, and whether it ran to its end.
//!
//! It has no I/O. [`crate::file_player::FilePlayer`] reads files and consults
//! the engine to decide what `is_active`, `stop` and `resume` mean.

/// Current playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackState {
    /// No stream is loaded, the stream ended, or it failed to open.
    Stopped,
    /// A stream is being copied to the sink.
    Playing,
    /// The stream is held; position is preserved for `resume`.
    Paused,
}

/// Errors returned by `PlaybackEngine` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackError {
    /// The operation needs a loaded stream, but the engine is stopped.
    NotPlaying,
    /// `resume` was called while already playing.
    AlreadyPlaying,
}

impl core::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPlaying => f.write_str("no stream loaded"),
            Self::AlreadyPlaying => f.write_str("stream already playing"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlaybackError {}

/// Pure state machine for one audio stream.
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    state: PlaybackState,
    position_bytes: u64,
    ended: bool,
}

impl PlaybackEngine {
    /// Create a new engine in the `Stopped` state.
    pub const fn new() -> Self {
        Self {
            state: PlaybackState::Stopped,
            position_bytes: 0,
            ended: false,
        }
    }

    /// A new stream was opened: start from byte zero.
    pub fn load(&mut self) {
        self.state = PlaybackState::Playing;
        self.position_bytes = 0;
        self.ended = false;
    }

    /// Hold the stream, preserving the position.
    ///
    /// Transitions:
    /// - `Playing → Paused`  ✓
    /// - `Paused  → Paused`  idempotent
    /// - `Stopped`            returns `Err(NotPlaying)`
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Stopped => Err(PlaybackError::NotPlaying),
            PlaybackState::Playing | PlaybackState::Paused => {
                self.state = PlaybackState::Paused;
                Ok(())
            }
        }
    }

    /// Continue a paused stream.
    ///
    /// # Errors
    ///
    /// `NotPlaying` when no stream is loaded (including after it ended),
    /// `AlreadyPlaying` when not paused.
    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Stopped => Err(PlaybackError::NotPlaying),
            PlaybackState::Playing => Err(PlaybackError::AlreadyPlaying),
            PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                Ok(())
            }
        }
    }

    /// Drop the stream. Always succeeds.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.position_bytes = 0;
    }

    /// Record `bytes` copied to the sink.
    pub fn advance(&mut self, bytes: usize) {
        let bytes = u64::try_from(bytes).unwrap_or(u64::MAX);
        self.position_bytes = self.position_bytes.saturating_add(bytes);
    }

    /// The source ran dry: the track ended.
    pub fn finish(&mut self) {
        self.state = PlaybackState::Stopped;
        self.ended = true;
    }

    /// Current stream state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// `true` only while the stream is being copied.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// `true` when the last stream stopped because it reached its end.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Bytes copied since the stream was loaded.
    pub fn position_bytes(&self) -> u64 {
        self.position_bytes
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}
