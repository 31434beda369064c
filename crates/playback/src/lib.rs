//! Audio playback - stream state machine, volume stepping and, on desktop
//! builds, a file-backed `AudioEngine`.
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]

pub mod engine;
#[cfg(feature = "std")]
pub mod file_player;
pub mod volume;

pub use engine::{PlaybackEngine, PlaybackError, PlaybackState};
#[cfg(feature = "std")]
pub use file_player::FilePlayer;
pub use volume::VolumeControl;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    /// Playback state machine tests
    mod engine_tests {
        use crate::engine::{PlaybackEngine, PlaybackError, PlaybackState};

        #[test]
        fn test_engine_starts_stopped() {
            let engine = PlaybackEngine::new();
            assert_eq!(engine.state(), PlaybackState::Stopped);
            assert!(!engine.is_playing());
        }

        #[test]
        fn test_load_transitions_to_playing() {
            let mut engine = PlaybackEngine::new();
            engine.load();
            assert_eq!(engine.state(), PlaybackState::Playing);
        }

        #[test]
        fn test_pause_from_playing() {
            let mut engine = PlaybackEngine::new();
            engine.load();
            engine.pause().expect("pause from playing should succeed");
            assert_eq!(engine.state(), PlaybackState::Paused);
        }

        #[test]
        fn test_resume_from_paused() {
            let mut engine = PlaybackEngine::new();
            engine.load();
            engine.advance(1024);
            engine.pause().expect("pause should succeed");
            engine.resume().expect("resume from paused should succeed");
            assert!(engine.is_playing());
            assert_eq!(engine.position_bytes(), 1024);
        }

        #[test]
        fn test_cannot_pause_when_stopped() {
            let mut engine = PlaybackEngine::new();
            assert_eq!(engine.pause(), Err(PlaybackError::NotPlaying));
        }

        #[test]
        fn test_cannot_resume_after_end() {
            let mut engine = PlaybackEngine::new();
            engine.load();
            engine.finish();
            assert!(engine.ended());
            assert_eq!(engine.resume(), Err(PlaybackError::NotPlaying));
        }

        #[test]
        fn test_load_clears_ended() {
            let mut engine = PlaybackEngine::new();
            engine.load();
            engine.finish();
            engine.load();
            assert!(!engine.ended());
            assert_eq!(engine.position_bytes(), 0);
        }

        #[test]
        fn test_resume_while_playing_is_error() {
            let mut engine = PlaybackEngine::new();
            engine.load();
            assert_eq!(engine.resume(), Err(PlaybackError::AlreadyPlaying));
        }
    }

    /// Volume tests
    mod volume_tests {
        use crate::volume::VolumeControl;
        use platform::VolumePercent;

        #[test]
        fn test_default_volume_is_half() {
            let control = VolumeControl::default();
            assert_eq!(control.level(), VolumePercent::new(50));
        }

        #[test]
        fn test_steps_saturate() {
            let mut control = VolumeControl::new(VolumePercent::new(95));
            assert_eq!(control.up(), VolumePercent::MAX);
            let mut control = VolumeControl::new(VolumePercent::new(5));
            assert_eq!(control.down(), VolumePercent::MIN);
        }
    }
}
