//! Audio engine abstraction (MP3 decode + Bluetooth A2DP sink).

use crate::audio_types::VolumePercent;

/// Playback collaborator.
///
/// All calls are synchronous and cheap except [`AudioEngine::copy_quantum`],
/// which moves one fixed-size block of audio and is invoked by the scheduler
/// once per tick while playback is active.
pub trait AudioEngine {
    /// Start playing the file at `path` (absolute within the music volume).
    ///
    /// Returns `false` when the file cannot be opened. The engine is then
    /// inactive, which the navigator treats exactly like a finished track.
    fn play(&mut self, path: &str) -> bool;

    /// Halt output. The current stream is kept so [`AudioEngine::resume`]
    /// can continue it.
    fn stop(&mut self);

    /// Continue the stream halted by [`AudioEngine::stop`].
    fn resume(&mut self);

    /// `true` while a stream is being output. Goes `false` when the track
    /// ends, when it fails, or after [`AudioEngine::stop`].
    fn is_active(&self) -> bool;

    /// Raise output volume by one step.
    fn volume_up(&mut self);

    /// Lower output volume by one step.
    fn volume_down(&mut self);

    /// Current output volume.
    fn volume(&self) -> VolumePercent;

    /// Start connecting to the first available Bluetooth sink.
    fn request_pairing(&mut self);

    /// `true` once a Bluetooth sink is connected.
    fn pairing_connected(&self) -> bool;

    /// Move one audio quantum from source to sink; returns bytes moved.
    fn copy_quantum(&mut self) -> usize;
}
