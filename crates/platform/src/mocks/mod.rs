//! Mock implementations for testing
//!
//! This module provides recording mock implementations of all platform
//! traits for use in unit and integration tests of the navigation core.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::Cell;

use crate::*;

/// Mock input device
pub struct MockInput {
    events: heapless::Deque<InputEvent, 32>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: heapless::Deque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.events.push_back(event)
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MockInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Mock audio engine
///
/// Every `play` is recorded. Tracks never end on their own: call
/// [`MockAudio::finish_track`] to simulate the end of a song.
pub struct MockAudio {
    plays: Vec<String>,
    active: bool,
    stops: usize,
    resumes: usize,
    volume: VolumePercent,
    fail_plays: bool,
    pairing_requested: bool,
    pairing_polls_left: Cell<u32>,
    bytes_copied: usize,
}

impl MockAudio {
    /// Create new mock audio engine whose pairing succeeds on the first poll
    pub fn new() -> Self {
        Self::with_pairing_after(0)
    }

    /// Pairing reports connected only after `polls` unsuccessful polls
    pub fn with_pairing_after(polls: u32) -> Self {
        Self {
            plays: Vec::new(),
            active: false,
            stops: 0,
            resumes: 0,
            volume: VolumePercent::default(),
            fail_plays: false,
            pairing_requested: false,
            pairing_polls_left: Cell::new(polls),
            bytes_copied: 0,
        }
    }

    /// Paths passed to `play`, oldest first
    pub fn plays(&self) -> &[String] {
        &self.plays
    }

    /// Most recent path passed to `play`
    pub fn last_play(&self) -> Option<&str> {
        self.plays.last().map(String::as_str)
    }

    /// Simulate the current track running out
    pub fn finish_track(&mut self) {
        self.active = false;
    }

    /// Make every subsequent `play` fail
    pub fn fail_plays(&mut self, fail: bool) {
        self.fail_plays = fail;
    }

    /// Number of `stop` calls
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// Number of `resume` calls
    pub fn resumes(&self) -> usize {
        self.resumes
    }

    /// Whether `request_pairing` was called
    pub fn pairing_requested(&self) -> bool {
        self.pairing_requested
    }

    /// Total bytes moved by `copy_quantum`
    pub fn bytes_copied(&self) -> usize {
        self.bytes_copied
    }
}

impl Default for MockAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine for MockAudio {
    fn play(&mut self, path: &str) -> bool {
        self.plays.push(path.to_string());
        self.active = !self.fail_plays;
        self.active
    }

    fn stop(&mut self) {
        self.stops = self.stops.saturating_add(1);
        self.active = false;
    }

    fn resume(&mut self) {
        self.resumes = self.resumes.saturating_add(1);
        self.active = !self.plays.is_empty();
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn volume_up(&mut self) {
        self.volume = self.volume.step_up();
    }

    fn volume_down(&mut self) {
        self.volume = self.volume.step_down();
    }

    fn volume(&self) -> VolumePercent {
        self.volume
    }

    fn request_pairing(&mut self) {
        self.pairing_requested = true;
    }

    fn pairing_connected(&self) -> bool {
        if !self.pairing_requested {
            return false;
        }
        let left = self.pairing_polls_left.get();
        if left == 0 {
            true
        } else {
            self.pairing_polls_left.set(left.saturating_sub(1));
            false
        }
    }

    fn copy_quantum(&mut self) -> usize {
        if !self.active {
            return 0;
        }
        self.bytes_copied = self.bytes_copied.saturating_add(config::AUDIO_COPY_QUANTUM);
        config::AUDIO_COPY_QUANTUM
    }
}

/// Mock remote-access service
pub struct MockRemote {
    attempts: u32,
    succeed_on: Option<u32>,
    connected: bool,
    service_steps: usize,
    disconnects: usize,
    address: String,
}

impl MockRemote {
    /// Join succeeds on attempt number `attempt` (1-based)
    pub fn succeeding_on(attempt: u32) -> Self {
        Self {
            attempts: 0,
            succeed_on: Some(attempt),
            connected: false,
            service_steps: 0,
            disconnects: 0,
            address: "192.168.1.50".to_string(),
        }
    }

    /// Join never succeeds
    pub fn unreachable() -> Self {
        Self {
            succeed_on: None,
            ..Self::succeeding_on(1)
        }
    }

    /// Join attempts made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether a session is up
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of `service_step` calls
    pub fn service_steps(&self) -> usize {
        self.service_steps
    }

    /// Number of `disconnect` calls
    pub fn disconnects(&self) -> usize {
        self.disconnects
    }
}

impl RemoteAccess for MockRemote {
    fn connect(&mut self) -> bool {
        self.attempts = self.attempts.saturating_add(1);
        self.connected = self.succeed_on.is_some_and(|n| self.attempts >= n);
        self.connected
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn service_step(&mut self) {
        self.service_steps = self.service_steps.saturating_add(1);
    }

    fn disconnect(&mut self) {
        self.disconnects = self.disconnects.saturating_add(1);
        self.connected = false;
    }
}

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// `paint_list`
    List {
        /// Title
        title: String,
        /// Visible rows
        rows: Vec<String>,
        /// Highlighted row
        selected_row: Option<usize>,
        /// Centered layout
        centered: bool,
    },
    /// `now_playing`
    NowPlaying {
        /// Artist
        artist: String,
        /// Album
        album: String,
        /// Song
        song: String,
        /// Overlay open
        overlay: bool,
        /// Looping flag
        looping: bool,
        /// Volume
        volume: u8,
    },
    /// `message`
    Message(Vec<String>),
    /// `set_backlight`
    Backlight(bool),
}

/// Mock renderer recording every call
pub struct MockRenderer {
    paints: Vec<Paint>,
    backlight: bool,
}

impl MockRenderer {
    /// Create new mock renderer (backlight on)
    pub fn new() -> Self {
        Self {
            paints: Vec::new(),
            backlight: true,
        }
    }

    /// Every recorded call, oldest first
    pub fn paints(&self) -> &[Paint] {
        &self.paints
    }

    /// Number of `paint_list` calls
    pub fn list_paints(&self) -> usize {
        self.paints
            .iter()
            .filter(|p| matches!(p, Paint::List { .. }))
            .count()
    }

    /// Most recent `paint_list` call
    pub fn last_list(&self) -> Option<&Paint> {
        self.paints
            .iter()
            .rev()
            .find(|p| matches!(p, Paint::List { .. }))
    }

    /// Most recent call of any kind
    pub fn last(&self) -> Option<&Paint> {
        self.paints.last()
    }

    /// Current backlight level
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Forget recorded calls
    pub fn clear(&mut self) {
        self.paints.clear();
    }
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MockRenderer {
    fn paint_list(&mut self, view: &ListView<'_>) {
        self.paints.push(Paint::List {
            title: view.title.to_string(),
            rows: view.rows.iter().map(|r| r.as_str().to_string()).collect(),
            selected_row: view.selected_row,
            centered: view.centered,
        });
    }

    fn now_playing(&mut self, view: &NowPlayingView<'_>) {
        self.paints.push(Paint::NowPlaying {
            artist: view.artist.to_string(),
            album: view.album.to_string(),
            song: view.song.to_string(),
            overlay: view.overlay,
            looping: view.looping,
            volume: view.volume.get(),
        });
    }

    fn message(&mut self, lines: &[&str]) {
        self.paints
            .push(Paint::Message(lines.iter().map(|l| (*l).to_string()).collect()));
    }

    fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
        self.paints.push(Paint::Backlight(on));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_input() {
        let mut input = MockInput::new();

        input.add_event(InputEvent::single(Button::Plus)).unwrap();
        input.add_event(InputEvent::single(Button::Select)).unwrap();

        assert_eq!(input.poll_event(), Some(InputEvent::single(Button::Plus)));
        assert_eq!(input.poll_event(), Some(InputEvent::single(Button::Select)));
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn test_mock_audio_play_and_finish() {
        let mut audio = MockAudio::new();
        assert!(audio.play("/A/X/1.mp3"));
        assert!(audio.is_active());
        assert_eq!(audio.copy_quantum(), config::AUDIO_COPY_QUANTUM);

        audio.finish_track();
        assert!(!audio.is_active());
        assert_eq!(audio.copy_quantum(), 0);
        assert_eq!(audio.last_play(), Some("/A/X/1.mp3"));
    }

    #[test]
    fn test_mock_audio_pairing_countdown() {
        let mut audio = MockAudio::with_pairing_after(2);
        assert!(!audio.pairing_connected(), "not requested yet");
        audio.request_pairing();
        assert!(!audio.pairing_connected());
        assert!(!audio.pairing_connected());
        assert!(audio.pairing_connected());
    }

    #[test]
    fn test_mock_remote_succeeds_on_attempt() {
        let mut remote = MockRemote::succeeding_on(3);
        assert!(!remote.connect());
        assert!(!remote.connect());
        assert!(remote.connect());
        assert_eq!(remote.attempts(), 3);
    }

    #[test]
    fn test_mock_renderer_records_backlight() {
        let mut display = MockRenderer::new();
        display.set_backlight(false);
        assert!(!display.backlight());
        assert_eq!(display.last(), Some(&Paint::Backlight(false)));
    }
}
