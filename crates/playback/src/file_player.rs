//! File-backed [`AudioEngine`] for desktop builds.
//!
//! Streams the selected file to a byte sink one fixed-size quantum per
//! scheduler tick. Decoding is the sink's business; reaching end of file is
//! how a track ends. Bluetooth pairing is simulated by a poll countdown.

use std::cell::Cell;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use platform::config::AUDIO_COPY_QUANTUM;
use platform::{AudioEngine, VolumePercent};

use crate::engine::PlaybackEngine;
use crate::volume::VolumeControl;

/// Plays files found under a music root into `W`.
pub struct FilePlayer<W: Write = io::Sink> {
    root: PathBuf,
    sink: W,
    file: Option<File>,
    current: Option<String>,
    engine: PlaybackEngine,
    volume: VolumeControl,
    buf: [u8; AUDIO_COPY_QUANTUM],
    pairing_requested: bool,
    pairing_polls_left: Cell<u32>,
}

impl FilePlayer<io::Sink> {
    /// Player that discards the audio it copies.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_sink(root, io::sink())
    }
}

impl<W: Write> FilePlayer<W> {
    /// Player rooted at `root` that writes each quantum to `sink`.
    pub fn with_sink(root: impl Into<PathBuf>, sink: W) -> Self {
        Self {
            root: root.into(),
            sink,
            file: None,
            current: None,
            engine: PlaybackEngine::new(),
            volume: VolumeControl::default(),
            buf: [0; AUDIO_COPY_QUANTUM],
            pairing_requested: false,
            pairing_polls_left: Cell::new(0),
        }
    }

    /// Pairing reports connected only after `polls` unsuccessful checks.
    #[must_use]
    pub fn with_pairing_delay(self, polls: u32) -> Self {
        self.pairing_polls_left.set(polls);
        self
    }

    /// Stream state.
    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    /// Catalog path of the stream last passed to `play`.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Where copied audio goes.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root.clone(), |acc, seg| acc.join(seg))
    }

    fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    fn end_track(&mut self) {
        self.file = None;
        self.engine.finish();
        tracing::info!(
            track = self.current.as_deref().unwrap_or(""),
            bytes = self.engine.position_bytes(),
            "track ended"
        );
    }
}

impl<W: Write> AudioEngine for FilePlayer<W> {
    fn play(&mut self, path: &str) -> bool {
        self.current = Some(path.to_owned());
        let full = self.resolve(path);
        match Self::open(&full) {
            Ok(file) => {
                self.file = Some(file);
                self.engine.load();
                tracing::info!(track = path, "playing");
                true
            }
            Err(err) => {
                self.file = None;
                self.engine.stop();
                tracing::warn!(track = path, %err, "cannot open track");
                false
            }
        }
    }

    fn stop(&mut self) {
        // Keep the file so resume continues where it left off.
        if self.engine.pause().is_err() {
            self.engine.stop();
        }
    }

    fn resume(&mut self) {
        if let Err(err) = self.engine.resume() {
            tracing::debug!(%err, "resume ignored");
        }
    }

    fn is_active(&self) -> bool {
        self.engine.is_playing()
    }

    fn volume_up(&mut self) {
        self.volume.up();
    }

    fn volume_down(&mut self) {
        self.volume.down();
    }

    fn volume(&self) -> VolumePercent {
        self.volume.level()
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
            return true;
        }
        self.pairing_polls_left.set(left.saturating_sub(1));
        false
    }

    fn copy_quantum(&mut self) -> usize {
        if !self.engine.is_playing() {
            return 0;
        }
        let Some(file) = self.file.as_mut() else {
            self.end_track();
            return 0;
        };
        let read = match file.read(&mut self.buf) {
            Ok(n) => n,
            Err(err) => {
                tracing::warn!(%err, "track read failed");
                0
            }
        };
        if read == 0 {
            self.end_track();
            return 0;
        }
        let chunk = self.buf.get(..read).unwrap_or_default();
        if let Err(err) = self.sink.write_all(chunk) {
            tracing::warn!(%err, "sink write failed");
            self.end_track();
            return 0;
        }
        self.engine.advance(read);
        read
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::PlaybackState;
    use std::fs;

    fn library(bytes: usize) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let album = dir.path().join("A").join("X");
        fs::create_dir_all(&album).unwrap();
        fs::write(album.join("1.mp3"), vec![0x55u8; bytes]).unwrap();
        dir
    }

    #[test]
    fn test_copies_in_quanta_until_eof() {
        let dir = library(AUDIO_COPY_QUANTUM + 100);
        let mut player = FilePlayer::with_sink(dir.path(), Vec::new());
        assert!(player.play("/A/X/1.mp3"));
        assert!(player.is_active());

        assert_eq!(player.copy_quantum(), AUDIO_COPY_QUANTUM);
        assert_eq!(player.copy_quantum(), 100);
        assert!(player.is_active());
        assert_eq!(player.copy_quantum(), 0);
        assert!(!player.is_active());
        assert!(player.engine().ended());
        assert_eq!(player.sink().len(), AUDIO_COPY_QUANTUM + 100);
    }

    #[test]
    fn test_missing_file_is_inactive() {
        let dir = library(10);
        let mut player = FilePlayer::new(dir.path());
        assert!(!player.play("/A/X/9.mp3"));
        assert!(!player.is_active());
        assert_eq!(player.current(), Some("/A/X/9.mp3"));
    }

    #[test]
    fn test_stop_then_resume_continues() {
        let dir = library(AUDIO_COPY_QUANTUM * 3);
        let mut player = FilePlayer::with_sink(dir.path(), Vec::new());
        player.play("/A/X/1.mp3");
        player.copy_quantum();
        player.stop();
        assert_eq!(player.engine().state(), PlaybackState::Paused);
        assert_eq!(player.copy_quantum(), 0);
        player.resume();
        assert_eq!(player.copy_quantum(), AUDIO_COPY_QUANTUM);
        assert_eq!(player.engine().position_bytes(), 2 * AUDIO_COPY_QUANTUM as u64);
    }

    #[test]
    fn test_volume_steps() {
        let dir = library(1);
        let mut player = FilePlayer::new(dir.path());
        player.volume_up();
        assert_eq!(player.volume().get(), 60);
        player.volume_down();
        player.volume_down();
        assert_eq!(player.volume().get(), 40);
    }

    #[test]
    fn test_pairing_delay() {
        let dir = library(1);
        let mut player = FilePlayer::new(dir.path()).with_pairing_delay(1);
        assert!(!player.pairing_connected());
        player.request_pairing();
        assert!(!player.pairing_connected());
        assert!(player.pairing_connected());
    }
}
