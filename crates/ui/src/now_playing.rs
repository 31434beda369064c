//! Now-playing screen state - looping flag and action overlay on top of the
//! track named by the accumulated path.

use library::{MusicPath, Scanner};
use platform::{NowPlayingView, VolumePercent};

/// State for the now-playing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NowPlayingState {
    /// Replay the current track when it ends.
    pub looping: bool,
    /// Action overlay open (playback halted).
    pub overlay: bool,
}

impl NowPlayingState {
    /// Flip the looping flag, returning the new value.
    pub fn toggle_looping(&mut self) -> bool {
        self.looping = !self.looping;
        self.looping
    }

    /// Open or close the action overlay.
    pub fn set_overlay(&mut self, open: bool) {
        self.overlay = open;
    }

    /// View of `path` (`/artist/album/song`) for the renderer. Missing
    /// segments are shown empty; the song is shown without its extension.
    #[must_use]
    pub fn view<'a>(&self, path: &'a MusicPath, volume: VolumePercent) -> NowPlayingView<'a> {
        NowPlayingView {
            artist: path.segment(0).unwrap_or(""),
            album: path.segment(1).unwrap_or(""),
            song: path.segment(2).map(Scanner::display_name).unwrap_or(""),
            volume,
            looping: self.looping,
            overlay: self.overlay,
        }
    }
}
