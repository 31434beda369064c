//! Display abstraction layer.
//!
//! The renderer receives fully prepared views: rows are already clipped to
//! the display width and song filenames already have their extension
//! stripped, so a renderer only has to lay out text.

use crate::audio_types::VolumePercent;
use crate::config::{MAX_LINE_BYTES, MAX_PAGE_SIZE};

/// One clipped list row. Sized so any `MAX_LINE_LENGTH` characters fit.
pub type Row = heapless::String<MAX_LINE_BYTES>;

/// Screen renderer for the list box, now-playing and message screens.
pub trait Renderer {
    /// Paint the visible window of the list box.
    fn paint_list(&mut self, view: &ListView<'_>);

    /// Paint the now-playing screen (or the action overlay on top of it).
    fn now_playing(&mut self, view: &NowPlayingView<'_>);

    /// Paint a short centered message (status, connection address, errors).
    fn message(&mut self, lines: &[&str]);

    /// Switch the backlight.
    fn set_backlight(&mut self, on: bool);
}

/// The visible window of the list box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    /// List title
    pub title: &'a str,
    /// Visible rows, top to bottom
    pub rows: heapless::Vec<Row, MAX_PAGE_SIZE>,
    /// Index into `rows` of the highlighted row (`None` for an empty list)
    pub selected_row: Option<usize>,
    /// Center rows instead of left-aligning them
    pub centered: bool,
}

/// What the now-playing screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlayingView<'a> {
    /// Artist folder name
    pub artist: &'a str,
    /// Album folder name
    pub album: &'a str,
    /// Song name without extension
    pub song: &'a str,
    /// Output volume
    pub volume: VolumePercent,
    /// Repeat the current song when it ends
    pub looping: bool,
    /// Action overlay is open (playback halted)
    pub overlay: bool,
}
