//! Scanner - naming rules applied to directory entries.
//!
//! Entries whose name starts with the hidden marker are never listed, song
//! files must carry a supported audio extension, and song names are shown
//! without their extension.

use platform::config::HIDDEN_MARKER;

use crate::track::AudioFormat;

/// Stateless helper for directory-entry filtering.
pub struct Scanner;

impl Scanner {
    /// Returns `true` when `name` must be left out of every catalog.
    pub fn is_hidden(name: &str) -> bool {
        name.is_empty() || name.starts_with(HIDDEN_MARKER)
    }

    /// Returns `true` when `ext` is a supported audio file extension.
    ///
    /// The comparison is **case-insensitive**.
    /// Supported extensions: `mp3`, `flac`, `wav`.
    pub fn is_supported_extension(ext: &str) -> bool {
        AudioFormat::from_extension(ext).is_some()
    }

    /// Returns `true` when `file_name` is a playable song file.
    pub fn is_song_file(file_name: &str) -> bool {
        !Self::is_hidden(file_name)
            && split_extension(file_name)
                .1
                .is_some_and(Self::is_supported_extension)
    }

    /// `file_name` with its extension removed, as shown on screen.
    ///
    /// A leading dot is not an extension separator, and names without a dot
    /// are returned unchanged.
    pub fn display_name(file_name: &str) -> &str {
        split_extension(file_name).0
    }
}

/// Split `name` into stem and extension at the last dot.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(0) | None => (name, None),
        Some(dot) => match (name.get(..dot), name.get(dot.saturating_add(1)..)) {
            (Some(stem), Some(ext)) => (stem, Some(ext)),
            _ => (name, None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_entries() {
        assert!(Scanner::is_hidden(".Trashes"));
        assert!(Scanner::is_hidden(""));
        assert!(!Scanner::is_hidden("Abba"));
    }

    #[test]
    fn test_scanner_recognises_mp3() {
        assert!(Scanner::is_supported_extension("mp3"));
        assert!(Scanner::is_supported_extension("MP3"));
    }

    #[test]
    fn test_scanner_rejects_jpg() {
        assert!(!Scanner::is_supported_extension("jpg"));
        assert!(!Scanner::is_supported_extension(""));
    }

    #[test]
    fn test_song_file_rules() {
        assert!(Scanner::is_song_file("01 Intro.mp3"));
        assert!(!Scanner::is_song_file("cover.jpg"));
        assert!(!Scanner::is_song_file("._01 Intro.mp3"));
        assert!(!Scanner::is_song_file("README"));
    }

    #[test]
    fn test_display_name_strips_last_extension() {
        assert_eq!(Scanner::display_name("1.mp3"), "1");
        assert_eq!(Scanner::display_name("Live at 5.30.mp3"), "Live at 5.30");
        assert_eq!(Scanner::display_name("Abba"), "Abba");
        assert_eq!(Scanner::display_name(".hidden"), ".hidden");
    }
}
