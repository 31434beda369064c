//! Audio file formats recognised in song folders.

/// Audio container/codec format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// Free Lossless Audio Codec
    Flac,
    /// MPEG Audio Layer III
    Mp3,
    /// Waveform Audio File Format
    Wav,
}

impl AudioFormat {
    /// Derive a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("mp3") {
            Some(Self::Mp3)
        } else if ext.eq_ignore_ascii_case("flac") {
            Some(Self::Flac)
        } else if ext.eq_ignore_ascii_case("wav") {
            Some(Self::Wav)
        } else {
            None
        }
    }
}
