//! Accumulated path while drilling from artists to a song.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Ordered path segments (`artist`, `album`, `song`) below the music root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicPath {
    segments: Vec<String>,
}

impl MusicPath {
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Append one segment.
    pub fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Remove the last segment. No-op on an empty path.
    pub fn truncate_last(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `depth` (0 = artist).
    pub fn segment(&self, depth: usize) -> Option<&str> {
        self.segments.get(depth).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// `/artist/album/song`; `/` for the empty path.
    pub fn to_path_string(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            out.push_str(seg);
        }
        out
    }
}

impl core::fmt::Display for MusicPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

/// Split an absolute catalog path into its segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
