//! In-memory `FileCatalog` for tests and demos.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::catalog::{Catalog, CatalogError, FileCatalog};
use crate::path::segments;

type Albums = BTreeMap<String, Vec<String>>;

/// Artist → album → songs tree held in memory.
///
/// Applies the same hidden-entry and sort rules as the filesystem catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    artists: BTreeMap<String, Albums>,
    unavailable: bool,
    reads: usize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one song (creating its artist and album as needed).
    #[must_use]
    pub fn with_song(mut self, artist: &str, album: &str, song: &str) -> Self {
        self.add_song(artist, album, song);
        self
    }

    /// Add an album with no songs.
    #[must_use]
    pub fn with_album(mut self, artist: &str, album: &str) -> Self {
        self.artists
            .entry(artist.to_string())
            .or_default()
            .entry(album.to_string())
            .or_default();
        self
    }

    pub fn add_song(&mut self, artist: &str, album: &str, song: &str) {
        self.artists
            .entry(artist.to_string())
            .or_default()
            .entry(album.to_string())
            .or_default()
            .push(song.to_string());
    }

    /// Make every subsequent listing fail.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Number of listings served.
    pub fn reads(&self) -> usize {
        self.reads
    }

    fn begin_read(&mut self, path: &str) -> Result<(), CatalogError> {
        self.reads = self.reads.saturating_add(1);
        if self.unavailable {
            tracing::warn!(path, "catalog unavailable");
            return Err(CatalogError::unavailable(path));
        }
        Ok(())
    }

    fn albums_of(&self, path: &str) -> Result<&Albums, CatalogError> {
        segments(path)
            .next()
            .and_then(|artist| self.artists.get(artist))
            .ok_or_else(|| CatalogError::unavailable(path))
    }
}

impl FileCatalog for MemoryCatalog {
    fn list_artists(&mut self) -> Result<Catalog, CatalogError> {
        self.begin_read("/")?;
        Ok(Catalog::from_entries(self.artists.keys()))
    }

    fn list_albums(&mut self, artist_path: &str) -> Result<Catalog, CatalogError> {
        self.begin_read(artist_path)?;
        Ok(Catalog::from_entries(self.albums_of(artist_path)?.keys()))
    }

    fn list_songs(&mut self, album_path: &str) -> Result<Catalog, CatalogError> {
        self.begin_read(album_path)?;
        let songs = segments(album_path)
            .nth(1)
            .and_then(|album| self.albums_of(album_path).ok()?.get(album))
            .ok_or_else(|| CatalogError::unavailable(album_path))?;
        Ok(Catalog::from_entries(songs))
    }
}
