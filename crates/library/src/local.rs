//! `FileCatalog` over a local directory tree (desktop builds).
//!
//! Layout: `{root}/{Artist}/{Album}/{song}.{ext}`. Artists and albums are the
//! directories one level down; songs are the playable files in an album.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::{Catalog, CatalogError, FileCatalog};
use crate::path::segments;
use crate::scanner::Scanner;

/// Environment variable naming the music root.
pub const MUSIC_PATH_ENV: &str = "MUSIC_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    Song,
}

/// Filesystem-backed catalog rooted at a music directory.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    root: PathBuf,
}

impl LocalCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an absolute catalog path (`/A/X`) onto the filesystem.
    pub fn resolve(&self, catalog_path: &str) -> PathBuf {
        segments(catalog_path).fold(self.root.clone(), |acc, seg| acc.join(seg))
    }

    fn list(&self, catalog_path: &str, kind: EntryKind) -> Result<Catalog, CatalogError> {
        let dir = self.resolve(catalog_path);
        if !dir.is_dir() {
            tracing::warn!(path = catalog_path, "not a directory");
            return Err(CatalogError::unavailable(catalog_path));
        }
        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| {
                tracing::warn!(path = catalog_path, %err, "directory read failed");
                CatalogError::unavailable(catalog_path)
            })?;
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let keep = match kind {
                EntryKind::Dir => entry.file_type().is_dir(),
                EntryKind::Song => entry.file_type().is_file() && Scanner::is_song_file(name),
            };
            if keep {
                names.push(name.to_owned());
            }
        }
        let catalog = Catalog::from_entries(names);
        tracing::debug!(path = catalog_path, entries = catalog.len(), "listed");
        Ok(catalog)
    }
}

impl FileCatalog for LocalCatalog {
    fn list_artists(&mut self) -> Result<Catalog, CatalogError> {
        self.list("/", EntryKind::Dir)
    }

    fn list_albums(&mut self, artist_path: &str) -> Result<Catalog, CatalogError> {
        self.list(artist_path, EntryKind::Dir)
    }

    fn list_songs(&mut self, album_path: &str) -> Result<Catalog, CatalogError> {
        self.list(album_path, EntryKind::Song)
    }
}
