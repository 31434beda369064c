//! Catalogs - the ordered entry lists the list box browses.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::scanner::Scanner;

/// The four logical catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Top-level operations (root menu)
    Operations,
    /// Artist folders
    Artists,
    /// Album folders of one artist
    Albums,
    /// Song files of one album
    Songs,
}

impl Domain {
    /// All domains, root first.
    pub const ALL: [Domain; 4] = [
        Domain::Operations,
        Domain::Artists,
        Domain::Albums,
        Domain::Songs,
    ];

    /// Short name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Domain::Operations => "operations",
            Domain::Artists => "artists",
            Domain::Albums => "albums",
            Domain::Songs => "songs",
        }
    }
}

/// An ordered list of entry names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// An empty catalog.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a catalog from raw directory entry names: hidden entries are
    /// dropped and the rest sorted lexicographically.
    pub fn from_entries<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = names
            .into_iter()
            .filter(|n| !Scanner::is_hidden(n.as_ref()))
            .map(|n| n.as_ref().to_string())
            .collect();
        entries.sort_unstable();
        Self { entries }
    }

    /// Build a catalog that keeps `names` in the given order (menus).
    pub fn fixed(names: &[&str]) -> Self {
        Self {
            entries: names.iter().map(|n| (*n).to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// One catalog per [`Domain`].
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    operations: Catalog,
    artists: Catalog,
    albums: Catalog,
    songs: Catalog,
}

impl Catalogs {
    pub fn get(&self, domain: Domain) -> &Catalog {
        match domain {
            Domain::Operations => &self.operations,
            Domain::Artists => &self.artists,
            Domain::Albums => &self.albums,
            Domain::Songs => &self.songs,
        }
    }

    /// Replace the catalog backing `domain` wholesale.
    pub fn set(&mut self, domain: Domain, catalog: Catalog) {
        let slot = match domain {
            Domain::Operations => &mut self.operations,
            Domain::Artists => &mut self.artists,
            Domain::Albums => &mut self.albums,
            Domain::Songs => &mut self.songs,
        };
        *slot = catalog;
    }
}

/// Catalog read failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The directory could not be opened or read.
    Unavailable {
        /// Path that failed, relative to the music root
        path: String,
    },
}

impl CatalogError {
    pub fn unavailable(path: &str) -> Self {
        Self::Unavailable {
            path: path.to_string(),
        }
    }
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable { path } => write!(f, "cannot open directory {path}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

/// Directory listing collaborator.
///
/// Every listing is complete or an error: a partial list is never returned.
/// Paths are absolute within the music volume (`/Artist`, `/Artist/Album`).
pub trait FileCatalog {
    /// Artist folders at the volume root, sorted, hidden entries excluded.
    fn list_artists(&mut self) -> Result<Catalog, CatalogError>;

    /// Album folders under `artist_path`.
    fn list_albums(&mut self, artist_path: &str) -> Result<Catalog, CatalogError>;

    /// Song files under `album_path`.
    fn list_songs(&mut self, album_path: &str) -> Result<Catalog, CatalogError>;
}
