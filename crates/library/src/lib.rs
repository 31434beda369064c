//! Music library catalogs - the artist/album/song tree read from removable
//! storage, and the path accumulated while drilling into it.
//!
//! # Modules
//!
//! - [`catalog`] - `Domain`, `Catalog`, `Catalogs` and the `FileCatalog` trait
//! - [`path`] - `MusicPath`, the accumulated `/artist/album/song` path
//! - [`scanner`] - hidden-entry, extension and display-name rules
//! - [`track`] - `AudioFormat` enum
//! - [`memory`] - in-memory `FileCatalog` (tests, demos)
//! - `local` - `std::fs` `FileCatalog` (feature `std`)

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![allow(missing_docs)]

extern crate alloc;

pub mod catalog;
#[cfg(feature = "std")]
pub mod local;
pub mod memory;
pub mod path;
pub mod scanner;
pub mod track;

// Top-level re-exports for convenience
pub use catalog::{Catalog, CatalogError, Catalogs, Domain, FileCatalog};
#[cfg(feature = "std")]
pub use local::LocalCatalog;
pub use memory::MemoryCatalog;
pub use path::MusicPath;
pub use scanner::Scanner;
pub use track::AudioFormat;
