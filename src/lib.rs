//! Topsongs - Resolve album track lists to song names
//!
//! This library maps every album to the set of unique song names its tracks
//! reference in a song catalog. Tracks missing from the catalog are skipped.

/// Song and album records, catalog lookup and JSON loading
pub mod catalog;
/// Configuration and the load-then-resolve report
pub mod report;
/// Per-album song name resolution
pub mod top_songs;

pub use top_songs::{AlbumsTopSongs, albums_top_songs, find_top_songs};
