/// Song and album records
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// JSON loading of albums and songs
pub mod loader;
/// Song lookup by track identifier
pub mod lookup;

pub use entities::{Album, Song, TrackId};
pub use lookup::find_song;
