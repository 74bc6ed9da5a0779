use std::path::Path;

use log::debug;

use crate::catalog::{
    entities::{Album, Song},
    errors::Result,
};

/// Parses a JSON array of albums
pub fn parse_albums(contents: &str) -> Result<Vec<Album>> {
    Ok(serde_json::from_str(contents)?)
}

/// Parses a JSON array of songs
pub fn parse_songs(contents: &str) -> Result<Vec<Song>> {
    Ok(serde_json::from_str(contents)?)
}

/// Reads and parses the album list stored at `path`
pub async fn load_albums(path: impl AsRef<Path>) -> Result<Vec<Album>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let albums = parse_albums(&contents)?;
    debug!("Loaded {} albums from {path:?}", albums.len());
    Ok(albums)
}

/// Reads and parses the song catalog stored at `path`
pub async fn load_songs(path: impl AsRef<Path>) -> Result<Vec<Song>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let songs = parse_songs(&contents)?;
    debug!("Loaded {} songs from {path:?}", songs.len());
    Ok(songs)
}
