use std::collections::{HashMap, HashSet};

use log::debug;

use crate::catalog::{Album, Song, find_song};

/// Album name mapped to the unique song names of its resolved tracks
pub type AlbumsTopSongs = HashMap<String, HashSet<String>>;

/// Collects the unique names of the songs referenced by `album`.
///
/// Track identifiers with no catalog entry are dropped. The set carries no
/// meaningful order.
#[must_use]
pub fn find_top_songs(album: &Album, songs: &[Song]) -> HashSet<String> {
    album
        .tracks()
        .iter()
        .filter_map(|&id| match find_song(songs, id) {
            Some(song) => Some(song.name.clone()),
            None => {
                debug!("Track {id} of album {:?} is not in the catalog", album.name);
                None
            }
        })
        .collect()
}

/// Resolves every album in `albums` against `songs`.
///
/// Albums sharing a name overwrite each other in input order, so the last one
/// wins.
#[must_use]
pub fn albums_top_songs(albums: &[Album], songs: &[Song]) -> AlbumsTopSongs {
    let mut albums_top = AlbumsTopSongs::with_capacity(albums.len());
    for album in albums {
        let top_songs = find_top_songs(album, songs);
        if albums_top.insert(album.name.clone(), top_songs).is_some() {
            debug!("Album {:?} appears more than once, keeping the later one", album.name);
        }
    }
    albums_top
}
