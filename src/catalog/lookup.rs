use crate::catalog::entities::{Song, TrackId};

/// Returns the first song in `songs` whose identifier is `id`.
///
/// `None` means the catalog has no such track, which callers treat as routine
/// rather than as an error.
#[must_use]
pub fn find_song(songs: &[Song], id: TrackId) -> Option<&Song> {
    songs.iter().find(|song| song.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Song> {
        vec![
            Song::new(1, "Alpha"),
            Song::new(2, "Beta"),
            Song::new(1, "Shadowed"),
        ]
    }

    #[test]
    fn test_find_song_returns_match() {
        let songs = catalog();
        assert_eq!(find_song(&songs, 2).map(|s| s.name.as_str()), Some("Beta"));
    }

    #[test]
    fn test_find_song_prefers_first_match() {
        let songs = catalog();
        assert_eq!(find_song(&songs, 1).map(|s| s.name.as_str()), Some("Alpha"));
    }

    #[test]
    fn test_find_song_missing_id() {
        assert!(find_song(&catalog(), 99).is_none());
        assert!(find_song(&[], 1).is_none());
    }
}
