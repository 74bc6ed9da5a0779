use std::env::{self, VarError};
use std::path::PathBuf;

use log::{debug, info};

use crate::catalog::{
    errors::Result,
    loader::{load_albums, load_songs},
};
use crate::top_songs::{AlbumsTopSongs, albums_top_songs};

/// Environment variable holding the album list path
pub const ALBUMS_PATH_VAR: &str = "TOPSONGS_ALBUMS";
/// Environment variable holding the song catalog path
pub const SONGS_PATH_VAR: &str = "TOPSONGS_SONGS";

/// Input locations for a [`Report`]
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with the album list
    pub albums_path: PathBuf,
    /// JSON file with the song catalog
    pub songs_path: PathBuf,
}

/// Builds a [`Config`], falling back to the environment and then to the data directory
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    albums_path: Option<PathBuf>,
    songs_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self {
            albums_path: None,
            songs_path: None,
        }
    }

    /// Overrides the album list path
    #[must_use]
    pub fn albums_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.albums_path = Some(path.into());
        self
    }

    /// Overrides the song catalog path
    #[must_use]
    pub fn songs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.songs_path = Some(path.into());
        self
    }

    /// Resolves every path that was not set explicitly
    pub fn build(self) -> Result<Config> {
        let albums_path = match self.albums_path {
            Some(p) => p,
            None => path_from_env(ALBUMS_PATH_VAR, "albums.json")?,
        };
        let songs_path = match self.songs_path {
            Some(p) => p,
            None => path_from_env(SONGS_PATH_VAR, "songs.json")?,
        };
        Ok(Config {
            albums_path,
            songs_path,
        })
    }
}

fn path_from_env(var: &str, file_name: &str) -> Result<PathBuf> {
    resolve_path(env::var(var), file_name)
}

// Unset variables fall back to the default data directory, non-unicode values are an error
fn resolve_path(value: Result<String, VarError>, file_name: &str) -> Result<PathBuf> {
    match value {
        Ok(value) => Ok(PathBuf::from(value)),
        Err(VarError::NotPresent) => Ok(default_data_dir().join(file_name)),
        Err(e) => Err(e.into()),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if data directory can't be determined
        .join("topsongs")
}

/// Loads albums and songs from disk and resolves each album's songs
pub struct Report {
    config: Config,
}

impl Report {
    /// Creates a report over the given inputs
    #[must_use]
    pub fn new(config: Config) -> Self {
        Report { config }
    }

    /// Loads both inputs and builds the album to song names mapping
    pub async fn run(&self) -> Result<AlbumsTopSongs> {
        info!("Loading albums and songs ...");
        let albums = load_albums(&self.config.albums_path).await?;
        let songs = load_songs(&self.config.songs_path).await?;
        debug!(
            "Resolving {} albums against {} songs",
            albums.len(),
            songs.len()
        );

        let albums_top = albums_top_songs(&albums, &songs);
        info!("Resolved top songs for {} albums", albums_top.len());
        Ok(albums_top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::errors::Error;
    use std::collections::HashSet;
    use std::ffi::OsString;
    use std::fs;

    #[test]
    fn test_builder_keeps_explicit_paths() {
        let config = ConfigBuilder::new()
            .albums_path("/data/a.json")
            .songs_path("/data/s.json")
            .build()
            .unwrap();
        assert_eq!(config.albums_path, PathBuf::from("/data/a.json"));
        assert_eq!(config.songs_path, PathBuf::from("/data/s.json"));
    }

    #[test]
    fn test_resolve_path_uses_variable_value() {
        let path = resolve_path(Ok("/x/albums.json".to_string()), "albums.json").unwrap();
        assert_eq!(path, PathBuf::from("/x/albums.json"));
    }

    #[test]
    fn test_resolve_path_unset_falls_back_to_data_dir() {
        let path = resolve_path(Err(VarError::NotPresent), "songs.json").unwrap();
        assert!(path.ends_with("topsongs/songs.json"));
        assert_eq!(path, default_data_dir().join("songs.json"));
    }

    #[test]
    fn test_resolve_path_rejects_non_unicode_value() {
        let value = Err(VarError::NotUnicode(OsString::from("bad")));
        let err = resolve_path(value, "albums.json").unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[tokio::test]
    async fn test_report_run() {
        let dir = tempfile::tempdir().unwrap();
        let albums_path = dir.path().join("albums.json");
        let songs_path = dir.path().join("songs.json");
        fs::write(
            &albums_path,
            r#"[{"album": "X", "tracks": [1, 2]}, {"album": "Y", "tracks": [3, 99]}]"#,
        )
        .unwrap();
        fs::write(
            &songs_path,
            r#"[{"id": 1, "song": "Alpha"}, {"id": 2, "song": "Beta"}, {"id": 3, "song": "Alpha"}]"#,
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .albums_path(albums_path)
            .songs_path(songs_path)
            .build()
            .unwrap();
        let result = Report::new(config).run().await.unwrap();

        let expected: HashSet<String> = ["Alpha", "Beta"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(result["X"], expected);
        assert_eq!(result["Y"], HashSet::from(["Alpha".to_string()]));
    }

    #[tokio::test]
    async fn test_report_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .albums_path(dir.path().join("albums.json"))
            .songs_path(dir.path().join("songs.json"))
            .build()
            .unwrap();

        let err = Report::new(config).run().await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
