use std::collections::BTreeMap;

use log::info;
use topsongs::report::{ConfigBuilder, Report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine, variables may come from the shell
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ConfigBuilder::new().build()?;
    info!(
        "Reading albums from {:?} and songs from {:?}",
        config.albums_path, config.songs_path
    );

    let albums_top = Report::new(config).run().await?;

    // Sorted for stable output only
    let display: BTreeMap<_, Vec<_>> = albums_top
        .into_iter()
        .map(|(album, songs)| {
            let mut songs: Vec<_> = songs.into_iter().collect();
            songs.sort();
            (album, songs)
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&display)?);

    Ok(())
}
