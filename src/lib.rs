//! Download guitar tabs from Songsterr.
//!
//! A tab page embeds its song ID in a URL-encoded JSON blob. The ID is used to
//! look up the tab's metadata, whose `source` URL points at the actual file.

pub mod client;
pub mod error;
pub mod metadata;
pub mod output_record;
pub mod state;

use std::path::Path;

use log::info;

pub use client::SongsterrClient;
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use output_record::OutputRecord;

/// Download the tab behind a Songsterr page into `out_dir`
pub async fn grab(
    client: &SongsterrClient,
    url: &str,
    out_dir: &Path,
) -> Result<OutputRecord> {
    info!("Fetching page {url}");
    let html = client.fetch_page(url).await?;
    let song_id = state::extract_song_id(&html)?;

    info!("Fetching metadata for song {song_id}");
    let metadata = client.fetch_metadata(song_id).await?;
    let record = OutputRecord::new(metadata, song_id);

    info!("Downloading {} to {}", record.metadata.source, record.filename);
    client
        .download(&record.metadata.source, &out_dir.join(&record.filename))
        .await?;

    Ok(record)
}
