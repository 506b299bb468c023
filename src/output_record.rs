use serde::Serialize;

use crate::metadata::Metadata;

/// Summary of a finished download, printed as one JSON line
#[derive(Serialize, Debug)]
pub struct OutputRecord {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(rename = "songId")]
    pub song_id: u64,
    pub filename: String,
}

impl OutputRecord {
    pub fn new(metadata: Metadata, song_id: u64) -> Self {
        let filename = Self::filename_for(&metadata);
        OutputRecord { metadata, song_id, filename }
    }

    /// Local file name for a tab: `<title> - <artist><ext>`.
    ///
    /// Title and artist are used as-is, path separators included.
    pub fn filename_for(metadata: &Metadata) -> String {
        format!(
            "{} - {}{}",
            metadata.title,
            metadata.artist,
            extension(&metadata.source)
        )
    }
}

/// Extension (with the dot) of the last path segment of a URL
fn extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    segment.rfind('.').map_or("", |dot| &segment[dot..])
}
