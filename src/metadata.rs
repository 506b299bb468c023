use serde::{Deserialize, Serialize};

/// Tab details returned by the metadata API
#[derive(Deserialize, Serialize, Debug)]
pub struct Metadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    /// Location of the downloadable tab file
    #[serde(default)]
    pub source: String,
}
