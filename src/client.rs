use std::path::Path;

use futures::StreamExt;
use log::debug;
use reqwest::{Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::metadata::Metadata;

/// Songsterr metadata API, queried as `<base>/<song id>`
pub const METADATA_API: &str = "https://www.songsterr.com/api/meta";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct SongsterrClient {
    http: reqwest::Client,
    api_base: String,
}

impl SongsterrClient {
    pub fn new(http: reqwest::Client, api_base: impl Into<String>) -> Self {
        SongsterrClient {
            http,
            api_base: api_base.into(),
        }
    }

    pub fn try_default() -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(SongsterrClient::new(http, METADATA_API))
    }

    /// Get the HTML of a tab page
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        let html = response.text().await?;
        debug!("Received {} bytes of HTML from {url}", html.len());
        Ok(html)
    }

    pub async fn fetch_metadata(&self, song_id: u64) -> Result<Metadata> {
        let url = format!("{}/{song_id}", self.api_base.trim_end_matches('/'));
        let body = self.get(&url).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Stream the file at `source` into `path`, returning the bytes written.
    ///
    /// The file is only created once the server has answered with 200. A
    /// failure halfway through leaves the partial file behind.
    pub async fn download(&self, source: &str, path: &Path) -> Result<u64> {
        let response = self.get(source).await?;

        let mut file = File::create(path).await?;
        let stream = response.bytes_stream();
        futures::pin_mut!(stream);
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("Wrote {written} bytes to {path:?}");
        Ok(written)
    }

    // GET that only accepts a 200 answer
    async fn get(&self, url: &str) -> Result<Response> {
        let response = self.http.get(url).send().await?;
        match response.status() {
            StatusCode::OK => Ok(response),
            status => Err(Error::Status {
                url: url.to_string(),
                status,
            }),
        }
    }
}
