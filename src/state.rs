use scraper::{Html, Selector};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Element holding the page's URL-encoded state blob
const STATE_SELECTOR: &str = "#state";

#[derive(Deserialize, Default, Debug)]
pub struct PageState {
    #[serde(default)]
    pub route: Option<Route>,
}

#[derive(Deserialize, Default, Debug)]
pub struct Route {
    #[serde(default, rename = "songId")]
    pub song_id: Option<u64>,
}

impl PageState {
    /// Song ID with null and absent values read as 0
    pub fn song_id(&self) -> u64 {
        self.route
            .as_ref()
            .and_then(|route| route.song_id)
            .unwrap_or_default()
    }
}

/// Get the song ID embedded in a tab page.
///
/// This is the only place that knows how the site marks up its state, so a
/// markup change should only need to touch this function.
pub fn extract_song_id(html: &str) -> Result<u64> {
    let selector =
        Selector::parse(STATE_SELECTOR).map_err(|e| Error::Selector(format!("{e:?}")))?;
    let document = Html::parse_document(html);

    let mut matches = document.select(&selector).peekable();
    if matches.peek().is_none() {
        return Err(Error::MissingState);
    }
    let encoded: String = matches.flat_map(|element| element.text()).collect();

    let decoded = query_unescape(&encoded)?;
    let state: PageState = serde_json::from_str(&decoded)?;

    match state.song_id() {
        0 => Err(Error::NoSongId),
        id => Ok(id),
    }
}

// Query-string style: '+' is a space, every '%' must start a hex pair
fn query_unescape(encoded: &str) -> Result<String> {
    let bytes = encoded.as_bytes();
    for (i, _) in encoded.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let escape: String = encoded[i..].chars().take(3).collect();
            return Err(Error::Decode(format!("invalid URL escape {escape:?}")));
        }
    }

    let spaced = encoded.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}
