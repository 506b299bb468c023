use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status code error: {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("no #state element found in page")]
    MissingState,

    #[error("failed to decode page state: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no song ID found")]
    NoSongId,

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code_and_reason() {
        let err = Error::Status {
            url: "https://example.com/tab".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "status code error: 404 Not Found for https://example.com/tab"
        );
    }

    #[test]
    fn no_song_id_message() {
        assert_eq!(Error::NoSongId.to_string(), "no song ID found");
    }
}
