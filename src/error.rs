use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is invalid. Selector: {0}")]
    ParseInvalidSelector(String),
    #[error("Regex Error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { status: StatusCode, url: String },
}

/// Why a candidate container produced no record.
/// These never abort a run, the candidate is just skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    MissingName,
    MissingRoomDetails,
    NoRoomCode,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Skip::MissingName => "no name link",
            Skip::MissingRoomDetails => "no room details block",
            Skip::NoRoomCode => "no room code in details",
        };
        f.write_str(msg)
    }
}
