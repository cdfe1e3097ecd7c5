use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpaceTravelingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Malformed page: {0}")]
    MalformedPage(String),

    #[error("No more items to load")]
    NoMoreItems,

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpaceTravelingError {
    /// True for failures of the content-source call itself, including
    /// responses that could not be parsed into a page.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            SpaceTravelingError::Http(_)
                | SpaceTravelingError::Fetch(_)
                | SpaceTravelingError::MalformedPage(_)
                | SpaceTravelingError::InvalidUrl(_)
        )
    }
}

impl From<serde_json::Error> for SpaceTravelingError {
    fn from(err: serde_json::Error) -> Self {
        SpaceTravelingError::MalformedPage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpaceTravelingError>;
