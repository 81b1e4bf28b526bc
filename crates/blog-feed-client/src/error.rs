use std::fmt;

/// Errors from the blog feed client
#[derive(Debug)]
pub enum BlogFeedError {
    Http(reqwest::Error),
    Api(String),
    MalformedRecord { index: usize },
}

impl fmt::Display for BlogFeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Api(msg) => write!(f, "API error: {msg}"),
            Self::MalformedRecord { index } => {
                write!(f, "Malformed record at index {index}: missing or non-string title")
            }
        }
    }
}

impl std::error::Error for BlogFeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BlogFeedError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, BlogFeedError>;
