use serde::Deserialize;

/// A single validated blog record.
///
/// The feed is otherwise duck-typed; `title` is the only field the
/// downstream engines interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub title: String,
}

/// Wire shape of the feed endpoint body.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedResponse {
    pub(crate) blogs: Vec<RawBlog>,
}

/// One record exactly as the feed returns it. The title stays an untyped
/// JSON value so a missing or non-string title is a structured validation
/// failure rather than a whole-body decode error.
#[derive(Debug, Deserialize)]
pub(crate) struct RawBlog {
    #[serde(default)]
    pub(crate) title: Option<serde_json::Value>,
}
