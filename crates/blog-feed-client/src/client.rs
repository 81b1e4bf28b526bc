use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{BlogFeedError, Result};
use crate::types::{Blog, FeedResponse, RawBlog};

const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// HTTP client for the remote blog feed
pub struct BlogFeedClient {
    client: Client,
    endpoint: String,
    admin_secret: String,
}

impl BlogFeedClient {
    /// Create a new client for the given feed endpoint and admin credential
    pub fn new(endpoint: &str, admin_secret: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.to_string(),
            admin_secret: admin_secret.to_string(),
        }
    }

    /// Fetch the current blog collection from the remote feed.
    ///
    /// Issues a single GET with the admin credential attached; failures are
    /// never retried.
    pub async fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        debug!(endpoint = %self.endpoint, "Fetching blog feed");

        let response = self
            .client
            .get(&self.endpoint)
            .header(ADMIN_SECRET_HEADER, self.admin_secret.as_str())
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Blog feed returned non-success status");
            return Err(BlogFeedError::Api(format!(
                "Blog feed returned status {}",
                response.status()
            )));
        }

        let feed: FeedResponse = response.json().await?;
        let blogs = validate_records(feed.blogs)?;

        debug!(count = blogs.len(), "Fetched blog feed");
        Ok(blogs)
    }
}

/// Validate raw feed records into typed blogs.
///
/// A record whose `title` is absent or not a string is rejected with the
/// index it occurred at; no partial collection is returned.
fn validate_records(raw: Vec<RawBlog>) -> Result<Vec<Blog>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| match record.title {
            Some(serde_json::Value::String(title)) => Ok(Blog { title }),
            _ => Err(BlogFeedError::MalformedRecord { index }),
        })
        .collect()
}
