use std::env;

use crate::error::{Result, ServiceError};

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub feed_url: String,
    pub admin_secret: String,
}

impl Config {
    /// Parse configuration from environment variables.
    ///
    /// `URL` and `SECRET_KEY` are required; `PORT` defaults to 3000.
    pub fn from_env() -> Result<Self> {
        let feed_url = env::var("URL").map_err(|_| {
            ServiceError::Config("URL environment variable is required".to_string())
        })?;

        let admin_secret = env::var("SECRET_KEY").map_err(|_| {
            ServiceError::Config("SECRET_KEY environment variable is required".to_string())
        })?;

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Ok(Self {
            port,
            feed_url,
            admin_secret,
        })
    }
}
