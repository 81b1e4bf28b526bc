//! Blog Feed Client
//!
//! A client for the remote blog feed endpoint. Issues a single
//! authenticated GET per call and validates the duck-typed feed records
//! into typed [`Blog`] values at the fetch boundary.

mod client;
mod error;
mod types;

pub use client::BlogFeedClient;
pub use error::{BlogFeedError, Result};
pub use types::Blog;
