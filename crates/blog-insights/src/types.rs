//! Data types for the blog insights service

use serde::{Deserialize, Serialize};

/// Aggregate statistics over one fetched blog collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_blogs: usize,
    /// Title of the first record with the maximum title length; `None`
    /// (serialized as `null`) when the collection is empty.
    pub blog_with_longest_title: Option<String>,
    pub number_of_blogs_with_privacy: usize,
    pub blog_titles_with_privacy: Vec<String>,
    /// Titles with duplicates removed, first occurrence kept, order preserved
    pub unique_blog_titles: Vec<String>,
}

/// Result of matching one query against all titles in a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// The query exactly as the caller sent it, never normalized
    pub query: String,
    pub matching_blog_count: usize,
    pub matching_blog_titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: CacheStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}
