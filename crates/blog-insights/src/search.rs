//! Substring search over blog titles

use blog_feed_client::Blog;

use crate::types::SearchReport;

/// Match `query` against every title, case-insensitively, preserving
/// collection order. The report echoes the original query verbatim.
pub fn search_blogs(blogs: &[Blog], query: &str) -> SearchReport {
    let needle = query.to_lowercase();
    let matching_blog_titles: Vec<String> = blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains(&needle))
        .map(|blog| blog.title.clone())
        .collect();

    SearchReport {
        query: query.to_string(),
        matching_blog_count: matching_blog_titles.len(),
        matching_blog_titles,
    }
}
