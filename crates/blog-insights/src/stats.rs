//! Aggregate statistics over a blog collection

use std::collections::HashSet;

use blog_feed_client::Blog;

use crate::types::StatsReport;

/// Compute the aggregate stats report for a collection.
///
/// Pure and deterministic for a given input order. The longest-title scan
/// keeps the first record on ties; length is measured in Unicode scalar
/// values. An empty collection yields zero counts and no longest title.
pub fn compute_stats(blogs: &[Blog]) -> StatsReport {
    let mut longest: Option<&str> = None;
    let mut longest_len = 0usize;
    for blog in blogs {
        let len = blog.title.chars().count();
        if longest.is_none() || len > longest_len {
            longest = Some(&blog.title);
            longest_len = len;
        }
    }

    let blog_titles_with_privacy: Vec<String> = blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains("privacy"))
        .map(|blog| blog.title.clone())
        .collect();

    let mut seen = HashSet::new();
    let unique_blog_titles: Vec<String> = blogs
        .iter()
        .filter(|blog| seen.insert(blog.title.as_str()))
        .map(|blog| blog.title.clone())
        .collect();

    StatsReport {
        total_blogs: blogs.len(),
        blog_with_longest_title: longest.map(|t| t.to_string()),
        number_of_blogs_with_privacy: blog_titles_with_privacy.len(),
        blog_titles_with_privacy,
        unique_blog_titles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blogs(titles: &[&str]) -> Vec<Blog> {
        titles
            .iter()
            .map(|t| Blog {
                title: t.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_compute_stats_full_scenario() {
        let collection = blogs(&[
            "Privacy Policy",
            "Hello World",
            "Hello World",
            "Privacy and You",
        ]);
        let report = compute_stats(&collection);

        assert_eq!(report.total_blogs, 4);
        assert_eq!(
            report.blog_with_longest_title.as_deref(),
            Some("Privacy and You")
        );
        assert_eq!(report.number_of_blogs_with_privacy, 2);
        assert_eq!(
            report.blog_titles_with_privacy,
            vec!["Privacy Policy", "Privacy and You"]
        );
        assert_eq!(
            report.unique_blog_titles,
            vec!["Privacy Policy", "Hello World", "Privacy and You"]
        );
    }

    #[test]
    fn test_compute_stats_empty_collection() {
        let report = compute_stats(&[]);

        assert_eq!(report.total_blogs, 0);
        assert_eq!(report.blog_with_longest_title, None);
        assert_eq!(report.number_of_blogs_with_privacy, 0);
        assert!(report.blog_titles_with_privacy.is_empty());
        assert!(report.unique_blog_titles.is_empty());
    }

    #[test]
    fn test_longest_title_keeps_first_on_tie() {
        let collection = blogs(&["aaaa", "bbbb", "cc"]);
        let report = compute_stats(&collection);
        assert_eq!(report.blog_with_longest_title.as_deref(), Some("aaaa"));
    }

    #[test]
    fn test_longest_title_counts_chars_not_bytes() {
        // Four scalar values each; the multibyte title must not win on bytes
        let collection = blogs(&["abcde", "café"]);
        let report = compute_stats(&collection);
        assert_eq!(report.blog_with_longest_title.as_deref(), Some("abcde"));
    }

    #[test]
    fn test_privacy_match_is_case_insensitive() {
        let collection = blogs(&["PRIVACY matters", "Data pRiVaCy", "Terms of Use"]);
        let report = compute_stats(&collection);
        assert_eq!(report.number_of_blogs_with_privacy, 2);
        assert_eq!(
            report.blog_titles_with_privacy,
            vec!["PRIVACY matters", "Data pRiVaCy"]
        );
    }

    #[test]
    fn test_total_matches_collection_length() {
        for n in 0..5 {
            let titles: Vec<String> = (0..n).map(|i| format!("post {i}")).collect();
            let collection: Vec<Blog> = titles
                .iter()
                .map(|t| Blog { title: t.clone() })
                .collect();
            assert_eq!(compute_stats(&collection).total_blogs, n);
        }
    }

    #[test]
    fn test_compute_stats_is_idempotent() {
        let collection = blogs(&["Privacy Policy", "Hello World", "Hello World"]);
        assert_eq!(compute_stats(&collection), compute_stats(&collection));
    }

    #[test]
    fn test_unique_titles_are_subset_of_input() {
        let collection = blogs(&["a", "b", "a", "c", "b", "a"]);
        let report = compute_stats(&collection);

        assert!(report.unique_blog_titles.len() <= collection.len());
        for title in &report.unique_blog_titles {
            assert!(collection.iter().any(|b| &b.title == title));
        }
        assert_eq!(report.unique_blog_titles, vec!["a", "b", "c"]);
    }
}
