//! Post model

use chrono::NaiveDate;
use serde::Serialize;

/// A blog post, immutable once built from its source file
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date (calendar date, no time-of-day)
    pub date: NaiveDate,

    /// Post author
    pub author: String,

    /// Category name, possibly empty
    pub category: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Author-supplied summary, possibly empty
    pub excerpt: String,

    /// Rendered HTML content
    pub content: String,

    /// URL-safe identifier derived from the source filename
    pub slug: String,

    /// URL path built from the slug
    pub url: String,

    /// Human-readable rendering of `date`
    pub formatted_date: String,
}

impl Post {
    /// Case-insensitive category comparison.
    ///
    /// An empty category only matches an empty query, so posts without a
    /// category never show up under a named category.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive tag membership test
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(category: &str, tags: &[&str]) -> Post {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Post {
            title: "Sample".to_string(),
            date,
            author: "Anonymous".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            excerpt: String::new(),
            content: String::new(),
            slug: "sample".to_string(),
            url: "/blog/sample".to_string(),
            formatted_date: date.format("%Y-%m-%d").to_string(),
        }
    }

    #[test]
    fn test_matches_category_case_insensitive() {
        let post = sample("Tech", &[]);
        assert!(post.matches_category("tech"));
        assert!(post.matches_category("TECH"));
        assert!(!post.matches_category("life"));
    }

    #[test]
    fn test_empty_category_never_matches_named_query() {
        let post = sample("", &[]);
        assert!(!post.matches_category("tech"));
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let post = sample("tech", &["Rust", "WebDev"]);
        assert!(post.has_tag("rust"));
        assert!(post.has_tag("webdev"));
        assert!(!post.has_tag("go"));
    }
}
