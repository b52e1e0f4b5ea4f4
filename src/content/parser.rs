//! Post parser - converts one markdown file into a Post

use anyhow::{anyhow, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::config::BlogConfig;

/// Parses post source files using defaults from the blog configuration
pub struct PostParser {
    renderer: MarkdownRenderer,
    default_title: String,
    default_author: String,
    root: String,
    date_format: String,
}

impl PostParser {
    /// Create a new post parser
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
            default_title: config.default_title.clone(),
            default_author: config.default_author.clone(),
            root: config.root.trim_end_matches('/').to_string(),
            date_format: config.date_format.clone(),
        }
    }

    /// Parse a single post from a file.
    ///
    /// A missing or unparseable date falls back to today; a missing
    /// front-matter block yields a post with all defaults applied. A
    /// front-matter block that is present but not valid YAML is an error,
    /// so the repository excludes the file.
    pub fn parse(&self, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("invalid file name: {:?}", path))?;

        let date = fm
            .parse_date()
            .unwrap_or_else(|| Local::now().date_naive());

        let content = self.renderer.render(body);

        Ok(Post {
            title: fm.title.unwrap_or_else(|| self.default_title.clone()),
            date,
            author: fm.author.unwrap_or_else(|| self.default_author.clone()),
            category: fm.category.unwrap_or_default(),
            tags: fm.tags,
            excerpt: fm.excerpt.unwrap_or_default(),
            content,
            url: format!("{}/{}", self.root, slug),
            formatted_date: date.format(&self.date_format).to_string(),
            slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parser() -> PostParser {
        PostParser::new(&BlogConfig::default())
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_full_post() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "hello-world.md",
            "---\ntitle: Hello\ndate: 2024-01-15\nauthor: Alice\ncategory: Tech\ntags:\n  - rust\n---\n\n# Heading\n\nBody text.\n",
        );

        let post = parser().parse(&path).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.url, "/blog/hello-world");
        assert_eq!(post.date.format("%Y-%m-%d").to_string(), "2024-01-15");
        assert_eq!(post.formatted_date, "2024年01月15日");
        assert_eq!(post.category, "Tech");
        assert_eq!(post.tags, vec!["rust"]);
        assert!(post.content.contains("<h1>Heading</h1>"));
    }

    #[test]
    fn test_parse_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bare.md", "Just a body, no metadata.\n");

        let post = parser().parse(&path).unwrap();
        assert_eq!(post.title, "No Title");
        assert_eq!(post.author, "Anonymous");
        assert_eq!(post.category, "");
        assert!(post.tags.is_empty());
        assert_eq!(post.excerpt, "");
        assert_eq!(post.date, Local::now().date_naive());
    }

    #[test]
    fn test_invalid_date_falls_back_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad-date.md", "---\ntitle: X\ndate: not-a-date\n---\n\nBody.\n");

        let post = parser().parse(&path).unwrap();
        assert_eq!(post.date, Local::now().date_naive());
    }

    #[test]
    fn test_malformed_front_matter_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "broken.md",
            "---\ntitle: [unclosed\ndate: 2024-01-15\n---\n\nBody.\n",
        );
        assert!(parser().parse(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parser().parse(&dir.path().join("nope.md"));
        assert!(result.is_err());
    }
}
