//! Post repository - loads the post collection and answers queries over it

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BlogConfig;
use crate::content::{Post, PostParser};

/// Default number of related posts returned
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// In-memory collection of posts loaded from a directory.
///
/// The collection is rebuilt wholesale by [`reload`](Self::reload) and kept
/// sorted by date descending; all query methods are pure in-memory reads.
pub struct PostRepository {
    posts_dir: PathBuf,
    parser: PostParser,
    posts: Vec<Post>,
}

impl PostRepository {
    /// Build a repository from a posts directory, loading it eagerly.
    ///
    /// A missing directory yields an empty collection rather than an error.
    pub fn load<P: AsRef<Path>>(posts_dir: P, config: &BlogConfig) -> Self {
        let mut repo = Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            parser: PostParser::new(config),
            posts: Vec::new(),
        };
        repo.reload();
        repo
    }

    /// Re-scan the posts directory, replacing the collection wholesale.
    ///
    /// Files that fail to parse are logged and skipped. Files are enumerated
    /// in lexicographic filename order so that equal-date ordering is
    /// reproducible, then stably sorted by date descending.
    pub fn reload(&mut self) {
        let mut posts = Vec::new();

        if !self.posts_dir.exists() {
            tracing::debug!(
                "Posts directory {:?} does not exist, collection is empty",
                self.posts_dir
            );
            self.posts = posts;
            return;
        }

        for entry in WalkDir::new(&self.posts_dir)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.parser.parse(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first); sort_by is stable so posts
        // sharing a date keep their filename order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        self.posts = posts;
    }

    /// All posts, sorted by date descending
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Number of loaded posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by its slug (exact, case-sensitive)
    pub fn get_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts in the given category (case-insensitive), date descending
    pub fn by_category(&self, category: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.matches_category(category))
            .collect()
    }

    /// Posts carrying the given tag (case-insensitive), date descending
    pub fn by_tag(&self, tag: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Post count per lowercased category; posts without a category are
    /// excluded
    pub fn category_counts(&self) -> HashMap<String, usize> {
        let mut categories = HashMap::new();
        for post in &self.posts {
            let category = post.category.to_lowercase();
            if !category.is_empty() {
                *categories.entry(category).or_insert(0) += 1;
            }
        }
        categories
    }

    /// Post count per lowercased tag
    pub fn tag_counts(&self) -> HashMap<String, usize> {
        let mut tags = HashMap::new();
        for post in &self.posts {
            for tag in &post.tags {
                *tags.entry(tag.to_lowercase()).or_insert(0) += 1;
            }
        }
        tags
    }

    /// Posts related to `post`, best matches first, at most `limit` results.
    ///
    /// Scoring: +5 for a shared category (case-insensitive, both sides
    /// non-empty), +3 per shared tag. Candidates with no signal are dropped;
    /// ties keep the collection's date-descending order.
    pub fn related(&self, post: &Post, limit: usize) -> Vec<&Post> {
        let category = post.category.to_lowercase();
        let tags: Vec<String> = post.tags.iter().map(|t| t.to_lowercase()).collect();

        let mut scored: Vec<(u32, &Post)> = Vec::new();
        for other in &self.posts {
            if other.slug == post.slug {
                continue;
            }

            let mut score = 0;

            // Same category: +5 points; two uncategorized posts do not count
            // as sharing a category
            if !category.is_empty() && other.category.to_lowercase() == category {
                score += 5;
            }

            // Each shared tag: +3 points
            let other_tags: Vec<String> = other.tags.iter().map(|t| t.to_lowercase()).collect();
            for tag in &tags {
                if other_tags.contains(tag) {
                    score += 3;
                }
            }

            if score > 0 {
                scored.push((score, other));
            }
        }

        // Stable sort keeps date order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, p)| p).collect()
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
