//! mdblog: a markdown-backed blog content engine
//!
//! Loads markdown posts with YAML front matter from a directory and answers
//! listing, slug-lookup, category/tag filter, count-aggregation, and
//! related-post queries over the in-memory collection. HTTP routing and
//! rendering are left to the caller.

pub mod config;
pub mod content;
pub mod repository;

use anyhow::Result;
use std::path::{Path, PathBuf};

use config::BlogConfig;
use repository::PostRepository;

/// The main blog handle: configuration plus the loaded post repository
pub struct Blog {
    /// Blog configuration
    pub config: BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Resolved posts directory
    pub posts_dir: PathBuf,
    /// Loaded post collection
    pub repository: PostRepository,
}

impl Blog {
    /// Open a blog rooted at `base_dir`.
    ///
    /// Reads `blog.yml` from the base directory when present, falling back
    /// to defaults, then loads the post repository eagerly.
    pub fn open<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            BlogConfig::load(&config_path)?
        } else {
            BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let repository = PostRepository::load(&posts_dir, &config);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            repository,
        })
    }

    /// Re-scan the posts directory and replace the collection
    pub fn reload(&mut self) {
        self.repository.reload();
    }
}
