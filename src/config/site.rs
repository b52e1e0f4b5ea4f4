//! Blog configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Site title
    pub title: String,

    /// Site description
    pub description: String,

    /// Directory holding post source files, relative to the base directory
    pub posts_dir: String,

    /// URL prefix for post links
    pub root: String,

    /// strftime pattern for `formatted_date`
    pub date_format: String,

    /// Title used when front matter has none
    pub default_title: String,

    /// Author used when front matter has none
    pub default_author: String,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            posts_dir: "content/posts".to_string(),
            root: "/blog".to_string(),
            date_format: "%Y年%m月%d日".to_string(),
            default_title: "No Title".to_string(),
            default_author: "Anonymous".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.root, "/blog");
        assert_eq!(config.default_title, "No Title");
        assert_eq!(config.default_author, "Anonymous");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
posts_dir: posts
root: /articles
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.root, "/articles");
        // Unspecified fields keep their defaults
        assert_eq!(config.default_author, "Anonymous");
    }
}
