//! Content module - post parsing and rendering

mod frontmatter;
mod markdown;
mod parser;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use parser::PostParser;
pub use post::Post;
