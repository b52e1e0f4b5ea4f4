//! Markdown rendering

use comrak::{markdown_to_html, Options};

/// Markdown renderer producing HTML for post bodies.
///
/// Tables, fenced code blocks, bare-URL autolinks, strikethrough, underline
/// and superscript are enabled; raw HTML in the source passes through
/// unescaped. Intra-word underscores never trigger emphasis and heading
/// markers require a following space (CommonMark defaults).
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.strikethrough = true;
        options.extension.superscript = true;
        options.extension.underline = true;
        options.render.unsafe_ = true;

        markdown_to_html(markdown, &options)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n| --- | --- |\n| 1 | 2 |");
        assert!(html.contains("<table"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_fenced_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn test_autolink_bare_url() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Visit https://example.com for details.");
        assert!(html.contains(r#"<a href="https://example.com">"#));
    }

    #[test]
    fn test_strikethrough_and_underline() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("~~gone~~ and __kept__");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<u>kept</u>"));
    }

    #[test]
    fn test_superscript() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("2^10^ is 1024");
        assert!(html.contains("<sup>10</sup>"));
    }

    #[test]
    fn test_no_intra_word_emphasis() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("variable snake_case_name here");
        assert!(!html.contains("<em>"));
        assert!(html.contains("snake_case_name"));
    }

    #[test]
    fn test_heading_requires_space() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("#NotAHeading");
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render(r#"<div class="note">raw</div>"#);
        assert!(html.contains(r#"<div class="note">"#));
    }
}
