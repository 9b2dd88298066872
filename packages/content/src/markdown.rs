//! Markdown-to-HTML capability used for project detail files.

use pulldown_cmark::{html, Options, Parser};

/// Converts markdown source to an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer with the GitHub-flavoured extensions project write-ups
/// tend to use (tables, strikethrough, task lists).
#[derive(Clone, Copy, Debug, Default)]
pub struct CommonMark;

impl CommonMark {
    fn options() -> Options {
        let mut opts = Options::empty();
        opts.insert(Options::ENABLE_STRIKETHROUGH);
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_TASKLISTS);
        opts
    }
}

impl MarkdownRenderer for CommonMark {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = CommonMark.render("# Overview\n\nBuilt with **Rust**.\n");
        assert_eq!(
            html,
            "<h1>Overview</h1>\n<p>Built with <strong>Rust</strong>.</p>\n"
        );
    }

    #[test]
    fn renders_tables_and_strikethrough() {
        let html = CommonMark.render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(CommonMark.render(""), "");
    }
}
