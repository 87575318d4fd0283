//! Syntax highlighting for code samples, wrapping syntect.
//!
//! Resolution order: the declared language token, then first-line detection,
//! then escaped plain text. Highlighting never surfaces an error to the
//! caller; every failure degrades to the plain `<pre><code>` form.

use crate::format::escape_html;
use once_cell::sync::Lazy;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME: &str = "InspiredGitHub";

/// Highlight `code` declared as `language`, falling back to escaped plain
/// text when the language is unrecognized or highlighting fails.
pub fn highlight(code: &str, language: &str) -> String {
    let syntax = SYNTAX_SET.find_syntax_by_token(language).or_else(|| {
        code.lines()
            .next()
            .and_then(|line| SYNTAX_SET.find_syntax_by_first_line(line))
    });
    match (syntax, THEME_SET.themes.get(THEME)) {
        (Some(syntax), Some(theme)) => {
            highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme)
                .unwrap_or_else(|_| plain_block(code))
        }
        _ => plain_block(code),
    }
}

fn plain_block(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_produces_markup() {
        let html = highlight("fn main() {}", "rs");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn unknown_language_falls_back_to_first_line_detection() {
        let html = highlight("#!/bin/sh\necho hi", "not-a-language");
        assert!(html.contains("echo"));
    }

    #[test]
    fn unknown_language_still_returns_markup() {
        let html = highlight("odds and ends", "not-a-language");
        assert!(html.contains("odds and ends"));
    }

    #[test]
    fn plain_fallback_escapes_markup_characters() {
        assert_eq!(
            plain_block("x <- y & z"),
            "<pre><code>x &lt;- y &amp; z</code></pre>"
        );
    }
}
