//! Inline markup converters: backtick code spans, `**bold**`, `*italic*`.
//!
//! Each converter matches delimiter pairs within a single line and leaves
//! unmatched delimiters literal. Bold converts before italic so `**x**` is
//! not misread as two adjacent italic markers.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

// Non-greedy and barred from crossing another asterisk, so leftover single
// markers around an already-converted bold span stay literal.
static ITALIC_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

/// Convert backtick-delimited spans to `<code>` elements.
pub fn convert_code_spans(text: &str) -> String {
    CODE_SPAN.replace_all(text, "<code>$1</code>").into_owned()
}

/// Convert `**...**` spans to `<strong>` elements.
pub fn convert_bold(text: &str) -> String {
    BOLD_SPAN
        .replace_all(text, "<strong>$1</strong>")
        .into_owned()
}

/// Convert remaining `*...*` spans to `<em>` elements.
pub fn convert_italic(text: &str) -> String {
    ITALIC_SPAN.replace_all(text, "<em>$1</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_code_span() {
        assert_eq!(convert_code_spans("use `foo()` here"), "use <code>foo()</code> here");
    }

    #[test]
    fn converts_multiple_code_spans_on_one_line() {
        assert_eq!(
            convert_code_spans("`a` and `b`"),
            "<code>a</code> and <code>b</code>"
        );
    }

    #[test]
    fn lone_backtick_stays_literal() {
        assert_eq!(convert_code_spans("a ` b"), "a ` b");
    }

    #[test]
    fn converts_bold_before_italic() {
        let bolded = convert_bold("**x** and *y*");
        assert_eq!(convert_italic(&bolded), "<strong>x</strong> and <em>y</em>");
    }

    #[test]
    fn lone_asterisks_stay_literal() {
        assert_eq!(convert_italic(&convert_bold("2 * 3 = 6")), "2 * 3 = 6");
    }

    #[test]
    fn italic_does_not_cross_asterisks() {
        assert_eq!(convert_italic("*a* b *c*"), "<em>a</em> b <em>c</em>");
    }
}
