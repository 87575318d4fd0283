//! Article body formatter
//!
//! Converts loosely structured plain text into a balanced HTML fragment via a
//! fixed pipeline of string rewrite stages, applied in declaration order:
//!
//! 1. escape `&`, `<`, `>`
//! 2. backtick spans -> `<code>`
//! 3. `**bold**` -> `<strong>`
//! 4. `*italic*` -> `<em>`
//! 5. numbered-run detection -> `<ul>`/`<li>` (see [`lists`])
//! 6. signal-word emphasis (see [`signal`])
//! 7. newlines -> `<br>`
//!
//! The order is load-bearing: list grouping and trailing-clause extraction
//! scan for literal newlines and operate on already-rendered inline markup,
//! so line breaks convert last and escaping happens first (injected tags are
//! never escaped). Known edge case: the code stage runs before bold/italic,
//! so an asterisk inside a code span can still be captured by the emphasis
//! patterns. Established behavior, kept as-is.
//!
//! Every stage is total: no input string causes an error or a panic, and
//! unmatched delimiters degrade to literal output.

pub mod inline;
pub mod lists;
pub mod signal;

/// Format one article-section body as an HTML fragment.
///
/// Pure and stateless; safe to call concurrently. Empty input yields an
/// empty string. The output uses only escaped text, `<code>`, `<strong>`,
/// `<em>`, `<ul>`/`<li>`, and `<br>`, and every opened tag is closed.
pub fn format(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = escape_html(text);
    let coded = inline::convert_code_spans(&escaped);
    let bolded = inline::convert_bold(&coded);
    let italicized = inline::convert_italic(&bolded);
    let grouped = lists::group_numbered_runs(&italicized);
    let emphasized = signal::highlight_signal_words(&grouped);
    convert_line_breaks(&emphasized)
}

/// Replace the three injection-relevant characters with entities.
///
/// `&` converts first so entities introduced for `<` and `>` are not
/// themselves re-escaped. No other characters are touched.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replace newlines with explicit break elements. Runs last in the pipeline.
fn convert_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}
