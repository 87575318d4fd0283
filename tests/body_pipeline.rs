//! End-to-end tests for the body formatter pipeline.
//!
//! These exercise the full stage sequence (escape, code, bold, italic, list
//! grouping, signal words, line breaks) through the public `format` entry
//! point, including the documented end-to-end example.

use refdex::format;

#[test]
fn empty_input_produces_empty_output() {
    assert_eq!(format(""), "");
}

#[test]
fn raw_angle_brackets_are_escaped() {
    assert_eq!(format("a < b > c"), "a &lt; b &gt; c");
}

#[test]
fn ampersand_escapes_before_entities_are_introduced() {
    assert_eq!(format("&lt;"), "&amp;lt;");
}

#[test]
fn inline_stages_compose() {
    assert_eq!(
        format("run `cargo test` with **all** features *enabled*"),
        "run <code>cargo test</code> with <strong>all</strong> features <em>enabled</em>"
    );
}

#[test]
fn newlines_convert_after_list_grouping() {
    // The newline inside the run must still be literal when markers are
    // scanned, then convert to <br> inside the rendered item.
    assert_eq!(
        format("1) first\nline 2) second"),
        "<ul><li>first<br>line</li><li>second</li></ul>"
    );
}

#[test]
fn signal_words_are_wrapped_but_acronyms_are_not() {
    assert_eq!(
        format("you MUST check x OR y"),
        "you <strong>MUST</strong> check x OR y"
    );
}

#[test]
fn documented_end_to_end_example() {
    let input = "Rules: 1) Do X. 2) Do Y. Then continue with more detail that explains the rationale further.";
    insta::assert_snapshot!(
        format(input),
        @"Rules<ul><li>Do X</li><li>Do Y</li></ul> Then continue with more detail that explains the rationale further."
    );
}

#[test]
fn full_article_paragraph() {
    let input = "A sane retry loop: 1) Cap \u{2014} never sleep longer than the cap. 2) Jitter \u{2014} randomize each delay. 3) Budget \u{2014} give up after a fixed total. The cap matters more than the base delay in practice.";
    insta::assert_snapshot!(
        format(input),
        @"A sane retry loop<ul><li><strong>Cap</strong> \u{2014} never sleep longer than the cap</li><li><strong>Jitter</strong> \u{2014} randomize each delay</li><li><strong>Budget</strong> \u{2014} give up after a fixed total</li></ul> The cap matters more than the base delay in practice."
    );
}

#[test]
fn code_span_before_emphasis_is_established_behavior() {
    // The code stage runs first, so asterisks inside a code span are still
    // visible to the bold/italic patterns afterwards. Documented, not fixed.
    // The two lone asterisks pair up across the code-span boundaries.
    assert_eq!(
        format("`a*b` and `c*d`"),
        "<code>a<em>b</code> and <code>c</em>d</code>"
    );
}
