//! Numbered-run detection and list restructuring.
//!
//! Article bodies enumerate points inline as `1) ... 2) ... 3) ...` rather
//! than with a structural list syntax. This stage reverse-engineers the
//! intent from marker positions: maximal runs of markers whose values count
//! up from 1 become `<ul>` blocks, with the prose before the run kept as an
//! intro and a long final sentence split off as trailing prose. Detection is
//! conservative (at least 2 markers, first value exactly 1) so incidental
//! numeric references like `(see fig. 12)` never turn into lists.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// One-or-more digits, close-paren, single space.
static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\) ").unwrap());

/// Trailing lead-in punctuation an intro carries before a list.
static INTRO_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[:\u{2014}\u{2013}-]+$").unwrap());

/// Sentence break: period, whitespace, capitalized clause running to the end.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\.\s+(\p{Lu}.*)$").unwrap());

/// `lead — rest` / `lead – rest` item shape.
static DASH_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([^\u{2014}\u{2013}]+?)\s*([\u{2014}\u{2013}])\s*(.+)$").unwrap());

/// `lead: rest` item shape (first colon wins).
static COLON_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^([^:\n]+):\s*(.+)$").unwrap());

/// A trailing clause shorter than this is list content, not prose.
const TRAILING_MIN_CHARS: usize = 15;

/// Dash-label lead-ins at or past this length are ordinary clauses.
const DASH_LEAD_MAX_CHARS: usize = 80;

/// Colon-label lead-ins at or past this length are ordinary clauses.
const COLON_LEAD_MAX_CHARS: usize = 60;

#[derive(Debug, Clone, Copy)]
struct Marker {
    start: usize,
    end: usize,
    value: u64,
}

/// Restructure qualifying numbered runs into list markup.
///
/// Returns the input unchanged when fewer than two markers exist or no run
/// qualifies.
pub fn group_numbered_runs(text: &str) -> String {
    let markers = scan_markers(text);
    if markers.len() < 2 {
        return text.to_string();
    }
    let runs = partition_runs(&markers);

    let mut out = String::new();
    let mut cursor = 0;
    for (i, run) in runs.iter().enumerate() {
        let group = &markers[run.clone()];
        if group.len() < 2 || group[0].value != 1 {
            continue;
        }
        // The last item stops where the next maximal run begins, qualifying
        // or not, so a broken continuation like `4) c 5) d` stays literal
        // prose instead of being swallowed into the final item.
        let end_boundary = runs
            .get(i + 1)
            .map(|next| markers[next.start].start)
            .unwrap_or(text.len());

        out.push_str(strip_intro(&text[cursor..group[0].start]));
        out.push_str("<ul>");
        let mut trailing = None;
        for (j, marker) in group.iter().enumerate() {
            let item_end = group.get(j + 1).map(|next| next.start).unwrap_or(end_boundary);
            let raw = text[marker.end..item_end].trim();
            let item = if j + 1 == group.len() {
                match split_trailing(raw) {
                    Some((kept, clause)) => {
                        trailing = Some(clause);
                        kept
                    }
                    None => raw.strip_suffix('.').unwrap_or(raw),
                }
            } else {
                raw.strip_suffix('.').unwrap_or(raw)
            };
            out.push_str("<li>");
            out.push_str(&format_item_label(item));
            out.push_str("</li>");
        }
        out.push_str("</ul>");
        if let Some(clause) = trailing {
            out.push(' ');
            out.push_str(clause);
        }
        cursor = end_boundary;
    }
    out.push_str(&text[cursor..]);
    out
}

fn scan_markers(text: &str) -> Vec<Marker> {
    MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).expect("match has group 0");
            // A digit blob that overflows is not a plausible bullet number.
            let value = caps[1].parse::<u64>().ok()?;
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                value,
            })
        })
        .collect()
}

/// Split markers into maximal runs where values increase by exactly 1.
fn partition_runs(markers: &[Marker]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut run_start = 0;
    for i in 1..=markers.len() {
        let broken = i == markers.len() || markers[i].value != markers[i - 1].value + 1;
        if broken {
            runs.push(run_start..i);
            run_start = i;
        }
    }
    runs
}

/// Drop the intro's own lead-in punctuation: a trailing colon, em-dash,
/// en-dash, or hyphen run is redundant once the list renders structurally.
fn strip_intro(intro: &str) -> &str {
    let trimmed = intro.trim_end();
    match INTRO_PUNCT.find(trimmed) {
        Some(found) => trimmed[..found.start()].trim_end(),
        None => trimmed,
    }
}

/// Split a final item at its first sentence break when the clause after the
/// break is long enough to be prose rather than list content.
fn split_trailing(last_item: &str) -> Option<(&str, &str)> {
    let caps = SENTENCE_BREAK.captures(last_item)?;
    let clause = caps.get(1).expect("clause group always captured");
    if clause.as_str().chars().count() <= TRAILING_MIN_CHARS {
        return None;
    }
    let period = caps.get(0).expect("match has group 0").start();
    Some((&last_item[..period], clause.as_str()))
}

/// Two-tier label heuristic: a short dash lead-in wins over a short colon
/// lead-in; an item with a comma or open-parenthesis never gets the colon
/// treatment (compound clauses make poor labels).
fn format_item_label(item: &str) -> String {
    if let Some(caps) = DASH_LABEL.captures(item) {
        let lead = caps[1].trim_end();
        if !lead.is_empty() && lead.chars().count() < DASH_LEAD_MAX_CHARS {
            return format!("<strong>{}</strong> {} {}", lead, &caps[2], caps[3].trim_start());
        }
    }
    if let Some(caps) = COLON_LABEL.captures(item) {
        let lead = &caps[1];
        if lead.chars().count() < COLON_LEAD_MAX_CHARS
            && !item.contains(',')
            && !item.contains('(')
        {
            return format!("<strong>{}</strong>: {}", lead, &caps[2]);
        }
    }
    item.to_string()
}
