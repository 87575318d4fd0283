//! Section and article rendering glue.
//!
//! Joins the body formatter and the highlighter into one HTML fragment per
//! article or section. No page chrome or navigation; callers own layout.

use crate::catalog::{Article, Section};
use crate::format::{self, escape_html};
use crate::highlight;

/// Render one section: heading, formatted body, highlighted samples.
pub fn render_section(section: &Section) -> String {
    let mut out = String::new();
    out.push_str("<h2>");
    out.push_str(&escape_html(&section.heading));
    out.push_str("</h2>");
    let body = format::format(&section.body);
    if !body.is_empty() {
        out.push_str("<p>");
        out.push_str(&body);
        out.push_str("</p>");
    }
    for sample in &section.samples {
        out.push_str(&highlight::highlight(&sample.code, &sample.language));
        if let Some(caption) = &sample.caption {
            out.push_str("<p class=\"caption\">");
            out.push_str(&escape_html(caption));
            out.push_str("</p>");
        }
    }
    out
}

/// Render a whole article: title, formatted description, then each section.
pub fn render_article(article: &Article) -> String {
    let mut out = String::new();
    out.push_str("<h1>");
    out.push_str(&escape_html(&article.title));
    out.push_str("</h1>");
    let description = format::format(&article.description);
    if !description.is_empty() {
        out.push_str("<p>");
        out.push_str(&description);
        out.push_str("</p>");
    }
    for section in &article.sections {
        out.push_str(&render_section(section));
    }
    out
}
