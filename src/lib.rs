//! # refdex
//!
//! A catalog of structured technical articles rendered to safe HTML fragments.
//!
//! The core of the crate is [`format::format`], a pure pipeline that converts
//! loosely structured article-body text (backtick code spans, asterisk
//! emphasis, `1) 2) 3)` enumerations) into balanced HTML. Around it sit thin
//! collaborators: the in-memory article [`catalog`], a syntect-backed
//! [`highlight`] wrapper for code samples, and the [`render`] glue that
//! produces one fragment per article section.

pub mod catalog;
pub mod format;
pub mod highlight;
pub mod render;

pub use catalog::Catalog;
pub use format::format;
