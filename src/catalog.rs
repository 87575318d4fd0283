//! In-memory article catalog.
//!
//! A thin store over a `Vec<Article>`: lookups by id and category plus a
//! linear, case-insensitive substring search over titles, descriptions,
//! tags, and section bodies. No index is built; catalog sizes are tens of
//! articles and a linear scan is plenty.

pub mod article;

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;

pub use article::{Article, Category, CodeSample, Section};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(include_str!("../assets/catalog.json"))
        .expect("embedded catalog asset is valid")
});

/// Error building a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The JSON source failed to deserialize
    Malformed(String),
    /// Two articles share an id
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Malformed(msg) => write!(f, "malformed catalog: {msg}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate article id '{id}'"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only article store.
#[derive(Debug)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(article.id.as_str()) {
                return Err(CatalogError::DuplicateId(article.id.clone()));
            }
        }
        Ok(Catalog { articles })
    }

    /// Deserialize a catalog from a JSON array of articles.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let articles: Vec<Article> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Catalog::new(articles)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up one article by id.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// All articles in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Case-insensitive substring search over title, description, tags, and
    /// section bodies. A blank query matches nothing. Results keep catalog
    /// order and contain each article at most once.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.articles
            .iter()
            .filter(|a| article_matches(a, &needle))
            .collect()
    }
}

fn article_matches(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article.description.to_lowercase().contains(needle)
        || article.tags.iter().any(|t| t.to_lowercase().contains(needle))
        || article
            .sections
            .iter()
            .any(|s| s.body.to_lowercase().contains(needle))
}
