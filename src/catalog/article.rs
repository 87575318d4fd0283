//! Article data model for the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level grouping for catalog articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Language,
    Storage,
    Networking,
    Tooling,
    Practices,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Language => "language",
            Category::Storage => "storage",
            Category::Networking => "networking",
            Category::Tooling => "tooling",
            Category::Practices => "practices",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(Category::Language),
            "storage" => Ok(Category::Storage),
            "networking" => Ok(Category::Networking),
            "tooling" => Ok(Category::Tooling),
            "practices" => Ok(Category::Practices),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// A source-code sample attached to a section, highlighted at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSample {
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// One titled block of an article. `body` is body-formatter input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub samples: Vec<CodeSample>,
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    pub sections: Vec<Section>,
}
