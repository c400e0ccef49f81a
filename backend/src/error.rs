use std::io;

use thiserror::Error;

/// Raised while ingesting catalog records. Once a `CatalogStore` exists the
/// query, recommendation and sitemap paths cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("video record has an empty id")]
    EmptyId,
    #[error("video id '{0}' appears more than once in the catalog")]
    DuplicateId(String),
    #[error("video '{id}' has malformed duration '{value}' (expected MM:SS or H:MM:SS)")]
    MalformedDuration { id: String, value: String },
    #[error("video '{id}' uses category '{category}' which is not in the catalog category set")]
    UnknownCategory { id: String, category: String },
    #[error("video '{id}' has a character XML cannot carry in its {field}")]
    NonXmlCharacter { id: String, field: &'static str },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
