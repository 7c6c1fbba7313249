//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading flashcards from a resource.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("flashcard resource not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read flashcard resource {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed flashcard document: {reason}")]
    Malformed { reason: String },
    #[error("malformed flashcard document: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl LoadError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// True when the resource itself is missing, as opposed to unreadable or
    /// malformed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors emitted by `DeckController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck has already been initialized")]
    AlreadyInitialized,
}

/// Errors emitted while reading `DeckConfig` overrides.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{key} must be a positive whole number, got {raw:?}")]
    InvalidValue { key: &'static str, raw: String },
}
