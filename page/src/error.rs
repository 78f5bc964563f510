//! Catalog validation errors.

use thiserror::Error;

/// Errors raised while building an [`EventCatalog`](crate::types::EventCatalog).
///
/// Rendering itself never fails: every check happens when the catalog is
/// constructed, so a catalog that exists is always renderable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Two events share a title, which would collide as rendering keys.
    #[error("duplicate event title: {title:?}")]
    DuplicateTitle {
        /// The offending title
        title: String,
    },

    /// An event has a blank title and cannot be keyed.
    #[error("event #{index} has an empty title")]
    EmptyTitle {
        /// Zero-based position in the catalog
        index: usize,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, PageError>;
