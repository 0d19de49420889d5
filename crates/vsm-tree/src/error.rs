//! Error types for vsm-tree.

use thiserror::Error;

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tree operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No node carries this tag.
    #[error("node not found: {0}")]
    NotFound(String),

    /// Only leaves can be deleted.
    #[error("node {tag} has {children} children; remove them first")]
    HasChildren { tag: String, children: usize },

    /// Polygon order outside the accepted range.
    #[error("invalid polygon order {order}: must be between {min} and {max}")]
    InvalidOrder { order: u32, min: u32, max: u32 },

    /// The seed node already exists (or existed) in this tree.
    #[error("tree already initialized with seed {0}")]
    AlreadyInitialized(String),

    /// A node with this tag already exists. Tags are derived from lineage,
    /// so this means a caller went around the layout engine.
    #[error("duplicate tag: {0}")]
    DuplicateTag(String),

    /// The string cannot be a tag.
    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    /// Geometry rejected the request.
    #[error("geometry error: {0}")]
    Geometry(#[from] vsm_geometry::Error),
}

impl Error {
    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::HasChildren { .. } => "has_children",
            Error::InvalidOrder { .. } => "invalid_order",
            Error::AlreadyInitialized(_) => "already_initialized",
            Error::DuplicateTag(_) => "duplicate_tag",
            Error::InvalidTag(_) => "invalid_tag",
            Error::Geometry(_) => "geometry",
        }
    }

    /// Whether this error signals a broken tree invariant rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::DuplicateTag(_))
    }
}
