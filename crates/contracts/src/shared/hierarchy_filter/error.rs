use thiserror::Error;

/// Errors raised while describing hierarchies or assembling record pages.
///
/// Selection operations themselves never fail.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("hierarchy must have at least one level")]
    EmptyHierarchy,

    #[error("duplicate level id: {0}")]
    DuplicateLevel(String),

    #[error("unknown hierarchy: {0}")]
    UnknownHierarchy(String),

    #[error("invalid hierarchy config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("page out of order: expected offset {expected}, got {actual}")]
    PageOutOfOrder { expected: usize, actual: usize },
}
