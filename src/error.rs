use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown criterion: {0}")]
    NotFound(String),

    #[error("invalid field key: {0}")]
    InvalidFieldKey(String),
}
