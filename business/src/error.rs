use thiserror::Error;

/// Rejected input at the edges of the engine (configuration, renderer text).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown user status: {0:?}")]
    UnknownStatus(String),
    #[error("Unknown user field: {0:?}")]
    UnknownField(String),
    #[error("Unsupported page size {0}, expected one of 12, 24 or 48")]
    UnsupportedPageSize(usize),
}
