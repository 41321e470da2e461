use thiserror::Error;

/// Concrete errors that occur within kiln's header handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// a header name contained characters outside of the token grammar
    #[error("malformed http header name {0:?}")]
    MalformedHeaderName(String),
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
