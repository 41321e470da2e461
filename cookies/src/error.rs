use thiserror::Error;

/// Reasons a cookie could not be written. Nothing is appended to the
/// headers when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// the cookie name, as it would be emitted, is empty or contains
    /// characters outside of the token grammar. When cookie name
    /// encoding is disabled this includes separators like `,` and `@`.
    #[error("invalid cookie name {0:?}")]
    InvalidCookieName(String),

    /// a string attribute contains `;` or a control character and
    /// would corrupt the header
    #[error("invalid cookie {attribute} attribute {value:?}")]
    InvalidAttribute {
        /// the attribute name, such as `path`
        attribute: &'static str,
        /// the rejected value
        value: String,
    },
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
