//! Error types for ooo-borders-core

use thiserror::Error;

use crate::style::BorderLineStyle;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building border lines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Negative color value
    #[error("Invalid color: {0} (color must be a positive value)")]
    InvalidColor(i32),

    /// Width outside the allowed range
    #[error("Invalid width: {0} (width must be between 0 and 9pt)")]
    InvalidWidth(f64),

    /// Line style that has no width decomposition
    #[error("Invalid border line style: {0:?}")]
    InvalidStyle(BorderLineStyle),

    /// `LineStyle` value that is not a `com.sun.star.table.BorderLineStyle` constant
    #[error("Unknown border line style value: {0}")]
    UnknownLineStyle(i16),

    /// Name lookup with no matching variant
    #[error("Unknown {kind} name: {name}")]
    UnknownName {
        kind: &'static str,
        name: String,
    },
}

impl Error {
    /// Create an "unknown name" error for the given kind of value
    pub fn unknown_name<S: Into<String>>(kind: &'static str, name: S) -> Self {
        Error::UnknownName {
            kind,
            name: name.into(),
        }
    }
}
