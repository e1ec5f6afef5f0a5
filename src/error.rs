use std::fmt;

/// Domain errors raised while turning an OpenAPI document into schema models.
///
/// IO and parse failures travel as [`anyhow::Error`]; this enum covers the
/// cases callers may want to match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    /// The requested schema is not present under `components.schemas`
    UnknownSchema {
        /// The name that was looked up
        name: String,
    },
    /// The document parsed but is not a usable OpenAPI description
    InvalidDocument {
        /// Parser or validation message
        reason: String,
    },
    /// File extension is neither YAML, JSON nor TOML (for config files)
    UnsupportedFormat {
        /// The offending path
        path: String,
    },
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::UnknownSchema { name } => {
                write!(f, "schema '{}' not found in components.schemas", name)
            }
            DocError::InvalidDocument { reason } => {
                write!(f, "invalid OpenAPI document: {}", reason)
            }
            DocError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "unsupported file format for '{}'. Expected .yaml, .yml, .json or .toml",
                    path
                )
            }
        }
    }
}

impl std::error::Error for DocError {}
