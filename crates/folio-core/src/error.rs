//! Error types for the Folio core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Folio.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Frontmatter could not be split or deserialized into a record.
    #[error("Frontmatter error in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    /// A field deserialized but violates a schema constraint.
    #[error("Invalid `{field}` in {path}: {message}")]
    Schema {
        path: PathBuf,
        field: &'static str,
        message: String,
    },

    /// Image metadata could not be read.
    #[error("Image error for {path}: {message}")]
    Image { path: PathBuf, message: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new frontmatter error.
    pub fn frontmatter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new schema constraint error for `field`.
    pub fn schema(
        path: impl Into<PathBuf>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Schema {
            path: path.into(),
            field,
            message: message.into(),
        }
    }

    /// Create a new image metadata error.
    pub fn image(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Image {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error rejects a content document, as opposed to failing
    /// to read it or to load configuration.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Frontmatter { .. } | Self::Schema { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_frontmatter_error() {
        let err = CoreError::frontmatter("blog/post.md", "missing field `title`");
        assert!(err.to_string().contains("Frontmatter error"));
        assert!(err.to_string().contains("blog/post.md"));
        assert!(err.to_string().contains("title"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_schema_error_names_field() {
        let err = CoreError::schema("blog/post.md", "ogImage", "too small");
        assert_eq!(
            err.to_string(),
            "Invalid `ogImage` in blog/post.md: too small"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
        assert!(!err.is_validation());
    }
}
