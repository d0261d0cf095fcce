//! Error types for catalog loading and validation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or loading an icon catalog
///
/// Resolution never produces one of these: an unknown name or an unmatched
/// size is an absent reference, not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Descriptor with a zero pixel size
    #[error("invalid size 0 for asset '{reference}'")]
    ZeroSize { reference: String },

    /// Descriptor without a reference
    #[error("empty reference for {size}px asset (variant {variant})")]
    EmptyReference { size: u32, variant: u32 },

    /// Manifest entry naming both or neither of `url` and `file`
    #[error("icon '{name}' entry {index}: {reason}")]
    InvalidEntry {
        name: String,
        index: usize,
        reason: String,
    },

    /// Failed to read the manifest or an inlined asset file
    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML manifest
    #[error("failed to parse catalog manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CatalogError {
    /// Create an invalid entry error
    pub fn invalid_entry(name: impl Into<String>, index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            name: name.into(),
            index,
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with the path that produced it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_message() {
        let err = CatalogError::invalid_entry("bat", 2, "both `url` and `file` given");
        assert_eq!(
            err.to_string(),
            "icon 'bat' entry 2: both `url` and `file` given"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = CatalogError::io(
            "icons/missing.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("icons/missing.png"));
        assert!(err.source().is_some());
    }
}
