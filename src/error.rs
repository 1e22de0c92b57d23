#![allow(non_shorthand_field_patterns)]
// The derive emitted by `masterror::Error` expands pattern matches that trip
// `non_shorthand_field_patterns`, so we disable the lint for this module.

use std::path::{Path, PathBuf};

/// Unified error type returned by the inventory loader and CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading or writing files.
    #[error("failed to access {path:?}: {source}")]
    Io {
        /// Location of the file that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Wraps YAML decoding errors, including missing required keys.
    #[error("failed to parse host inventory: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error,
    },
    /// Wraps serialization errors when writing the resource document.
    #[error("failed to serialize resources: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

impl Error {
    /// Formats the error for diagnostics without the variant name to ease CLI
    /// reporting.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }
}

/// Helper function to create an [`Error::Io`] variant.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
