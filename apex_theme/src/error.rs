//! Error types for the token mapping pipeline.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Result alias used throughout `apex_theme`.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Errors surfaced while loading inputs, rendering, or writing theme documents.
///
/// Lookup misses during mapping are deliberately absent from this enum: a
/// candidate path that resolves to nothing is an ordinary outcome.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An input file was not valid JSON or did not match the expected shape.
    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        /// Input file that failed to parse.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A `components` key did not have the `Component.property` shape.
    #[error(
        "malformed component key '{key}' in {path}; expected '<Component>.<property>'"
    )]
    MalformedComponentKey {
        /// Mapping configuration containing the key.
        path: Utf8PathBuf,
        /// The offending compound key.
        key: String,
    },

    /// A theme document could not be serialised.
    #[error("failed to render theme '{variant}': {source}")]
    Render {
        /// Variant whose document failed to render.
        variant: String,
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// Check mode found outputs that differ from the freshly rendered documents.
    #[error("theme outputs are out of date: {}", format_paths(.paths))]
    StaleOutput {
        /// Output files that are missing or differ.
        paths: Vec<Utf8PathBuf>,
    },
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

fn format_paths(paths: &[Utf8PathBuf]) -> String {
    paths
        .iter()
        .map(Utf8PathBuf::as_path)
        .map(Utf8Path::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
