//! Error types for `apex-themegen`.

use apex_theme::ThemeError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `apex-themegen` pipeline.
#[derive(Debug, Error)]
pub enum ThemegenError {
    /// The mapping pipeline failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Configuration layers could not be merged or extracted.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A configuration file named with `--config` does not exist.
    #[error("configuration file not found: {0}")]
    MissingConfigFile(Utf8PathBuf),

    /// The merged configuration is unusable.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl From<figment::Error> for ThemegenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Problems detected in a merged configuration before any file is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No variants were configured.
    #[error("at least one theme variant must be configured")]
    NoVariants,
    /// A variant name collapsed to nothing after trimming.
    #[error("theme variant names must contain visible characters (index {0})")]
    BlankVariantName(usize),
    /// Two variants share a name.
    #[error("theme variant '{0}' is configured more than once")]
    DuplicateVariant(String),
    /// Two variants would write the same file.
    #[error("theme variants '{first}' and '{second}' both write {output}")]
    SharedOutput {
        /// Earlier variant.
        first: String,
        /// Later variant.
        second: String,
        /// Output path both variants name.
        output: Utf8PathBuf,
    },
}
