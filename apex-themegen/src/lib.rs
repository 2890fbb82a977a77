//! Library interface for the `apex-themegen` tool.
//!
//! Resolves configuration from defaults, `themegen.toml`, the environment,
//! and the command line, then hands the resulting plan to
//! [`apex_theme::driver`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use apex_theme::BuildReport;

use crate::cli::Args;
use crate::config::ThemegenConfig;
use crate::error::ThemegenError;

/// Runs one generation (or `--check`) pass for `args`.
///
/// # Errors
///
/// Returns a [`ThemegenError`] when configuration is invalid, an input is
/// missing or malformed, an output cannot be written, or `--check` finds
/// stale outputs.
pub fn run(args: &Args) -> Result<BuildReport, ThemegenError> {
    let config = ThemegenConfig::load(&args.overrides(), args.config_path.as_deref())?;
    let plan = config.into_plan();
    tracing::debug!(root = %plan.root, variants = plan.variants.len(), "resolved build plan");
    let report = if args.should_check {
        apex_theme::check(&plan)?
    } else {
        apex_theme::build(&plan)?
    };
    Ok(report)
}
