//! Command-line interface definitions for `apex-themegen`.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::config::CliOverrides;

/// Parsed CLI arguments for `apex-themegen`.
///
/// Every flag is optional; with none the tool reads and writes the
/// dashboard's standard theme locations under the current directory.
#[derive(Debug, Default, Parser)]
#[command(name = "apex-themegen")]
#[command(about = "Generate the light and dark theme documents from design-token exports")]
#[command(version)]
pub struct Args {
    /// Project root that input and output paths resolve against.
    #[arg(long, value_name = "path")]
    pub root: Option<Utf8PathBuf>,
    /// Mapping configuration, relative to the project root.
    #[arg(long, value_name = "path")]
    pub mapping: Option<Utf8PathBuf>,
    /// Configuration file to use instead of `<root>/themegen.toml`.
    #[arg(long = "config", value_name = "file")]
    pub config_path: Option<Utf8PathBuf>,
    /// Verify the generated files are current instead of writing them.
    #[arg(long = "check")]
    pub should_check: bool,
    /// Log every lookup miss and file access.
    #[arg(short = 'v', long = "verbose")]
    pub is_verbose: bool,
}

impl Args {
    /// Values from the command line that take precedence over every other
    /// configuration layer.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            root: self.root.clone(),
            mapping: self.mapping.clone(),
        }
    }
}
