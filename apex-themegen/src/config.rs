//! Layered configuration for `apex-themegen`.
//!
//! Precedence, lowest to highest:
//!
//! 1. built-in defaults (the dashboard's standard theme locations);
//! 2. `themegen.toml` in the project root, or the file named by `--config`;
//! 3. `APEX_THEMEGEN_ROOT` and `APEX_THEMEGEN_MAPPING`;
//! 4. command-line flags.
//!
//! Variants can only be changed through the configuration file.

use std::collections::HashMap;

use apex_theme::driver::DEFAULT_MAPPING_PATH;
use apex_theme::{BuildPlan, Variant};
use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{ThemegenError, ValidationError};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "APEX_THEMEGEN_";

/// Configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "themegen.toml";

/// Merged `apex-themegen` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemegenConfig {
    /// Project root that relative paths resolve against.
    pub root: Utf8PathBuf,
    /// Mapping configuration shared by every variant.
    pub mapping: Utf8PathBuf,
    /// Variants to generate.
    pub variants: Vec<Variant>,
}

impl Default for ThemegenConfig {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            mapping: Utf8PathBuf::from(DEFAULT_MAPPING_PATH),
            variants: Variant::apex_defaults(),
        }
    }
}

/// Command-line values; `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CliOverrides {
    /// `--root`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Utf8PathBuf>,
    /// `--mapping`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Utf8PathBuf>,
}

impl ThemegenConfig {
    /// Merges every configuration layer and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ThemegenError::MissingConfigFile`] when `config_path` names a
    /// file that does not exist, [`ThemegenError::Config`] when a layer cannot
    /// be parsed, and [`ThemegenError::Validation`] when the merged variants
    /// are unusable.
    pub fn load(
        cli: &CliOverrides,
        config_path: Option<&Utf8Path>,
    ) -> Result<Self, ThemegenError> {
        let file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ThemegenError::MissingConfigFile(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => discover_root(cli)?.join(CONFIG_FILE_NAME),
        };
        tracing::debug!(path = %file, "configuration file candidate");

        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file.as_std_path()))
            .merge(env_layer())
            .merge(Serialized::defaults(cli))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks variant names and outputs for collisions.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.variants.is_empty() {
            return Err(ValidationError::NoVariants);
        }
        let mut names = HashMap::new();
        let mut outputs: HashMap<&Utf8Path, &str> = HashMap::new();
        for (index, variant) in self.variants.iter().enumerate() {
            let name = variant.name.trim();
            if name.is_empty() {
                return Err(ValidationError::BlankVariantName(index));
            }
            if names.insert(name, index).is_some() {
                return Err(ValidationError::DuplicateVariant(name.to_owned()));
            }
            if let Some(first) = outputs.insert(variant.output.as_path(), name) {
                return Err(ValidationError::SharedOutput {
                    first: first.to_owned(),
                    second: name.to_owned(),
                    output: variant.output.clone(),
                });
            }
        }
        Ok(())
    }

    /// Converts the configuration into the driver's build plan.
    #[must_use]
    pub fn into_plan(self) -> BuildPlan {
        BuildPlan {
            root: self.root,
            mapping: self.mapping,
            variants: self.variants,
        }
    }
}

fn env_layer() -> Env {
    Env::prefixed(ENV_PREFIX).only(&["root", "mapping"])
}

/// Resolves the project root from the layers that can set it before the
/// configuration file is known.
fn discover_root(cli: &CliOverrides) -> Result<Utf8PathBuf, ThemegenError> {
    let root = Figment::from(Serialized::defaults(ThemegenConfig::default()))
        .merge(env_layer())
        .merge(Serialized::defaults(cli))
        .extract_inner::<Utf8PathBuf>("root")?;
    Ok(root)
}
