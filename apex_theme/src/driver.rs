//! Build driver: load inputs, map every variant, then write or check outputs.
//!
//! Every variant is mapped and rendered before the first output is touched,
//! so unreadable or malformed inputs never leave a half-written theme set.
//! Writes themselves are not transactional: if the second write fails the
//! first file has already been replaced.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::mapper::map_tokens;
use crate::mapping::MappingConfig;
use crate::raw::RawTokenDocument;
use crate::writer;

/// Default mapping configuration path relative to the project root.
pub const DEFAULT_MAPPING_PATH: &str = "src/theme/figma/mapping.config.json";

/// One raw export paired with the theme file generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant label used in logs and errors, for example `light`.
    pub name: String,
    /// Raw token export, relative to the project root unless absolute.
    pub raw: Utf8PathBuf,
    /// Generated theme document, relative to the project root unless absolute.
    pub output: Utf8PathBuf,
}

impl Variant {
    /// Creates a variant description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        raw: impl Into<Utf8PathBuf>,
        output: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            output: output.into(),
        }
    }

    /// The light and dark variants of the Apex dashboard.
    #[must_use]
    pub fn apex_defaults() -> Vec<Self> {
        vec![
            Self::new(
                "light",
                "src/theme/figma/light.raw.json",
                "src/theme/apex-light.json",
            ),
            Self::new(
                "dark",
                "src/theme/figma/dark.raw.json",
                "src/theme/apex-dark.json",
            ),
        ]
    }
}

/// Fully resolved inputs and outputs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Directory that relative paths resolve against.
    pub root: Utf8PathBuf,
    /// Mapping configuration shared by every variant.
    pub mapping: Utf8PathBuf,
    /// Variants to generate, in order.
    pub variants: Vec<Variant>,
}

impl BuildPlan {
    /// Plan with the default mapping path and light/dark variants under `root`.
    #[must_use]
    pub fn apex_defaults(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            mapping: Utf8PathBuf::from(DEFAULT_MAPPING_PATH),
            variants: Variant::apex_defaults(),
        }
    }

    /// Resolves `path` against the project root; absolute paths pass through.
    #[must_use]
    pub fn resolve(&self, path: &Utf8Path) -> Utf8PathBuf {
        self.root.join(path)
    }
}

/// A theme document rendered in memory and the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTheme {
    /// Variant label.
    pub variant: String,
    /// Resolved output path.
    pub output: Utf8PathBuf,
    /// Pretty-printed JSON document.
    pub content: String,
}

/// Outcome of a build or check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Outputs that were written, or confirmed current in check mode.
    pub outputs: Vec<Utf8PathBuf>,
}

/// Loads every input named by `plan` and renders one theme per variant.
///
/// # Errors
///
/// Returns a [`ThemeError`] when an input cannot be read or parsed, the
/// mapping configuration is malformed, or a document fails to render.
pub fn render_all(plan: &BuildPlan) -> ThemeResult<Vec<RenderedTheme>> {
    let mapping = MappingConfig::load(&plan.resolve(&plan.mapping))?;
    plan.variants
        .iter()
        .map(|variant| render_variant(plan, &mapping, variant))
        .collect()
}

fn render_variant(
    plan: &BuildPlan,
    mapping: &MappingConfig,
    variant: &Variant,
) -> ThemeResult<RenderedTheme> {
    let raw = RawTokenDocument::load(&plan.resolve(&variant.raw))?;
    let document = map_tokens(&raw, mapping);
    let content = document.render().map_err(|source| ThemeError::Render {
        variant: variant.name.clone(),
        source,
    })?;
    Ok(RenderedTheme {
        variant: variant.name.clone(),
        output: plan.resolve(&variant.output),
        content,
    })
}

/// Generates every variant and overwrites its output file.
///
/// # Errors
///
/// Returns a [`ThemeError`] when rendering fails (nothing is written) or when
/// an output cannot be written.
pub fn build(plan: &BuildPlan) -> ThemeResult<BuildReport> {
    let rendered = render_all(plan)?;
    let mut report = BuildReport::default();
    for theme in rendered {
        writer::write_rendered(&theme.output, &theme.content)?;
        tracing::info!(variant = %theme.variant, path = %theme.output, "wrote theme document");
        report.outputs.push(theme.output);
    }
    tracing::info!(count = report.outputs.len(), "theme documents generated");
    Ok(report)
}

/// Renders every variant and compares it with the file on disk without
/// writing anything.
///
/// # Errors
///
/// Returns [`ThemeError::StaleOutput`] listing every output that is missing
/// or differs, or any error [`render_all`] can return.
pub fn check(plan: &BuildPlan) -> ThemeResult<BuildReport> {
    let rendered = render_all(plan)?;
    let mut report = BuildReport::default();
    let mut stale = Vec::new();
    for theme in rendered {
        match writer::read_existing(&theme.output)? {
            Some(current) if current == theme.content => {
                tracing::debug!(variant = %theme.variant, path = %theme.output, "theme is current");
                report.outputs.push(theme.output);
            }
            Some(_) => {
                tracing::warn!(variant = %theme.variant, path = %theme.output, "theme is stale");
                stale.push(theme.output);
            }
            None => {
                tracing::warn!(variant = %theme.variant, path = %theme.output, "theme is missing");
                stale.push(theme.output);
            }
        }
    }
    if stale.is_empty() {
        tracing::info!(count = report.outputs.len(), "theme documents are up to date");
        Ok(report)
    } else {
        Err(ThemeError::StaleOutput { paths: stale })
    }
}
