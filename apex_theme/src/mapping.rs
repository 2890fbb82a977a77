//! Mapping configuration: candidate lookup paths per output key.
//!
//! The configuration is a JSON document with two optional sections:
//!
//! ```json
//! {
//!   "token": { "colorPrimary": ["color.brand.primary", "color.primary"] },
//!   "components": { "Button.colorPrimary": ["button.primary.bg"] }
//! }
//! ```
//!
//! Declaration order is kept so the rendered theme lists keys in the same
//! order the configuration declares them.

use std::fmt;

use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};

/// Ordered candidate dotted paths for one output key.
pub type Candidates = Vec<String>;

/// `Component.property` pair addressing one component override.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    component: String,
    property: String,
}

impl ComponentKey {
    /// Parses a compound key, returning `None` unless it is exactly
    /// `<Component>.<property>` with both halves non-empty.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let (component, property) = key.split_once('.')?;
        if component.is_empty() || property.is_empty() || property.contains('.') {
            return None;
        }
        Some(Self {
            component: component.to_owned(),
            property: property.to_owned(),
        })
    }

    /// Component name, for example `Button`.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Property name, for example `colorPrimary`.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.property)
    }
}

/// On-disk shape; a `null` section reads the same as a missing one.
#[derive(Debug, Default, Deserialize)]
struct RawMappingConfig {
    #[serde(default)]
    token: Option<IndexMap<String, Candidates>>,
    #[serde(default)]
    components: Option<IndexMap<String, Candidates>>,
}

/// Validated mapping configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingConfig {
    token: IndexMap<String, Candidates>,
    components: Vec<(ComponentKey, Candidates)>,
}

impl MappingConfig {
    /// Reads, parses, and validates a mapping configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] when the file cannot be read,
    /// [`ThemeError::Json`] when it is not valid JSON or a candidate list is
    /// not an array of strings, and [`ThemeError::MalformedComponentKey`] when
    /// a `components` key is not `<Component>.<property>`.
    pub fn load(path: &Utf8Path) -> ThemeResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|err| ThemeError::io(path, err))?;
        let config = Self::from_json_str(path, &data)?;
        tracing::debug!(
            path = %path,
            tokens = config.token.len(),
            components = config.components.len(),
            "loaded mapping configuration"
        );
        Ok(config)
    }

    /// Parses and validates a mapping configuration held in memory.
    ///
    /// `origin` is only used to label errors.
    ///
    /// # Errors
    ///
    /// See [`MappingConfig::load`].
    pub fn from_json_str(origin: &Utf8Path, data: &str) -> ThemeResult<Self> {
        let raw: RawMappingConfig =
            serde_json::from_str(data).map_err(|err| ThemeError::json(origin, err))?;
        let components = raw
            .components
            .unwrap_or_default()
            .into_iter()
            .map(|(key, candidates)| {
                let parsed = ComponentKey::parse(&key);
                parsed
                    .map(|component| (component, candidates))
                    .ok_or_else(|| ThemeError::MalformedComponentKey {
                        path: origin.to_path_buf(),
                        key,
                    })
            })
            .collect::<ThemeResult<Vec<_>>>()?;
        Ok(Self {
            token: raw.token.unwrap_or_default(),
            components,
        })
    }

    /// Global token entries in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.token
            .iter()
            .map(|(key, candidates)| (key.as_str(), candidates.as_slice()))
    }

    /// Component entries in declaration order.
    pub fn components(&self) -> impl Iterator<Item = (&ComponentKey, &[String])> {
        self.components
            .iter()
            .map(|(key, candidates)| (key, candidates.as_slice()))
    }

    /// Adds a global token entry, replacing any earlier declaration.
    #[must_use]
    pub fn with_token<I, S>(mut self, key: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.token
            .insert(key.into(), candidates.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a component entry.
    #[must_use]
    pub fn with_component<I, S>(mut self, key: ComponentKey, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components
            .push((key, candidates.into_iter().map(Into::into).collect()));
        self
    }
}
