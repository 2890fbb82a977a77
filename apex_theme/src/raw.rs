//! Raw design-token documents exported by the design tool.
//!
//! A raw document has no schema: any JSON shape is accepted and values are
//! passed through to the theme untouched. Lookups address the tree with dotted
//! paths such as `color.brand.primary`.

use camino::Utf8Path;
use serde_json::Value;

use crate::error::{ThemeError, ThemeResult};

/// A parsed raw token export.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTokenDocument {
    root: Value,
}

impl RawTokenDocument {
    /// Wraps an already parsed JSON tree.
    #[must_use]
    pub const fn new(root: Value) -> Self {
        Self { root }
    }

    /// Reads and parses a raw token export from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] when the file cannot be read and
    /// [`ThemeError::Json`] when it is not valid JSON.
    pub fn load(path: &Utf8Path) -> ThemeResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|err| ThemeError::io(path, err))?;
        let root = serde_json::from_str(&data).map_err(|err| ThemeError::json(path, err))?;
        tracing::debug!(path = %path, "loaded raw token document");
        Ok(Self::new(root))
    }

    /// Returns the underlying JSON tree.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.root
    }

    /// Resolves a dotted path, returning `None` on a lookup miss.
    ///
    /// Objects are descended by key and arrays by decimal index. Reaching a
    /// scalar before the path is exhausted is a miss. A `null` leaf is a
    /// defined value and is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use apex_theme::RawTokenDocument;
    /// use serde_json::json;
    ///
    /// let raw = RawTokenDocument::new(json!({"color": {"primary": "#1677ff"}}));
    /// assert_eq!(raw.resolve("color.primary"), Some(&json!("#1677ff")));
    /// assert_eq!(raw.resolve("color.secondary"), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, segment| descend(node, segment))
    }
}

impl From<Value> for RawTokenDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

fn descend<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Accepts only canonical decimal indices: `"0"`, `"1"`, `"12"`, but not
/// `"+1"`, `"01"` or `" 1"`.
fn array_index(segment: &str) -> Option<usize> {
    let is_canonical = !segment.is_empty()
        && segment.bytes().all(|byte| byte.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if is_canonical { segment.parse().ok() } else { None }
}
