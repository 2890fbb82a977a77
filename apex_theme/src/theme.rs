//! Normalised theme documents consumed by the UI configuration provider.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property overrides for a single component.
pub type ComponentOverrides = IndexMap<String, Value>;

/// Top-level theme document: `{ "theme": { "token": …, "components": … } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Theme payload.
    pub theme: Theme,
}

/// Global tokens and per-component overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Global design tokens keyed by option name.
    pub token: IndexMap<String, Value>,
    /// Component overrides keyed by component name.
    pub components: IndexMap<String, ComponentOverrides>,
}

impl ThemeDocument {
    /// Renders the document as pretty-printed JSON with two-space indentation.
    ///
    /// The output carries no trailing newline. Floats with no fractional part
    /// are written as integers: `1.0` becomes `1` and `1e2` becomes `100`.
    ///
    /// # Errors
    ///
    /// Returns the serialiser error if a value cannot be represented as JSON.
    pub fn render(&self) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(self)?;
        integral_floats_as_integers(&mut value);
        serde_json::to_string_pretty(&value)
    }
}

/// Largest magnitude a float holds without skipping integers (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;

fn integral_floats_as_integers(value: &mut Value) {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number
                .as_f64()
                .filter(|_| number.is_f64())
                .and_then(exact_integer)
            {
                *number = integer.into();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_as_integers),
        Value::Object(map) => map.values_mut().for_each(integral_floats_as_integers),
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

// `Display` for `f64` never uses exponent notation and drops a zero fraction,
// so only integral values parse back as `i64`.
fn exact_integer(float: f64) -> Option<i64> {
    float
        .to_string()
        .parse::<i64>()
        .ok()
        .filter(|integer| integer.unsigned_abs() <= MAX_EXACT_INTEGER)
}
