//! Pure mapping from a raw token export onto a theme document.
//!
//! Each output key carries an ordered list of candidate paths. The first
//! candidate that resolves in the raw document wins and later candidates are
//! never consulted. A key whose candidates all miss is left out of the theme.
//! Lookup miss is not an error: design exports get renamed and restructured,
//! and the candidate lists exist to absorb that.

use serde_json::Value;

use crate::mapping::MappingConfig;
use crate::raw::RawTokenDocument;
use crate::theme::{Theme, ThemeDocument};

/// Maps `raw` through `mapping`, producing a fresh theme document.
///
/// # Examples
///
/// ```
/// use apex_theme::{MappingConfig, RawTokenDocument, map_tokens};
/// use serde_json::json;
///
/// let raw = RawTokenDocument::new(json!({"color": {"primary": "#1677ff"}}));
/// let mapping = MappingConfig::default().with_token("colorPrimary", ["color.primary"]);
///
/// let doc = map_tokens(&raw, &mapping);
/// assert_eq!(
///     serde_json::to_value(&doc).ok(),
///     Some(json!({"theme": {"token": {"colorPrimary": "#1677ff"}, "components": {}}}))
/// );
/// ```
#[must_use]
pub fn map_tokens(raw: &RawTokenDocument, mapping: &MappingConfig) -> ThemeDocument {
    let mut theme = Theme::default();

    for (key, candidates) in mapping.tokens() {
        first_match(raw, candidates).map_or_else(
            || tracing::debug!(token = key, "no candidate resolved; token omitted"),
            |value| {
                theme.token.insert(key.to_owned(), value.clone());
            },
        );
    }

    for (key, candidates) in mapping.components() {
        // The component entry exists even when none of its properties resolve.
        let overrides = theme
            .components
            .entry(key.component().to_owned())
            .or_default();
        first_match(raw, candidates).map_or_else(
            || tracing::debug!(component = %key, "no candidate resolved; property omitted"),
            |value| {
                overrides.insert(key.property().to_owned(), value.clone());
            },
        );
    }

    ThemeDocument { theme }
}

fn first_match<'a>(raw: &'a RawTokenDocument, candidates: &[String]) -> Option<&'a Value> {
    candidates.iter().find_map(|path| raw.resolve(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ComponentKey;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn component(key: &str) -> ComponentKey {
        ComponentKey::parse(key).unwrap_or_else(|| panic!("invalid test key {key}"))
    }

    #[fixture]
    fn light() -> RawTokenDocument {
        RawTokenDocument::new(json!({
            "color": { "brand": { "primary": "#1677ff" }, "text": "#000000e0" },
            "radius": { "base": 6 },
            "button": { "bg": "#ffffff" }
        }))
    }

    #[fixture]
    fn dark() -> RawTokenDocument {
        RawTokenDocument::new(json!({
            "color": { "brand": { "primary": "#1668dc" } },
            "button": { "bg": "#141414" }
        }))
    }

    #[rstest]
    fn first_resolving_candidate_wins() {
        let raw = RawTokenDocument::new(json!({ "c": { "d": 5 }, "e": { "f": 9 } }));
        let mapping = MappingConfig::default().with_token("X", ["a.b", "c.d", "e.f"]);

        let doc = map_tokens(&raw, &mapping);
        assert_eq!(doc.theme.token.get("X"), Some(&json!(5)));
    }

    #[rstest]
    fn earlier_candidate_shadows_later_ones(light: RawTokenDocument) {
        let mapping = MappingConfig::default()
            .with_token("colorPrimary", ["color.brand.primary", "button.bg"]);

        let doc = map_tokens(&light, &mapping);
        assert_eq!(doc.theme.token.get("colorPrimary"), Some(&json!("#1677ff")));
    }

    #[rstest]
    fn full_miss_omits_the_key(light: RawTokenDocument) {
        let mapping = MappingConfig::default()
            .with_token("colorSuccess", ["color.success", "palette.green.6"])
            .with_token("borderRadius", ["radius.base"]);

        let doc = map_tokens(&light, &mapping);
        assert!(!doc.theme.token.contains_key("colorSuccess"));
        assert_eq!(doc.theme.token.get("borderRadius"), Some(&json!(6)));
    }

    #[rstest]
    fn empty_candidate_list_omits_the_key(light: RawTokenDocument) {
        let mapping = MappingConfig::default().with_token("colorPrimary", Vec::<String>::new());

        let doc = map_tokens(&light, &mapping);
        assert!(doc.theme.token.is_empty());
    }

    #[rstest]
    fn null_leaf_is_committed() {
        let raw = RawTokenDocument::new(json!({ "a": null, "b": "fallback" }));
        let mapping = MappingConfig::default().with_token("X", ["a", "b"]);

        let doc = map_tokens(&raw, &mapping);
        assert_eq!(doc.theme.token.get("X"), Some(&Value::Null));
    }

    #[rstest]
    fn groups_properties_under_one_component() {
        let raw = RawTokenDocument::new(json!({ "a": { "b": "#1677ff" }, "c": { "d": "#fff" } }));
        let mapping = MappingConfig::default()
            .with_component(component("Button.colorPrimary"), ["a.b"])
            .with_component(component("Button.colorText"), ["c.d"]);

        let doc = map_tokens(&raw, &mapping);
        assert_eq!(doc.theme.components.len(), 1);
        assert_eq!(
            serde_json::to_value(&doc.theme.components).ok(),
            Some(json!({ "Button": { "colorPrimary": "#1677ff", "colorText": "#fff" } }))
        );
    }

    #[rstest]
    fn unresolved_component_still_appears(light: RawTokenDocument) {
        let mapping =
            MappingConfig::default().with_component(component("Table.headerBg"), ["table.header"]);

        let doc = map_tokens(&light, &mapping);
        assert_eq!(
            doc.theme.components.get("Table").map(|props| props.is_empty()),
            Some(true)
        );
    }

    #[rstest]
    fn matches_the_documented_example() -> anyhow::Result<()> {
        let raw = RawTokenDocument::new(json!({ "color": { "primary": "#1677ff" } }));
        let mapping = MappingConfig::from_json_str(
            camino::Utf8Path::new("mapping.config.json"),
            r#"{ "token": { "colorPrimary": ["color.primary"] } }"#,
        )?;

        let doc = map_tokens(&raw, &mapping);
        assert_eq!(
            serde_json::to_string(&doc)?,
            r##"{"theme":{"token":{"colorPrimary":"#1677ff"},"components":{}}}"##
        );
        Ok(())
    }

    #[rstest]
    fn repeated_runs_render_identically(light: RawTokenDocument) -> anyhow::Result<()> {
        let mapping = MappingConfig::default()
            .with_token("colorPrimary", ["color.brand.primary"])
            .with_token("colorText", ["color.text"])
            .with_component(component("Button.defaultBg"), ["button.bg"]);

        let first = map_tokens(&light, &mapping).render()?;
        let second = map_tokens(&light, &mapping).render()?;
        assert_eq!(first, second);
        Ok(())
    }

    #[rstest]
    fn variants_do_not_leak_into_each_other(light: RawTokenDocument, dark: RawTokenDocument) {
        let mapping = MappingConfig::default()
            .with_token("colorPrimary", ["color.brand.primary"])
            .with_token("colorText", ["color.text"])
            .with_component(component("Button.defaultBg"), ["button.bg"]);

        let light_doc = map_tokens(&light, &mapping);
        let dark_doc = map_tokens(&dark, &mapping);

        assert_eq!(light_doc.theme.token.get("colorText"), Some(&json!("#000000e0")));
        assert!(!dark_doc.theme.token.contains_key("colorText"));
        assert_eq!(dark_doc.theme.token.get("colorPrimary"), Some(&json!("#1668dc")));
        assert_eq!(
            dark_doc
                .theme
                .components
                .get("Button")
                .and_then(|props| props.get("defaultBg")),
            Some(&json!("#141414"))
        );
    }

    #[rstest]
    fn output_follows_declaration_order(light: RawTokenDocument) {
        let mapping = MappingConfig::default()
            .with_token("colorText", ["color.text"])
            .with_token("borderRadius", ["radius.base"])
            .with_token("colorPrimary", ["color.brand.primary"]);

        let doc = map_tokens(&light, &mapping);
        let keys: Vec<_> = doc.theme.token.keys().map(String::as_str).collect();
        assert_eq!(keys, ["colorText", "borderRadius", "colorPrimary"]);
    }
}
