//! Schema references and resolution

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A pointer into the context's resolved schema document.
///
/// References use the `#/`-prefixed path form (`#/definitions/User`); an
/// empty reference designates the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaReference {
    /// The `#/`-style path of the referenced subtree.
    #[serde(default)]
    pub reference: String,
}

impl SchemaReference {
    /// Creates a reference for the given `#/`-style path.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// Resolves the reference against a schema document.
    ///
    /// Nested `$ref` objects inside the target are expanded up to `depth`
    /// levels; deeper references are left verbatim. An unresolvable pointer
    /// yields `null`.
    #[must_use]
    pub fn resolve(&self, depth: usize, schema: &JsonValue) -> JsonValue {
        let target = lookup(&self.reference, schema);
        expand(target, depth, schema)
    }
}

static NULL: JsonValue = JsonValue::Null;

/// Looks up a `#/`-style pointer in the document.
fn lookup<'a>(reference: &str, schema: &'a JsonValue) -> &'a JsonValue {
    if reference.is_empty() || reference == "#" || reference == "#/" {
        return schema;
    }
    let pointer = reference.strip_prefix('#').unwrap_or(reference);
    schema.pointer(pointer).unwrap_or(&NULL)
}

/// Recursively copies `value`, expanding `{"$ref": "#/..."}` objects while
/// `depth` remains.
fn expand(value: &JsonValue, depth: usize, schema: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            if let Some(JsonValue::String(reference)) = map.get("$ref")
                && map.len() == 1
            {
                if depth == 0 {
                    return value.clone();
                }
                return expand(lookup(reference, schema), depth - 1, schema);
            }
            JsonValue::Object(
                map.iter()
                    .map(|(key, inner)| (key.clone(), expand(inner, depth, schema)))
                    .collect(),
            )
        }
        JsonValue::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(|inner| expand(inner, depth, schema))
                .collect(),
        ),
        _ => value.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_whole_document() {
        let schema = json!({"a": 1});
        let reference = SchemaReference::default();
        assert_eq!(reference.resolve(1, &schema), schema);
    }

    #[test]
    fn test_resolve_pointer() {
        let schema = json!({"definitions": {"User": {"type": "object"}}});
        let reference = SchemaReference::new("#/definitions/User");
        assert_eq!(reference.resolve(1, &schema), json!({"type": "object"}));
    }

    #[test]
    fn test_resolve_missing_pointer_is_null() {
        let schema = json!({});
        let reference = SchemaReference::new("#/definitions/Missing");
        assert_eq!(reference.resolve(1, &schema), JsonValue::Null);
    }

    #[test]
    fn test_nested_ref_expansion_is_depth_limited() {
        let schema = json!({
            "definitions": {
                "A": {"items": {"$ref": "#/definitions/B"}},
                "B": {"items": {"$ref": "#/definitions/C"}},
                "C": {"type": "string"}
            }
        });
        let reference = SchemaReference::new("#/definitions/A");

        let resolved = reference.resolve(1, &schema);
        // One level expanded; the reference inside B stays verbatim.
        assert_eq!(
            resolved,
            json!({"items": {"items": {"$ref": "#/definitions/C"}}})
        );

        let deeper = reference.resolve(2, &schema);
        assert_eq!(deeper, json!({"items": {"items": {"type": "string"}}}));
    }

    #[test]
    fn test_self_referential_schema_terminates() {
        let schema = json!({
            "definitions": {"Node": {"next": {"$ref": "#/definitions/Node"}}}
        });
        let reference = SchemaReference::new("#/definitions/Node");
        let resolved = reference.resolve(3, &schema);
        // Expansion stops once the depth budget is spent.
        assert_eq!(
            resolved.pointer("/next/next/next"),
            Some(&json!({"$ref": "#/definitions/Node"}))
        );
    }
}
