//! The top-level request context handed to the importer

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::group::Group;

/// Everything one source item describes: the request tree, an optional
/// schema document, and named environments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The root group of the request tree.
    #[serde(default)]
    pub group: Group,
    /// Resolved schema document, when the source format carried one.
    #[serde(default)]
    pub schema: Option<JsonValue>,
    /// Named environments to materialize in the host.
    #[serde(default)]
    pub environments: Vec<EnvironmentDef>,
}

impl RequestContext {
    /// Creates a context around a request tree.
    #[must_use]
    pub fn new(group: Group) -> Self {
        Self {
            group,
            schema: None,
            environments: Vec::new(),
        }
    }
}

/// A named environment definition: an ordered variable mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDef {
    /// Environment name.
    pub name: String,
    /// Ordered variable name → value mapping.
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

impl EnvironmentDef {
    /// Creates an empty environment definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: IndexMap::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::Request;

    #[test]
    fn test_deserializes_from_json() {
        let json = r#"{
            "group": {
                "name": "My API",
                "children": {
                    "/users": {"type": "request", "name": "List Users", "url": "http://api.example.com/users"}
                }
            },
            "environments": [
                {"name": "Staging", "variables": {"base_url": "http://staging.example.com"}}
            ]
        }"#;

        let context: RequestContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.group.name.as_deref(), Some("My API"));
        assert_eq!(context.group.request_count(), 1);
        assert_eq!(context.environments.len(), 1);
        assert_eq!(
            context.environments[0].variables.get("base_url").unwrap(),
            "http://staging.example.com"
        );
    }

    #[test]
    fn test_empty_context() {
        let context = RequestContext::new(Group::default());
        assert!(context.group.children.is_empty());
        assert!(context.schema.is_none());

        let mut group = Group::default();
        group.insert_child("/r", Request::with_url("http://x"));
        let context = RequestContext::new(group);
        assert_eq!(context.group.request_count(), 1);
    }
}
