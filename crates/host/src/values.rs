//! Host value primitives: dynamic strings and dynamic values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A host-native computed fragment: a type identifier plus an ordered
/// attribute mapping. The host evaluates it when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicValue {
    /// Host type identifier (see [`crate::identifiers`]).
    pub type_id: String,
    /// Ordered attributes.
    pub attributes: IndexMap<String, AttributeValue>,
}

impl DynamicValue {
    /// Creates a dynamic value with no attributes.
    #[must_use]
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Adds an attribute, keeping insertion order.
    #[must_use]
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Looks up an attribute by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// One attribute of a [`DynamicValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Text attribute.
    Text(String),
    /// Integer attribute (e.g. a grant type code).
    Integer(i64),
    /// Boolean attribute.
    Bool(bool),
    /// A list of key/value/enabled triples (used by the body encoders).
    Pairs(Vec<KeyValuePair>),
}

impl AttributeValue {
    /// Returns the text if this attribute is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer if this attribute is numeric.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the pair list if this attribute holds one.
    #[must_use]
    pub fn as_pairs(&self) -> Option<&[KeyValuePair]> {
        match self {
            Self::Pairs(pairs) => Some(pairs),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<KeyValuePair>> for AttributeValue {
    fn from(pairs: Vec<KeyValuePair>) -> Self {
        Self::Pairs(pairs)
    }
}

/// A key/value/enabled triple inside a body dynamic value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// The key side.
    pub key: DynamicString,
    /// The value side.
    pub value: DynamicString,
    /// Whether the entry is active.
    pub enabled: bool,
}

impl KeyValuePair {
    /// Creates an enabled pair.
    #[must_use]
    pub const fn new(key: DynamicString, value: DynamicString) -> Self {
        Self {
            key,
            value,
            enabled: true,
        }
    }
}

/// One component of a [`DynamicString`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    /// Literal text.
    Literal(String),
    /// A computed fragment.
    Dynamic(DynamicValue),
}

/// The host's composite string: an ordered sequence of literal and computed
/// fragments. An empty dynamic string has zero components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicString {
    components: Vec<Component>,
}

impl DynamicString {
    /// Creates an empty dynamic string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Creates a dynamic string from pre-built components.
    #[must_use]
    pub fn from_components(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Appends a literal fragment.
    pub fn push_literal(&mut self, text: impl Into<String>) {
        self.components.push(Component::Literal(text.into()));
    }

    /// Appends a computed fragment.
    pub fn push_dynamic(&mut self, value: DynamicValue) {
        self.components.push(Component::Dynamic(value));
    }

    /// Appends a pre-built component.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// The ordered components.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Consumes the string, yielding its components.
    #[must_use]
    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// True when the string has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the text when the string is exactly one literal component.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self.components.as_slice() {
            [Component::Literal(text)] => Some(text),
            _ => None,
        }
    }
}

impl From<DynamicValue> for DynamicString {
    fn from(value: DynamicValue) -> Self {
        Self {
            components: vec![Component::Dynamic(value)],
        }
    }
}

impl From<&str> for DynamicString {
    fn from(text: &str) -> Self {
        Self {
            components: vec![Component::Literal(text.to_string())],
        }
    }
}

impl From<String> for DynamicString {
    fn from(text: String) -> Self {
        Self {
            components: vec![Component::Literal(text)],
        }
    }
}
