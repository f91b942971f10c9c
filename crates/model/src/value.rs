//! Description values: literals, file references, environment references

use serde::{Deserialize, Serialize};

/// A scalar description value.
///
/// URLs, header values, form keys and the like are either plain text, a
/// marker for the contents of an external file, or a templated reference
/// into an environment (e.g. `{{base_url}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Literal text.
    Text(String),
    /// A templated variable access.
    Reference(EnvironmentReference),
    /// Contents of an external file, resolved by the host at send time.
    File(FileReference),
}

impl Value {
    /// Creates a literal text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the literal text if this value is plain text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Reference(_) | Self::File(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<EnvironmentReference> for Value {
    fn from(reference: EnvironmentReference) -> Self {
        Self::Reference(reference)
    }
}

impl From<FileReference> for Value {
    fn from(file: FileReference) -> Self {
        Self::File(file)
    }
}

/// Marker for "the contents of an external file".
///
/// The description only records where the file lives; reading it is the
/// host's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Path of the referenced file, if the description carried one.
    #[serde(default)]
    pub path: Option<String>,
}

impl FileReference {
    /// Creates a file reference for the given path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// A templated variable access such as `{{var}}`.
///
/// The reference name is an ordered list of components; in the common case a
/// single literal. Nested references (a name computed from another
/// reference) are representable but only single-level literal names can be
/// resolved against the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentReference {
    /// Ordered components forming the reference name. Always serialized, so
    /// untagged decoding never mistakes a file reference for a reference.
    pub components: Vec<ReferenceComponent>,
}

impl EnvironmentReference {
    /// Creates a reference with a single literal name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            components: vec![ReferenceComponent::Literal(name.into())],
        }
    }

    /// Returns the variable name when the reference is exactly one literal.
    #[must_use]
    pub fn single_literal(&self) -> Option<&str> {
        match self.components.as_slice() {
            [ReferenceComponent::Literal(name)] => Some(name),
            _ => None,
        }
    }
}

/// One component of a reference name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceComponent {
    /// Literal text.
    Literal(String),
    /// A nested reference.
    Reference(EnvironmentReference),
}
