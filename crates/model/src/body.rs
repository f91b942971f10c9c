//! Request body variants

use serde::{Deserialize, Serialize};

use crate::request::KeyValue;
use crate::schema::SchemaReference;
use crate::value::Value;

/// The body attached to a description request.
///
/// A closed tag set; `Other` carries an unrecognized upstream tag so the
/// importer can report it without aborting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    /// No body.
    #[default]
    None,
    /// Multipart form data.
    FormData {
        /// Ordered form entries.
        entries: Vec<KeyValue>,
    },
    /// URL-encoded form.
    UrlEncoded {
        /// Ordered form entries.
        entries: Vec<KeyValue>,
    },
    /// Raw JSON text, passed to the host verbatim.
    Json {
        /// The JSON text as produced upstream.
        text: String,
    },
    /// Plain text (possibly templated).
    Plain {
        /// The body value.
        value: Value,
    },
    /// Contents of an external file.
    File {
        /// The file value.
        value: Value,
    },
    /// A schema dump appended to the request description.
    Schema {
        /// Pointer into the context's schema document.
        reference: SchemaReference,
    },
    /// An upstream body kind this library does not know.
    Other {
        /// The unrecognized tag, kept for diagnostics.
        #[serde(rename = "tag")]
        kind: String,
    },
}

impl Body {
    /// Human-readable kind name, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::FormData { .. } => "formData",
            Self::UrlEncoded { .. } => "urlEncoded",
            Self::Json { .. } => "json",
            Self::Plain { .. } => "plain",
            Self::File { .. } => "file",
            Self::Schema { .. } => "schema",
            Self::Other { kind } => kind,
        }
    }
}
