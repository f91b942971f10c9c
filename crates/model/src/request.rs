//! Description requests and key-value pairs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::auth::Auth;
use crate::body::Body;
use crate::value::Value;

/// One request of the description tree.
///
/// Every field is optional or defaultable: a bare `Request` with just a URL
/// is a legal leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// HTTP method.
    #[serde(default)]
    pub method: Option<String>,
    /// Base URL, possibly templated.
    #[serde(default)]
    pub url: Option<Value>,
    /// Free-form description text.
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered header mapping; values may be templated.
    #[serde(default)]
    pub headers: IndexMap<String, Value>,
    /// Extra query parameters appended to the URL.
    #[serde(default)]
    pub queries: Vec<KeyValue>,
    /// Authentication schemes, applied in order.
    #[serde(default)]
    pub auths: Vec<Auth>,
    /// Request body.
    #[serde(default)]
    pub body: Body,
    /// Timeout in seconds; copied onto the host request, not enforced here.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Request {
    /// Creates a request with just a URL.
    #[must_use]
    pub fn with_url(url: impl Into<Value>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Creates a named request.
    #[must_use]
    pub fn new(name: impl Into<String>, method: impl Into<String>, url: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            method: Some(method.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// A key-value pair whose sides may themselves be templated values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// The key side.
    #[serde(default)]
    pub key: Option<Value>,
    /// The value side.
    #[serde(default)]
    pub value: Option<Value>,
}

impl KeyValue {
    /// Creates a pair from two values.
    #[must_use]
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
