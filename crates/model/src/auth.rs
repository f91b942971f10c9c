//! Authentication scheme records

use serde::{Deserialize, Serialize};

/// An authentication scheme attached to a request.
///
/// A request carries an ordered list of these; each is a flat attribute
/// record. Absent attributes stay `None` — the host-side encoders decide how
/// to default them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Auth {
    /// HTTP Basic authentication.
    Basic {
        /// User name.
        #[serde(default)]
        username: Option<String>,
        /// Password.
        #[serde(default)]
        password: Option<String>,
    },
    /// HTTP Digest authentication.
    Digest {
        /// User name.
        #[serde(default)]
        username: Option<String>,
        /// Password.
        #[serde(default)]
        password: Option<String>,
    },
    /// OAuth 1 header signing.
    #[serde(rename = "oauth1")]
    OAuth1 {
        /// Callback URL.
        #[serde(default)]
        callback: Option<String>,
        /// Consumer key.
        #[serde(default)]
        consumer_key: Option<String>,
        /// Consumer secret.
        #[serde(default)]
        consumer_secret: Option<String>,
        /// Token secret.
        #[serde(default)]
        token_secret: Option<String>,
        /// Signature algorithm name.
        #[serde(default)]
        algorithm: Option<String>,
        /// Nonce override.
        #[serde(default)]
        nonce: Option<String>,
        /// Extra signed parameters, pre-encoded.
        #[serde(default)]
        additional_parameters: Option<String>,
        /// Timestamp override.
        #[serde(default)]
        timestamp: Option<String>,
        /// Access token.
        #[serde(default)]
        token: Option<String>,
    },
    /// OAuth 2.
    #[serde(rename = "oauth2")]
    OAuth2 {
        /// Grant flow.
        #[serde(default)]
        flow: Option<OAuth2Flow>,
        /// Authorization endpoint URL.
        #[serde(default)]
        authorization_url: Option<String>,
        /// Token endpoint URL.
        #[serde(default)]
        token_url: Option<String>,
        /// Requested scopes.
        #[serde(default)]
        scopes: Vec<String>,
    },
    /// AWS Signature v4.
    #[serde(rename = "aws_sig4")]
    AwsSig4 {
        /// Access key id.
        #[serde(default)]
        key: Option<String>,
        /// Secret access key.
        #[serde(default)]
        secret: Option<String>,
        /// Signing region.
        #[serde(default)]
        region: Option<String>,
        /// Signing service name.
        #[serde(default)]
        service: Option<String>,
    },
    /// Hawk message authentication.
    Hawk {
        /// Shared key.
        #[serde(default)]
        key: Option<String>,
        /// Key identifier.
        #[serde(default)]
        id: Option<String>,
        /// MAC algorithm name.
        #[serde(default)]
        algorithm: Option<String>,
    },
    /// Static API key, sent as a header or query parameter.
    ApiKey {
        /// Header or query parameter name.
        #[serde(default)]
        name: Option<String>,
        /// The key value.
        #[serde(default)]
        key: Option<String>,
        /// Where the key goes.
        #[serde(default)]
        location: ApiKeyLocation,
    },
    /// NTLM — representable in descriptions but not supported by the host.
    Ntlm {
        /// User name.
        #[serde(default)]
        username: Option<String>,
        /// Password.
        #[serde(default)]
        password: Option<String>,
        /// Windows domain.
        #[serde(default)]
        domain: Option<String>,
    },
}

impl Auth {
    /// Creates a Basic auth record.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Creates an API key record in header position.
    #[must_use]
    pub fn api_key_header(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ApiKey {
            name: Some(name.into()),
            key: Some(key.into()),
            location: ApiKeyLocation::Header,
        }
    }

    /// Creates an API key record in query position.
    #[must_use]
    pub fn api_key_query(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ApiKey {
            name: Some(name.into()),
            key: Some(key.into()),
            location: ApiKeyLocation::Query,
        }
    }

    /// Human-readable scheme name, used in diagnostics.
    #[must_use]
    pub const fn scheme_name(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "Basic",
            Self::Digest { .. } => "Digest",
            Self::OAuth1 { .. } => "OAuth1",
            Self::OAuth2 { .. } => "OAuth2",
            Self::AwsSig4 { .. } => "AWSSig4",
            Self::Hawk { .. } => "Hawk",
            Self::ApiKey { .. } => "ApiKey",
            Self::Ntlm { .. } => "NTLM",
        }
    }
}

/// OAuth 2 grant flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OAuth2Flow {
    /// Authorization code grant.
    #[default]
    AccessCode,
    /// Implicit grant.
    Implicit,
    /// Client credentials grant.
    Application,
    /// Resource owner password grant.
    Password,
}

/// Location for API key authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyLocation {
    /// Add to request headers.
    #[default]
    Header,
    /// Add to the query string.
    Query,
}
