//! Authentication scheme encoders
//!
//! Each supported scheme maps to one host dynamic value. Attributes fall
//! back to the empty string when absent — the host rejects null attribute
//! values.

use portage_host::{DynamicValue, identifiers};
use portage_model::{ApiKeyLocation, Auth, OAuth2Flow};

/// What applying one auth record amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Set the `Authorization` header to this computed value.
    Authorization(DynamicValue),
    /// Set the `Authorization` header to this literal text
    /// (API keys in header position carry no computation).
    LiteralAuthorization(String),
    /// Nothing to set here — the scheme was folded into the query string
    /// during URL construction.
    QueryHandled,
    /// The host has no representation for this scheme.
    Unsupported(&'static str),
}

/// Encodes one auth record.
#[must_use]
pub fn encode(auth: &Auth) -> AuthOutcome {
    match auth {
        Auth::Basic { username, password } => AuthOutcome::Authorization(
            DynamicValue::new(identifiers::BASIC_AUTH)
                .with_attribute("username", username.clone().unwrap_or_default())
                .with_attribute("password", password.clone().unwrap_or_default()),
        ),
        Auth::Digest { username, password } => AuthOutcome::Authorization(
            DynamicValue::new(identifiers::DIGEST_AUTH)
                .with_attribute("username", username.clone().unwrap_or_default())
                .with_attribute("password", password.clone().unwrap_or_default()),
        ),
        Auth::OAuth1 {
            callback,
            consumer_key,
            consumer_secret,
            token_secret,
            algorithm,
            nonce,
            additional_parameters,
            timestamp,
            token,
        } => AuthOutcome::Authorization(
            DynamicValue::new(identifiers::OAUTH1_HEADER)
                .with_attribute("callback", callback.clone().unwrap_or_default())
                .with_attribute("consumerKey", consumer_key.clone().unwrap_or_default())
                .with_attribute("consumerSecret", consumer_secret.clone().unwrap_or_default())
                .with_attribute("tokenSecret", token_secret.clone().unwrap_or_default())
                .with_attribute("algorithm", algorithm.clone().unwrap_or_default())
                .with_attribute("nonce", nonce.clone().unwrap_or_default())
                .with_attribute(
                    "additionalParameters",
                    additional_parameters.clone().unwrap_or_default(),
                )
                .with_attribute("timestamp", timestamp.clone().unwrap_or_default())
                .with_attribute("token", token.clone().unwrap_or_default()),
        ),
        Auth::OAuth2 {
            flow,
            authorization_url,
            token_url,
            scopes,
        } => AuthOutcome::Authorization(
            DynamicValue::new(identifiers::OAUTH2)
                .with_attribute("grantType", grant_type(*flow))
                .with_attribute(
                    "authorizationUrl",
                    authorization_url.clone().unwrap_or_default(),
                )
                .with_attribute("accessTokenUrl", token_url.clone().unwrap_or_default())
                .with_attribute("scope", scopes.join(" ")),
        ),
        Auth::AwsSig4 {
            key,
            secret,
            region,
            service,
        } => AuthOutcome::Authorization(
            DynamicValue::new(identifiers::AWS_SIGNATURE_4)
                .with_attribute("key", key.clone().unwrap_or_default())
                .with_attribute("secret", secret.clone().unwrap_or_default())
                .with_attribute("region", region.clone().unwrap_or_default())
                .with_attribute("service", service.clone().unwrap_or_default()),
        ),
        Auth::Hawk { key, id, algorithm } => AuthOutcome::Authorization(
            DynamicValue::new(identifiers::HAWK)
                .with_attribute("key", key.clone().unwrap_or_default())
                .with_attribute("id", id.clone().unwrap_or_default())
                .with_attribute("algorithm", algorithm.clone().unwrap_or_default()),
        ),
        Auth::ApiKey {
            name,
            key,
            location,
        } => match location {
            ApiKeyLocation::Header => AuthOutcome::LiteralAuthorization(format!(
                "{}={}",
                name.clone().unwrap_or_default(),
                key.clone().unwrap_or_default()
            )),
            ApiKeyLocation::Query => AuthOutcome::QueryHandled,
        },
        Auth::Ntlm { .. } => AuthOutcome::Unsupported(auth.scheme_name()),
    }
}

/// Host grant-type code for an OAuth 2 flow; absent flows default to the
/// authorization-code grant.
const fn grant_type(flow: Option<OAuth2Flow>) -> i64 {
    match flow {
        Some(OAuth2Flow::Implicit) => 1,
        Some(OAuth2Flow::Application) => 2,
        Some(OAuth2Flow::Password) => 3,
        Some(OAuth2Flow::AccessCode) | None => 0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use portage_host::AttributeValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_auth_defaults_to_empty_strings() {
        let AuthOutcome::Authorization(value) = encode(&Auth::Basic {
            username: None,
            password: None,
        }) else {
            unreachable!("expected an Authorization outcome");
        };

        assert_eq!(value.type_id, identifiers::BASIC_AUTH);
        assert_eq!(value.attribute("username").unwrap().as_text(), Some(""));
        assert_eq!(value.attribute("password").unwrap().as_text(), Some(""));
    }

    #[test]
    fn test_basic_auth_carries_credentials() {
        let AuthOutcome::Authorization(value) = encode(&Auth::basic("luckymarmot", "stub")) else {
            unreachable!("expected an Authorization outcome");
        };

        assert_eq!(
            value.attribute("username").unwrap().as_text(),
            Some("luckymarmot")
        );
        assert_eq!(value.attribute("password").unwrap().as_text(), Some("stub"));
    }

    #[test]
    fn test_oauth2_implicit_round_trip() {
        let auth = Auth::OAuth2 {
            flow: Some(OAuth2Flow::Implicit),
            authorization_url: Some("auth.example.com/oauth2".to_string()),
            token_url: Some("token.example.com/oauth2".to_string()),
            scopes: Vec::new(),
        };

        let AuthOutcome::Authorization(value) = encode(&auth) else {
            unreachable!("expected an Authorization outcome");
        };

        assert_eq!(value.type_id, identifiers::OAUTH2);
        assert_eq!(value.attribute("grantType"), Some(&AttributeValue::Integer(1)));
        assert_eq!(
            value.attribute("authorizationUrl").unwrap().as_text(),
            Some("auth.example.com/oauth2")
        );
        assert_eq!(
            value.attribute("accessTokenUrl").unwrap().as_text(),
            Some("token.example.com/oauth2")
        );
        assert_eq!(value.attribute("scope").unwrap().as_text(), Some(""));
    }

    #[test]
    fn test_oauth2_scopes_are_space_joined() {
        let auth = Auth::OAuth2 {
            flow: None,
            authorization_url: None,
            token_url: None,
            scopes: vec!["read".to_string(), "write".to_string()],
        };

        let AuthOutcome::Authorization(value) = encode(&auth) else {
            unreachable!("expected an Authorization outcome");
        };
        assert_eq!(value.attribute("grantType"), Some(&AttributeValue::Integer(0)));
        assert_eq!(value.attribute("scope").unwrap().as_text(), Some("read write"));
    }

    #[test]
    fn test_api_key_header_is_literal() {
        let outcome = encode(&Auth::api_key_header("X-Api-Key", "secret"));
        assert_eq!(
            outcome,
            AuthOutcome::LiteralAuthorization("X-Api-Key=secret".to_string())
        );
    }

    #[test]
    fn test_api_key_query_is_deferred_to_url_building() {
        let outcome = encode(&Auth::api_key_query("api_key", "secret"));
        assert_eq!(outcome, AuthOutcome::QueryHandled);
    }

    #[test]
    fn test_ntlm_is_unsupported() {
        let outcome = encode(&Auth::Ntlm {
            username: None,
            password: None,
            domain: None,
        });
        assert_eq!(outcome, AuthOutcome::Unsupported("NTLM"));
    }

    #[test]
    fn test_oauth1_attribute_order() {
        let auth = Auth::OAuth1 {
            callback: None,
            consumer_key: Some("ck".to_string()),
            consumer_secret: None,
            token_secret: None,
            algorithm: None,
            nonce: None,
            additional_parameters: None,
            timestamp: None,
            token: None,
        };

        let AuthOutcome::Authorization(value) = encode(&auth) else {
            unreachable!("expected an Authorization outcome");
        };
        let keys: Vec<&str> = value.attributes.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "callback",
                "consumerKey",
                "consumerSecret",
                "tokenSecret",
                "algorithm",
                "nonce",
                "additionalParameters",
                "timestamp",
                "token",
            ]
        );
    }
}
