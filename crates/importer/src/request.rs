//! Building one host request from one description request

use indexmap::IndexMap;
use portage_host::{
    DynamicString, DynamicValue, GroupRef, HostContext, KeyValuePair, RequestBody, RequestRef,
    identifiers,
};
use portage_model::{Auth, Body, KeyValue, Request, Value};
use serde_json::Value as JsonValue;

use crate::auth::{AuthOutcome, encode};
use crate::session::ImportSession;
use crate::warning::ImportWarning;

const AUTHORIZATION_HEADER: &str = "Authorization";

impl<C: HostContext> ImportSession<'_, C> {
    /// Builds one host request, appends it to `parent` and returns its
    /// handle. `order`, when given, is set on the created request.
    pub fn import_request(
        &mut self,
        order: Option<usize>,
        parent: GroupRef,
        request: &Request,
        schema: Option<&JsonValue>,
    ) -> RequestRef {
        let url = self.generate_url(request.url.as_ref(), &request.queries, &request.auths);
        let handle =
            self.host
                .create_request(request.name.as_deref(), request.method.as_deref(), url);
        self.requests_imported += 1;

        self.host
            .set_request_description(handle, request.description.clone());
        self.apply_headers(handle, &request.headers);
        self.apply_auths(handle, request.name.as_deref(), &request.auths);
        self.apply_body(handle, request.name.as_deref(), &request.body, schema);

        if let Some(secs) = request.timeout_secs {
            self.host
                .set_request_timeout(handle, secs.saturating_mul(1000));
        }

        self.host.append_request(parent, handle);
        if let Some(order) = order {
            self.host.set_request_order(handle, order);
        }
        handle
    }

    fn apply_headers(&mut self, request: RequestRef, headers: &IndexMap<String, Value>) {
        for (name, value) in headers {
            let header_name = self
                .to_dynamic_string(Some(&Value::text(name.clone())), true, true)
                .unwrap_or_default();
            let header_value = self
                .to_dynamic_string(Some(value), true, true)
                .unwrap_or_default();
            self.host.set_request_header(request, header_name, header_value);
        }
    }

    fn apply_auths(&mut self, request: RequestRef, name: Option<&str>, auths: &[Auth]) {
        for auth in auths {
            match encode(auth) {
                AuthOutcome::Authorization(value) => {
                    self.host.set_request_header(
                        request,
                        DynamicString::from(AUTHORIZATION_HEADER),
                        DynamicString::from(value),
                    );
                }
                AuthOutcome::LiteralAuthorization(value) => {
                    self.host.set_request_header(
                        request,
                        DynamicString::from(AUTHORIZATION_HEADER),
                        DynamicString::from(value),
                    );
                }
                AuthOutcome::QueryHandled => {}
                AuthOutcome::Unsupported(scheme) => {
                    tracing::warn!(scheme, "authentication scheme is not supported, skipping");
                    self.warn(ImportWarning::warning(
                        location(name, "auth"),
                        format!("authentication scheme '{scheme}' is not supported and was skipped"),
                    ));
                }
            }
        }
    }

    fn apply_body(
        &mut self,
        request: RequestRef,
        name: Option<&str>,
        body: &Body,
        schema: Option<&JsonValue>,
    ) {
        match body {
            Body::None => {}
            Body::FormData { entries } => {
                let pairs = self.key_value_pairs(entries);
                let value = DynamicValue::new(identifiers::BODY_MULTIPART_FORM_DATA)
                    .with_attribute("keyValues", pairs);
                self.host
                    .set_request_body(request, RequestBody::Dynamic(DynamicString::from(value)));
            }
            Body::UrlEncoded { entries } => {
                let pairs = self.key_value_pairs(entries);
                let value = DynamicValue::new(identifiers::BODY_FORM_KEY_VALUE)
                    .with_attribute("keyValues", pairs);
                self.host
                    .set_request_body(request, RequestBody::Dynamic(DynamicString::from(value)));
            }
            Body::Json { text } => {
                // Verbatim: JSON bodies are never translated.
                self.host
                    .set_request_body(request, RequestBody::Text(text.clone()));
            }
            Body::Plain { value } | Body::File { value } => {
                let text = self
                    .to_dynamic_string(Some(value), true, true)
                    .unwrap_or_default();
                self.host.set_request_body(request, RequestBody::Dynamic(text));
            }
            Body::Schema { reference } => {
                let resolved = reference.resolve(1, schema.unwrap_or(&JsonValue::Null));
                let dump = serde_json::to_string_pretty(&resolved).unwrap_or_default();
                let description = match self.host.request_description(request) {
                    Some(existing) if !existing.is_empty() => {
                        format!("{existing}\n\n### Schema ###\n\n{dump}")
                    }
                    _ => format!("### Schema ###\n\n{dump}"),
                };
                self.host.set_request_description(request, Some(description));
            }
            Body::Other { kind } => {
                tracing::warn!(kind = %kind, "body kind is not supported, skipping");
                self.warn(ImportWarning::warning(
                    location(name, "body"),
                    format!("body kind '{kind}' is not supported and was skipped"),
                ));
            }
        }
    }

    fn key_value_pairs(&mut self, entries: &[KeyValue]) -> Vec<KeyValuePair> {
        entries
            .iter()
            .map(|entry| {
                KeyValuePair::new(
                    self.to_dynamic_string(entry.key.as_ref(), true, true)
                        .unwrap_or_default(),
                    self.to_dynamic_string(entry.value.as_ref(), true, true)
                        .unwrap_or_default(),
                )
            })
            .collect()
    }
}

fn location(name: Option<&str>, part: &str) -> String {
    format!("{}/{part}", name.unwrap_or("<unnamed request>"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ImportConfig;
    use portage_host::stub::StubHost;
    use portage_model::SchemaReference;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn import_one(host: &mut StubHost, request: &Request) -> RequestRef {
        let mut session = ImportSession::new(host, ImportConfig::default());
        let parent = session.host.create_request_group(Some("parent"));
        session.import_request(None, parent, request, None)
    }

    #[test]
    fn test_bare_url_request() {
        let mut host = StubHost::new();
        let handle = import_one(&mut host, &Request::with_url("http://fakeurl.com"));

        assert_eq!(host.calls.create_request, 1);
        let stored = host.request(handle).unwrap();
        assert!(stored.name.is_none());
        assert!(stored.method.is_none());
        assert_eq!(stored.url.as_literal(), Some("http://fakeurl.com"));
    }

    #[test]
    fn test_headers_are_set_in_order() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.headers.insert("key".to_string(), Value::text("value"));
        request.headers.insert("sec".to_string(), Value::text("ond"));

        let handle = import_one(&mut host, &request);

        let stored = host.request(handle).unwrap();
        assert_eq!(stored.headers.len(), 2);
        assert_eq!(stored.headers[0].0.as_literal(), Some("key"));
        assert_eq!(stored.headers[0].1.as_literal(), Some("value"));
        assert_eq!(stored.headers[1].0.as_literal(), Some("sec"));
        assert_eq!(stored.headers[1].1.as_literal(), Some("ond"));
    }

    #[test]
    fn test_basic_auth_sets_authorization_header() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.auths.push(Auth::basic("marmot", "stub"));

        let handle = import_one(&mut host, &request);

        let stored = host.request(handle).unwrap();
        assert_eq!(stored.headers.len(), 1);
        let (name, value) = &stored.headers[0];
        assert_eq!(name.as_literal(), Some("Authorization"));
        let [portage_host::Component::Dynamic(dynamic)] = value.components() else {
            unreachable!("expected a single dynamic component");
        };
        assert_eq!(dynamic.type_id, identifiers::BASIC_AUTH);
    }

    #[test]
    fn test_api_key_header_is_a_literal_header() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.auths.push(Auth::api_key_header("X-Key", "secret"));

        let handle = import_one(&mut host, &request);

        let stored = host.request(handle).unwrap();
        let (name, value) = &stored.headers[0];
        assert_eq!(name.as_literal(), Some("Authorization"));
        assert_eq!(value.as_literal(), Some("X-Key=secret"));
    }

    #[test]
    fn test_unsupported_auth_warns_and_continues() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());
        let parent = session.host.create_request_group(Some("parent"));

        let mut request = Request::with_url("http://fakeurl.com");
        request.name = Some("Login".to_string());
        request.auths.push(Auth::Ntlm {
            username: None,
            password: None,
            domain: None,
        });

        let handle = session.import_request(None, parent, &request, None);
        assert_eq!(session.warnings().len(), 1);
        assert_eq!(session.warnings()[0].location, "Login/auth");

        // The request still exists and was appended.
        assert!(host.request(handle).is_some());
        assert_eq!(host.calls.append_request, 1);
    }

    #[test]
    fn test_form_data_body() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.body = Body::FormData {
            entries: vec![KeyValue::new("key", "value"), KeyValue::new("sec", "ond")],
        };

        let handle = import_one(&mut host, &request);

        let Some(RequestBody::Dynamic(body)) = &host.request(handle).unwrap().body else {
            unreachable!("expected a dynamic body");
        };
        let [portage_host::Component::Dynamic(dynamic)] = body.components() else {
            unreachable!("expected a single dynamic component");
        };
        assert_eq!(dynamic.type_id, identifiers::BODY_MULTIPART_FORM_DATA);
        let pairs = dynamic.attribute("keyValues").unwrap().as_pairs().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key.as_literal(), Some("key"));
        assert_eq!(pairs[0].value.as_literal(), Some("value"));
        assert!(pairs[0].enabled);
        assert_eq!(pairs[1].key.as_literal(), Some("sec"));
    }

    #[test]
    fn test_url_encoded_body() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.body = Body::UrlEncoded {
            entries: vec![KeyValue::new("test", "value")],
        };

        let handle = import_one(&mut host, &request);

        let Some(RequestBody::Dynamic(body)) = &host.request(handle).unwrap().body else {
            unreachable!("expected a dynamic body");
        };
        let [portage_host::Component::Dynamic(dynamic)] = body.components() else {
            unreachable!("expected a single dynamic component");
        };
        assert_eq!(dynamic.type_id, identifiers::BODY_FORM_KEY_VALUE);
    }

    #[test]
    fn test_json_body_is_verbatim() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.body = Body::Json {
            text: "{\"test\": true}".to_string(),
        };

        let handle = import_one(&mut host, &request);
        assert_eq!(
            host.request(handle).unwrap().body,
            Some(RequestBody::Text("{\"test\": true}".to_string()))
        );
    }

    #[test]
    fn test_plain_body_is_translated() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.body = Body::Plain {
            value: Value::text("simple body"),
        };

        let handle = import_one(&mut host, &request);
        let Some(RequestBody::Dynamic(body)) = &host.request(handle).unwrap().body else {
            unreachable!("expected a dynamic body");
        };
        assert_eq!(body.as_literal(), Some("simple body"));
    }

    #[test]
    fn test_schema_body_appends_to_description() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());
        let parent = session.host.create_request_group(Some("parent"));

        let mut request = Request::with_url("http://fakeurl.com");
        request.description = Some("Lists users.".to_string());
        request.body = Body::Schema {
            reference: SchemaReference::new("#/definitions/User"),
        };
        let schema = json!({"definitions": {"User": 12}});

        let handle = session.import_request(None, parent, &request, Some(&schema));

        assert_eq!(
            host.request(handle).unwrap().description.as_deref(),
            Some("Lists users.\n\n### Schema ###\n\n12")
        );
    }

    #[test]
    fn test_schema_body_without_description() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());
        let parent = session.host.create_request_group(Some("parent"));

        let mut request = Request::with_url("http://fakeurl.com");
        request.body = Body::Schema {
            reference: SchemaReference::new("#/definitions/User"),
        };
        let schema = json!({"definitions": {"User": 12}});

        let handle = session.import_request(None, parent, &request, Some(&schema));
        assert_eq!(
            host.request(handle).unwrap().description.as_deref(),
            Some("### Schema ###\n\n12")
        );
    }

    #[test]
    fn test_unknown_body_kind_warns_and_leaves_request_untouched() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());
        let parent = session.host.create_request_group(Some("parent"));

        let mut request = Request::with_url("http://fakeurl.com");
        request.body = Body::Other {
            kind: "graphql".to_string(),
        };

        let handle = session.import_request(None, parent, &request, None);
        assert_eq!(session.warnings().len(), 1);
        assert!(session.warnings()[0].message.contains("graphql"));
        assert!(host.request(handle).unwrap().body.is_none());
    }

    #[test]
    fn test_timeout_is_converted_to_milliseconds() {
        let mut host = StubHost::new();
        let mut request = Request::with_url("http://fakeurl.com");
        request.timeout_secs = Some(30);

        let handle = import_one(&mut host, &request);
        assert_eq!(host.request(handle).unwrap().timeout_ms, Some(30_000));
    }

    #[test]
    fn test_order_is_set_when_supplied() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());
        let parent = session.host.create_request_group(Some("parent"));

        let request = Request::with_url("http://fakeurl.com");
        let handle = session.import_request(Some(0), parent, &request, None);
        assert_eq!(host.request(handle).unwrap().order, Some(0));
    }
}
