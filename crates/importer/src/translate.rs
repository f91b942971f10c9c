//! Value translation
//!
//! Turns description values into host dynamic strings: control characters
//! become escape-sequence dynamic values, environment references become
//! variable lookups (creating the variable on first sight), file references
//! become file-content dynamic values.

use portage_host::{Component, DynamicString, DynamicValue, HostContext, identifiers};
use portage_model::{ApiKeyLocation, Auth, EnvironmentReference, KeyValue, ReferenceComponent, Value};

use crate::session::ImportSession;
use crate::warning::ImportWarning;

impl<C: HostContext> ImportSession<'_, C> {
    /// Translates a description value into a host dynamic string.
    ///
    /// `None` yields `None`, or an empty dynamic string when
    /// `default_to_empty` is set; a present-but-empty text yields an empty
    /// dynamic string either way. With `resolve_file_refs`, a file reference
    /// short-circuits into a single file-content dynamic value.
    pub fn to_dynamic_string(
        &mut self,
        value: Option<&Value>,
        default_to_empty: bool,
        resolve_file_refs: bool,
    ) -> Option<DynamicString> {
        let Some(value) = value else {
            return default_to_empty.then(DynamicString::new);
        };

        let raw = match value {
            Value::File(_) => {
                // Without resolution there is nothing representable to emit.
                if resolve_file_refs {
                    return Some(DynamicString::from(DynamicValue::new(
                        identifiers::FILE_CONTENT,
                    )));
                }
                return Some(DynamicString::new());
            }
            Value::Reference(reference) => self.cast_reference(reference),
            Value::Text(text) => vec![Component::Literal(text.clone())],
        };

        let mut components = Vec::new();
        for component in raw {
            match component {
                Component::Literal(text) => split_control_runs(&text, &mut components),
                dynamic @ Component::Dynamic(_) => components.push(dynamic),
            }
        }
        Some(DynamicString::from_components(components))
    }

    /// Resolves every resolvable component of a reference, in order.
    fn cast_reference(&mut self, reference: &EnvironmentReference) -> Vec<Component> {
        reference
            .components
            .iter()
            .filter_map(|component| self.extract_reference_component(component))
            .collect()
    }

    /// Resolves one reference component.
    ///
    /// Literals pass through. A nested reference resolves only when its name
    /// is a single literal — the host has no notion of a variable whose name
    /// is itself computed — and then becomes a variable-lookup dynamic
    /// value, creating the variable on first sight.
    pub fn extract_reference_component(
        &mut self,
        component: &ReferenceComponent,
    ) -> Option<Component> {
        match component {
            ReferenceComponent::Literal(text) => Some(Component::Literal(text.clone())),
            ReferenceComponent::Reference(reference) => {
                let Some(name) = reference.single_literal() else {
                    tracing::debug!("skipping reference with a computed name");
                    self.warn(ImportWarning::info(
                        "reference",
                        "a reference whose name is itself computed cannot be represented and was omitted",
                    ));
                    return None;
                };
                let variable = self.environment_variable(name)?;
                Some(Component::Dynamic(
                    DynamicValue::new(identifiers::ENVIRONMENT_VARIABLE)
                        .with_attribute("environmentVariable", variable.as_uuid().to_string()),
                ))
            }
        }
    }

    /// Builds the request URL: the translated base plus explicit query
    /// parameters and API keys in query position, percent-encoded pairwise.
    pub fn generate_url(
        &mut self,
        url: Option<&Value>,
        queries: &[KeyValue],
        auths: &[Auth],
    ) -> DynamicString {
        let mut result = self.to_dynamic_string(url, true, true).unwrap_or_default();

        let mut params = queries.to_vec();
        params.extend(query_params_from_auths(auths));
        if params.is_empty() {
            return result;
        }

        result.push_literal("?");
        for (index, param) in params.iter().enumerate() {
            if index > 0 {
                result.push_literal("&");
            }
            let key = self
                .to_dynamic_string(param.key.as_ref(), true, true)
                .unwrap_or_default();
            push_encoded(&mut result, key);
            result.push_literal("=");
            let value = self
                .to_dynamic_string(param.value.as_ref(), true, true)
                .unwrap_or_default();
            push_encoded(&mut result, value);
        }
        result
    }
}

/// API keys in query position become `name=name` pairs on the URL.
fn query_params_from_auths(auths: &[Auth]) -> Vec<KeyValue> {
    auths
        .iter()
        .filter_map(|auth| match auth {
            Auth::ApiKey {
                name,
                location: ApiKeyLocation::Query,
                ..
            } => {
                let name = name.clone().unwrap_or_default();
                Some(KeyValue::new(Value::Text(name.clone()), Value::Text(name)))
            }
            _ => None,
        })
        .collect()
}

/// Appends a translated component sequence, percent-encoding the literal
/// parts; dynamic parts pass through untouched.
fn push_encoded(target: &mut DynamicString, source: DynamicString) {
    for component in source.into_components() {
        match component {
            Component::Literal(text) => {
                target.push_literal(urlencoding::encode(&text).into_owned());
            }
            dynamic @ Component::Dynamic(_) => target.push(dynamic),
        }
    }
}

/// Splits text into maximal printable runs (kept literal) and control runs
/// (each becoming one escape-sequence dynamic value), in encounter order.
fn split_control_runs(text: &str, out: &mut Vec<Component>) {
    let mut literal = String::new();
    let mut control = String::new();
    for ch in text.chars() {
        if is_control(ch) {
            if !literal.is_empty() {
                out.push(Component::Literal(std::mem::take(&mut literal)));
            }
            control.push(ch);
        } else {
            if !control.is_empty() {
                let run = std::mem::take(&mut control);
                out.push(Component::Dynamic(escape_sequence_value(&run)));
            }
            literal.push(ch);
        }
    }
    if !literal.is_empty() {
        out.push(Component::Literal(literal));
    }
    if !control.is_empty() {
        out.push(Component::Dynamic(escape_sequence_value(&control)));
    }
}

const fn is_control(ch: char) -> bool {
    (ch as u32) < 0x20
}

/// Wraps a control-character run in an escape-sequence dynamic value.
fn escape_sequence_value(sequence: &str) -> DynamicValue {
    DynamicValue::new(identifiers::ESCAPE_SEQUENCE)
        .with_attribute("escapeSequence", escape_char_sequence(sequence))
}

/// Escapes every character of a run: `\n`, `\r` and `\t` keep their
/// two-character escapes, everything else becomes `\xHH`.
fn escape_char_sequence(sequence: &str) -> String {
    sequence
        .chars()
        .map(|ch| match ch {
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            other => format!("\\x{}", char_to_hex(other)),
        })
        .collect()
}

/// Lowercase hex of a character's code point, zero-padded to two digits.
fn char_to_hex(ch: char) -> String {
    format!("{:02x}", ch as u32)
}
