//! Host type identifiers for dynamic values
//!
//! The identifier strings are defined by the host application; the importer
//! only quotes them.

/// Escape sequence (attribute `escapeSequence`).
pub const ESCAPE_SEQUENCE: &str = "EscapeSequenceDynamicValue";

/// Environment-variable lookup (attribute `environmentVariable`).
pub const ENVIRONMENT_VARIABLE: &str = "EnvironmentVariableDynamicValue";

/// Contents of an external file.
pub const FILE_CONTENT: &str = "FileContentDynamicValue";

/// HTTP Basic `Authorization` header.
pub const BASIC_AUTH: &str = "BasicAuthDynamicValue";

/// HTTP Digest `Authorization` header.
pub const DIGEST_AUTH: &str = "DigestAuthDynamicValue";

/// OAuth 1 signed `Authorization` header.
pub const OAUTH1_HEADER: &str = "OAuth1HeaderDynamicValue";

/// OAuth 2 token.
pub const OAUTH2: &str = "OAuth2DynamicValue";

/// AWS Signature v4.
pub const AWS_SIGNATURE_4: &str = "AWSSignature4DynamicValue";

/// Hawk message authentication.
pub const HAWK: &str = "HawkDynamicValue";

/// Multipart form-data body (attribute `keyValues`).
pub const BODY_MULTIPART_FORM_DATA: &str = "BodyMultipartFormDataDynamicValue";

/// URL-encoded form body (attribute `keyValues`).
pub const BODY_FORM_KEY_VALUE: &str = "BodyFormKeyValueDynamicValue";
