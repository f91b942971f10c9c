//! Portage Host - Extension-API surface of the host application
//!
//! This crate defines the value primitives the host evaluates
//! (`DynamicString`, `DynamicValue`), typed handles for the objects the host
//! owns, and the [`HostContext`] trait through which the importer drives the
//! host. A real extension bridge implements the trait; [`stub::StubHost`] is
//! the in-memory double used by tests.

pub mod context;
pub mod handles;
pub mod identifiers;
pub mod stub;
pub mod values;

pub use context::{HostContext, RequestBody};
pub use handles::{DomainRef, EnvironmentRef, GroupRef, RequestRef, VariableRef};
pub use values::{AttributeValue, Component, DynamicString, DynamicValue, KeyValuePair};
