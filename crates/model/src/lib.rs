//! Portage Model - Request-description tree
//!
//! This crate defines the immutable request-description model that format
//! importers produce and the tree importer consumes. All types here are pure
//! data with no I/O dependencies; the importer never mutates them.

pub mod auth;
pub mod body;
pub mod context;
pub mod group;
pub mod request;
pub mod schema;
pub mod value;

pub use auth::{ApiKeyLocation, Auth, OAuth2Flow};
pub use body::Body;
pub use context::{EnvironmentDef, RequestContext};
pub use group::{Group, TreeNode};
pub use request::{KeyValue, Request};
pub use schema::SchemaReference;
pub use value::{EnvironmentReference, FileReference, ReferenceComponent, Value};
