//! The host context trait

use indexmap::IndexMap;

use crate::handles::{DomainRef, EnvironmentRef, GroupRef, RequestRef, VariableRef};
use crate::values::DynamicString;

/// What the host accepts as a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A dynamic string evaluated at send time.
    Dynamic(DynamicString),
    /// Verbatim text, stored untouched.
    Text(String),
}

/// The host application's extension object-model, seen through handles.
///
/// All mutations are additive: objects are created, appended and assigned,
/// never removed. Operations on a handle the implementation does not know
/// are ignored. Lookups never create; creation never looks up — get-or-create
/// policies live in the caller.
pub trait HostContext {
    /// Creates a request. `name` and `method` may be absent; the URL is
    /// always a dynamic string (possibly empty).
    fn create_request(
        &mut self,
        name: Option<&str>,
        method: Option<&str>,
        url: DynamicString,
    ) -> RequestRef;

    /// Creates a request group.
    fn create_request_group(&mut self, name: Option<&str>) -> GroupRef;

    /// Appends a request as the last child of a group.
    fn append_request(&mut self, parent: GroupRef, child: RequestRef);

    /// Appends a group as the last child of another group.
    fn append_group(&mut self, parent: GroupRef, child: GroupRef);

    /// The name a group was created with.
    fn group_name(&self, group: GroupRef) -> Option<String>;

    /// Sets a header; both sides are dynamic strings.
    fn set_request_header(&mut self, request: RequestRef, name: DynamicString, value: DynamicString);

    /// Current description of a request.
    fn request_description(&self, request: RequestRef) -> Option<String>;

    /// Replaces the description of a request.
    fn set_request_description(&mut self, request: RequestRef, description: Option<String>);

    /// Sets the request body.
    fn set_request_body(&mut self, request: RequestRef, body: RequestBody);

    /// Sets the request timeout in milliseconds.
    fn set_request_timeout(&mut self, request: RequestRef, millis: u64);

    /// Sets the explicit ordering hint of a request.
    fn set_request_order(&mut self, request: RequestRef, order: usize);

    /// Sets the explicit ordering hint of a group.
    fn set_group_order(&mut self, group: GroupRef, order: usize);

    /// Looks up an environment domain by name.
    fn environment_domain_by_name(&self, name: &str) -> Option<DomainRef>;

    /// Creates an environment domain.
    fn create_environment_domain(&mut self, name: &str) -> DomainRef;

    /// Looks up an environment by name within a domain.
    fn environment_by_name(&self, domain: DomainRef, name: &str) -> Option<EnvironmentRef>;

    /// Creates an environment within a domain.
    fn create_environment(&mut self, domain: DomainRef, name: &str) -> EnvironmentRef;

    /// Looks up a variable by name anywhere within a domain.
    fn variable_by_name(&self, domain: DomainRef, name: &str) -> Option<VariableRef>;

    /// Bulk-assigns variable values in an environment, creating variables
    /// that do not exist yet.
    fn set_variable_values(&mut self, environment: EnvironmentRef, values: &IndexMap<String, String>);
}
