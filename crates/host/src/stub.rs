//! In-memory host double
//!
//! [`StubHost`] implements [`HostContext`] over plain maps and records how
//! often each operation ran. Importer tests drive it exactly like a real
//! extension bridge and then inspect the resulting object graph.

use indexmap::IndexMap;

use crate::context::{HostContext, RequestBody};
use crate::handles::{DomainRef, EnvironmentRef, GroupRef, RequestRef, VariableRef};
use crate::values::DynamicString;

/// A request as the stub host stores it.
#[derive(Debug, Clone, Default)]
pub struct StubRequest {
    /// Name passed at creation.
    pub name: Option<String>,
    /// Method passed at creation.
    pub method: Option<String>,
    /// URL passed at creation.
    pub url: DynamicString,
    /// Headers in set order.
    pub headers: Vec<(DynamicString, DynamicString)>,
    /// Current description.
    pub description: Option<String>,
    /// Current body.
    pub body: Option<RequestBody>,
    /// Timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Explicit ordering hint.
    pub order: Option<usize>,
}

/// A group as the stub host stores it.
#[derive(Debug, Clone, Default)]
pub struct StubGroup {
    /// Name passed at creation.
    pub name: Option<String>,
    /// Children in append order.
    pub children: Vec<StubChild>,
    /// Explicit ordering hint.
    pub order: Option<usize>,
}

/// One child of a stub group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubChild {
    /// A request child.
    Request(RequestRef),
    /// A group child.
    Group(GroupRef),
}

/// An environment domain as the stub host stores it.
#[derive(Debug, Clone, Default)]
pub struct StubDomain {
    /// Domain name.
    pub name: String,
    environments: IndexMap<EnvironmentRef, StubEnvironment>,
}

impl StubDomain {
    /// The environments of this domain, in creation order.
    pub fn environments(&self) -> impl Iterator<Item = (EnvironmentRef, &StubEnvironment)> {
        self.environments.iter().map(|(handle, env)| (*handle, env))
    }

    /// Looks up a variable by name across the domain's environments.
    #[must_use]
    pub fn variable_by_name(&self, name: &str) -> Option<&StubVariable> {
        self.environments
            .values()
            .find_map(|env| env.variables.get(name))
    }
}

/// An environment as the stub host stores it.
#[derive(Debug, Clone, Default)]
pub struct StubEnvironment {
    /// Environment name.
    pub name: String,
    /// Variables in assignment order.
    pub variables: IndexMap<String, StubVariable>,
}

/// A variable as the stub host stores it.
#[derive(Debug, Clone)]
pub struct StubVariable {
    /// Host-assigned identifier.
    pub id: VariableRef,
    /// Current value.
    pub value: String,
}

/// Per-operation call counters.
#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub struct CallLog {
    pub create_request: usize,
    pub create_request_group: usize,
    pub append_request: usize,
    pub append_group: usize,
    pub set_request_header: usize,
    pub set_request_body: usize,
    pub create_environment_domain: usize,
    pub create_environment: usize,
    pub set_variable_values: usize,
}

/// The in-memory host double.
#[derive(Debug, Default)]
pub struct StubHost {
    requests: IndexMap<RequestRef, StubRequest>,
    groups: IndexMap<GroupRef, StubGroup>,
    domains: IndexMap<DomainRef, StubDomain>,
    /// Operation counters.
    pub calls: CallLog,
}

impl StubHost {
    /// Creates an empty stub host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored request.
    #[must_use]
    pub fn request(&self, handle: RequestRef) -> Option<&StubRequest> {
        self.requests.get(&handle)
    }

    /// Looks up a stored group.
    #[must_use]
    pub fn group(&self, handle: GroupRef) -> Option<&StubGroup> {
        self.groups.get(&handle)
    }

    /// All requests in creation order.
    pub fn requests(&self) -> impl Iterator<Item = (RequestRef, &StubRequest)> {
        self.requests.iter().map(|(handle, req)| (*handle, req))
    }

    /// All groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupRef, &StubGroup)> {
        self.groups.iter().map(|(handle, group)| (*handle, group))
    }

    /// Groups that were never appended under another group.
    #[must_use]
    pub fn root_groups(&self) -> Vec<GroupRef> {
        self.groups
            .keys()
            .filter(|handle| {
                !self.groups.values().any(|group| {
                    group
                        .children
                        .iter()
                        .any(|child| *child == StubChild::Group(**handle))
                })
            })
            .copied()
            .collect()
    }

    /// Looks up an environment domain by name.
    #[must_use]
    pub fn domain_by_name(&self, name: &str) -> Option<&StubDomain> {
        self.domains.values().find(|domain| domain.name == name)
    }
}

impl HostContext for StubHost {
    fn create_request(
        &mut self,
        name: Option<&str>,
        method: Option<&str>,
        url: DynamicString,
    ) -> RequestRef {
        self.calls.create_request += 1;
        let handle = RequestRef::new();
        self.requests.insert(
            handle,
            StubRequest {
                name: name.map(ToString::to_string),
                method: method.map(ToString::to_string),
                url,
                ..StubRequest::default()
            },
        );
        handle
    }

    fn create_request_group(&mut self, name: Option<&str>) -> GroupRef {
        self.calls.create_request_group += 1;
        let handle = GroupRef::new();
        self.groups.insert(
            handle,
            StubGroup {
                name: name.map(ToString::to_string),
                ..StubGroup::default()
            },
        );
        handle
    }

    fn append_request(&mut self, parent: GroupRef, child: RequestRef) {
        self.calls.append_request += 1;
        if let Some(group) = self.groups.get_mut(&parent) {
            group.children.push(StubChild::Request(child));
        }
    }

    fn append_group(&mut self, parent: GroupRef, child: GroupRef) {
        self.calls.append_group += 1;
        if let Some(group) = self.groups.get_mut(&parent) {
            group.children.push(StubChild::Group(child));
        }
    }

    fn group_name(&self, group: GroupRef) -> Option<String> {
        self.groups.get(&group).and_then(|g| g.name.clone())
    }

    fn set_request_header(
        &mut self,
        request: RequestRef,
        name: DynamicString,
        value: DynamicString,
    ) {
        self.calls.set_request_header += 1;
        if let Some(req) = self.requests.get_mut(&request) {
            req.headers.push((name, value));
        }
    }

    fn request_description(&self, request: RequestRef) -> Option<String> {
        self.requests
            .get(&request)
            .and_then(|req| req.description.clone())
    }

    fn set_request_description(&mut self, request: RequestRef, description: Option<String>) {
        if let Some(req) = self.requests.get_mut(&request) {
            req.description = description;
        }
    }

    fn set_request_body(&mut self, request: RequestRef, body: RequestBody) {
        self.calls.set_request_body += 1;
        if let Some(req) = self.requests.get_mut(&request) {
            req.body = Some(body);
        }
    }

    fn set_request_timeout(&mut self, request: RequestRef, millis: u64) {
        if let Some(req) = self.requests.get_mut(&request) {
            req.timeout_ms = Some(millis);
        }
    }

    fn set_request_order(&mut self, request: RequestRef, order: usize) {
        if let Some(req) = self.requests.get_mut(&request) {
            req.order = Some(order);
        }
    }

    fn set_group_order(&mut self, group: GroupRef, order: usize) {
        if let Some(g) = self.groups.get_mut(&group) {
            g.order = Some(order);
        }
    }

    fn environment_domain_by_name(&self, name: &str) -> Option<DomainRef> {
        self.domains
            .iter()
            .find(|(_, domain)| domain.name == name)
            .map(|(handle, _)| *handle)
    }

    fn create_environment_domain(&mut self, name: &str) -> DomainRef {
        self.calls.create_environment_domain += 1;
        let handle = DomainRef::new();
        self.domains.insert(
            handle,
            StubDomain {
                name: name.to_string(),
                environments: IndexMap::new(),
            },
        );
        handle
    }

    fn environment_by_name(&self, domain: DomainRef, name: &str) -> Option<EnvironmentRef> {
        self.domains.get(&domain).and_then(|d| {
            d.environments
                .iter()
                .find(|(_, env)| env.name == name)
                .map(|(handle, _)| *handle)
        })
    }

    fn create_environment(&mut self, domain: DomainRef, name: &str) -> EnvironmentRef {
        self.calls.create_environment += 1;
        let handle = EnvironmentRef::new();
        if let Some(d) = self.domains.get_mut(&domain) {
            d.environments.insert(
                handle,
                StubEnvironment {
                    name: name.to_string(),
                    variables: IndexMap::new(),
                },
            );
        }
        handle
    }

    fn variable_by_name(&self, domain: DomainRef, name: &str) -> Option<VariableRef> {
        self.domains
            .get(&domain)
            .and_then(|d| d.variable_by_name(name))
            .map(|variable| variable.id)
    }

    fn set_variable_values(
        &mut self,
        environment: EnvironmentRef,
        values: &IndexMap<String, String>,
    ) {
        self.calls.set_variable_values += 1;
        let Some(env) = self
            .domains
            .values_mut()
            .find_map(|d| d.environments.get_mut(&environment))
        else {
            return;
        };
        for (name, value) in values {
            if let Some(existing) = env.variables.get_mut(name) {
                existing.value.clone_from(value);
            } else {
                env.variables.insert(
                    name.clone(),
                    StubVariable {
                        id: VariableRef::new(),
                        value: value.clone(),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_records_arguments() {
        let mut host = StubHost::new();
        let handle = host.create_request(None, None, DynamicString::from("http://fakeurl.com"));

        assert_eq!(host.calls.create_request, 1);
        let request = host.request(handle).unwrap();
        assert!(request.name.is_none());
        assert!(request.method.is_none());
        assert_eq!(request.url.as_literal(), Some("http://fakeurl.com"));
    }

    #[test]
    fn test_children_keep_append_order() {
        let mut host = StubHost::new();
        let parent = host.create_request_group(Some("root"));
        let first = host.create_request(Some("a"), None, DynamicString::new());
        let sub = host.create_request_group(Some("sub"));
        let second = host.create_request(Some("b"), None, DynamicString::new());

        host.append_request(parent, first);
        host.append_group(parent, sub);
        host.append_request(parent, second);

        let children = &host.group(parent).unwrap().children;
        assert_eq!(
            children,
            &vec![
                StubChild::Request(first),
                StubChild::Group(sub),
                StubChild::Request(second),
            ]
        );
        assert_eq!(host.root_groups(), vec![parent]);
    }

    #[test]
    fn test_variables_keep_their_id_across_reassignment() {
        let mut host = StubHost::new();
        let domain = host.create_environment_domain("Imported Environments");
        let env = host.create_environment(domain, "Default Environment");

        let mut values = IndexMap::new();
        values.insert("token".to_string(), String::new());
        host.set_variable_values(env, &values);
        let first = host.variable_by_name(domain, "token").unwrap();

        values.insert("token".to_string(), "secret".to_string());
        host.set_variable_values(env, &values);
        let second = host.variable_by_name(domain, "token").unwrap();

        assert_eq!(first, second);
        assert_eq!(
            host.domain_by_name("Imported Environments")
                .unwrap()
                .variable_by_name("token")
                .unwrap()
                .value,
            "secret"
        );
    }
}
