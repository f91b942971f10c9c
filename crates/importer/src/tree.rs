//! Group-tree traversal
//!
//! Depth-first, pre-order walk of a description tree that mirrors it into
//! host groups. The walk carries the current host group as explicit state:
//! the node function decides whether a description group materializes as a
//! new host group or collapses into its parent.

use portage_host::{GroupRef, HostContext};
use portage_model::{Group, Request, RequestContext, TreeNode};

use crate::error::ImportError;
use crate::importer::ImportItem;
use crate::session::ImportSession;
use crate::warning::ImportWarning;

/// Walks `group` depth-first in child order, calling `node` once per group
/// (with the group's name and the current host parent) and `leaf` once per
/// request (with the host group `node` resolved). Returns the flattened leaf
/// results in traversal order.
///
/// `node` returns the host group the subtree belongs to — either a freshly
/// created child of the parent it was handed, or that parent itself when the
/// description level adds nothing.
pub fn apply_over_group_tree<X, T, L, N>(
    cx: &mut X,
    group: &Group,
    host_group: GroupRef,
    depth: usize,
    leaf: &mut L,
    node: &mut N,
) -> Vec<T>
where
    L: FnMut(&mut X, &Request, GroupRef) -> T,
    N: FnMut(&mut X, &str, GroupRef, usize) -> GroupRef,
{
    let current = node(cx, group.name.as_deref().unwrap_or(""), host_group, depth);
    let mut results = Vec::new();
    for child in group.children.values() {
        match child {
            TreeNode::Request(request) => results.push(leaf(cx, request, current)),
            TreeNode::Group(sub) => {
                results.extend(apply_over_group_tree(
                    cx,
                    sub,
                    current,
                    depth + 1,
                    leaf,
                    node,
                ));
            }
        }
    }
    results
}

impl<C: HostContext> ImportSession<'_, C> {
    /// Imports one request context: materializes its environments, creates
    /// the root host group, then mirrors the tree underneath it.
    ///
    /// `item` supplies fallback names for an anonymous root group. `order`
    /// is set on the root group and every imported request. `parent`, when
    /// given, receives the root group as a child.
    pub fn import_request_context(
        &mut self,
        context: &RequestContext,
        item: Option<&ImportItem>,
        order: Option<usize>,
        parent: Option<GroupRef>,
    ) -> Result<(), ImportError> {
        let count = context.group.node_count();
        if count > self.config.max_items {
            return Err(ImportError::TooManyItems {
                count,
                max: self.config.max_items,
            });
        }

        if !context.environments.is_empty() {
            self.import_environments(&context.environments);
        }

        if context.group.children.is_empty() {
            tracing::debug!("request tree has no children, nothing to import");
            return Ok(());
        }

        let name = context
            .group
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| item.and_then(|i| i.file_name.clone()))
            .or_else(|| item.and_then(|i| i.url.clone()));

        let root = self.host.create_request_group(name.as_deref());
        self.groups_imported += 1;
        if let Some(parent) = parent {
            self.host.append_group(parent, root);
        }
        if let Some(order) = order {
            self.host.set_group_order(root, order);
        }

        let schema = context.schema.as_ref();
        let mut leaf = |session: &mut Self, request: &Request, group: GroupRef| {
            session.import_request(order, group, request, schema);
        };
        let mut node = |session: &mut Self, name: &str, parent: GroupRef, depth: usize| {
            session.resolve_group_node(name, parent, depth)
        };
        apply_over_group_tree(self, &context.group, root, 0, &mut leaf, &mut node);

        tracing::debug!(name = name.as_deref(), "imported request context");
        Ok(())
    }

    /// Resolves a description group to a host group: empty names and names
    /// matching the parent collapse into the parent, anything else becomes a
    /// new child group.
    fn resolve_group_node(&mut self, name: &str, parent: GroupRef, depth: usize) -> GroupRef {
        if depth > self.config.max_depth {
            self.warn(ImportWarning::warning(
                if name.is_empty() { "<anonymous group>" } else { name }.to_string(),
                format!(
                    "group nesting exceeds the maximum depth of {}",
                    self.config.max_depth
                ),
            ));
        }

        let parent_name = self.host.group_name(parent);
        if name.is_empty() || parent_name.as_deref() == Some(name) {
            return parent;
        }

        let group = self.host.create_request_group(Some(name));
        self.groups_imported += 1;
        self.host.append_group(parent, group);
        group
    }
}
