//! Groups and the request tree

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::request::Request;

/// A named or anonymous container of requests and nested groups.
///
/// Children are an ordered mapping; the child key only fixes iteration
/// order, the importer never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name; anonymous groups collapse into their parent on import.
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered children, keyed by an upstream-chosen label (often a path).
    #[serde(default)]
    pub children: IndexMap<String, TreeNode>,
}

impl Group {
    /// Creates an empty named group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            children: IndexMap::new(),
        }
    }

    /// Inserts a child under the given key, keeping insertion order.
    pub fn insert_child(&mut self, key: impl Into<String>, child: impl Into<TreeNode>) {
        self.children.insert(key.into(), child.into());
    }

    /// Total number of nodes in this subtree, the group itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(|child| match child {
                TreeNode::Request(_) => 1,
                TreeNode::Group(group) => group.node_count(),
            })
            .sum::<usize>()
    }

    /// Number of requests in this subtree.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.children
            .values()
            .map(|child| match child {
                TreeNode::Request(_) => 1,
                TreeNode::Group(group) => group.request_count(),
            })
            .sum()
    }
}

/// A node of the request tree: either a nested group or a request leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// A nested group.
    Group(Group),
    /// A request leaf.
    Request(Request),
}

impl From<Group> for TreeNode {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Request> for TreeNode {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_child_order_is_insertion_order() {
        let mut group = Group::default();
        group.insert_child("/test", Request::with_url("http://a"));
        group.insert_child("/path", Request::with_url("http://b"));
        group.insert_child("/again", Request::with_url("http://c"));

        let keys: Vec<&str> = group.children.keys().map(String::as_str).collect();
        assert_eq!(keys, ["/test", "/path", "/again"]);
    }

    #[test]
    fn test_node_count_is_recursive() {
        let mut sub = Group::new("sub");
        sub.insert_child("/leaf", Request::with_url("http://a"));

        let mut root = Group::default();
        root.insert_child("/test", Request::with_url(Value::text("http://b")));
        root.insert_child("sub", sub);

        // root + request + sub + request
        assert_eq!(root.node_count(), 4);
        assert_eq!(root.request_count(), 2);
    }
}
