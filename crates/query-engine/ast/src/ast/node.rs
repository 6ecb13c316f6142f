//! Type definition of the planner AST node.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named tree node: an insertion-ordered attribute map and an ordered
/// child list. Built bottom-up during translation; each child is owned by
/// exactly one parent and nothing is mutated after the parent takes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Node {
        Node {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}
