// Copyright (c) 2025 Alanui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the route trie.
//!
//! Nodes live in an arena owned by the trie and are addressed by `NodeId`
//! handles. Parent links are plain indices kept for diagnostics only; they
//! take no part in ownership or lookup.

use fnv::FnvHashMap;

/// Handle to a node in the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

/// A node in the route trie.
///
/// Each node matches exactly one path segment: by exact text for literal
/// nodes, or any segment value for parametrized nodes. Terminal nodes carry
/// the full registered pattern and its payload.
#[derive(Debug)]
pub struct RouteNode<T> {
    /// Exact static text this node matches. Empty for the root and for
    /// parametrized nodes.
    pub segment: String,

    /// Map of literal segment text to child nodes.
    pub children: FnvHashMap<String, NodeId>,

    /// The single child that matches any segment value when no literal
    /// child does.
    pub parametrized: Option<NodeId>,

    /// Whether this node was reached via a parameter segment.
    pub is_parametrized: bool,

    /// Parameter names (sigil kept) accumulated from the root to this node.
    /// Only meaningful on terminal nodes.
    pub param_names: Vec<String>,

    /// The full original pattern if a route terminates here. Doubles as
    /// "is this node a valid endpoint".
    pub pattern: Option<String>,

    /// Payload registered with the pattern. Present exactly when `pattern`
    /// is present.
    pub payload: Option<T>,

    /// Back-reference to the parent node, diagnostics only.
    pub parent: Option<NodeId>,
}

impl<T> RouteNode<T> {
    /// Creates the root node of a trie.
    pub fn root() -> Self {
        Self::empty(String::new(), false, None)
    }

    /// Creates a literal child node for the given segment text.
    pub fn literal(segment: impl Into<String>, parent: NodeId) -> Self {
        Self::empty(segment.into(), false, Some(parent))
    }

    /// Creates a parametrized child node.
    pub fn parametrized(parent: NodeId) -> Self {
        Self::empty(String::new(), true, Some(parent))
    }

    fn empty(segment: String, is_parametrized: bool, parent: Option<NodeId>) -> Self {
        Self {
            segment,
            children: FnvHashMap::default(),
            parametrized: None,
            is_parametrized,
            param_names: Vec::new(),
            pattern: None,
            payload: None,
            parent,
        }
    }

    /// Whether a route terminates at this node.
    pub fn is_terminal(&self) -> bool {
        self.pattern.is_some()
    }
}
