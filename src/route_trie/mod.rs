// Copyright (c) 2025 Alanui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Route Trie Implementation
//!
//! This module provides a trie-based data structure for registering
//! slash-delimited path patterns and resolving incoming paths to their
//! payloads while capturing named `:param` segment values.
//!
//! # Features
//!
//! - Two operations only: `add` to register a route, `lookup` to resolve one
//! - Named parameter segments (`:id`) matching any single path segment
//! - Literal segments always win over parametrized ones at each position,
//!   greedy and without backtracking
//! - Payload type is a generic parameter, stored and returned verbatim
//! - No internal locking: `add` is `&mut self`, `lookup` is `&self`
//!
//! # Example
//!
//! ```
//! use alanui_lib::route_trie::RouteTrie;
//!
//! let mut trie = RouteTrie::new();
//! trie.add("users/:id/posts", "posts-handler").unwrap();
//!
//! let (payload, params) = trie.lookup("users/42/posts").unwrap();
//! assert_eq!(*payload, "posts-handler");
//! assert_eq!(params[":id"], "42");
//! ```
//!
//! # Matching policy
//!
//! Resolution walks the trie one segment at a time, trying an exact literal
//! child first and the parametrized child second. The choice is never
//! revisited: if a literal branch dead-ends later, the trie does not back
//! off and retry the parametrized branch. Which pattern wins in ambiguous
//! registrations is part of the contract.

mod error;
mod node;

use std::collections::HashMap;

pub use error::RouteTrieError;
use node::{NodeId, RouteNode};

use tracing::{debug, trace};

/// Result type for route trie operations.
pub type RouteTrieResult<T> = Result<T, RouteTrieError>;

/// Parameter segment sigil. Kept as part of stored parameter names.
const PARAM_SIGIL: char = ':';

/// Index of the root node in the arena.
const ROOT: NodeId = NodeId(0);

/// A route-matching trie.
///
/// Each node matches exactly one path segment. Nodes are created lazily by
/// [`add`](Self::add) and never deleted; the trie grows monotonically for
/// its lifetime. Nodes live in an arena owned by the trie and reference each
/// other by index, so the structure is a strict ownership tree with parent
/// back-references kept only for diagnostics.
#[derive(Debug)]
pub struct RouteTrie<T> {
    /// Node arena. `NodeId` values index into this vector; the root is at
    /// index zero.
    nodes: Vec<RouteNode<T>>,

    /// Number of registered routes.
    routes: usize,
}

impl<T> RouteTrie<T> {
    /// Creates a new empty `RouteTrie`.
    pub fn new() -> Self {
        Self {
            nodes: vec![RouteNode::root()],
            routes: 0,
        }
    }

    /// Registers a pattern with its payload.
    ///
    /// The pattern is split on `/`; a segment starting with `:` is a
    /// parameter segment matching any value at lookup time. Empty segments
    /// (leading, trailing, or doubled slashes) are ordinary literal
    /// empty-string segments.
    ///
    /// Re-adding the exact same pattern replaces only the payload. Two
    /// lexically different patterns terminating at the same trie position
    /// are rejected as ambiguous.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to register.
    /// * `payload` - The value returned when a lookup resolves to this route.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The route was registered or its payload replaced.
    /// * `Err(RouteTrieError::PathConflict)` - A different pattern is
    ///   already registered at the same trie position.
    pub fn add(&mut self, pattern: impl Into<String>, payload: T) -> RouteTrieResult<()> {
        let pattern = pattern.into();
        let mut params = Vec::new();

        let mut current = ROOT;
        for segment in pattern.split('/') {
            current = if segment.starts_with(PARAM_SIGIL) {
                params.push(segment.to_owned());
                self.parametrized_child(current)
            } else {
                self.literal_child(current, segment)
            };
        }

        if let Some(existing) = self.nodes[current.0].pattern.clone() {
            if existing != pattern {
                debug!(
                    position = %self.position_of(current),
                    "conflicting registration rejected"
                );
                return Err(RouteTrieError::PathConflict { pattern, existing });
            }
            // Identical pattern re-added: replace the payload only.
            self.nodes[current.0].payload = Some(payload);
            return Ok(());
        }

        debug!(pattern = %pattern, params = params.len(), "route registered");
        let node = &mut self.nodes[current.0];
        node.pattern = Some(pattern);
        node.payload = Some(payload);
        node.param_names = params;
        self.routes += 1;
        Ok(())
    }

    /// Resolves a path to its registered payload and parameter bindings.
    ///
    /// The path is split on `/` exactly as in [`add`](Self::add). At each
    /// segment an exact literal child is preferred; the parametrized child
    /// is taken only when no literal matches, capturing the raw segment
    /// value. Captured values are zipped with the terminal node's parameter
    /// names (both in traversal order) to build the returned map.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to resolve.
    ///
    /// # Returns
    ///
    /// * `Ok((&T, HashMap<String, String>))` - The payload and the captured
    ///   parameters, keyed by name with the `:` sigil kept.
    /// * `Err(RouteTrieError::NotFound)` - A segment matched nothing, or the
    ///   path ended at an unregistered trie position.
    pub fn lookup(&self, path: &str) -> RouteTrieResult<(&T, HashMap<String, String>)> {
        let mut captured = Vec::new();

        let mut current = ROOT;
        for segment in path.split('/') {
            let node = &self.nodes[current.0];
            current = if let Some(&child) = node.children.get(segment) {
                child
            } else if let Some(child) = node.parametrized {
                captured.push(segment.to_owned());
                child
            } else {
                trace!(path = %path, segment = %segment, "no matching child");
                return Err(RouteTrieError::NotFound);
            };
        }

        let node = &self.nodes[current.0];
        if !node.is_terminal() {
            trace!(path = %path, "path ends at unregistered node");
            return Err(RouteTrieError::NotFound);
        }

        // Terminal nodes always carry a payload.
        let payload = node.payload.as_ref().ok_or(RouteTrieError::NotFound)?;
        let params = node
            .param_names
            .iter()
            .cloned()
            .zip(captured)
            .collect::<HashMap<_, _>>();
        Ok((payload, params))
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes
    }

    /// Checks whether any route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    /// Iterates over the registered pattern strings, in unspecified order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| n.pattern.as_deref())
    }

    /// Returns the parametrized child of `parent`, creating it if absent.
    fn parametrized_child(&mut self, parent: NodeId) -> NodeId {
        match self.nodes[parent.0].parametrized {
            Some(child) => child,
            None => {
                let child = self.alloc(RouteNode::parametrized(parent));
                self.nodes[parent.0].parametrized = Some(child);
                child
            }
        }
    }

    /// Returns the literal child of `parent` for `segment`, creating it if
    /// absent.
    fn literal_child(&mut self, parent: NodeId, segment: &str) -> NodeId {
        match self.nodes[parent.0].children.get(segment).copied() {
            Some(child) => child,
            None => {
                let child = self.alloc(RouteNode::literal(segment, parent));
                self.nodes[parent.0]
                    .children
                    .insert(segment.to_owned(), child);
                child
            }
        }
    }

    /// Appends a node to the arena and returns its handle.
    fn alloc(&mut self, node: RouteNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Renders the trie position of a node as a slash-joined segment chain,
    /// with parametrized nodes shown as the bare sigil. Diagnostics only;
    /// this is the sole consumer of the parent back-references.
    fn position_of(&self, node: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = &self.nodes[node.0];
        while let Some(parent) = current.parent {
            if current.is_parametrized {
                segments.push(PARAM_SIGIL.to_string());
            } else {
                segments.push(current.segment.clone());
            }
            current = &self.nodes[parent.0];
        }
        segments.reverse();
        segments.join("/")
    }

    /// Number of nodes in the arena, including the root. Exposed for tests
    /// that assert repeated registration does not grow the trie.
    #[cfg(test)]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_round_trip() {
        let mut trie = RouteTrie::new();
        assert!(trie.is_empty());

        trie.add("hello/moon", 1).unwrap();
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        let (payload, params) = trie.lookup("hello/moon").unwrap();
        assert_eq!(*payload, 1);
        assert!(params.is_empty());
    }

    #[test]
    fn test_parameter_extraction() {
        let mut trie = RouteTrie::new();
        trie.add(":a/:b/c", "v").unwrap();

        let (payload, params) = trie.lookup("x/y/c").unwrap();
        assert_eq!(*payload, "v");
        assert_eq!(params.len(), 2);
        assert_eq!(params[":a"], "x");
        assert_eq!(params[":b"], "y");
    }

    #[test]
    fn test_identical_pattern_replaces_payload() {
        let mut trie = RouteTrie::new();
        trie.add("a/b", 1).unwrap();
        trie.add("a/b", 2).unwrap();

        let (payload, _) = trie.lookup("a/b").unwrap();
        assert_eq!(*payload, 2);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_conflicting_patterns_rejected() {
        let mut trie = RouteTrie::new();
        trie.add(":a/b", 1).unwrap();

        let err = trie.add(":c/b", 2).unwrap_err();
        match err {
            RouteTrieError::PathConflict { pattern, existing } => {
                assert_eq!(pattern, ":c/b");
                assert_eq!(existing, ":a/b");
            }
            other => panic!("expected PathConflict, got {other:?}"),
        }

        // The original registration is untouched.
        let (payload, params) = trie.lookup("x/b").unwrap();
        assert_eq!(*payload, 1);
        assert_eq!(params[":a"], "x");
    }

    #[test]
    fn test_unregistered_intermediate_not_found() {
        let mut trie = RouteTrie::new();
        trie.add("hello/moon", ()).unwrap();

        assert!(matches!(
            trie.lookup("hello"),
            Err(RouteTrieError::NotFound)
        ));
    }

    #[test]
    fn test_unmatched_segment_not_found() {
        let mut trie = RouteTrie::new();
        trie.add("a/b", ()).unwrap();

        assert!(matches!(trie.lookup("a/c"), Err(RouteTrieError::NotFound)));
        assert!(matches!(trie.lookup("z"), Err(RouteTrieError::NotFound)));
    }

    #[test]
    fn test_mixed_literal_and_parametrized() {
        let mut trie = RouteTrie::new();
        trie.add("hello", 1).unwrap();
        trie.add(":x/:y", 2).unwrap();

        let (payload, params) = trie.lookup("hello").unwrap();
        assert_eq!(*payload, 1);
        assert!(params.is_empty());

        let (payload, params) = trie.lookup("goodnight/moon").unwrap();
        assert_eq!(*payload, 2);
        assert_eq!(params[":x"], "goodnight");
        assert_eq!(params[":y"], "moon");
    }

    #[test]
    fn test_literal_preferred_over_parametrized() {
        let mut trie = RouteTrie::new();
        trie.add("a/b", 1).unwrap();
        trie.add("a/:x", 2).unwrap();

        let (payload, params) = trie.lookup("a/b").unwrap();
        assert_eq!(*payload, 1);
        assert!(params.is_empty());

        let (payload, params) = trie.lookup("a/c").unwrap();
        assert_eq!(*payload, 2);
        assert_eq!(params[":x"], "c");
    }

    #[test]
    fn test_no_backtracking_after_literal_choice() {
        let mut trie = RouteTrie::new();
        trie.add("a/b/c", 1).unwrap();
        trie.add(":x/b/d", 2).unwrap();

        // "a" matches the literal branch, which has no "d" under "b".
        // The parametrized branch would have matched, but the literal
        // choice is final.
        assert!(matches!(
            trie.lookup("a/b/d"),
            Err(RouteTrieError::NotFound)
        ));

        // Any other first segment takes the parametrized branch.
        let (payload, params) = trie.lookup("q/b/d").unwrap();
        assert_eq!(*payload, 2);
        assert_eq!(params[":x"], "q");
    }

    #[test]
    fn test_empty_pattern_and_empty_segments() {
        let mut trie = RouteTrie::new();
        trie.add("", 0).unwrap();
        trie.add("/a", 1).unwrap();
        trie.add("a//b", 2).unwrap();

        assert_eq!(*trie.lookup("").unwrap().0, 0);
        assert_eq!(*trie.lookup("/a").unwrap().0, 1);
        assert_eq!(*trie.lookup("a//b").unwrap().0, 2);

        // "a/b" has no empty segment in the middle and was never registered.
        assert!(matches!(trie.lookup("a/b"), Err(RouteTrieError::NotFound)));
    }

    #[test]
    fn test_all_parameter_pattern() {
        let mut trie = RouteTrie::new();
        trie.add(":a/:b", "v").unwrap();

        let (payload, params) = trie.lookup("1/2").unwrap();
        assert_eq!(*payload, "v");
        assert_eq!(params[":a"], "1");
        assert_eq!(params[":b"], "2");
    }

    #[test]
    fn test_repeated_add_does_not_grow_trie() {
        let mut trie = RouteTrie::new();
        trie.add("a/:b/c", 1).unwrap();
        let nodes_after_first = trie.node_count();

        trie.add("a/:b/c", 2).unwrap();
        trie.add("a/:b/c", 3).unwrap();

        assert_eq!(trie.node_count(), nodes_after_first);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_parent_chain_matches_depth() {
        let mut trie = RouteTrie::new();
        trie.add("a/b/c", ()).unwrap();

        // Walk the registered terminal back to the root via parent links.
        let terminal = trie
            .nodes
            .iter()
            .position(|n| n.is_terminal())
            .expect("terminal node exists");

        let mut depth = 0;
        let mut current = &trie.nodes[terminal];
        while let Some(parent) = current.parent {
            depth += 1;
            current = &trie.nodes[parent.0];
        }
        assert_eq!(depth, 3);
        assert!(std::ptr::eq(current, &trie.nodes[ROOT.0]));
    }

    #[test]
    fn test_patterns_iterator() {
        let mut trie = RouteTrie::new();
        trie.add("a", ()).unwrap();
        trie.add("b/:c", ()).unwrap();

        let mut patterns: Vec<&str> = trie.patterns().collect();
        patterns.sort_unstable();
        assert_eq!(patterns, vec!["a", "b/:c"]);
    }
}
