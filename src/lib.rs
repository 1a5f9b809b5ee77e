//! Alanui Route Trie Library
//!
//! This library contains the routing core for path-based dispatch: a trie
//! that stores slash-delimited patterns with named `:param` segments and
//! resolves incoming paths to the registered payload while extracting
//! parameter values. It is intended to be embedded by a higher-level
//! dispatcher (an HTTP server, a command router) that supplies path strings
//! and consumes opaque payloads.
//!
//! # Architecture
//!
//! The crate follows a few principles:
//! - One structure, two operations: `add` to register, `lookup` to resolve
//! - Payloads are a generic parameter, never inspected by the trie
//! - Registration is a `&mut self` build phase; lookups are `&self` and may
//!   run concurrently once mutation stops
//! - Comprehensive error handling and propagation, no panics outside tests

// Re-export public modules
pub mod route_trie;

pub use route_trie::{RouteTrie, RouteTrieError, RouteTrieResult};

/// Version information for the Alanui library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
