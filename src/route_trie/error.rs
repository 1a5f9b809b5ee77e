// Copyright (c) 2025 Alanui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the route trie.
//!
//! This module defines the error types that can occur during route trie
//! operations. There are exactly two failure modes: a registration conflict
//! and a failed resolution. The structure is purely in-memory, so there are
//! no transient or retryable errors.

/// Errors that can occur in route trie operations.
#[derive(Debug, thiserror::Error)]
pub enum RouteTrieError {
    /// Error when a new pattern terminates at a trie position already
    /// registered under a different pattern string. Carries both patterns
    /// for diagnostics; the caller decides whether to abort route-table
    /// construction or ignore the route.
    #[error("path '{pattern}' conflicts with registered '{existing}'")]
    PathConflict {
        /// The pattern whose registration was rejected.
        pattern: String,
        /// The pattern already registered at the same trie position.
        existing: String,
    },

    /// Error when no route matches a looked-up path, either because a
    /// segment matched neither a literal nor a parametrized child, or
    /// because traversal ended at an unregistered node. Carries no further
    /// detail: a router typically emits a generic "not found".
    #[error("not found")]
    NotFound,
}

// Display implementation is automatically provided by thiserror
