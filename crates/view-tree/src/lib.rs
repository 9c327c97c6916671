//! view-tree — immutable snapshot model for a UI view hierarchy.
//!
//! A snapshot tree is a value: once built it is never mutated, so it can be
//! shared freely between the producer that computed it and any number of
//! readers. Nodes are keyed by a stable [`Tag`] identity that persists across
//! commits for "the same logical element".
//!
//! Construction goes through [`TreeBuilder`], which enforces the structural
//! invariants (single root, acyclic, each child under exactly one parent);
//! [`validate::validate_tree`] re-checks the same invariants on an existing
//! tree so downstream consumers can fail fast on malformed input.

pub mod builder;
pub mod snapshot;
pub mod tree;
pub mod validate;

pub use builder::TreeBuilder;
pub use snapshot::{Tag, ViewSnapshot};
pub use tree::ViewTree;
pub use validate::{validate_tree, TreeError};
