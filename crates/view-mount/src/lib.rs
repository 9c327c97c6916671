//! view-mount — tree reconciliation and mutation-instruction pipeline.
//!
//! Given two immutable [`ViewTree`](view_tree::ViewTree) snapshots, the
//! [`differ`] computes the minimal ordered list of [`Mutation`] instructions
//! that transforms the first shape into the second; the [`applier`] then
//! drives those instructions against a live host hierarchy through the
//! [`Host`] primitive trait, keeping the identity→handle registry as the
//! only state that survives across commits.
//!
//! One commit flows as:
//!
//! ```text
//! (old, new) snapshots ── differ::diff ──▶ MutationList ── Applier::apply ──▶ host tree
//! ```
//!
//! Diffing is pure computation over immutable data; applying is strictly
//! in-order and stops at the first failing instruction, leaving the host in
//! the partially-applied state it reached (no rollback).

pub mod applier;
pub mod differ;
pub mod host;
pub mod mutation;

pub use applier::{Applier, ApplyError, ApplyFailure, ViewRegistry};
pub use differ::{diff, diff_with, DiffError};
pub use host::memory::{MemoryHost, ViewHandle};
pub use host::{Host, HostError};
pub use mutation::{Mutation, MutationList};
