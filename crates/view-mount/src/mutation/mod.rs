//! Mutation instruction model.
//!
//! A closed set of five edit operations over the host view hierarchy:
//! `create`, `delete`, `insert`, `remove`, `update`. Each variant carries
//! exactly the operands it needs, so illegal combinations are
//! unrepresentable.

pub mod types;

pub use types::{Mutation, MutationList};
