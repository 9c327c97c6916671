//! Host-tree primitives.
//!
//! The applier touches platform-specific code only through the [`Host`]
//! trait: five operations keyed by opaque handles. Everything else —
//! inflation, recycling, rendering — belongs to the platform behind it.

use serde_json::Value;
use thiserror::Error;

pub mod memory;

// ── Error ─────────────────────────────────────────────────────────────────

/// Failure reported by a host primitive. Never retried by the applier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("host allocation failed: {0}")]
    Allocation(String),
    #[error("child index {index} out of range (child count {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown or already-released host handle")]
    UnknownHandle,
}

// ── Host trait ────────────────────────────────────────────────────────────

/// The live, mutable view hierarchy the mutation list is applied against.
///
/// Handles are opaque to this crate; the applier only stores them in its
/// identity registry and passes them back. Operations are issued strictly in
/// instruction order — if the platform completes them asynchronously,
/// completion ordering is the platform's responsibility, but calls are never
/// issued out of order.
pub trait Host {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Allocate a view of the given component type. The new view is not
    /// attached anywhere yet.
    fn create_view(&mut self, component: &str, props: &Value) -> Result<Self::Handle, HostError>;

    /// Release a view. The view must already be detached, or hang under a
    /// view that is itself being released.
    fn destroy_view(&mut self, handle: Self::Handle) -> Result<(), HostError>;

    /// Attach `child` into `parent`'s child list at `index`.
    fn attach_child(
        &mut self,
        parent: Self::Handle,
        child: Self::Handle,
        index: usize,
    ) -> Result<(), HostError>;

    /// Detach and return the child currently at `index` of `parent`.
    fn detach_child_at(
        &mut self,
        parent: Self::Handle,
        index: usize,
    ) -> Result<Self::Handle, HostError>;

    /// Replace a view's content payload in place. No identity or position
    /// change.
    fn update_view_content(&mut self, handle: Self::Handle, props: &Value)
        -> Result<(), HostError>;
}
