//! Applier: drives the mutation list against the host tree.
//!
//! Execution is strictly in list order — no reordering, no batching beyond
//! what the differ already encoded — because later instructions depend on
//! earlier ones having logically taken effect (an Insert may reuse a
//! position a Remove just freed). On failure the applier stops at the
//! offending instruction and reports its index; the host is left in the
//! partially-applied state it reached, since rollback is not guaranteed
//! correct without re-running a diff.

use thiserror::Error;
use view_tree::{Tag, ViewTree};

use crate::host::{Host, HostError};
use crate::mutation::Mutation;

pub mod registry;

pub use registry::ViewRegistry;

// ── Errors ────────────────────────────────────────────────────────────────

/// Failure of a single instruction or mount step.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplyError {
    /// The instruction referenced an identity with no live view. Cannot
    /// happen when the differ contract is honored; treated as an
    /// internal-consistency fault.
    #[error("no live view for identity {0}")]
    UnknownIdentity(Tag),
    /// A Create (or mount) hit an identity that already has a live view.
    #[error("identity {0} already has a live view")]
    DuplicateIdentity(Tag),
    /// A host primitive failed. Not retried; retry is a caller decision.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Outcome of a failed [`Applier::apply`] run: how far the list got, and
/// why it stopped. `applied` counts the instructions that fully succeeded,
/// which is also the zero-based index of the offending instruction.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("apply stopped at instruction {applied}: {error}")]
pub struct ApplyFailure {
    pub applied: usize,
    #[source]
    pub error: ApplyError,
}

// ── Applier ───────────────────────────────────────────────────────────────

/// Owns the identity registry for one host tree and executes mutation
/// lists against it. At most one (diff, apply) cycle may be in flight per
/// host tree; serialization of commits is the caller's responsibility.
#[derive(Debug)]
pub struct Applier<H: Host> {
    registry: ViewRegistry<H::Handle>,
}

impl<H: Host> Applier<H> {
    pub fn new() -> Self {
        Applier {
            registry: ViewRegistry::new(),
        }
    }

    /// The identity → handle map. Read-only outside the applier.
    pub fn registry(&self) -> &ViewRegistry<H::Handle> {
        &self.registry
    }

    /// Initial commit: allocate and attach host views for the whole tree,
    /// top-down, and register every node. The root view is created but not
    /// attached anywhere; its handle is returned so the platform can place
    /// it. Later commits go through [`diff`](crate::differ::diff) +
    /// [`apply`](Applier::apply).
    pub fn mount(&mut self, host: &mut H, tree: &ViewTree) -> Result<H::Handle, ApplyError> {
        let handle = self.mount_node(host, tree, tree.root())?;
        tracing::debug!(nodes = tree.len(), "mounted initial tree");
        Ok(handle)
    }

    fn mount_node(
        &mut self,
        host: &mut H,
        tree: &ViewTree,
        tag: Tag,
    ) -> Result<H::Handle, ApplyError> {
        let node = tree.get(tag).ok_or(ApplyError::UnknownIdentity(tag))?;
        if self.registry.contains(tag) {
            return Err(ApplyError::DuplicateIdentity(tag));
        }
        let handle = host.create_view(&node.component, &node.props)?;
        self.registry.insert(tag, handle);
        for (index, &child) in node.children.iter().enumerate() {
            let child_handle = self.mount_node(host, tree, child)?;
            host.attach_child(handle, child_handle, index)?;
        }
        Ok(handle)
    }

    /// Execute a mutation list strictly in order. Stops at the first
    /// failure; the failure records how many instructions succeeded.
    pub fn apply(&mut self, host: &mut H, mutations: &[Mutation]) -> Result<(), ApplyFailure> {
        for (applied, mutation) in mutations.iter().enumerate() {
            tracing::trace!(index = applied, op = mutation.op_name(), "applying {mutation}");
            self.apply_one(host, mutation)
                .map_err(|error| ApplyFailure { applied, error })?;
        }
        Ok(())
    }

    fn apply_one(&mut self, host: &mut H, mutation: &Mutation) -> Result<(), ApplyError> {
        match mutation {
            Mutation::Create { new_node } => {
                if self.registry.contains(new_node.tag) {
                    return Err(ApplyError::DuplicateIdentity(new_node.tag));
                }
                let handle = host.create_view(&new_node.component, &new_node.props)?;
                self.registry.insert(new_node.tag, handle);
            }
            Mutation::Delete { old_node } => {
                let handle = self
                    .registry
                    .remove(old_node.tag)
                    .ok_or(ApplyError::UnknownIdentity(old_node.tag))?;
                host.destroy_view(handle)?;
            }
            Mutation::Insert {
                parent,
                new_node,
                index,
            } => {
                let parent_handle = self.handle(*parent)?;
                let child_handle = self.handle(new_node.tag)?;
                host.attach_child(parent_handle, child_handle, *index)?;
            }
            Mutation::Remove {
                parent,
                old_node,
                index,
            } => {
                let parent_handle = self.handle(*parent)?;
                let detached = host.detach_child_at(parent_handle, *index)?;
                debug_assert_eq!(
                    Some(detached),
                    self.registry.get(old_node.tag),
                    "detached child at index {index} of {parent} is not {}",
                    old_node.tag
                );
            }
            Mutation::Update {
                old_node, new_node, ..
            } => {
                let handle = self.handle(old_node.tag)?;
                host.update_view_content(handle, &new_node.props)?;
            }
        }
        Ok(())
    }

    fn handle(&self, tag: Tag) -> Result<H::Handle, ApplyError> {
        self.registry.get(tag).ok_or(ApplyError::UnknownIdentity(tag))
    }
}

impl<H: Host> Default for Applier<H> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
