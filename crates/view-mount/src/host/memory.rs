//! In-memory reference host.
//!
//! A slab-arena host used by the integration tests to simulate application
//! and verify the ordering invariant: every index is checked against the
//! child list as it exists when the call arrives, exactly like a real
//! platform would. Also usable by embedders as a headless host.

use serde_json::Value;

use super::{Host, HostError};

/// Opaque handle into the [`MemoryHost`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewHandle(usize);

/// One live view in the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryView {
    pub component: String,
    pub props: Value,
    pub children: Vec<ViewHandle>,
}

/// Arena of live views; destroyed slots stay tombstoned so stale handles
/// fail with `UnknownHandle` instead of aliasing a new view.
#[derive(Debug, Default)]
pub struct MemoryHost {
    slots: Vec<Option<MemoryView>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to a live view.
    pub fn view(&self, handle: ViewHandle) -> Option<&MemoryView> {
        self.slots.get(handle.0).and_then(|slot| slot.as_ref())
    }

    /// Number of currently live views.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn view_mut(&mut self, handle: ViewHandle) -> Result<&mut MemoryView, HostError> {
        self.slots
            .get_mut(handle.0)
            .and_then(|slot| slot.as_mut())
            .ok_or(HostError::UnknownHandle)
    }
}

impl Host for MemoryHost {
    type Handle = ViewHandle;

    fn create_view(&mut self, component: &str, props: &Value) -> Result<ViewHandle, HostError> {
        self.slots.push(Some(MemoryView {
            component: component.to_string(),
            props: props.clone(),
            children: Vec::new(),
        }));
        Ok(ViewHandle(self.slots.len() - 1))
    }

    fn destroy_view(&mut self, handle: ViewHandle) -> Result<(), HostError> {
        let slot = self
            .slots
            .get_mut(handle.0)
            .ok_or(HostError::UnknownHandle)?;
        if slot.take().is_none() {
            return Err(HostError::UnknownHandle);
        }
        Ok(())
    }

    fn attach_child(
        &mut self,
        parent: ViewHandle,
        child: ViewHandle,
        index: usize,
    ) -> Result<(), HostError> {
        if self.view(child).is_none() {
            return Err(HostError::UnknownHandle);
        }
        let parent = self.view_mut(parent)?;
        if index > parent.children.len() {
            return Err(HostError::IndexOutOfRange {
                index,
                len: parent.children.len(),
            });
        }
        parent.children.insert(index, child);
        Ok(())
    }

    fn detach_child_at(
        &mut self,
        parent: ViewHandle,
        index: usize,
    ) -> Result<ViewHandle, HostError> {
        let parent = self.view_mut(parent)?;
        if index >= parent.children.len() {
            return Err(HostError::IndexOutOfRange {
                index,
                len: parent.children.len(),
            });
        }
        Ok(parent.children.remove(index))
    }

    fn update_view_content(&mut self, handle: ViewHandle, props: &Value) -> Result<(), HostError> {
        self.view_mut(handle)?.props = props.clone();
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
