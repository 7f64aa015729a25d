//! # Document-scoped listener registry
//!
//! Some interactions must keep receiving input after the pointer leaves the
//! element that started them. A drag that only listened on its own element
//! would "stick" as soon as the pointer crossed the element's edge while the
//! button was still held. Such interactions register document-scoped
//! listeners instead, and the host forwards every matching event to the
//! registered owners regardless of where it hit-tests.
//!
//! ## Scoped acquisition
//!
//! Registration is never done with loose add/remove calls. [`Document::listen`]
//! returns a [`ListenerGuard`] that owns the registrations it made, and
//! dropping the guard removes exactly those registrations. A component that
//! keeps its guard inside its own state therefore cannot leak listeners, even
//! when it is torn down in the middle of an interaction.
//!
//! ## Usage
//!
//! ```
//! use reveal_ui::document::{Document, ListenerKind, ListenerOwner};
//!
//! let document = Document::new();
//! let owner = ListenerOwner::next();
//!
//! let guard = document.listen(owner, &[ListenerKind::MouseMove, ListenerKind::MouseUp]);
//! assert!(document.is_listening(owner, ListenerKind::MouseMove));
//! assert_eq!(document.listener_count(), 2);
//!
//! drop(guard);
//! assert_eq!(document.listener_count(), 0);
//! ```
//!
//! ## Thread Safety
//!
//! The registry lives behind an `Arc<RwLock<_>>`, so a `Document` handle can
//! be cloned into whatever owns the event loop and into every component that
//! needs it.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies the component instance that owns a set of registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerOwner(u64);

impl ListenerOwner {
    /// Allocates a process-unique owner id.
    pub fn next() -> Self {
        Self(NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The document-level event classes a component can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerKind {
    /// Mouse movement anywhere in the document.
    MouseMove,
    /// Mouse button release anywhere in the document.
    MouseUp,
    /// Touch movement anywhere in the document.
    TouchMove,
    /// Touch end anywhere in the document.
    TouchEnd,
}

impl ListenerKind {
    /// The move/end pair for both pointer and touch input. This is the set a
    /// drag gesture needs while it is active.
    pub const DRAG: [ListenerKind; 4] = [
        ListenerKind::MouseMove,
        ListenerKind::MouseUp,
        ListenerKind::TouchMove,
        ListenerKind::TouchEnd,
    ];
}

#[derive(Default)]
struct Registry {
    entries: FxHashMap<ListenerKind, SmallVec<[ListenerOwner; 2]>>,
}

impl Registry {
    fn add(&mut self, owner: ListenerOwner, kind: ListenerKind) {
        self.entries.entry(kind).or_default().push(owner);
    }

    fn remove(&mut self, owner: ListenerOwner, kind: ListenerKind) {
        if let Some(owners) = self.entries.get_mut(&kind) {
            if let Some(index) = owners.iter().position(|o| *o == owner) {
                owners.remove(index);
            }
            if owners.is_empty() {
                self.entries.remove(&kind);
            }
        }
    }
}

/// Handle to a document's listener registry.
///
/// Cloning the handle is cheap; all clones share one registry.
#[derive(Clone, Default)]
pub struct Document {
    registry: Arc<RwLock<Registry>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

impl Document {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `owner` for every kind in `kinds` and returns the guard that
    /// releases those registrations.
    pub fn listen(&self, owner: ListenerOwner, kinds: &[ListenerKind]) -> ListenerGuard {
        {
            let mut registry = self.registry.write();
            for kind in kinds {
                registry.add(owner, *kind);
            }
        }
        tracing::trace!(owner = owner.raw(), count = kinds.len(), "document listeners attached");
        ListenerGuard {
            document: self.clone(),
            owner,
            kinds: kinds.iter().copied().collect(),
        }
    }

    /// Returns `true` if `owner` currently listens for `kind`.
    pub fn is_listening(&self, owner: ListenerOwner, kind: ListenerKind) -> bool {
        self.registry
            .read()
            .entries
            .get(&kind)
            .is_some_and(|owners| owners.contains(&owner))
    }

    /// Returns the owners that should receive an event of class `kind`, in
    /// registration order.
    pub fn listeners(&self, kind: ListenerKind) -> SmallVec<[ListenerOwner; 2]> {
        self.registry
            .read()
            .entries
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of live registrations across all kinds.
    pub fn listener_count(&self) -> usize {
        self.registry.read().entries.values().map(|o| o.len()).sum()
    }

    fn release(&self, owner: ListenerOwner, kinds: &[ListenerKind]) {
        let mut registry = self.registry.write();
        for kind in kinds {
            registry.remove(owner, *kind);
        }
    }
}

/// Owns a set of document registrations and removes them on drop.
#[must_use = "listeners are released as soon as the guard is dropped"]
pub struct ListenerGuard {
    document: Document,
    owner: ListenerOwner,
    kinds: SmallVec<[ListenerKind; 4]>,
}

impl ListenerGuard {
    /// The owner these registrations belong to.
    pub fn owner(&self) -> ListenerOwner {
        self.owner
    }

    /// The listener classes held by this guard.
    pub fn kinds(&self) -> &[ListenerKind] {
        &self.kinds
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("owner", &self.owner)
            .field("kinds", &self.kinds)
            .finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.document.release(self.owner, &self.kinds);
        tracing::trace!(owner = self.owner.raw(), "document listeners released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_registers_and_releases_all_kinds() {
        let document = Document::new();
        let owner = ListenerOwner::next();

        let guard = document.listen(owner, &ListenerKind::DRAG);
        for kind in ListenerKind::DRAG {
            assert!(document.is_listening(owner, kind));
        }
        assert_eq!(document.listener_count(), 4);
        assert_eq!(guard.kinds(), &ListenerKind::DRAG);

        drop(guard);
        for kind in ListenerKind::DRAG {
            assert!(!document.is_listening(owner, kind));
        }
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn releasing_one_owner_keeps_the_others() {
        let document = Document::new();
        let first = ListenerOwner::next();
        let second = ListenerOwner::next();

        let first_guard = document.listen(first, &[ListenerKind::MouseMove]);
        let _second_guard = document.listen(second, &[ListenerKind::MouseMove]);
        assert_eq!(
            document.listeners(ListenerKind::MouseMove).as_slice(),
            &[first, second]
        );

        drop(first_guard);
        assert_eq!(
            document.listeners(ListenerKind::MouseMove).as_slice(),
            &[second]
        );
    }

    #[test]
    fn nested_guards_for_the_same_owner_are_counted() {
        let document = Document::new();
        let owner = ListenerOwner::next();

        let outer = document.listen(owner, &[ListenerKind::TouchEnd]);
        let inner = document.listen(owner, &[ListenerKind::TouchEnd]);
        drop(inner);
        assert!(document.is_listening(owner, ListenerKind::TouchEnd));
        drop(outer);
        assert!(!document.is_listening(owner, ListenerKind::TouchEnd));
    }

    #[test]
    fn clones_share_one_registry() {
        let document = Document::new();
        let view = document.clone();
        let owner = ListenerOwner::next();

        let _guard = document.listen(owner, &[ListenerKind::MouseUp]);
        assert!(view.is_listening(owner, ListenerKind::MouseUp));
    }

    #[test]
    fn owner_ids_are_unique() {
        let a = ListenerOwner::next();
        let b = ListenerOwner::next();
        assert_ne!(a, b);
    }
}
