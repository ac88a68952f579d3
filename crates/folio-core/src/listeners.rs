//! Scoped global listener subscriptions.
//!
//! Controllers never register global handlers themselves. Each one reports
//! the [`ListenerSet`] its current state needs, and a [`ListenerReconciler`]
//! attaches or detaches handlers on the host so the attached set always
//! matches. Leaving a state releases its listeners on the next reconcile.

use std::fmt;

/// A global (document or window level) listener a controller may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    /// Pointer movement anywhere in the document.
    PointerMove,
    /// Pointer release anywhere in the document.
    PointerUp,
    /// Pointer press anywhere, used to detect clicks outside a panel.
    PointerDownOutside,
    /// Page scroll.
    Scroll,
    /// Viewport resize.
    Resize,
    /// Keyboard input.
    KeyDown,
}

impl ListenerKind {
    /// Every listener kind, in bit order.
    pub const ALL: [ListenerKind; 6] = [
        ListenerKind::PointerMove,
        ListenerKind::PointerUp,
        ListenerKind::PointerDownOutside,
        ListenerKind::Scroll,
        ListenerKind::Resize,
        ListenerKind::KeyDown,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of listener kinds.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListenerSet(u8);

impl ListenerSet {
    /// The empty set.
    pub const EMPTY: ListenerSet = ListenerSet(0);

    /// Build a set from a slice of kinds.
    pub fn of(kinds: &[ListenerKind]) -> Self {
        kinds.iter().fold(Self::EMPTY, |set, &kind| set.with(kind))
    }

    /// Return a copy of the set with `kind` added.
    pub fn with(mut self, kind: ListenerKind) -> Self {
        self.insert(kind);
        self
    }

    /// Add a kind to the set.
    pub fn insert(&mut self, kind: ListenerKind) {
        self.0 |= kind.bit();
    }

    /// Remove a kind from the set.
    pub fn remove(&mut self, kind: ListenerKind) {
        self.0 &= !kind.bit();
    }

    /// Check if the set contains a kind.
    pub fn contains(&self, kind: ListenerKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Kinds present in either set.
    pub fn union(self, other: ListenerSet) -> ListenerSet {
        ListenerSet(self.0 | other.0)
    }

    /// Kinds present in `self` but not in `other`.
    pub fn difference(self, other: ListenerSet) -> ListenerSet {
        ListenerSet(self.0 & !other.0)
    }

    /// Iterate over the kinds in the set.
    pub fn iter(self) -> impl Iterator<Item = ListenerKind> {
        ListenerKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<ListenerKind> for ListenerSet {
    fn from_iter<I: IntoIterator<Item = ListenerKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ListenerSet::EMPTY, |set, kind| set.with(kind))
    }
}

/// Host side of listener management: installs and removes real handlers.
pub trait ListenerHost {
    /// Install the global handler for `kind`.
    fn attach(&mut self, kind: ListenerKind);

    /// Remove the global handler for `kind`.
    fn detach(&mut self, kind: ListenerKind);
}

/// Tracks which listeners are attached on behalf of one controller.
#[derive(Debug, Default, Clone)]
pub struct ListenerReconciler {
    attached: ListenerSet,
}

impl ListenerReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently attached through this reconciler.
    pub fn attached(&self) -> ListenerSet {
        self.attached
    }

    /// Bring the attached set in line with `required`.
    ///
    /// Detaches before attaching. Returns true if anything changed.
    pub fn reconcile<H: ListenerHost + ?Sized>(
        &mut self,
        required: ListenerSet,
        host: &mut H,
    ) -> bool {
        if required == self.attached {
            return false;
        }

        for kind in self.attached.difference(required).iter() {
            log::trace!("detaching {kind:?} listener");
            host.detach(kind);
        }
        for kind in required.difference(self.attached).iter() {
            log::trace!("attaching {kind:?} listener");
            host.attach(kind);
        }

        self.attached = required;
        true
    }

    /// Detach everything (component unmount).
    pub fn release_all<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        self.reconcile(ListenerSet::EMPTY, host);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Host that records attach/detach calls and counts duplicate attaches.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub active: ListenerSet,
        pub attaches: usize,
        pub detaches: usize,
        pub duplicate_attaches: usize,
        pub stray_detaches: usize,
    }

    impl ListenerHost for RecordingHost {
        fn attach(&mut self, kind: ListenerKind) {
            if self.active.contains(kind) {
                self.duplicate_attaches += 1;
            }
            self.active.insert(kind);
            self.attaches += 1;
        }

        fn detach(&mut self, kind: ListenerKind) {
            if !self.active.contains(kind) {
                self.stray_detaches += 1;
            }
            self.active.remove(kind);
            self.detaches += 1;
        }
    }
}
