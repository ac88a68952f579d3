//! Listener routing for the egui host.
//!
//! egui delivers every input event to every frame, so "attaching" a global
//! listener means marking its kind as routed to a controller. Events of kinds
//! that are not routed are never forwarded.

use folio_core::{ListenerHost, ListenerKind, ListenerReconciler, ListenerSet};

/// Kinds currently forwarded to one controller.
#[derive(Debug, Default)]
struct Routes {
    owner: &'static str,
    active: ListenerSet,
}

impl ListenerHost for Routes {
    fn attach(&mut self, kind: ListenerKind) {
        log::trace!("{}: attach {kind:?}", self.owner);
        self.active.insert(kind);
    }

    fn detach(&mut self, kind: ListenerKind) {
        log::trace!("{}: detach {kind:?}", self.owner);
        self.active.remove(kind);
    }
}

/// Listener scope of one mounted controller.
#[derive(Debug, Default)]
pub struct ScopedListeners {
    reconciler: ListenerReconciler,
    routes: Routes,
}

impl ScopedListeners {
    pub fn new(owner: &'static str) -> Self {
        Self {
            reconciler: ListenerReconciler::new(),
            routes: Routes {
                owner,
                active: ListenerSet::EMPTY,
            },
        }
    }

    /// Bring the routed kinds in line with what the controller requires.
    pub fn sync(&mut self, required: ListenerSet) {
        self.reconciler.reconcile(required, &mut self.routes);
    }

    /// Check if events of `kind` are forwarded.
    pub fn routes(&self, kind: ListenerKind) -> bool {
        self.routes.active.contains(kind)
    }

    /// Drop every route (controller unmounted).
    pub fn release(&mut self) {
        self.reconciler.release_all(&mut self.routes);
    }

    pub fn active(&self) -> ListenerSet {
        self.routes.active
    }
}
