use std::{
    cell::{
        Cell,
        RefCell,
    },
    collections::BTreeSet,
    rc::{
        Rc,
        Weak,
    },
};

/// Registry of live outside-click / Escape listeners.
///
/// The presentation layer only watches for dismissal gestures while
/// [`DismissListeners::is_listening`] is true. Listeners are released by
/// dropping their [`DismissSubscription`].
#[derive(Debug, Default)]
pub struct DismissListeners {
    active: Rc<RefCell<BTreeSet<u64>>>,
    next_id: Cell<u64>,
}

impl DismissListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> DismissSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.active.borrow_mut().insert(id);
        tracing::debug!(subscription = id, "dismiss listeners registered");
        DismissSubscription { id, registry: Rc::downgrade(&self.active) }
    }

    pub fn is_listening(&self) -> bool {
        !self.active.borrow().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn active_count(&self) -> usize {
        self.active.borrow().len()
    }
}

/// Guard for one registration; deregisters on drop.
#[derive(Debug)]
pub struct DismissSubscription {
    id: u64,
    registry: Weak<RefCell<BTreeSet<u64>>>,
}

impl Drop for DismissSubscription {
    fn drop(&mut self) {
        if let Some(active) = self.registry.upgrade() {
            active.borrow_mut().remove(&self.id);
            tracing::debug!(subscription = self.id, "dismiss listeners released");
        }
    }
}
