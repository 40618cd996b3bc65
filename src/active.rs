//! The single "which section is the user looking at" value, with subscribe/notify.
//!
//! Only the visibility tracker writes it. Any number of readers either poll [`ActiveSection::get`]
//! or subscribe and get called on every change, so no consumer needs its own scroll listener.
//! Subscriptions are guards: dropping one unregisters the listener.

use crate::section::SectionId;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener = Box<dyn FnMut(SectionId)>;

struct Entry {
    alive: Rc<Cell<bool>>,
    listener: Listener,
}

#[derive(Default)]
/// Currently active section plus its listeners.
pub struct ActiveSection {
    current: Option<SectionId>,
    entries: Rc<RefCell<Vec<Entry>>>,
}

#[must_use = "dropping a subscription unregisters its listener"]
/// Registration handle returned by [`ActiveSection::subscribe`].
pub struct Subscription {
    alive: Rc<Cell<bool>>,
}

impl Subscription {
    /// Unregisters the listener now rather than at scope exit.
    pub fn unsubscribe(self) {
        drop(self);
    }

    #[must_use]
    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Flag only; the entry is swept on the next notify or count, so this is safe to run
        // from inside a listener.
        self.alive.set(false);
    }
}

impl ActiveSection {
    #[must_use]
    /// Unset state with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// The active section, `None` until the first qualifying observation.
    pub fn get(&self) -> Option<SectionId> {
        self.current
    }

    /// Registers a listener called with the new section on every change.
    pub fn subscribe(&self, listener: impl FnMut(SectionId) + 'static) -> Subscription {
        let alive = Rc::new(Cell::new(true));
        self.entries.borrow_mut().push(Entry {
            alive: Rc::clone(&alive),
            listener: Box::new(listener),
        });
        Subscription { alive }
    }

    #[must_use]
    /// Number of listeners still registered.
    pub fn listener_count(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.alive.get())
            .count()
    }

    /// Writes a new value, notifying listeners when it differs from the old one.
    ///
    /// Returns whether the value changed.
    pub(crate) fn set(&mut self, id: SectionId) -> bool {
        if self.current == Some(id) {
            return false;
        }
        self.current = Some(id);
        self.notify(id);
        true
    }

    fn notify(&self, id: SectionId) {
        // Take the list out so listeners may subscribe or drop guards while being called.
        let mut entries = std::mem::take(&mut *self.entries.borrow_mut());
        entries.retain(|entry| entry.alive.get());
        for entry in &mut entries {
            if entry.alive.get() {
                (entry.listener)(id);
            }
        }
        let mut slot = self.entries.borrow_mut();
        let added = std::mem::take(&mut *slot);
        entries.extend(added);
        entries.retain(|entry| entry.alive.get());
        *slot = entries;
    }
}

#[cfg(test)]
#[path = "tests/active.rs"]
mod tests;
