// src/store/subscribers.rs

//! Synchronous listener registry.
//!
//! Listeners are shared `Rc`s so that notification can release the registry
//! borrow before calling out; a listener may therefore unsubscribe itself (or
//! another listener) while being notified.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::snapshot::BoardSnapshot;

type Listener = Rc<dyn Fn(&BoardSnapshot)>;

/// Cleanup handle returned by `subscribe`; call it to stop notifications.
pub type Unsubscribe = Box<dyn FnOnce()>;

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Default)]
pub struct Subscribers {
    inner: Rc<RefCell<ListenerRegistry>>,
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.len())
            .finish()
    }
}

impl Subscribers {
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn(&BoardSnapshot) + 'static,
    {
        let id = {
            let mut reg = self.inner.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<ListenerRegistry>> = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(reg) = weak.upgrade() {
                reg.borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every listener with the snapshot built by `snapshot`.
    ///
    /// The snapshot is only built when someone is listening.
    pub fn notify(&self, snapshot: impl FnOnce() -> BoardSnapshot) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        if listeners.is_empty() {
            return;
        }

        let snapshot = snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
