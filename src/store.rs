//! Shared theme flag with an explicit subscriber list.
//!
//! A [`ThemeStore`] is a cheap handle: clones share the same flag and the same
//! subscribers. It lives on the UI thread only.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::models::theme::ThemeState;

type Subscriber = Rc<dyn Fn(ThemeState)>;

struct Subscribers {
    next_id: Cell<usize>,
    entries: RefCell<Vec<(usize, Subscriber)>>,
}

impl Subscribers {
    fn remove(&self, id: usize) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }
}

struct Inner {
    state: Cell<ThemeState>,
    subscribers: Rc<Subscribers>,
}

#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl ThemeStore {
    pub fn new(initial: ThemeState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: Cell::new(initial),
                subscribers: Rc::new(Subscribers {
                    next_id: Cell::new(0),
                    entries: RefCell::new(Vec::new()),
                }),
            }),
        }
    }

    /// Current theme. Reading has no side effects.
    pub fn get_theme(&self) -> ThemeState {
        self.inner.state.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.get_theme().is_dark_mode
    }

    /// Flip the flag and notify every live subscriber before returning.
    pub fn toggle_theme(&self) {
        let next = self.get_theme().toggled();
        self.inner.state.set(next);

        // Snapshot so subscribers can (un)subscribe or toggle from inside the callback
        let snapshot: Vec<Subscriber> = self
            .inner
            .subscribers
            .entries
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();

        for subscriber in snapshot {
            subscriber(next);
        }
    }

    /// Register `subscriber` for every future flip. It stays registered until
    /// the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, subscriber: F) -> Subscription
    where
        F: Fn(ThemeState) + 'static,
    {
        let subscribers = &self.inner.subscribers;
        let id = subscribers.next_id.get();
        subscribers.next_id.set(id + 1);
        subscribers
            .entries
            .borrow_mut()
            .push((id, Rc::new(subscriber)));

        Subscription {
            id,
            subscribers: Rc::downgrade(subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.entries.borrow().len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeState::default())
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.get_theme())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a subscriber registered; unregisters it on drop.
#[must_use = "the subscriber is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: usize,
    subscribers: Weak<Subscribers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_outliving_store_drops_cleanly() {
        let store = ThemeStore::new(ThemeState::light());
        let subscription = store.subscribe(|_| {});
        drop(store);
        drop(subscription);
    }

    #[test]
    fn subscriber_may_unsubscribe_itself_during_notification() {
        let store = ThemeStore::new(ThemeState::light());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let subscription = {
            let slot = slot.clone();
            store.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        store.toggle_theme();
        assert_eq!(store.subscriber_count(), 0);
        assert!(store.is_dark_mode());
    }
}
