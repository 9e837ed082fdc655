//! Change notification.
//!
//! Callbacks run synchronously on the thread that switched the locale.
//! Notification works on a snapshot, so a callback may unsubscribe itself or
//! others while it runs.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Property whose value changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// The active locale id.
    Locale,
    /// The active [`Language`](super::Language).
    Language,
    /// Every translated value ("all items changed").
    Items,
}

impl Property {
    /// Token handed to data-binding layers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locale => "Locale",
            Self::Language => "Language",
            Self::Items => "Item[]",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Callback = Arc<dyn Fn(Property) + Send + Sync>;

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

/// Ordered list of subscribers.
#[derive(Clone, Default)]
pub(crate) struct Observers {
    inner: Arc<Mutex<ObserverList>>,
}

impl Observers {
    fn lock(&self) -> MutexGuard<'_, ObserverList> {
        lock(&self.inner)
    }

    pub(crate) fn subscribe(&self, callback: impl Fn(Property) + Send + Sync + 'static) -> Subscription {
        let mut list = self.lock();
        let id = list.next_id;
        list.next_id += 1;
        list.entries.push((id, Arc::new(callback)));
        Subscription { id, list: Arc::downgrade(&self.inner) }
    }

    /// Invoke every subscriber present when the call starts.
    pub(crate) fn notify(&self, property: Property) {
        let snapshot: Vec<Callback> =
            self.lock().entries.iter().map(|(_, callback)| Arc::clone(callback)).collect();
        for callback in snapshot {
            callback(property);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub(crate) fn clear(&self) {
        self.lock().entries.clear();
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").field("len", &self.len()).finish()
    }
}

/// Handle returned by [`I18n::subscribe`](super::I18n::subscribe).
///
/// Dropping it keeps the subscription alive; call
/// [`unsubscribe`](Self::unsubscribe) to detach.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    list: Weak<Mutex<ObserverList>>,
}

impl Subscription {
    /// Detach the callback. Safe to call from inside the callback and more
    /// than once.
    pub fn unsubscribe(&self) {
        if let Some(list) = self.list.upgrade() {
            lock(&list).entries.retain(|(id, _)| *id != self.id);
        }
    }

    /// Whether the callback is still attached.
    pub fn is_active(&self) -> bool {
        self.list.upgrade().is_some_and(|list| lock(&list).entries.iter().any(|(id, _)| *id == self.id))
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList").field("len", &self.entries.len()).finish()
    }
}

fn lock(list: &Mutex<ObserverList>) -> MutexGuard<'_, ObserverList> {
    // A panicking observer must not disable notifications for the rest.
    list.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str, Property) + Clone) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |tag: &str, p: Property| sink.lock().unwrap().push(format!("{tag}:{p}")))
    }

    #[test]
    fn test_notify_in_subscription_order() {
        let observers = Observers::default();
        let (seen, record) = recorder();
        let r1 = record.clone();
        observers.subscribe(move |p| r1("a", p));
        observers.subscribe(move |p| record("b", p));

        observers.notify(Property::Locale);
        observers.notify(Property::Items);
        assert_eq!(*seen.lock().unwrap(), vec!["a:Locale", "b:Locale", "a:Item[]", "b:Item[]"]);
    }

    #[test]
    fn test_unsubscribe_during_notification() {
        let observers = Observers::default();
        let (seen, record) = recorder();

        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let own = Arc::clone(&slot);
        let r1 = record.clone();
        let sub = observers.subscribe(move |p| {
            r1("once", p);
            if let Some(sub) = own.lock().unwrap().as_ref() {
                sub.unsubscribe();
            }
        });
        *slot.lock().unwrap() = Some(sub.clone());
        observers.subscribe(move |p| record("always", p));

        observers.notify(Property::Locale);
        observers.notify(Property::Language);

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["once:Locale", "always:Locale", "always:Language"]
        );
        assert!(!sub.is_active());
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn test_unsubscribe_after_clear_is_harmless() {
        let observers = Observers::default();
        let sub = observers.subscribe(|_| {});
        assert!(sub.is_active());
        observers.clear();
        sub.unsubscribe();
        assert!(!sub.is_active());
        drop(observers);
        sub.unsubscribe();
    }
}
