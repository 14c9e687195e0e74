//! Playback notifications
//!
//! Listeners subscribe to a [`Notification`] kind and are called
//! synchronously, in subscription order, with a read-only
//! [`PlaybackStatus`] snapshot:
//! - `Change` after album/track selection or playback state changes
//! - `UpdateTime` after elapsed/total seconds are refreshed

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    #[serde(rename = "CHANGE")]
    Change,
    #[serde(rename = "UPDATE_TIME")]
    UpdateTime,
}

/// Handle returned by [`Listeners::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&PlaybackStatus)>;

struct Entry {
    id: ListenerId,
    kind: Notification,
    callback: Listener,
}

/// Observer list
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `kind`
    pub fn subscribe<F>(&mut self, kind: Notification, callback: F) -> ListenerId
    where
        F: FnMut(&PlaybackStatus) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Call every listener registered for `kind`
    pub fn emit(&mut self, kind: Notification, status: &PlaybackStatus) {
        for entry in self.entries.iter_mut().filter(|e| e.kind == kind) {
            (entry.callback)(status);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: Notification) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("change", &self.count(Notification::Change))
            .field("update_time", &self.count(Notification::UpdateTime))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlaybackState;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn status() -> PlaybackStatus {
        PlaybackStatus {
            state: PlaybackState::Stopped,
            album: None,
            track_index: None,
            track_title: String::new(),
            elapsed_seconds: 0.0,
            total_seconds: 0.0,
            loop_enabled: true,
        }
    }

    #[test]
    fn emits_only_to_matching_kind() {
        let mut listeners = Listeners::new();
        let changes = Rc::new(RefCell::new(0));
        let times = Rc::new(RefCell::new(0));

        let c = Rc::clone(&changes);
        listeners.subscribe(Notification::Change, move |_| *c.borrow_mut() += 1);
        let t = Rc::clone(&times);
        listeners.subscribe(Notification::UpdateTime, move |_| *t.borrow_mut() += 1);

        listeners.emit(Notification::Change, &status());
        listeners.emit(Notification::Change, &status());
        listeners.emit(Notification::UpdateTime, &status());

        assert_eq!(*changes.borrow(), 2);
        assert_eq!(*times.borrow(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut listeners = Listeners::new();
        let calls = Rc::new(RefCell::new(0));

        let c = Rc::clone(&calls);
        let id = listeners.subscribe(Notification::Change, move |_| *c.borrow_mut() += 1);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));

        listeners.emit(Notification::Change, &status());
        assert_eq!(*calls.borrow(), 0);
        assert!(listeners.is_empty());
    }

    #[test]
    fn dispatch_in_subscription_order() {
        let mut listeners = Listeners::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for n in 0..3 {
            let o = Rc::clone(&order);
            listeners.subscribe(Notification::Change, move |_| o.borrow_mut().push(n));
        }

        listeners.emit(Notification::Change, &status());
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn notification_wire_names() {
        assert_eq!(serde_json::to_value(Notification::Change).unwrap(), "CHANGE");
        assert_eq!(
            serde_json::to_value(Notification::UpdateTime).unwrap(),
            "UPDATE_TIME"
        );
    }
}
