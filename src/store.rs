//! Observable roster store abstraction.
//!
//! The roster lives outside the scheduling core (the operations dashboard
//! persists it); the core only needs an ordered supervisor list. This
//! module defines that seam: a store that supplies the roster and
//! broadcasts change notifications so consumers can regenerate a schedule
//! when the roster moves underneath them.
//!
//! [`InMemoryRoster`] is a reference implementation for tests and
//! embedding; production deployments adapt their own persistence behind
//! the same trait. The scheduling pipeline itself never subscribes — it
//! stays a pure function of the list it is handed.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::Supervisor;

/// Store collections a consumer can subscribe to.
///
/// The dashboard maintains shifts alongside the supervisor roster; both
/// broadcast on the same mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    /// The supervisor roster.
    Supervisors,
    /// The shift assignments collection.
    Shifts,
}

/// What changed in a store collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// An entry was added (by id).
    Added(i64),
    /// An entry was updated (by id).
    Updated(i64),
    /// An entry was removed (by id).
    Removed(i64),
    /// The whole collection was replaced.
    Replaced,
}

/// A change notification delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    /// Collection that changed.
    pub topic: Topic,
    /// The change itself.
    pub change: Change,
}

/// A roster store the scheduling core can consume.
///
/// `supervisors` returns the roster in its stored order — order is
/// significant, it drives phase staggering.
pub trait RosterStore {
    /// Current roster, in order.
    fn supervisors(&self) -> Vec<Supervisor>;

    /// Subscribes to change notifications for one topic.
    ///
    /// The receiver yields one notification per mutation until the store
    /// is dropped.
    fn subscribe(&self, topic: Topic) -> Receiver<ChangeNotification>;
}

/// In-memory roster store with change broadcasting.
///
/// Manages the supervisor collection only; subscribing to other topics
/// yields a receiver that never fires.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    supervisors: Mutex<Vec<Supervisor>>,
    subscribers: Mutex<Vec<(Topic, Sender<ChangeNotification>)>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster with initial supervisors.
    pub fn with_supervisors(supervisors: Vec<Supervisor>) -> Self {
        Self {
            supervisors: Mutex::new(supervisors),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Appends a supervisor and notifies subscribers.
    pub fn add(&self, supervisor: Supervisor) {
        let id = supervisor.id;
        self.supervisors
            .lock()
            .expect("roster lock poisoned")
            .push(supervisor);
        self.notify(Topic::Supervisors, Change::Added(id));
    }

    /// Replaces the supervisor with the same id, if present. Returns
    /// whether an entry was updated.
    pub fn update(&self, supervisor: Supervisor) -> bool {
        let id = supervisor.id;
        let updated = {
            let mut roster = self.supervisors.lock().expect("roster lock poisoned");
            match roster.iter_mut().find(|s| s.id == id) {
                Some(entry) => {
                    *entry = supervisor;
                    true
                }
                None => false,
            }
        };
        if updated {
            self.notify(Topic::Supervisors, Change::Updated(id));
        }
        updated
    }

    /// Removes a supervisor by id. Returns whether an entry was removed.
    pub fn remove(&self, id: i64) -> bool {
        let removed = {
            let mut roster = self.supervisors.lock().expect("roster lock poisoned");
            let before = roster.len();
            roster.retain(|s| s.id != id);
            roster.len() != before
        };
        if removed {
            self.notify(Topic::Supervisors, Change::Removed(id));
        }
        removed
    }

    /// Replaces the whole roster and notifies subscribers.
    pub fn replace_all(&self, supervisors: Vec<Supervisor>) {
        *self.supervisors.lock().expect("roster lock poisoned") = supervisors;
        self.notify(Topic::Supervisors, Change::Replaced);
    }

    fn notify(&self, topic: Topic, change: Change) {
        let notification = ChangeNotification { topic, change };
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        // Drop subscribers whose receiver has gone away.
        subscribers.retain(|(t, sender)| *t != topic || sender.send(notification).is_ok());
    }
}

impl RosterStore for InMemoryRoster {
    fn supervisors(&self) -> Vec<Supervisor> {
        self.supervisors
            .lock()
            .expect("roster lock poisoned")
            .clone()
    }

    fn subscribe(&self, topic: Topic) -> Receiver<ChangeNotification> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push((topic, sender));
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_order_preserved() {
        let store = InMemoryRoster::new();
        store.add(Supervisor::new(2, "Vega"));
        store.add(Supervisor::new(1, "Rojas"));

        let roster = store.supervisors();
        assert_eq!(roster[0].id, 2);
        assert_eq!(roster[1].id, 1);
    }

    #[test]
    fn test_add_notifies_subscribers() {
        let store = InMemoryRoster::new();
        let receiver = store.subscribe(Topic::Supervisors);

        store.add(Supervisor::new(1, "Rojas"));

        let notification = receiver.try_recv().unwrap();
        assert_eq!(notification.topic, Topic::Supervisors);
        assert_eq!(notification.change, Change::Added(1));
    }

    #[test]
    fn test_one_notification_per_mutation() {
        let store = InMemoryRoster::new();
        let receiver = store.subscribe(Topic::Supervisors);

        store.add(Supervisor::new(1, "Rojas"));
        store.update(Supervisor::new(1, "Rojas R.").with_regimen("7x7"));
        store.remove(1);
        store.replace_all(vec![Supervisor::new(2, "Vega")]);

        let changes: Vec<Change> = receiver.try_iter().map(|n| n.change).collect();
        assert_eq!(
            changes,
            vec![
                Change::Added(1),
                Change::Updated(1),
                Change::Removed(1),
                Change::Replaced
            ]
        );
    }

    #[test]
    fn test_update_missing_id_does_not_notify() {
        let store = InMemoryRoster::new();
        let receiver = store.subscribe(Topic::Supervisors);

        assert!(!store.update(Supervisor::new(9, "Nobody")));
        assert!(!store.remove(9));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_other_topic_not_notified() {
        let store = InMemoryRoster::new();
        let shifts = store.subscribe(Topic::Shifts);

        store.add(Supervisor::new(1, "Rojas"));
        assert!(shifts.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_pruned() {
        let store = InMemoryRoster::new();
        drop(store.subscribe(Topic::Supervisors));
        let receiver = store.subscribe(Topic::Supervisors);

        store.add(Supervisor::new(1, "Rojas"));
        assert_eq!(receiver.try_iter().count(), 1);
    }

    #[test]
    fn test_store_feeds_generation() {
        use crate::models::ScheduleConfig;
        use crate::scheduler::generate_schedule;

        let store = InMemoryRoster::with_supervisors(vec![
            Supervisor::new(1, "Rojas").with_regimen("14x7"),
            Supervisor::new(2, "Vega").with_regimen("14x7"),
        ]);

        let result = generate_schedule(&ScheduleConfig::new(store.supervisors()));
        assert_eq!(result.grid.len(), 2);
    }
}
