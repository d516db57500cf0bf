//! Change notifications for the presentation layer
//!
//! Collections are mutated only through the service layer; after a committed
//! mutation the services publish a [`ChangeEvent`] here. The presentation
//! layer subscribes and refreshes its views, instead of observing the
//! collections directly. Everything runs on the single logic thread, so
//! delivery is synchronous with the mutating call.

use std::cell::RefCell;
use std::sync::mpsc::{channel, Receiver, Sender};

use uuid::Uuid;

/// Which entity collection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Genre,
    Book,
    Member,
    Inventory,
    Loan,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityKind::Author => "Author",
            EntityKind::Genre => "Genre",
            EntityKind::Book => "Book",
            EntityKind::Member => "Member",
            EntityKind::Inventory => "Inventory",
            EntityKind::Loan => "Loan",
        };
        write!(f, "{}", label)
    }
}

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added,
    Updated,
    Removed,
}

/// A single committed mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: EntityKind,
    pub change: Change,
    pub id: Uuid,
}

impl ChangeEvent {
    pub fn new(kind: EntityKind, change: Change, id: Uuid) -> Self {
        Self { kind, change, id }
    }
}

/// Synchronous publish/subscribe bus for change events
#[derive(Default)]
pub struct EventBus {
    subscribers: RefCell<Vec<Sender<ChangeEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    /// Deliver an event to every live subscriber, pruning dropped ones
    pub fn publish(&self, event: ChangeEvent) {
        self.subscribers
            .borrow_mut()
            .retain(|subscriber| subscriber.send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_all_subscribers() {
        let bus = EventBus::new();
        let rx1 = bus.subscribe();
        let rx2 = bus.subscribe();

        let event = ChangeEvent::new(EntityKind::Book, Change::Added, Uuid::new_v4());
        bus.publish(event);

        assert_eq!(rx1.try_recv().unwrap(), event);
        assert_eq!(rx2.try_recv().unwrap(), event);
    }

    #[test]
    fn prunes_dropped_subscribers() {
        let bus = EventBus::new();
        let rx = bus.subscribe();
        drop(rx);

        bus.publish(ChangeEvent::new(EntityKind::Loan, Change::Removed, Uuid::new_v4()));
        assert!(bus.subscribers.borrow().is_empty());
    }
}
