//! Callback bus for trigger-reload notifications.
//!
//! The original app used a process-global event emitter so UI effects could
//! react to reclassification. Here the bus is a plain value owned by the
//! composing service: subscribers register callbacks, `publish` invokes
//! them in registration order.

/// Event published when a brand's triggers or profile change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    pub brand_id: String,
    /// What changed, e.g. `profile-updated` or `triggers-reloaded`.
    pub kind: String,
}

type Subscriber = Box<dyn Fn(&TriggerEvent) + Send>;

/// Ordered list of subscribers, invoked synchronously on publish.
#[derive(Default)]
pub struct TriggerBus {
    subscribers: Vec<Subscriber>,
}

impl TriggerBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&TriggerEvent) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Deliver `event` to every subscriber, synchronously.
    pub fn publish(&self, event: &TriggerEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for TriggerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
