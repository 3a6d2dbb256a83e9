use crate::connection::{Subscriber, SubscriptionId};
use dashmap::DashMap;
use log::*;
use std::sync::Arc;

/// Single-topic publish/subscribe bus for chat messages.
///
/// Built once at startup and shared through `Arc`. All methods take `&self`;
/// the subscriber set is a `DashMap` so registrations from concurrent
/// connections never need an outer lock.
pub struct Bus {
    subscribers: DashMap<SubscriptionId, Arc<dyn Subscriber>>,
}

impl Bus {
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
        }
    }

    /// Register a subscriber for every future message - O(1)
    pub fn subscribe<S>(&self, subscriber: S) -> SubscriptionId
    where
        S: Subscriber + 'static,
    {
        let subscription_id = SubscriptionId::new();
        self.subscribers
            .insert(subscription_id.clone(), Arc::new(subscriber));

        debug!(
            "Subscribed {} ({} active)",
            subscription_id.as_str(),
            self.subscribers.len()
        );
        subscription_id
    }

    /// Register a subscriber and tie the registration to the returned guard.
    pub fn subscribe_guarded<S>(self: &Arc<Self>, subscriber: S) -> Subscription
    where
        S: Subscriber + 'static,
    {
        let id = self.subscribe(subscriber);
        Subscription {
            bus: Arc::clone(self),
            id,
        }
    }

    /// Remove a subscriber - O(1). Unknown or already removed ids are ignored.
    pub fn unsubscribe(&self, subscription_id: &SubscriptionId) {
        if self.subscribers.remove(subscription_id).is_some() {
            debug!(
                "Unsubscribed {} ({} active)",
                subscription_id.as_str(),
                self.subscribers.len()
            );
        }
    }

    /// Deliver `message` to every subscriber registered right now - O(n).
    ///
    /// The set is snapshotted before delivery so no shard lock is held while a
    /// subscriber runs. Registrations racing with this call are either in the
    /// snapshot or not; each snapshot entry gets the message exactly once.
    /// Subscribers that fail to take the message are removed.
    pub fn publish(&self, message: &str) {
        let recipients: Vec<(SubscriptionId, Arc<dyn Subscriber>)> = self
            .subscribers
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();

        trace!("Publishing chat message to {} subscriber(s)", recipients.len());

        for (subscription_id, subscriber) in recipients {
            if let Err(e) = subscriber.deliver(message) {
                warn!(
                    "Failed to deliver message to {}: {}. Removing subscriber.",
                    subscription_id.as_str(),
                    e
                );
                self.unsubscribe(&subscription_id);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration guard returned by [`Bus::subscribe_guarded`].
///
/// Dropping it unsubscribes. Streaming responses own one so that closing the
/// connection, for whatever reason, releases the subscriber.
pub struct Subscription {
    bus: Arc<Bus>,
    id: SubscriptionId,
}

impl Subscription {
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;
    use crate::error::Error;
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    /// Subscriber that records what it was given.
    #[derive(Clone, Default)]
    struct Recorder {
        received: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn messages(&self) -> Vec<String> {
            self.received.lock().unwrap().clone()
        }
    }

    impl Subscriber for Recorder {
        fn deliver(&self, message: &str) -> Result<(), Error> {
            self.received.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_a_no_op() {
        let bus = Bus::new();
        bus.publish("nobody listening");
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_publish_fans_out_once_to_every_subscriber() {
        let bus = Bus::new();
        let recorders: Vec<Recorder> = (0..5).map(|_| Recorder::default()).collect();
        for recorder in &recorders {
            bus.subscribe(recorder.clone());
        }

        bus.publish("X");

        for recorder in &recorders {
            assert_eq!(recorder.messages(), vec!["X".to_string()]);
        }
    }

    #[test]
    fn test_late_subscriber_does_not_see_earlier_messages() {
        let bus = Bus::new();
        let early = Recorder::default();
        bus.subscribe(early.clone());

        bus.publish("before");
        let late = Recorder::default();
        bus.subscribe(late.clone());
        bus.publish("after");

        assert_eq!(early.messages(), vec!["before", "after"]);
        assert_eq!(late.messages(), vec!["after"]);
    }

    #[test]
    fn test_messages_arrive_in_publish_order() {
        let bus = Bus::new();
        let recorder = Recorder::default();
        bus.subscribe(recorder.clone());

        bus.publish("A");
        bus.publish("B");

        assert_eq!(recorder.messages(), vec!["A", "B"]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let bus = Bus::new();
        let keep = bus.subscribe(Recorder::default());
        let drop_me = bus.subscribe(Recorder::default());
        assert_eq!(bus.subscriber_count(), 2);

        bus.unsubscribe(&drop_me);
        bus.unsubscribe(&drop_me);
        bus.unsubscribe(&SubscriptionId::new());

        assert_eq!(bus.subscriber_count(), 1);
        bus.unsubscribe(&keep);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribed_subscriber_stops_receiving() {
        let bus = Bus::new();
        let recorder = Recorder::default();
        let id = bus.subscribe(recorder.clone());

        bus.publish("one");
        bus.unsubscribe(&id);
        bus.publish("two");

        assert_eq!(recorder.messages(), vec!["one"]);
    }

    #[test]
    fn test_failing_subscriber_is_removed() {
        let bus = Bus::new();
        let healthy = Recorder::default();
        bus.subscribe(healthy.clone());
        bus.subscribe(|_: &str| -> Result<(), Error> { Err(Error::connection_closed()) });
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish("hello");

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(healthy.messages(), vec!["hello"]);
    }

    #[test]
    fn test_closed_connection_is_removed_on_next_publish() {
        let bus = Bus::new();
        let (tx, rx) = mpsc::unbounded_channel();
        bus.subscribe(Connection::new(tx));
        drop(rx);

        bus.publish("anyone there?");

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_itself_during_publish() {
        let bus = Arc::new(Bus::new());
        let own_id: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let bus_in_callback = Arc::clone(&bus);
        let id_in_callback = Arc::clone(&own_id);
        let id = bus.subscribe(move |_: &str| -> Result<(), Error> {
            if let Some(id) = id_in_callback.lock().unwrap().as_ref() {
                bus_in_callback.unsubscribe(id);
            }
            Ok(())
        });
        *own_id.lock().unwrap() = Some(id);

        bus.publish("bye");

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_dropping_subscription_guard_unsubscribes() {
        let bus = Arc::new(Bus::new());
        let recorder = Recorder::default();
        let subscription = bus.subscribe_guarded(recorder.clone());
        assert_eq!(bus.subscriber_count(), 1);

        for i in 0..10 {
            bus.publish(&format!("message {i}"));
        }
        drop(subscription);

        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(recorder.messages().len(), 10);
    }

    #[test]
    fn test_explicit_unsubscribe_before_guard_drop_is_harmless() {
        let bus = Arc::new(Bus::new());
        let subscription = bus.subscribe_guarded(Recorder::default());
        bus.unsubscribe(subscription.id());
        drop(subscription);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_subscribe_and_publish() {
        let bus = Arc::new(Bus::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let bus = Arc::clone(&bus);
            handles.push(tokio::spawn(async move {
                let recorder = Recorder::default();
                let subscription = bus.subscribe_guarded(recorder.clone());
                bus.publish("ping");
                drop(subscription);
                recorder.messages()
            }));
        }

        for handle in handles {
            let messages = handle.await.unwrap();
            // At least its own publish, at most one copy of each task's publish.
            assert!(!messages.is_empty());
            assert!(messages.len() <= 8);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }
}
