//! Append-only conversation log.

use super::message::Message;
use crate::event::PlaybackEvent;
use tokio::sync::{RwLock, broadcast};

/// Capacity of the event channel; a burst larger than this only lags
/// slow subscribers, it never blocks an append.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// An append-only, ordered sequence of conversation messages.
///
/// Message order is exactly append order; there is no reordering and no
/// deletion. Both the user input handler and the sequence player append
/// here, and every append notifies subscribers so the UI collaborator can
/// re-render the growing log live.
#[derive(Debug)]
pub struct ConversationLog {
    messages: RwLock<Vec<Message>>,
    events: broadcast::Sender<PlaybackEvent>,
}

impl ConversationLog {
    /// Creates a new, empty log.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            messages: RwLock::new(Vec::new()),
            events,
        }
    }

    /// Appends a message to the end of the log and notifies subscribers.
    ///
    /// Always succeeds; appenders are serialized through the log's write
    /// lock, so there are no ordering conflicts.
    pub async fn append(&self, message: Message) {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        // Published while still holding the write lock: subscribers must
        // observe events in exactly the log's append order.
        self.publish(PlaybackEvent::MessageAppended { message });
    }

    /// Returns an owned, point-in-time copy of the log.
    ///
    /// The snapshot reflects state at call time; later appends do not
    /// mutate it.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Returns the number of messages currently in the log.
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Returns whether the log is empty.
    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }

    /// Subscribes to the log's event stream.
    ///
    /// The receiver observes every append plus the playback lifecycle
    /// events published by the playback layer.
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.events.subscribe()
    }

    /// Publishes a lifecycle event on the log's subscription channel.
    ///
    /// Used by the playback layer so that subscribers observe message
    /// appends and session transitions on a single stream. A send with no
    /// live receivers is not an error.
    pub fn publish(&self, event: PlaybackEvent) {
        let _ = self.events.send(event);
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let log = ConversationLog::new();

        log.append(Message::user("first")).await;
        log.append(Message::user("second")).await;
        log.append(Message::user("third")).await;

        let texts: Vec<String> = log
            .snapshot()
            .await
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_snapshot_is_point_in_time() {
        let log = ConversationLog::new();
        log.append(Message::user("before")).await;

        let snapshot = log.snapshot().await;
        log.append(Message::user("after")).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len().await, 2);
    }

    #[tokio::test]
    async fn test_append_notifies_subscribers() {
        let log = ConversationLog::new();
        let mut events = log.subscribe();

        log.append(Message::user("hello")).await;

        match events.recv().await.unwrap() {
            PlaybackEvent::MessageAppended { message } => assert_eq!(message.text, "hello"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_event_order_matches_append_order_under_concurrency() {
        use std::sync::Arc;

        let log = Arc::new(ConversationLog::new());
        let mut events = log.subscribe();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    log.append(Message::user(format!("message {}", i))).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        // Whatever order the appends raced into, the event stream must
        // replay the log in exactly that order.
        for expected in &log.snapshot().await {
            match events.recv().await.unwrap() {
                PlaybackEvent::MessageAppended { message } => assert_eq!(message.id, expected.id),
                other => panic!("unexpected event: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_append_without_subscribers_succeeds() {
        let log = ConversationLog::new();
        log.append(Message::user("nobody listening")).await;
        assert_eq!(log.len().await, 1);
    }
}
