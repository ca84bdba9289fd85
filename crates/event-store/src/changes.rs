//! Change Feed
//!
//! Every successful write publishes a `ChangeNotice`. Subscribers re-read the
//! event list when one arrives; the notice only says that something changed.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Notices kept for slow subscribers before they are told to resync
pub(crate) const CHANGE_FEED_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    /// Notices were dropped; re-read everything
    Resync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotice {
    pub kind: ChangeKind,
    pub event_id: Option<u32>,
}

impl ChangeNotice {
    pub fn new(kind: ChangeKind, event_id: u32) -> Self {
        Self { kind, event_id: Some(event_id) }
    }

    pub fn resync() -> Self {
        Self { kind: ChangeKind::Resync, event_id: None }
    }
}

/// Live handle on the change feed. Dropping it unsubscribes.
pub struct Subscription {
    rx: broadcast::Receiver<ChangeNotice>,
}

impl Subscription {
    pub(crate) fn new(rx: broadcast::Receiver<ChangeNotice>) -> Self {
        Self { rx }
    }

    /// Wait for the next notice; `None` once the store is gone
    pub async fn next(&mut self) -> Option<ChangeNotice> {
        match self.rx.recv().await {
            Ok(notice) => Some(notice),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                log::warn!("Change subscriber lagged by {} notices, forcing resync", skipped);
                Some(ChangeNotice::resync())
            }
            Err(broadcast::error::RecvError::Closed) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lagging_subscriber_gets_resync() {
        let (tx, rx) = broadcast::channel(2);
        let mut sub = Subscription::new(rx);
        for id in 0..5 {
            tx.send(ChangeNotice::new(ChangeKind::Updated, id)).unwrap();
        }
        assert_eq!(sub.next().await, Some(ChangeNotice::resync()));
        assert_eq!(sub.next().await, Some(ChangeNotice::new(ChangeKind::Updated, 3)));
    }

    #[tokio::test]
    async fn test_closed_feed_ends_subscription() {
        let (tx, rx) = broadcast::channel::<ChangeNotice>(4);
        let mut sub = Subscription::new(rx);
        drop(tx);
        assert_eq!(sub.next().await, None);
    }

    #[test]
    fn test_notice_wire_shape() {
        let json = serde_json::to_string(&ChangeNotice::new(ChangeKind::Deleted, 9)).unwrap();
        assert_eq!(json, r#"{"kind":"deleted","event_id":9}"#);
    }
}
