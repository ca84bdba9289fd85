//! Event Service
//!
//! The operations the calendar calls: list, create, toggle, delete and
//! reschedule. Validates input, serialises read-modify-write cycles and
//! publishes a change notice after each successful write.

use tokio::sync::{broadcast, Mutex};

use crate::changes::{ChangeKind, ChangeNotice, Subscription, CHANGE_FEED_CAPACITY};
use crate::domain::{DomainError, DomainResult, Event, EventTime};
use crate::repository::Repository;

pub struct EventService<R> {
    repo: R,
    changes: broadcast::Sender<ChangeNotice>,
    write_lock: Mutex<()>,
}

impl<R: Repository<Event>> EventService<R> {
    pub fn new(repo: R) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self {
            repo,
            changes,
            write_lock: Mutex::new(()),
        }
    }

    /// Subscribe to change notices
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.changes.subscribe())
    }

    /// Current snapshot of all events, ordered by start
    pub async fn list_user_events(&self) -> DomainResult<Vec<Event>> {
        self.repo.list().await
    }

    /// Create a pending event. The title is trimmed and must not be empty.
    pub async fn create_event(
        &self,
        title: &str,
        start: EventTime,
        end: Option<EventTime>,
        all_day: bool,
    ) -> DomainResult<Event> {
        let event = Event::new(0, title.trim().to_string(), start, end, all_day);
        event.validate()?;

        let _guard = self.write_lock.lock().await;
        let created = self.repo.create(&event).await?;
        log::info!("Created event {} on {}", created.id, created.start);
        self.publish(ChangeKind::Created, created.id);
        Ok(created)
    }

    /// Flip the completion flag of a single event
    pub async fn toggle_event_completion(&self, id: u32) -> DomainResult<Event> {
        let _guard = self.write_lock.lock().await;
        let mut event = self.require(id).await?;
        event.toggle_completed();

        let updated = self.repo.update(&event).await?;
        log::info!("Event {} completed={}", id, updated.completed);
        self.publish(ChangeKind::Updated, id);
        Ok(updated)
    }

    pub async fn delete_event(&self, id: u32) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        self.repo.delete(id).await?;
        log::info!("Deleted event {}", id);
        self.publish(ChangeKind::Deleted, id);
        Ok(())
    }

    /// Move an event; a missing end collapses onto the new start
    pub async fn update_event_date(
        &self,
        id: u32,
        start: EventTime,
        end: Option<EventTime>,
    ) -> DomainResult<Event> {
        let _guard = self.write_lock.lock().await;
        let mut event = self.require(id).await?;
        if let Err(e) = event.reschedule(start, end) {
            log::warn!("Rejected reschedule of event {}: {}", id, e);
            return Err(e);
        }

        let updated = self.repo.update(&event).await?;
        log::info!("Rescheduled event {} to {}", id, updated.start);
        self.publish(ChangeKind::Updated, id);
        Ok(updated)
    }

    async fn require(&self, id: u32) -> DomainResult<Event> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Event {}", id)))
    }

    fn publish(&self, kind: ChangeKind, id: u32) {
        // No subscribers is not an error
        let _ = self.changes.send(ChangeNotice::new(kind, id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{DbState, EventRepository};
    use std::time::Duration;

    async fn setup_service() -> EventService<EventRepository> {
        let db = DbState::open_in_memory().await.expect("Failed to init test DB");
        EventService::new(EventRepository::new(db.conn.clone()))
    }

    fn time(raw: &str) -> EventTime {
        EventTime::parse(raw).unwrap()
    }

    async fn assert_quiet(sub: &mut Subscription) {
        let waited = tokio::time::timeout(Duration::from_millis(50), sub.next()).await;
        assert!(waited.is_err(), "unexpected notice: {:?}", waited);
    }

    #[tokio::test]
    async fn test_create_trims_title_and_starts_pending() {
        let service = setup_service().await;
        let day = time("2024-05-01");

        let created = service.create_event("  Llamar a mamá ", day, Some(day), true).await.unwrap();

        assert_eq!(created.title, "Llamar a mamá");
        assert!(!created.completed);
        assert!(created.all_day);
        assert_eq!(service.list_user_events().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title_and_inverted_span() {
        let service = setup_service().await;

        let blank = service.create_event("   ", time("2024-05-01"), None, true).await;
        assert!(matches!(blank, Err(DomainError::InvalidInput(_))));

        let inverted = service
            .create_event("x", time("2024-05-02"), Some(time("2024-05-01")), true)
            .await;
        assert!(inverted.is_err());
        assert!(service.list_user_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_touches_only_target() {
        let service = setup_service().await;
        let day = time("2024-05-01");
        let a = service.create_event("a", day, Some(day), true).await.unwrap();
        let b = service.create_event("b", day, Some(day), true).await.unwrap();

        let toggled = service.toggle_event_completion(a.id).await.unwrap();
        assert!(toggled.completed);

        let events = service.list_user_events().await.unwrap();
        let by_id = |id| events.iter().find(|e| e.id == id).unwrap().completed;
        assert!(by_id(a.id));
        assert!(!by_id(b.id));

        let back = service.toggle_event_completion(a.id).await.unwrap();
        assert!(!back.completed);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = setup_service().await;
        let day = time("2024-05-01");
        let keep = service.create_event("keep", day, Some(day), true).await.unwrap();
        let gone = service.create_event("gone", day, Some(day), true).await.unwrap();

        service.delete_event(gone.id).await.unwrap();

        assert_eq!(service.list_user_events().await.unwrap(), vec![keep]);
        assert!(matches!(service.delete_event(gone.id).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_date_defaults_end_to_start() {
        let service = setup_service().await;
        let day = time("2024-05-01");
        let event = service.create_event("x", day, Some(day), true).await.unwrap();

        let moved = service.update_event_date(event.id, time("2024-05-07"), None).await.unwrap();

        assert_eq!(moved.start, time("2024-05-07"));
        assert_eq!(moved.end, Some(time("2024-05-07")));
        assert!(moved.all_day);
    }

    #[tokio::test]
    async fn test_update_date_rejections_leave_store_untouched() {
        let service = setup_service().await;
        let day = time("2024-05-01");
        let event = service.create_event("x", day, Some(day), true).await.unwrap();

        let inverted = service
            .update_event_date(event.id, time("2024-05-07"), Some(time("2024-05-06")))
            .await;
        assert!(matches!(inverted, Err(DomainError::InvalidInput(_))));

        let missing = service.update_event_date(event.id + 1, time("2024-05-07"), None).await;
        assert!(matches!(missing, Err(DomainError::NotFound(_))));

        assert_eq!(service.list_user_events().await.unwrap(), vec![event]);
    }

    #[tokio::test]
    async fn test_change_feed_one_notice_per_successful_write() {
        let service = setup_service().await;
        let mut sub = service.subscribe();
        let day = time("2024-05-01");

        let event = service.create_event("x", day, Some(day), true).await.unwrap();
        assert_eq!(sub.next().await, Some(ChangeNotice::new(ChangeKind::Created, event.id)));

        service.toggle_event_completion(event.id).await.unwrap();
        assert_eq!(sub.next().await, Some(ChangeNotice::new(ChangeKind::Updated, event.id)));

        let _ = service.update_event_date(event.id, time("2024-05-03"), Some(time("2024-05-02"))).await;
        let _ = service.create_event("", day, None, true).await;
        assert_quiet(&mut sub).await;

        service.delete_event(event.id).await.unwrap();
        assert_eq!(sub.next().await, Some(ChangeNotice::new(ChangeKind::Deleted, event.id)));
        assert_quiet(&mut sub).await;
    }

    #[tokio::test]
    async fn test_concurrent_toggles_are_serialised() {
        let service = std::sync::Arc::new(setup_service().await);
        let day = time("2024-05-01");
        let event = service.create_event("x", day, Some(day), true).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.toggle_event_completion(event.id).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let events = service.list_user_events().await.unwrap();
        assert!(!events[0].completed);
    }
}
