//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::calendar::intents::{PendingMove, RescheduleArgs};
use crate::models::CalendarEvent;

/// A message shown in the alert banner
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    /// Increments per alert so a stale hide timer leaves a newer one alone
    pub id: u32,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Projection of the backend's events, replaced on every change
    pub events: Vec<CalendarEvent>,
    /// Current alert, if any
    pub alert: Option<Alert>,
    alert_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive read of all events
pub fn store_events(store: &AppStore) -> Vec<CalendarEvent> {
    store.events().get()
}

pub fn store_set_events(store: &AppStore, events: Vec<CalendarEvent>) {
    store.events().set(events);
}

/// Apply a reload answer only if no newer reload was requested meanwhile;
/// a late answer could bring back a deleted event.
pub fn store_apply_reload(store: &AppStore, requested: u32, latest: u32, events: Vec<CalendarEvent>) -> bool {
    if requested != latest {
        return false;
    }
    store_set_events(store, events);
    true
}

/// Update an event in the store by ID
pub fn store_update_event(store: &AppStore, updated: CalendarEvent) {
    if let Some(event) = store.events().write().iter_mut().find(|e| e.id == updated.id) {
        *event = updated;
    }
}

pub fn store_find_event(store: &AppStore, id: u32) -> Option<CalendarEvent> {
    store.events().with_untracked(|events| events.iter().find(|e| e.id == id).cloned())
}

/// Move an event locally before the backend confirms
pub fn store_begin_move(store: &AppStore, args: &RescheduleArgs) -> Option<PendingMove> {
    PendingMove::begin(&mut store.events().write(), args)
}

pub fn store_revert_move(store: &AppStore, pending: PendingMove) {
    pending.revert(&mut store.events().write());
}

/// Backend refused a move: put the event back and tell the user
pub fn store_reject_move(store: &AppStore, pending: PendingMove, message: &str) -> u32 {
    store_revert_move(store, pending);
    store_set_alert(store, message)
}

pub fn store_alert(store: &AppStore) -> Option<Alert> {
    store.alert().get()
}

/// Show a message; returns its id for `store_clear_alert_if`
pub fn store_set_alert(store: &AppStore, message: impl Into<String>) -> u32 {
    let id = store.alert_seq().get_untracked().wrapping_add(1);
    store.alert_seq().set(id);
    store.alert().set(Some(Alert { id, message: message.into() }));
    id
}

pub fn store_clear_alert(store: &AppStore) {
    store.alert().set(None);
}

/// Hide the alert only if it is still the one with `id`
pub fn store_clear_alert_if(store: &AppStore, id: u32) {
    let current = store.alert().with_untracked(|alert| alert.as_ref().map(|a| a.id));
    if current == Some(id) {
        store.alert().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::intents::{reschedule_for_drop, DropTarget};
    use crate::calendar::locale::{ALERT_DELETE_FAILED, ALERT_RESCHEDULE_FAILED};
    use chrono::NaiveDate;

    fn event(id: u32, start: &str) -> CalendarEvent {
        CalendarEvent {
            id,
            title: format!("tarea {}", id),
            start: start.to_string(),
            end: None,
            all_day: true,
            completed: false,
        }
    }

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(AppState::default())));
    }

    #[test]
    fn test_rejected_move_reverts_and_alerts() {
        with_store(|store| {
            let original = event(1, "2024-05-01");
            store_set_events(&store, vec![original.clone(), event(2, "2024-05-02")]);

            let target = DropTarget::Day(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
            let args = reschedule_for_drop(&original, target).unwrap();
            let pending = store_begin_move(&store, &args).unwrap();
            assert_eq!(store_find_event(&store, 1).unwrap().start, "2024-05-09");

            store_reject_move(&store, pending, ALERT_RESCHEDULE_FAILED);

            assert_eq!(store_find_event(&store, 1), Some(original));
            assert_eq!(store_find_event(&store, 2).unwrap().start, "2024-05-02");
            assert_eq!(store_alert(&store).map(|a| a.message), Some(ALERT_RESCHEDULE_FAILED.to_string()));
        });
    }

    #[test]
    fn test_stale_hide_timer_keeps_newer_alert() {
        with_store(|store| {
            let first = store_set_alert(&store, ALERT_RESCHEDULE_FAILED);
            let second = store_set_alert(&store, ALERT_DELETE_FAILED);
            assert_ne!(first, second);

            store_clear_alert_if(&store, first);
            assert_eq!(store_alert(&store).map(|a| a.message), Some(ALERT_DELETE_FAILED.to_string()));

            store_clear_alert_if(&store, second);
            assert_eq!(store_alert(&store), None);
        });
    }

    #[test]
    fn test_late_reload_answer_is_dropped() {
        with_store(|store| {
            let kept = event(1, "2024-05-01");
            let deleted = event(2, "2024-05-02");

            // reload 2 answered first, without the deleted event
            assert!(store_apply_reload(&store, 2, 2, vec![kept.clone()]));
            // reload 1 answers late, still holding it
            assert!(!store_apply_reload(&store, 1, 2, vec![kept.clone(), deleted]));

            assert_eq!(store_events(&store), vec![kept]);
        });
    }
}
