//! Repository Integration Tests
//!
//! EventRepository and PreferencesRepository against in-memory SQLite.

use crate::domain::{CalendarPreferences, CalendarView, DomainError, Event, EventTime};
use crate::repository::{DbState, EventRepository, PreferencesRepository, Repository};

async fn setup_test_db() -> (DbState, EventRepository) {
    let db_state = DbState::open_in_memory().await.expect("Failed to init test DB");
    let repo = EventRepository::new(db_state.conn.clone());
    (db_state, repo)
}

fn all_day(title: &str, day: &str) -> Event {
    let start = EventTime::parse(day).unwrap();
    Event::new(0, title.to_string(), start, Some(start), true)
}

#[tokio::test]
async fn test_create_event() {
    let (_db, repo) = setup_test_db().await;

    let created = repo.create(&all_day("Comprar pan", "2024-05-01")).await.expect("Failed to create");

    assert!(created.id > 0);
    assert_eq!(created.title, "Comprar pan");
    assert!(!created.completed);
    assert!(created.all_day);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_find_by_id() {
    let (_db, repo) = setup_test_db().await;

    let created = repo.create(&all_day("Find me", "2024-05-02")).await.unwrap();

    let found = repo.find_by_id(created.id).await.expect("Find failed");
    assert_eq!(found.map(|e| e.title), Some("Find me".to_string()));
    assert!(repo.find_by_id(created.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_by_start() {
    let (_db, repo) = setup_test_db().await;

    repo.create(&all_day("later", "2024-05-09")).await.unwrap();
    repo.create(&all_day("earlier", "2024-05-01")).await.unwrap();
    let timed = EventTime::parse("2024-05-01T08:00:00").unwrap();
    repo.create(&Event::new(0, "timed".to_string(), timed, None, false)).await.unwrap();

    let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["earlier", "timed", "later"]);
}

#[tokio::test]
async fn test_update_event() {
    let (_db, repo) = setup_test_db().await;

    let mut created = repo.create(&all_day("Original", "2024-05-01")).await.unwrap();
    created.completed = true;
    created.start = EventTime::parse("2024-05-03T10:00:00").unwrap();
    created.end = None;
    created.all_day = false;

    let updated = repo.update(&created).await.expect("Update failed");
    assert!(updated.completed);
    assert_eq!(updated.start.to_string(), "2024-05-03T10:00:00");
    assert_eq!(updated.end, None);
    assert!(!updated.all_day);
}

#[tokio::test]
async fn test_update_missing_event_is_not_found() {
    let (_db, repo) = setup_test_db().await;

    let mut ghost = all_day("ghost", "2024-05-01");
    ghost.id = 42;
    assert!(matches!(repo.update(&ghost).await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_event() {
    let (_db, repo) = setup_test_db().await;

    let keep = repo.create(&all_day("keep", "2024-05-01")).await.unwrap();
    let doomed = repo.create(&all_day("doomed", "2024-05-01")).await.unwrap();

    repo.delete(doomed.id).await.expect("Delete failed");

    assert!(repo.find_by_id(doomed.id).await.unwrap().is_none());
    assert!(repo.find_by_id(keep.id).await.unwrap().is_some());
    assert!(matches!(repo.delete(doomed.id).await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_preferences_default_then_saved() {
    let (db, _repo) = setup_test_db().await;
    let prefs = PreferencesRepository::new(db.conn.clone());

    assert_eq!(prefs.load().await.unwrap(), CalendarPreferences::default());

    let week = CalendarPreferences { initial_view: CalendarView::Week };
    prefs.save(&week).await.unwrap();
    prefs.save(&week).await.unwrap();
    assert_eq!(prefs.load().await.unwrap().initial_view, CalendarView::Week);
}
