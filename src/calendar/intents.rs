//! User Intents
//!
//! Turns clicks and drops into backend requests. Kept free of signals so the
//! rules can be checked without a webview.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::calendar::dates::Stamp;
use crate::models::CalendarEvent;

/// Where a dragged event was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Month cell: shifts by whole days, keeping any time of day
    Day(NaiveDate),
    /// All-day row of the time grid: the event becomes all-day
    AllDay(NaiveDate),
    /// Hour slot of the time grid
    Slot(NaiveDateTime),
}

/// Arguments for `create_event`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateEventArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    #[serde(rename = "allDay")]
    pub all_day: bool,
}

/// Arguments for `update_event_date`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescheduleArgs {
    pub id: u32,
    pub start: String,
    pub end: Option<String>,
}

/// Date click: an all-day event on `day`, or nothing when the prompt
/// was cancelled or left blank.
pub fn create_request(day: NaiveDate, title: Option<&str>) -> Option<CreateEventArgs> {
    let title = title?.trim();
    if title.is_empty() {
        return None;
    }
    let date = Stamp::Date(day).to_string();
    Some(CreateEventArgs {
        title: title.to_string(),
        start: date.clone(),
        end: Some(date),
        all_day: true,
    })
}

/// New start/end for a drop, `None` when the event would not move.
/// A missing end is sent as the new start.
pub fn reschedule_for_drop(event: &CalendarEvent, target: DropTarget) -> Option<RescheduleArgs> {
    let start = event.start_stamp()?;
    let end = event.end_stamp();

    let (new_start, new_end) = match target {
        DropTarget::Day(day) => {
            let shift = (day - start.date()).num_days();
            if shift == 0 {
                return None;
            }
            let new_start = start.shift_days(shift);
            (new_start, end.map(|e| e.shift_days(shift)).unwrap_or(new_start))
        }
        DropTarget::AllDay(day) => {
            if !event.is_timed() && start.date() == day {
                return None;
            }
            let shift = (day - start.date()).num_days();
            let new_end = end
                .map(|e| e.shift_days(shift).date().max(day))
                .unwrap_or(day);
            (Stamp::Date(day), Stamp::Date(new_end))
        }
        DropTarget::Slot(slot) => {
            if event.is_timed() && start.as_datetime() == slot {
                return None;
            }
            let duration = end
                .map(|e| e.as_datetime() - start.as_datetime())
                .unwrap_or_else(Duration::zero)
                .max(Duration::zero());
            (Stamp::DateTime(slot), Stamp::DateTime(slot + duration))
        }
    };

    Some(RescheduleArgs {
        id: event.id,
        start: new_start.to_string(),
        end: Some(new_end.to_string()),
    })
}

/// Local projection of a reschedule, shown before the backend answers
pub fn apply_reschedule(event: &CalendarEvent, args: &RescheduleArgs) -> CalendarEvent {
    let all_day = matches!(Stamp::parse(&args.start), Some(Stamp::Date(_)));
    CalendarEvent {
        start: args.start.clone(),
        end: args.end.clone(),
        all_day,
        ..event.clone()
    }
}

/// Position of an event taken before an optimistic move
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMove {
    id: u32,
    start: String,
    end: Option<String>,
    all_day: bool,
}

impl PendingMove {
    /// Apply `args` to the matching event and keep its previous position
    pub fn begin(events: &mut [CalendarEvent], args: &RescheduleArgs) -> Option<Self> {
        let slot = events.iter_mut().find(|e| e.id == args.id)?;
        let pending = Self {
            id: slot.id,
            start: slot.start.clone(),
            end: slot.end.clone(),
            all_day: slot.all_day,
        };
        *slot = apply_reschedule(slot, args);
        Some(pending)
    }

    pub fn event_id(&self) -> u32 {
        self.id
    }

    /// Put the old position back; other fields keep their current values.
    /// No-op if the event is gone.
    pub fn revert(self, events: &mut [CalendarEvent]) {
        if let Some(slot) = events.iter_mut().find(|e| e.id == self.id) {
            slot.start = self.start;
            slot.end = self.end;
            slot.all_day = self.all_day;
        }
    }
}

/// CSS classes and label for an event's status marker and title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDecoration {
    pub marker_class: &'static str,
    pub title_class: &'static str,
    pub marker_label: &'static str,
}

impl EventDecoration {
    pub fn for_event(event: &CalendarEvent) -> Self {
        use crate::calendar::locale::{MARK_DONE, MARK_PENDING};

        if event.completed {
            Self {
                marker_class: "status-marker filled",
                title_class: "event-title completed",
                marker_label: MARK_PENDING,
            }
        } else {
            Self {
                marker_class: "status-marker outlined",
                title_class: "event-title",
                marker_label: MARK_DONE,
            }
        }
    }

    pub fn is_struck(&self) -> bool {
        self.title_class.ends_with("completed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(start: &str, end: Option<&str>, all_day: bool) -> CalendarEvent {
        CalendarEvent {
            id: 7,
            title: "Llamar".to_string(),
            start: start.to_string(),
            end: end.map(str::to_string),
            all_day,
            completed: false,
        }
    }

    #[test]
    fn test_create_request_all_day_on_clicked_date() {
        let args = create_request(date(2024, 5, 2), Some("  Comprar pan ")).unwrap();
        assert_eq!(args.title, "Comprar pan");
        assert_eq!(args.start, "2024-05-02");
        assert_eq!(args.end.as_deref(), Some("2024-05-02"));
        assert!(args.all_day);
    }

    #[test]
    fn test_create_request_skipped_for_empty_or_cancelled() {
        assert_eq!(create_request(date(2024, 5, 2), None), None);
        assert_eq!(create_request(date(2024, 5, 2), Some("")), None);
        assert_eq!(create_request(date(2024, 5, 2), Some("   ")), None);
    }

    #[test]
    fn test_create_args_wire_names() {
        let args = create_request(date(2024, 5, 2), Some("x")).unwrap();
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["allDay"], true);
        assert!(json.get("all_day").is_none());
    }

    #[test]
    fn test_day_drop_without_end_sends_new_date_as_end() {
        let args = reschedule_for_drop(&event("2024-05-01", None, true), DropTarget::Day(date(2024, 5, 10))).unwrap();
        assert_eq!(args.id, 7);
        assert_eq!(args.start, "2024-05-10");
        assert_eq!(args.end.as_deref(), Some("2024-05-10"));
    }

    #[test]
    fn test_day_drop_shifts_span_and_keeps_time() {
        let multi = event("2024-05-01", Some("2024-05-03"), true);
        let args = reschedule_for_drop(&multi, DropTarget::Day(date(2024, 4, 29))).unwrap();
        assert_eq!((args.start.as_str(), args.end.as_deref()), ("2024-04-29", Some("2024-05-01")));

        let timed = event("2024-05-01T09:30:00", Some("2024-05-01T10:00:00"), false);
        let args = reschedule_for_drop(&timed, DropTarget::Day(date(2024, 5, 2))).unwrap();
        assert_eq!(args.start, "2024-05-02T09:30:00");
        assert_eq!(args.end.as_deref(), Some("2024-05-02T10:00:00"));
    }

    #[test]
    fn test_drop_on_current_position_issues_nothing() {
        let day_event = event("2024-05-01", None, true);
        assert_eq!(reschedule_for_drop(&day_event, DropTarget::Day(date(2024, 5, 1))), None);

        let timed = event("2024-05-01T09:00:00", None, false);
        let slot = date(2024, 5, 1).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(reschedule_for_drop(&timed, DropTarget::Slot(slot)), None);
    }

    #[test]
    fn test_slot_drop_keeps_duration_and_becomes_timed() {
        let timed = event("2024-05-01T09:00:00", Some("2024-05-01T10:30:00"), false);
        let slot = date(2024, 5, 3).and_hms_opt(14, 0, 0).unwrap();
        let args = reschedule_for_drop(&timed, DropTarget::Slot(slot)).unwrap();
        assert_eq!(args.start, "2024-05-03T14:00:00");
        assert_eq!(args.end.as_deref(), Some("2024-05-03T15:30:00"));

        let all_day = event("2024-05-01", None, true);
        let args = reschedule_for_drop(&all_day, DropTarget::Slot(slot)).unwrap();
        assert_eq!(args.start, "2024-05-03T14:00:00");
        assert_eq!(args.end.as_deref(), Some("2024-05-03T14:00:00"));
        assert!(!apply_reschedule(&all_day, &args).all_day);
    }

    #[test]
    fn test_unparseable_start_issues_nothing() {
        assert_eq!(reschedule_for_drop(&event("", None, true), DropTarget::Day(date(2024, 5, 1))), None);
    }

    #[test]
    fn test_pending_move_revert_restores_snapshot() {
        let original = event("2024-05-01", None, true);
        let other = CalendarEvent { id: 8, ..original.clone() };
        let mut events = vec![original.clone(), other.clone()];

        let args = reschedule_for_drop(&original, DropTarget::Day(date(2024, 5, 4))).unwrap();
        let pending = PendingMove::begin(&mut events, &args).unwrap();
        assert_eq!(pending.event_id(), 7);
        assert_eq!(events[0].start, "2024-05-04");
        assert_eq!(events[1], other);

        pending.revert(&mut events);
        assert_eq!(events, vec![original, other]);
    }

    #[test]
    fn test_revert_keeps_completion_changed_during_move() {
        let original = event("2024-05-01", None, true);
        let mut events = vec![original.clone()];

        let args = reschedule_for_drop(&original, DropTarget::Day(date(2024, 5, 4))).unwrap();
        let pending = PendingMove::begin(&mut events, &args).unwrap();
        // toggle answered while the reschedule was in flight
        events[0].completed = true;

        pending.revert(&mut events);
        assert_eq!(events[0].start, "2024-05-01");
        assert_eq!(events[0].end, None);
        assert!(events[0].completed);
    }

    #[test]
    fn test_all_day_row_drop_makes_timed_event_all_day() {
        let timed = event("2024-05-01T09:00:00", Some("2024-05-01T10:00:00"), false);

        let same_day = reschedule_for_drop(&timed, DropTarget::AllDay(date(2024, 5, 1))).unwrap();
        assert_eq!(same_day.start, "2024-05-01");
        assert_eq!(same_day.end.as_deref(), Some("2024-05-01"));
        assert!(apply_reschedule(&timed, &same_day).all_day);

        let next_day = reschedule_for_drop(&timed, DropTarget::AllDay(date(2024, 5, 2))).unwrap();
        assert_eq!(next_day.start, "2024-05-02");
        assert_eq!(next_day.end.as_deref(), Some("2024-05-02"));
    }

    #[test]
    fn test_all_day_row_drop_shifts_multi_day_span() {
        let multi = event("2024-05-01", Some("2024-05-03"), true);
        assert_eq!(reschedule_for_drop(&multi, DropTarget::AllDay(date(2024, 5, 1))), None);

        let args = reschedule_for_drop(&multi, DropTarget::AllDay(date(2024, 5, 6))).unwrap();
        assert_eq!(args.start, "2024-05-06");
        assert_eq!(args.end.as_deref(), Some("2024-05-08"));
    }

    #[test]
    fn test_pending_move_unknown_event() {
        let mut events = vec![event("2024-05-01", None, true)];
        let args = RescheduleArgs { id: 99, start: "2024-05-02".into(), end: None };
        assert_eq!(PendingMove::begin(&mut events, &args), None);
    }

    #[test]
    fn test_decoration_follows_completion() {
        let mut e = event("2024-05-01", None, true);
        let pending = EventDecoration::for_event(&e);
        assert!(!pending.is_struck());
        assert!(pending.marker_class.contains("outlined"));

        e.completed = true;
        let done = EventDecoration::for_event(&e);
        assert!(done.is_struck());
        assert!(done.marker_class.contains("filled"));
    }
}
