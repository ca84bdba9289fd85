//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::calendar::dates::today;
use crate::calendar::grid::{self, Direction};
use crate::calendar::ViewMode;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload events from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload events from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Active grid layout - read
    pub view_mode: ReadSignal<ViewMode>,
    /// Active grid layout - write
    set_view_mode: WriteSignal<ViewMode>,
    /// Set once the user picks a view; saved preferences no longer apply
    view_chosen: RwSignal<bool>,
    /// Date the visible range is built around - read
    pub focus_date: ReadSignal<NaiveDate>,
    set_focus_date: WriteSignal<NaiveDate>,
    /// Date whose create prompt is open - read
    pub prompt_day: ReadSignal<Option<NaiveDate>>,
    set_prompt_day: WriteSignal<Option<NaiveDate>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (view_mode, set_view_mode) = signal(ViewMode::default());
        let (focus_date, set_focus_date) = signal(today());
        let (prompt_day, set_prompt_day) = signal(None::<NaiveDate>);
        Self {
            reload_trigger,
            set_reload_trigger,
            view_mode,
            set_view_mode,
            view_chosen: RwSignal::new(false),
            focus_date,
            set_focus_date,
            prompt_day,
            set_prompt_day,
        }
    }

    /// Trigger a reload of events
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// View picked in the toolbar
    pub fn choose_view(&self, mode: ViewMode) {
        self.view_chosen.set(true);
        self.set_view_mode.set(mode);
    }

    /// Saved view from preferences; ignored once the user has picked one.
    /// Returns whether it was applied.
    pub fn apply_saved_view(&self, mode: ViewMode) -> bool {
        if self.view_chosen.get_untracked() {
            return false;
        }
        self.set_view_mode.set(mode);
        true
    }

    /// Prev/next by one month, week or day depending on the view
    pub fn navigate(&self, direction: Direction) {
        let mode = self.view_mode.get_untracked();
        self.set_focus_date.update(|focus| *focus = grid::step(mode, *focus, direction));
    }

    pub fn go_today(&self) {
        self.set_focus_date.set(today());
    }

    pub fn open_prompt(&self, day: NaiveDate) {
        self.set_prompt_day.set(Some(day));
    }

    pub fn close_prompt(&self) {
        self.set_prompt_day.set(None);
    }
}
