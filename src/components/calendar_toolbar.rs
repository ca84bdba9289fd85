//! Calendar Toolbar Component
//!
//! prev/next/today on the left, range title in the centre, view switch
//! on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::calendar::grid::{range_start, Direction};
use crate::calendar::locale::{format_title, BUTTON_NEXT, BUTTON_PREV, BUTTON_TODAY};
use crate::calendar::ViewMode;
use crate::commands;
use crate::context::AppContext;
use crate::models::CalendarPreferences;

#[component]
pub fn CalendarToolbar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let title = move || format_title(range_start(ctx.view_mode.get(), ctx.focus_date.get()).into());

    let switch_view = move |mode: ViewMode| {
        if ctx.view_mode.get_untracked() == mode {
            return;
        }
        ctx.choose_view(mode);
        spawn_local(async move {
            if let Err(e) = commands::save_preferences(CalendarPreferences { initial_view: mode }).await {
                web_sys::console::warn_1(&format!("[CAL] Saving view preference failed: {}", e).into());
            }
        });
    };

    view! {
        <div class="calendar-toolbar">
            <div class="toolbar-left">
                <button class="nav-btn" on:click=move |_| ctx.navigate(Direction::Prev)>{BUTTON_PREV}</button>
                <button class="nav-btn" on:click=move |_| ctx.navigate(Direction::Next)>{BUTTON_NEXT}</button>
                <button class="today-btn" on:click=move |_| ctx.go_today()>{BUTTON_TODAY}</button>
            </div>
            <h2 class="toolbar-title">{title}</h2>
            <div class="toolbar-right">
                {ViewMode::ALL.iter().copied().map(|mode| view! {
                    <button
                        class=move || if ctx.view_mode.get() == mode { "view-btn active" } else { "view-btn" }
                        on:click=move |_| switch_view(mode)
                    >
                        {mode.label()}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
