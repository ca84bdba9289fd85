//! Month Grid Component
//!
//! Six weeks of day cells. A day cell is both a click target for new
//! tasks and a drop target for dragged events.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use crate::calendar::dates::today;
use crate::calendar::grid::{events_on_day, month_cells};
use crate::calendar::intents::DropTarget;
use crate::calendar::locale::WEEKDAY_SHORT;
use crate::components::{CalendarHandlers, EventChip};
use crate::context::AppContext;
use crate::store::{store_events, use_app_store};

#[component]
pub fn MonthGrid(handlers: CalendarHandlers, #[prop(into)] on_day_click: Callback<NaiveDate>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="month-grid">
            <div class="weekday-row">
                {WEEKDAY_SHORT.iter().map(|label| view! { <div class="weekday-label">{*label}</div> }).collect_view()}
            </div>
            <div class="day-cells">
                {move || {
                    let focus = ctx.focus_date.get();
                    month_cells(focus)
                        .into_iter()
                        .map(|day| {
                            let in_month = day.month() == focus.month();
                            view! { <DayCell day=day in_month=in_month handlers=handlers on_day_click=on_day_click /> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn DayCell(
    day: NaiveDate,
    in_month: bool,
    handlers: CalendarHandlers,
    on_day_click: Callback<NaiveDate>,
) -> impl IntoView {
    let store = use_app_store();
    let dnd = handlers.dnd;
    let on_mouseenter = make_on_target_mouseenter(dnd, DropTarget::Day(day));
    let on_mouseleave = make_on_mouseleave(dnd);

    let class = move || {
        let mut c = String::from("day-cell");
        if !in_month { c.push_str(" other-month"); }
        if day == today() { c.push_str(" today"); }
        if dnd.drop_target_read.get() == Some(DropTarget::Day(day)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=move |_| on_day_click.run(day)
        >
            <span class="day-number">{day.day()}</span>
            <div class="day-events">
                {move || {
                    events_on_day(&store_events(&store), day)
                        .into_iter()
                        .map(|event| view! { <EventChip event=event handlers=handlers /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
