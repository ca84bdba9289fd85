//! Time Grid Component
//!
//! Week and day layouts: an all-day row, then one row per hour.

use chrono::{Datelike, NaiveDate, Timelike};
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use crate::calendar::dates::today;
use crate::calendar::grid::{all_day_events_on, hour_label, slot_start, time_grid_days, timed_events_at, HOURS};
use crate::calendar::intents::DropTarget;
use crate::calendar::locale::{ALL_DAY_LABEL, WEEKDAY_SHORT};
use crate::components::{CalendarHandlers, EventChip};
use crate::context::AppContext;
use crate::store::{store_events, use_app_store};

#[component]
pub fn TimeGrid(handlers: CalendarHandlers, #[prop(into)] on_day_click: Callback<NaiveDate>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let days = move || time_grid_days(ctx.view_mode.get(), ctx.focus_date.get());

    view! {
        <table class="time-grid">
            <thead>
                <tr>
                    <th class="hour-gutter"></th>
                    {move || days().into_iter().map(|day| {
                        let weekday = WEEKDAY_SHORT[day.weekday().num_days_from_monday() as usize];
                        let class = if day == today() { "day-header today" } else { "day-header" };
                        view! { <th class=class>{format!("{} {}", weekday, day.day())}</th> }
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <tr class="all-day-row">
                    <td class="hour-gutter">{ALL_DAY_LABEL}</td>
                    {move || days().into_iter().map(|day| view! {
                        <GridSlot target=DropTarget::AllDay(day) day=day handlers=handlers on_day_click=on_day_click />
                    }).collect_view()}
                </tr>
                {HOURS.map(|hour| view! {
                    <tr class="hour-row">
                        <td class="hour-gutter">{hour_label(hour)}</td>
                        {move || days().into_iter().map(|day| view! {
                            <GridSlot
                                target=DropTarget::Slot(slot_start(day, hour))
                                day=day
                                handlers=handlers
                                on_day_click=on_day_click
                            />
                        }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

/// One cell of the time grid; the all-day row uses `DropTarget::AllDay`
#[component]
fn GridSlot(
    target: DropTarget,
    day: NaiveDate,
    handlers: CalendarHandlers,
    on_day_click: Callback<NaiveDate>,
) -> impl IntoView {
    let store = use_app_store();
    let dnd = handlers.dnd;
    let on_mouseenter = make_on_target_mouseenter(dnd, target);
    let on_mouseleave = make_on_mouseleave(dnd);

    let class = move || {
        let mut c = String::from("grid-slot");
        if dnd.drop_target_read.get() == Some(target) { c.push_str(" drop-target"); }
        c
    };

    let slot_events = move || {
        let events = store_events(&store);
        match target {
            DropTarget::Day(day) | DropTarget::AllDay(day) => all_day_events_on(&events, day),
            DropTarget::Slot(slot) => timed_events_at(&events, day, slot.hour()),
        }
    };

    view! {
        <td
            class=class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=move |_| on_day_click.run(day)
        >
            {move || slot_events()
                .into_iter()
                .map(|event| view! { <EventChip event=event handlers=handlers /> })
                .collect_view()}
        </td>
    }
}
