//! Event Content Component
//!
//! One event inside a day cell or time slot: status marker, title and
//! delete icon. The chip itself is the drag handle.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::calendar::intents::{DropTarget, EventDecoration};
use crate::components::DeleteConfirmButton;
use crate::models::CalendarEvent;

/// Intent handlers shared by every grid cell
#[derive(Clone, Copy)]
pub struct CalendarHandlers {
    pub dnd: DndSignals<DropTarget>,
    pub on_toggle: Callback<u32>,
    pub on_delete: Callback<u32>,
}

#[component]
pub fn EventChip(event: CalendarEvent, handlers: CalendarHandlers) -> impl IntoView {
    let id = event.id;
    let dnd = handlers.dnd;
    let on_mousedown = make_on_mousedown(dnd, id);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    view! {
        <div
            class=move || if is_dragging() { "event-chip dragging" } else { "event-chip" }
            on:mousedown=on_mousedown
            // Clicking an event never counts as clicking its date
            on:click=|ev| ev.stop_propagation()
        >
            <EventContent event=event handlers=handlers />
        </div>
    }
}

#[component]
fn EventContent(event: CalendarEvent, handlers: CalendarHandlers) -> impl IntoView {
    let id = event.id;
    let decoration = EventDecoration::for_event(&event);
    let on_toggle = handlers.on_toggle;
    let on_delete = handlers.on_delete;

    view! {
        <button
            class=decoration.marker_class
            title=decoration.marker_label
            aria-label=decoration.marker_label
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(id);
            }
        ></button>
        <span class=decoration.title_class>{event.title}</span>
        <DeleteConfirmButton
            button_class="event-delete-btn"
            on_confirm=Callback::new(move |_| on_delete.run(id))
        />
    }
}
