//! Task Calendar Component
//!
//! Loads events, keeps them in sync with the backend's change feed and
//! turns the four user intents into backend calls.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::calendar::intents::{create_request, reschedule_for_drop, DropTarget};
use crate::calendar::locale::{
    ALERT_CREATE_FAILED, ALERT_DELETE_FAILED, ALERT_RESCHEDULE_FAILED, ALERT_TOGGLE_FAILED,
};
use crate::calendar::ViewMode;
use crate::commands::{self, BackendSubscription, DB_INITIALIZED, EVENTS_CHANGED};
use crate::components::{CalendarHandlers, CalendarToolbar, MonthGrid, TimeGrid, TitlePrompt};
use crate::context::AppContext;
use crate::models::ChangeNotice;
use crate::store::{
    store_apply_reload, store_begin_move, store_find_event, store_reject_move, store_set_alert,
    store_update_event, use_app_store, AppStore,
};

fn log(message: String) {
    web_sys::console::log_1(&message.into());
}

fn report_failure(store: &AppStore, what: &str, error: String, alert: &str) {
    web_sys::console::error_1(&format!("[CAL] {} failed: {}", what, error).into());
    store_set_alert(store, alert);
}

#[component]
pub fn TaskCalendar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    // The list is replaced wholesale on every change
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::list_user_events().await {
                Ok(events) => {
                    let count = events.len();
                    let latest = ctx.reload_trigger.get_untracked();
                    if store_apply_reload(&store, trigger, latest, events) {
                        log(format!("[CAL] Loaded {} events, trigger={}", count, trigger));
                    } else {
                        log(format!("[CAL] Dropped stale load, trigger={} latest={}", trigger, latest));
                    }
                }
                // Expected until the database finishes opening
                Err(e) => log(format!("[CAL] Loading events failed: {}", e)),
            }
        });
    });

    subscribe_to_backend(ctx);

    // Reschedule by drag and drop
    let dnd = create_dnd_signals::<DropTarget>();
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let Some(event) = store_find_event(&store, dragged_id) else { return };
        let Some(args) = reschedule_for_drop(&event, target) else { return };
        log(format!("[DND] Drop: event={}, target={:?}", dragged_id, target));
        let Some(pending) = store_begin_move(&store, &args) else { return };
        spawn_local(async move {
            match commands::update_event_date(&args).await {
                Ok(updated) => store_update_event(&store, updated),
                Err(e) => {
                    web_sys::console::error_1(&format!("[CAL] Reschedule failed: {}", e).into());
                    store_reject_move(&store, pending, ALERT_RESCHEDULE_FAILED);
                }
            }
        });
    });

    let on_toggle = Callback::new(move |id: u32| {
        spawn_local(async move {
            match commands::toggle_event_completion(id).await {
                Ok(updated) => store_update_event(&store, updated),
                Err(e) => report_failure(&store, "Toggle", e, ALERT_TOGGLE_FAILED),
            }
        });
    });

    // Removal shows up through the change feed
    let on_delete = Callback::new(move |id: u32| {
        spawn_local(async move {
            if let Err(e) = commands::delete_event(id).await {
                report_failure(&store, "Delete", e, ALERT_DELETE_FAILED);
            }
        });
    });

    let on_day_click = Callback::new(move |day: NaiveDate| {
        // The mouseup that ends a drag also produces a click
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.open_prompt(day);
    });

    let on_prompt = Callback::new(move |(day, title): (NaiveDate, Option<String>)| {
        let Some(args) = create_request(day, title.as_deref()) else { return };
        spawn_local(async move {
            if let Err(e) = commands::create_event(&args).await {
                report_failure(&store, "Create", e, ALERT_CREATE_FAILED);
            }
        });
    });

    let handlers = CalendarHandlers { dnd, on_toggle, on_delete };

    view! {
        <div class=move || format!("task-calendar {}", ctx.view_mode.get().css_class())>
            <CalendarToolbar />
            {move || match ctx.view_mode.get() {
                ViewMode::Month => view! { <MonthGrid handlers=handlers on_day_click=on_day_click /> }.into_any(),
                ViewMode::Week | ViewMode::Day => view! { <TimeGrid handlers=handlers on_day_click=on_day_click /> }.into_any(),
            }}
            <TitlePrompt on_submit=on_prompt />
        </div>
    }
}

/// Listen for backend pushes while mounted. A listener that resolves after
/// teardown is released immediately.
fn subscribe_to_backend(ctx: AppContext) {
    let subscriptions = StoredValue::new_local(Vec::<BackendSubscription>::new());

    on_cleanup(move || {
        subscriptions.try_update_value(|subs| {
            for sub in subs.drain(..) {
                sub.unsubscribe();
            }
        });
    });

    spawn_local(async move {
        let changed = BackendSubscription::listen(EVENTS_CHANGED, move |notice: ChangeNotice| {
            log(format!("[CAL] Change: {} {:?}", notice.kind, notice.event_id));
            ctx.reload();
        })
        .await;
        keep_subscription(subscriptions, changed);

        let ready = BackendSubscription::listen(DB_INITIALIZED, move |_: ()| {
            log("[CAL] Database ready".to_string());
            ctx.reload();
        })
        .await;
        keep_subscription(subscriptions, ready);

        // The database may have opened while the listeners were registering
        ctx.reload();
    });
}

fn keep_subscription(
    subscriptions: StoredValue<Vec<BackendSubscription>, LocalStorage>,
    result: Result<BackendSubscription, String>,
) {
    let sub = match result {
        Ok(sub) => sub,
        Err(e) => {
            web_sys::console::error_1(&format!("[CAL] Subscribe failed: {}", e).into());
            return;
        }
    };
    let mut sub = Some(sub);
    subscriptions.try_update_value(|subs| subs.extend(sub.take()));
    if let Some(late) = sub {
        late.unsubscribe();
    }
}
