//! Task Calendar Frontend App
//!
//! Provides shared state and lays out the heading, alerts and calendar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::calendar::locale::HEADING;
use crate::commands;
use crate::components::{AlertBanner, TaskCalendar};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Preferences come from the database, which may still be opening;
    // retry on every reload until one load succeeds.
    let (prefs_loaded, set_prefs_loaded) = signal(false);
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if prefs_loaded.get_untracked() {
            return;
        }
        spawn_local(async move {
            match commands::load_preferences().await {
                Ok(prefs) => {
                    set_prefs_loaded.set(true);
                    if ctx.apply_saved_view(prefs.initial_view) {
                        web_sys::console::log_1(&format!("[APP] Initial view: {}", prefs.initial_view.label()).into());
                    } else {
                        web_sys::console::log_1(&"[APP] View already chosen, saved view ignored".into());
                    }
                }
                Err(e) => web_sys::console::log_1(&format!("[APP] Preferences not loaded yet: {}", e).into()),
            }
        });
    });

    view! {
        <main class="app-layout">
            <h1>{HEADING}</h1>
            <AlertBanner />
            <TaskCalendar />
        </main>
    }
}
