//! Alert Banner Component
//!
//! Non-blocking replacement for `window.alert`; hides itself after a while.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_alert, store_clear_alert, store_clear_alert_if, use_app_store};

const AUTO_HIDE_MS: u32 = 5_000;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        if let Some(alert) = store_alert(&store) {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_HIDE_MS).await;
                store_clear_alert_if(&store, alert.id);
            });
        }
    });

    view! {
        {move || store_alert(&store).map(|alert| view! {
            <div class="alert-banner" role="alert">
                <span class="alert-message">{alert.message}</span>
                <button class="alert-close" on:click=move |_| store_clear_alert(&store)>"×"</button>
            </div>
        })}
    }
}
