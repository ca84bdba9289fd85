//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is deleted until the user accepts.

use leptos::prelude::*;

use crate::calendar::locale::{CONFIRM_DELETE, DELETE_ALT, PROMPT_ACCEPT, PROMPT_CANCEL};

/// Shows a × button initially. When clicked, asks for confirmation
/// with accept/cancel buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                title=DELETE_ALT
                aria-label=DELETE_ALT
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm" on:click=|ev| ev.stop_propagation()>
                <span class="delete-confirm-text">{CONFIRM_DELETE}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    {PROMPT_ACCEPT}
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    {PROMPT_CANCEL}
                </button>
            </span>
        </Show>
    }
}
