//! Title Prompt Component
//!
//! Asks for the title of a new task. Enter accepts, Escape cancels.

use chrono::NaiveDate;
use leptos::html::Input;
use leptos::prelude::*;

use crate::calendar::locale::{PROMPT_ACCEPT, PROMPT_CANCEL, PROMPT_NEW_TASK};
use crate::context::AppContext;

/// `on_submit` receives the day and the typed title, or `None` on cancel
#[component]
pub fn TitlePrompt(#[prop(into)] on_submit: Callback<(NaiveDate, Option<String>)>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (text, set_text) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    // Fresh, focused input each time the prompt opens
    Effect::new(move |_| {
        if ctx.prompt_day.get().is_some() {
            set_text.set(String::new());
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let finish = move |accepted: bool| {
        let Some(day) = ctx.prompt_day.get_untracked() else { return };
        ctx.close_prompt();
        let title = accepted.then(|| text.get_untracked());
        on_submit.run((day, title));
    };

    view! {
        <Show when=move || ctx.prompt_day.get().is_some()>
            <div class="prompt-backdrop" on:click=move |_| finish(false)>
                <form
                    class="title-prompt"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=move |ev| {
                        ev.prevent_default();
                        finish(true);
                    }
                >
                    <label class="prompt-label">{PROMPT_NEW_TASK}</label>
                    <input
                        type="text"
                        node_ref=input_ref
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Escape" {
                                finish(false);
                            }
                        }
                    />
                    <div class="prompt-actions">
                        <button type="submit" class="confirm-btn">{PROMPT_ACCEPT}</button>
                        <button type="button" class="cancel-btn" on:click=move |_| finish(false)>{PROMPT_CANCEL}</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
