//! New Task Form Component
//!
//! Text input plus "add" button. Submitting with Enter also adds.

use leptos::prelude::*;

use crate::config::{ADD_LABEL, INPUT_PLACEHOLDER};
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_task();
    };

    view! {
        <form class="addNew" on:submit=on_submit>
            <input
                type="text"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || ctx.store.draft().get()
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button type="submit" class="showing">{ADD_LABEL}</button>
        </form>
    }
}
