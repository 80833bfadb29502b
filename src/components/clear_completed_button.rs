//! Clear Completed Button Component

use leptos::prelude::*;

use crate::config::CLEAR_LABEL;

/// Button that removes completed tasks; only shown while one exists
#[component]
pub fn ClearCompletedButton(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            id="clear-todo"
            class:showing=move || visible.get()
            on:click=move |_| on_clear.run(())
        >
            {CLEAR_LABEL}
        </button>
    }
}
