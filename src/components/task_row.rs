//! Task Row Component
//!
//! One checkbox row in the task list.

use leptos::prelude::*;

use crate::models::Task;

/// A single task row
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let Task { id, name, complete } = task;

    view! {
        <div class=if complete { "line complete" } else { "line" }>
            <input
                type="checkbox"
                checked=complete
                on:change=move |_| on_toggle.run(id.clone())
            />
            {name}
        </div>
    }
}
