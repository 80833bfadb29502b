//! Task List View Component
//!
//! Renders one row per task in collection order. Rows are keyed by task id
//! together with the `complete` flag, so toggling re-creates only that row.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::models::Task;

/// Keyed list of task rows
#[component]
pub fn TaskListView(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="todo-container">
            <For
                each=move || tasks.get()
                key=|task| (task.id.clone(), task.complete)
                children=move |task| view! { <TaskRow task=task on_toggle=on_toggle /> }
            />
        </div>
    }
}
