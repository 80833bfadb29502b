//! Todo List App
//!
//! Root component: header with the clear control, task list, new-task form.

use leptos::prelude::*;

use crate::components::{ClearCompletedButton, NewTaskForm, TaskListView};
use crate::config::TITLE;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    // Provide context to all children
    provide_context(ctx);

    let tasks = Signal::derive(move || ctx.store.tasks().get());
    let clear_visible = Signal::derive(move || ctx.store.clear_visible().get());
    let on_toggle = Callback::new(move |id: String| ctx.toggle_task(&id));
    let on_clear = Callback::new(move |_: ()| ctx.clear_completed());

    view! {
        <div class="container">
            <header>
                <h1>{TITLE}</h1>
                <ClearCompletedButton visible=clear_visible on_clear=on_clear />
            </header>
            <TaskListView tasks=tasks on_toggle=on_toggle />
            <NewTaskForm />
        </div>
    }
}
