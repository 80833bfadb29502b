//! UI Components
//!
//! Leptos components for the task list page.

mod task_row;
mod task_list_view;
mod new_task_form;
mod clear_completed_button;

pub use task_row::TaskRow;
pub use task_list_view::TaskListView;
pub use new_task_form::NewTaskForm;
pub use clear_completed_button::ClearCompletedButton;
