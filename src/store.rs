//! Render State Store
//!
//! Snapshot of the controller that the view reads, using Leptos
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::TodoController;
use crate::models::Task;
use crate::storage::KeyValueStorage;

/// What the view renders
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Whether the "clear completed" control is shown
    pub clear_visible: bool,
    /// Text in the new-task input
    pub draft: String,
}

impl AppState {
    pub fn from_controller<S: KeyValueStorage>(controller: &TodoController<S>) -> Self {
        Self {
            tasks: controller.tasks().to_vec(),
            clear_visible: controller.clear_visible(),
            draft: controller.draft().to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Copy the controller's current state into the store
///
/// Fields that did not change are left untouched so their subscribers stay quiet.
pub fn store_publish<S: KeyValueStorage>(store: &AppStore, controller: &TodoController<S>) {
    if store.tasks().with_untracked(|tasks| tasks.as_slice() != controller.tasks()) {
        *store.tasks().write() = controller.tasks().to_vec();
    }
    if store.clear_visible().get_untracked() != controller.clear_visible() {
        *store.clear_visible().write() = controller.clear_visible();
    }
    if store.draft().with_untracked(|draft| draft != controller.draft()) {
        *store.draft().write() = controller.draft().to_string();
    }
}
