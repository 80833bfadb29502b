//! Application Context
//!
//! Shared handle provided via Leptos Context API. Each action runs on the
//! controller, then republishes its state to the render store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::TodoController;
use crate::storage::{BrowserStorage, KeyValueStorage, MemoryStorage, TaskStore};
use crate::store::{store_publish, AppState, AppStore};

/// Controller over whichever storage backend was available at startup
pub type AppController = TodoController<Box<dyn KeyValueStorage>>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Render snapshot - read by components
    pub store: AppStore,
    /// Browser storage handles are not `Send`, so the controller stays thread-local
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    /// Open storage and load persisted tasks; call once at startup
    pub fn initialize(storage_key: &str) -> Self {
        let backend: Box<dyn KeyValueStorage> = match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::error!("[APP] {}; tasks will not survive a reload", e);
                Box::new(MemoryStorage::new())
            }
        };
        let controller = TodoController::initialize(TaskStore::new(backend, storage_key));
        log::info!("[APP] Started with {} tasks", controller.tasks().len());
        Self::from_controller(controller)
    }

    pub fn from_controller(controller: AppController) -> Self {
        Self {
            store: Store::new(AppState::from_controller(&controller)),
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run `action` on the controller and republish its state
    fn dispatch(&self, action: impl FnOnce(&mut AppController)) {
        self.controller.update_value(|controller| {
            action(controller);
            store_publish(&self.store, controller);
        });
    }

    pub fn set_draft(&self, text: String) {
        self.dispatch(|c| c.set_draft(text));
    }

    /// Add the pending input as a task
    pub fn add_task(&self) {
        self.dispatch(|c| {
            c.add();
        });
    }

    pub fn toggle_task(&self, id: &str) {
        self.dispatch(|c| {
            c.toggle(id);
        });
    }

    pub fn clear_completed(&self) {
        self.dispatch(|c| {
            c.clear_completed();
        });
    }
}
