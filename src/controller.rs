//! Application Controller
//!
//! Owns the task list and the pending input text. Every mutation is written
//! through to storage before it returns; loading never writes.

use crate::models::Task;
use crate::storage::{KeyValueStorage, TaskStore};
use crate::todos::TaskList;

pub struct TodoController<S> {
    tasks: TaskList,
    draft: String,
    store: TaskStore<S>,
}

impl<S: KeyValueStorage> TodoController<S> {
    /// Load whatever was persisted under the store's key
    pub fn initialize(store: TaskStore<S>) -> Self {
        let tasks = TaskList::restore(store.load().as_deref());
        Self {
            tasks,
            draft: String::new(),
            store,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the "clear completed" control should be shown
    pub fn clear_visible(&self) -> bool {
        self.tasks.any_complete()
    }

    /// Add the pending input as a task and clear it
    pub fn add(&mut self) -> Option<Task> {
        let name = std::mem::take(&mut self.draft);
        self.add_named(&name)
    }

    /// Add a task by name; empty names are ignored
    pub fn add_named(&mut self, name: &str) -> Option<Task> {
        let task = self.tasks.add(name)?.clone();
        log::debug!("[TODO] Added {} ({:?})", task.id, task.name);
        self.persist();
        Some(task)
    }

    /// Flip completion of task `id`; unknown ids change nothing
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let Some(complete) = self.tasks.toggle(id) else {
            log::warn!("[TODO] Toggle of unknown task {}", id);
            return None;
        };
        log::debug!("[TODO] Toggled {} -> {}", id, complete);
        self.persist();
        Some(complete)
    }

    /// Drop completed tasks, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.tasks.clear_completed();
        log::debug!("[TODO] Cleared {} completed tasks", removed);
        self.persist();
        removed
    }

    /// Write-through after a mutation; failures are logged, memory keeps the change
    fn persist(&self) {
        if let Err(e) = self.store.save(self.tasks.tasks()) {
            log::error!("[TODO] Failed to persist tasks under {}: {}", self.store.key(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "test.todos";

    fn setup(persisted: Option<&str>) -> (TodoController<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::new();
        if let Some(raw) = persisted {
            backend.set_item(KEY, raw).unwrap();
        }
        let controller = TodoController::initialize(TaskStore::new(backend.clone(), KEY));
        (controller, backend)
    }

    /// What a fresh controller would see after a reload
    fn reloaded(backend: &MemoryStorage) -> Vec<Task> {
        let store = TaskStore::new(backend.clone(), KEY);
        TodoController::initialize(store).tasks().to_vec()
    }

    #[test]
    fn test_initialize_empty_does_not_write() {
        let (controller, backend) = setup(None);
        assert!(controller.tasks().is_empty());
        assert!(!controller.clear_visible());
        assert_eq!(backend.writes(), 0);
        assert_eq!(backend.get_item(KEY).unwrap(), None);
    }

    #[test]
    fn test_initialize_malformed_falls_back_to_empty() {
        let (controller, backend) = setup(Some("not json"));
        assert!(controller.tasks().is_empty());
        // malformed value is left alone until the next mutation
        assert_eq!(backend.writes(), 1);
        assert_eq!(backend.get_item(KEY).unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn test_initialize_restores_and_shows_clear_control() {
        let raw = r#"[{"id":"a","name":"Done","complete":true},{"id":"b","name":"Open","complete":false}]"#;
        let (controller, _) = setup(Some(raw));
        assert_eq!(controller.tasks().len(), 2);
        assert!(controller.clear_visible());
    }

    #[test]
    fn test_add_uses_and_clears_draft() {
        let (mut controller, backend) = setup(None);
        controller.set_draft("Buy milk");
        let task = controller.add().unwrap();

        assert_eq!(task.name, "Buy milk");
        assert!(!task.complete);
        assert_eq!(controller.draft(), "");
        assert_eq!(reloaded(&backend), vec![task]);
    }

    #[test]
    fn test_add_empty_is_ignored() {
        let (mut controller, backend) = setup(None);
        controller.set_draft("");
        assert!(controller.add().is_none());
        assert!(controller.add_named("").is_none());
        assert!(controller.tasks().is_empty());
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (mut controller, backend) = setup(None);
        let first = controller.add_named("one").unwrap();
        controller.add_named("two").unwrap();
        assert_eq!(reloaded(&backend), controller.tasks());

        controller.toggle(&first.id);
        assert_eq!(reloaded(&backend), controller.tasks());

        controller.clear_completed();
        assert_eq!(reloaded(&backend), controller.tasks());
        assert_eq!(backend.writes(), 4);
    }

    #[test]
    fn test_clear_completed_writes_even_when_nothing_removed() {
        let (mut controller, backend) = setup(None);
        controller.add_named("one").unwrap();
        assert_eq!(controller.clear_completed(), 0);
        assert_eq!(backend.writes(), 2);
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing() {
        let (mut controller, backend) = setup(None);
        controller.add_named("one").unwrap();
        let before = controller.tasks().to_vec();

        assert_eq!(controller.toggle("missing"), None);
        assert_eq!(controller.tasks(), before.as_slice());
        assert_eq!(backend.writes(), 1);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let (mut controller, backend) = setup(None);

        let task = controller.add_named("Buy milk").unwrap();
        assert_eq!(controller.tasks().len(), 1);
        assert!(!controller.clear_visible());

        assert_eq!(controller.toggle(&task.id), Some(true));
        assert!(controller.clear_visible());

        assert!(controller.add_named("").is_none());
        assert_eq!(controller.tasks().len(), 1);

        assert_eq!(controller.clear_completed(), 1);
        assert!(controller.tasks().is_empty());
        assert!(!controller.clear_visible());
        assert!(reloaded(&backend).is_empty());
    }
}
