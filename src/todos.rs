//! Task Collection
//!
//! The ordered task list and its mutations. No I/O happens here.

use std::collections::HashSet;

use crate::error::RestoreError;
use crate::models::Task;

/// Ordered tasks, insertion order preserved, ids unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted JSON value
    ///
    /// The whole value is rejected if any entry has the wrong shape, an empty
    /// id or name, or an id that repeats.
    pub fn from_json(raw: &str) -> Result<Self, RestoreError> {
        // a literal `null` counts as an empty list
        let tasks: Option<Vec<Task>> = serde_json::from_str(raw)?;
        let tasks = tasks.unwrap_or_default();

        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if task.id.is_empty() {
                return Err(RestoreError::EmptyId);
            }
            if task.name.is_empty() {
                return Err(RestoreError::EmptyName(task.id.clone()));
            }
            if !seen.insert(task.id.as_str()) {
                return Err(RestoreError::DuplicateId(task.id.clone()));
            }
        }
        Ok(Self { tasks })
    }

    /// Restore from whatever was persisted, falling back to an empty list
    pub fn restore(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            log::debug!("[TODO] Nothing persisted, starting empty");
            return Self::new();
        };
        match Self::from_json(raw) {
            Ok(list) => {
                log::info!("[TODO] Restored {} tasks", list.len());
                list
            }
            Err(e) => {
                log::warn!("[TODO] Discarding persisted tasks: {}", e);
                Self::new()
            }
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new task; empty names are ignored
    pub fn add(&mut self, name: &str) -> Option<&Task> {
        if name.is_empty() {
            return None;
        }
        let mut task = Task::new(name);
        // v4 collisions are practically impossible, but ids must stay unique
        while self.get(&task.id).is_some() {
            task = Task::new(name);
        }
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip `complete` on the task with `id`, returning its new value
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.complete = !task.complete;
        Some(task.complete)
    }

    /// Remove every completed task, keeping the order of the rest
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.complete);
        before - self.tasks.len()
    }

    pub fn any_complete(&self) -> bool {
        self.tasks.iter().any(|task| task.complete)
    }
}
