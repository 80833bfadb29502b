//! Frontend Models
//!
//! Data structures persisted to browser storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
///
/// Field names are the persisted JSON keys; any other key makes the value invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Unique identifier, stable for the task's lifetime
    pub id: String,
    /// Label shown next to the checkbox
    pub name: String,
    pub complete: bool,
}

impl Task {
    /// New incomplete task with a fresh random identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Buy milk");
        assert_eq!(task.name, "Buy milk");
        assert!(!task.complete);
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_task_ids_differ() {
        let a = Task::new("a");
        let b = Task::new("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task {
            id: "abc".to_string(),
            name: "Walk dog".to_string(),
            complete: true,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "abc", "name": "Walk dog", "complete": true }));
    }

    #[test]
    fn test_task_rejects_unknown_fields() {
        let raw = r#"{"id":"1","name":"x","complete":false,"version":2}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }
}
