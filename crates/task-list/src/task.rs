//! Task Entity

use serde::{Deserialize, Serialize};

/// A single entry in the task list
///
/// The server may attach an `id`; it is passed back untouched on the next
/// replace and never used to identify the task on the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task without a server id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Buy bread");
        assert_eq!(task.title, "Buy bread");
        assert!(!task.completed);
        assert!(task.id.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let task: Task = serde_json::from_str(r#"{"title":"Learn Rust"}"#).unwrap();
        assert_eq!(task, Task::new("Learn Rust"));
        assert!(task.is_active());
    }

    #[test]
    fn test_id_is_omitted_when_absent() {
        let json = serde_json::to_string(&Task::new("Buy bread")).unwrap();
        assert_eq!(json, r#"{"title":"Buy bread","completed":false}"#);

        let with_id = Task { id: Some(7), ..Task::new("Buy bread") };
        let json = serde_json::to_string(&with_id).unwrap();
        assert_eq!(json, r#"{"id":7,"title":"Buy bread","completed":false}"#);
    }
}
