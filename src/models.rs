use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Timestamp = i64;

/// A single to-do item scheduled on one calendar day.
///
/// Serialized field names keep their historical camelCase form so blobs
/// written by earlier versions of the app keep loading unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub note: String,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub due_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl Task {
    /// Builds a fresh task for `due_date` (a `YYYY-MM-DD` key).
    /// The caller is responsible for trimming and rejecting empty names.
    pub fn new(name: &str, due_date: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            note: String::new(),
            is_completed: false,
            created_at: Utc::now().timestamp_millis(),
            due_date: due_date.to_string(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }
}

/// Partial update for a task: only fields carrying `Some` are applied,
/// everything else is left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub note: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.note.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }
}

/// Done/pending counts for one day, consumed read-only by the chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub done: usize,
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_pending_with_empty_note_and_times() {
        let task = Task::new("Buy milk", "2024-06-01");
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.due_date, "2024-06-01");
        assert!(!task.is_completed);
        assert_eq!(task.note, "");
        assert_eq!(task.start_time, "");
        assert_eq!(task.end_time, "");
        assert!(task.created_at > 0);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn task_serializes_with_camel_case_field_names() {
        let task = Task::new("Buy milk", "2024-06-01");
        let value = serde_json::to_value(&task).expect("serialize task");
        let object = value.as_object().expect("task is a json object");
        for key in [
            "id",
            "name",
            "note",
            "isCompleted",
            "createdAt",
            "dueDate",
            "startTime",
            "endTime",
        ] {
            assert!(object.contains_key(key), "missing field {key}");
        }
    }

    #[test]
    fn task_deserializes_when_optional_fields_are_missing() {
        let json = r#"
        {
          "id": "t1",
          "name": "task",
          "isCompleted": false,
          "createdAt": 123,
          "dueDate": "2024-06-01"
        }
        "#;

        let task: Task = serde_json::from_str(json).expect("task should deserialize");
        assert_eq!(task.note, "");
        assert_eq!(task.start_time, "");
        assert_eq!(task.end_time, "");
    }

    #[test]
    fn patch_is_empty_only_without_fields() {
        assert!(TaskPatch::default().is_empty());
        let patch = TaskPatch {
            note: Some("call first".to_string()),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
