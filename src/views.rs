//! View models are pure functions of a store snapshot plus the selected
//! date key. They hold no state of their own; rendering and styling belong
//! to the external presentation collaborator.

use crate::models::{DayStats, Task, Timestamp};

/// Main list view: the selected day's tasks plus the chart counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub date_key: String,
    pub tasks: Vec<Task>,
    pub stats: DayStats,
}

impl ListView {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

pub fn list_view(tasks: &[Task], date_key: &str) -> ListView {
    let day_tasks: Vec<Task> = tasks
        .iter()
        .filter(|task| task.due_date == date_key)
        .cloned()
        .collect();
    let done = day_tasks.iter().filter(|t| t.is_completed).count();
    let stats = DayStats {
        done,
        pending: day_tasks.len() - done,
    };
    ListView {
        date_key: date_key.to_string(),
        tasks: day_tasks,
        stats,
    }
}

/// Detail view for one task; an unknown id renders an explicit
/// not-found state instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Found(TaskDetail),
    NotFound { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetail {
    pub id: String,
    pub name: String,
    pub is_completed: bool,
    /// `None` when the task has no note, so the renderer can skip the row.
    pub note: Option<String>,
    pub created_at: Timestamp,
}

pub fn detail_view(tasks: &[Task], id: &str) -> DetailView {
    let Some(task) = tasks.iter().find(|t| t.id == id) else {
        return DetailView::NotFound { id: id.to_string() };
    };
    DetailView::Found(TaskDetail {
        id: task.id.clone(),
        name: task.name.clone(),
        is_completed: task.is_completed,
        note: if task.note.is_empty() {
            None
        } else {
            Some(task.note.clone())
        },
        created_at: task.created_at,
    })
}

/// Per-day view reached through the navigation collaborator's date
/// parameter. Entries are numbered 1-based in store order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date_key: String,
    pub entries: Vec<DayEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub ordinal: usize,
    pub task: Task,
}

impl DayView {
    /// True when the day has no tasks and the renderer should show the
    /// explicit "nothing scheduled" state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn day_view(tasks: &[Task], date_key: &str) -> DayView {
    let entries = tasks
        .iter()
        .filter(|task| task.due_date == date_key)
        .cloned()
        .enumerate()
        .map(|(index, task)| DayEntry {
            ordinal: index + 1,
            task,
        })
        .collect();
    DayView {
        date_key: date_key.to_string(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(name: &str, due_date: &str) -> Task {
        Task::new(name, due_date)
    }

    #[test]
    fn list_view_scopes_tasks_and_stats_to_the_day() {
        let mut tasks = vec![
            make_task("a", "2024-06-01"),
            make_task("b", "2024-06-02"),
            make_task("c", "2024-06-01"),
        ];
        tasks[2].is_completed = true;

        let view = list_view(&tasks, "2024-06-01");
        assert_eq!(view.date_key, "2024-06-01");
        assert_eq!(view.task_count(), 2);
        assert_eq!(view.stats, DayStats { done: 1, pending: 1 });
        let names: Vec<_> = view.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn list_view_reports_empty_day() {
        let view = list_view(&[], "2024-06-01");
        assert!(view.is_empty());
        assert_eq!(view.stats, DayStats { done: 0, pending: 0 });
    }

    #[test]
    fn detail_view_surfaces_task_fields() {
        let mut task = make_task("a", "2024-06-01");
        task.note = "bring a coat".to_string();
        let id = task.id.clone();

        match detail_view(&[task], &id) {
            DetailView::Found(detail) => {
                assert_eq!(detail.name, "a");
                assert!(!detail.is_completed);
                assert_eq!(detail.note.as_deref(), Some("bring a coat"));
                assert!(detail.created_at > 0);
            }
            DetailView::NotFound { .. } => panic!("task should be found"),
        }
    }

    #[test]
    fn detail_view_hides_empty_note_and_reports_missing_ids() {
        let task = make_task("a", "2024-06-01");
        let id = task.id.clone();
        let tasks = vec![task];

        match detail_view(&tasks, &id) {
            DetailView::Found(detail) => assert_eq!(detail.note, None),
            DetailView::NotFound { .. } => panic!("task should be found"),
        }

        assert_eq!(
            detail_view(&tasks, "missing"),
            DetailView::NotFound {
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn day_view_numbers_entries_in_store_order() {
        let tasks = vec![
            make_task("a", "2024-06-01"),
            make_task("b", "2024-06-02"),
            make_task("c", "2024-06-01"),
        ];

        let view = day_view(&tasks, "2024-06-01");
        assert!(!view.is_empty());
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].ordinal, 1);
        assert_eq!(view.entries[0].task.name, "a");
        assert_eq!(view.entries[1].ordinal, 2);
        assert_eq!(view.entries[1].task.name, "c");

        assert!(day_view(&tasks, "2024-07-01").is_empty());
    }
}
