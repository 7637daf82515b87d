use crate::models::{DayStats, Task, TaskPatch};
use crate::storage::{KeyValueStore, TaskStorage};

/// Authoritative in-memory task collection, newest first.
///
/// Every successful mutation writes the full collection through the injected
/// persistence adapter; there is no batching or debounce. Lookup misses are
/// no-ops and never persist.
pub struct TaskStore<S: KeyValueStore> {
    tasks: Vec<Task>,
    storage: TaskStorage<S>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads whatever the adapter has; a corrupted or missing blob starts
    /// the store empty rather than failing.
    pub fn open(storage: TaskStorage<S>) -> Self {
        let tasks = storage.load();
        Self { tasks, storage }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Trims `name` and prepends a new task due on `due_date`.
    /// A name that trims to empty is silently ignored.
    pub fn add(&mut self, name: &str, due_date: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.tasks.insert(0, Task::new(name, due_date));
        self.persist();
    }

    /// Flips completion for the matching task; not-found is a no-op.
    pub fn toggle_complete(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.is_completed = !task.is_completed;
            self.persist();
        }
    }

    /// Removes the matching task permanently; not-found is a no-op.
    pub fn remove(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Applies only the fields the patch carries. Patching the name trims
    /// it first and skips the field if it trims to empty, so a task never
    /// ends up nameless. Not-found is a no-op.
    pub fn edit(&mut self, id: &str, patch: TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            let name = name.trim();
            if !name.is_empty() {
                task.name = name.to_string();
            }
        }
        if let Some(note) = patch.note {
            task.note = note;
        }
        if let Some(start_time) = patch.start_time {
            task.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            task.end_time = end_time;
        }
        self.persist();
    }

    /// Removes every task due on `due_date`. Calling it again for the same
    /// day is a no-op.
    pub fn reset_day(&mut self, due_date: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.due_date != due_date);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Tasks due on `due_date`, in store order.
    pub fn tasks_for_date(&self, due_date: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.due_date == due_date)
            .cloned()
            .collect()
    }

    /// Done/pending counts for `due_date`, for the chart collaborator.
    pub fn day_stats(&self, due_date: &str) -> DayStats {
        let mut stats = DayStats { done: 0, pending: 0 };
        for task in self.tasks.iter().filter(|t| t.due_date == due_date) {
            if task.is_completed {
                stats.done += 1;
            } else {
                stats.pending += 1;
            }
        }
        stats
    }

    fn persist(&self) {
        self.storage.save(&self.tasks);
    }
}
