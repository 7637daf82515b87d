//! Day-scoped to-do core: tasks with due dates, per-day filtering, and
//! write-through persistence under a single well-known key.

pub mod app;
pub mod datekey;
pub mod logging;
pub mod models;
pub mod storage;
pub mod store;
pub mod views;

pub use app::{App, Intent, Route};
pub use datekey::{date_key, is_date_key, today_key};
pub use models::{DayStats, Task, TaskPatch, Timestamp};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, TaskStorage, STORAGE_KEY};
pub use store::TaskStore;
pub use views::{
    day_view, detail_view, list_view, DayEntry, DayView, DetailView, ListView, TaskDetail,
};
