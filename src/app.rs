use log::debug;

use crate::datekey::{is_date_key, today_key};
use crate::models::{DayStats, TaskPatch};
use crate::storage::{KeyValueStore, TaskStorage};
use crate::store::TaskStore;
use crate::views::{day_view, detail_view, list_view, DayView, DetailView, ListView};

/// A user action forwarded unchanged to the task store. Add and ResetDay
/// act on the currently selected calendar day.
#[derive(Debug, Clone)]
pub enum Intent {
    Add { name: String },
    Toggle { id: String },
    Delete { id: String },
    Edit { id: String, patch: TaskPatch },
    ResetDay,
    SelectDate { date_key: String },
    NavigateToDay { date_key: String },
    NavigateToDetail { id: String },
}

/// Where the external navigation collaborator should route next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Day { date_key: String },
    Detail { id: String },
}

/// The intent loop: owns the task store plus the only transient UI state the
/// core keeps, the currently selected calendar date.
pub struct App<S: KeyValueStore> {
    store: TaskStore<S>,
    selected: String,
}

impl<S: KeyValueStore> App<S> {
    /// Opens the store through `storage` with today (local) selected.
    pub fn open(storage: TaskStorage<S>) -> Self {
        Self {
            store: TaskStore::open(storage),
            selected: today_key(),
        }
    }

    pub fn selected_date(&self) -> &str {
        &self.selected
    }

    /// Applies one user intent. Returns `Some(route)` when the navigation
    /// collaborator should move to another view, `None` otherwise.
    pub fn apply(&mut self, intent: Intent) -> Option<Route> {
        debug!("intent: {intent:?}");
        match intent {
            Intent::Add { name } => {
                let due_date = self.selected.clone();
                self.store.add(&name, &due_date);
                None
            }
            Intent::Toggle { id } => {
                self.store.toggle_complete(&id);
                None
            }
            Intent::Delete { id } => {
                self.store.remove(&id);
                None
            }
            Intent::Edit { id, patch } => {
                self.store.edit(&id, patch);
                None
            }
            Intent::ResetDay => {
                let due_date = self.selected.clone();
                self.store.reset_day(&due_date);
                None
            }
            Intent::SelectDate { date_key } => {
                // The calendar widget hands us a formatted key; ignore
                // anything that is not a canonical date rather than letting
                // a bad key become the due date of every new task.
                if is_date_key(&date_key) {
                    self.selected = date_key;
                }
                None
            }
            Intent::NavigateToDay { date_key } => Some(Route::Day { date_key }),
            Intent::NavigateToDetail { id } => Some(Route::Detail { id }),
        }
    }

    /// List view for the currently selected day.
    pub fn list(&self) -> ListView {
        list_view(self.store.tasks(), &self.selected)
    }

    /// Day view for the date parameter the router handed back.
    pub fn day(&self, date_key: &str) -> DayView {
        day_view(self.store.tasks(), date_key)
    }

    pub fn detail(&self, id: &str) -> DetailView {
        detail_view(self.store.tasks(), id)
    }

    /// Chart collaborator contract: read-only counts for one day.
    pub fn day_stats(&self, date_key: &str) -> DayStats {
        self.store.day_stats(date_key)
    }
}
