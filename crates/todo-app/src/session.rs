//! To-do Session
//!
//! Ties the list to its store. Every mutation re-saves the whole list
//! and yields the notification the UI should show.

use chrono::{DateTime, Utc};

use crate::list::TodoList;
use crate::models::Notification;
use crate::storage::TodoStore;

/// Shown when a change is kept in memory but could not be stored
pub const SAVE_FAILED: &str = "Tasks could not be saved";

pub struct TodoSession<S: TodoStore> {
    list: TodoList,
    store: S,
    /// Set when the saved list could not be read
    load_warning: Option<Notification>,
}

impl<S: TodoStore> TodoSession<S> {
    /// Load the saved list; unreadable data starts an empty one
    pub fn open(store: S) -> Self {
        let (todos, load_warning) = match store.load() {
            Ok(todos) => {
                log::info!("loaded {} todos", todos.len());
                (todos, None)
            }
            Err(e) => {
                log::warn!("starting with an empty list: {}", e);
                (Vec::new(), Some(Notification::warning("Saved tasks could not be read")))
            }
        };
        Self { list: TodoList::new(todos), store, load_warning }
    }

    /// Warning about unreadable saved data, returned once
    pub fn take_load_warning(&mut self) -> Option<Notification> {
        self.load_warning.take()
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Save the whole list; on failure the returned toast replaces `done`
    fn persist(&self, done: Notification) -> Notification {
        match self.store.save(self.list.todos()) {
            Ok(()) => done,
            Err(e) => {
                log::error!("failed to save todos: {}", e);
                Notification::error(SAVE_FAILED)
            }
        }
    }

    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Notification {
        match self.list.add(text, now) {
            Ok(todo) => {
                log::debug!("added todo {}", todo.id);
                self.persist(Notification::success("Task added"))
            }
            Err(e) => Notification::error(e.to_string()),
        }
    }

    pub fn toggle(&mut self, id: i64) -> Option<Notification> {
        let completed = self.list.toggle(id)?;
        Some(self.persist(Notification::info(if completed {
            "Task completed"
        } else {
            "Task marked as pending"
        })))
    }

    pub fn delete(&mut self, id: i64) -> Option<Notification> {
        self.list.delete(id)?;
        Some(self.persist(Notification::info("Task deleted")))
    }

    /// Remove completed items after `confirm` agrees.
    ///
    /// With nothing completed, `confirm` is never called.
    pub fn clear_completed(&mut self, confirm: impl FnOnce(&str) -> bool) -> Option<Notification> {
        let count = self.list.completed_count();
        if count == 0 {
            return Some(Notification::info("No completed tasks"));
        }
        if !confirm(&format!("Delete {} completed task(s)?", count)) {
            return None;
        }
        let removed = self.list.remove_completed();
        Some(self.persist(Notification::success(format!("Deleted {} task(s)", removed))))
    }

    /// Remove everything after `confirm` agrees
    pub fn clear_all(&mut self, confirm: impl FnOnce(&str) -> bool) -> Option<Notification> {
        if self.list.is_empty() {
            return Some(Notification::info("No tasks to delete"));
        }
        if !confirm(&format!("Delete all {} tasks?", self.list.len())) {
            return None;
        }
        self.list.remove_all();
        Some(self.persist(Notification::success("All tasks deleted")))
    }
}
