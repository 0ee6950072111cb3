//! To-do List Operations
//!
//! In-memory list with linear find/filter. Newest items come first.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Filter, Stats, Todo};

/// Longest accepted task text, in characters
pub const MAX_TEXT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Please enter a task")]
    Empty,
    #[error("Tasks must be {max} characters or fewer")]
    TooLong { max: usize },
}

/// Trimmed text if it may become a task
pub fn validate_text(text: &str) -> Result<&str, TodoError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::Empty);
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(TodoError::TooLong { max: MAX_TEXT_CHARS });
    }
    Ok(text)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Id for an item created at `now`, unique within this list
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let stamp = now.timestamp_millis();
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) if stamp <= max => max + 1,
            _ => stamp,
        }
    }

    /// Validate and insert a new task at the front
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Result<&Todo, TodoError> {
        let text = validate_text(text)?;
        let todo = Todo {
            id: self.next_id(now),
            text: text.to_string(),
            completed: false,
            created_at: now,
        };
        self.todos.insert(0, todo);
        Ok(&self.todos[0])
    }

    /// Flip completion; returns the new state
    pub fn toggle(&mut self, id: i64) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = !todo.completed;
        Some(todo.completed)
    }

    pub fn delete(&mut self, id: i64) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(pos))
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Remove completed items; returns how many went
    pub fn remove_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    pub fn remove_all(&mut self) -> usize {
        let count = self.todos.len();
        self.todos.clear();
        count
    }

    pub fn filtered(&self, filter: Filter) -> Vec<Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    pub fn stats(&self) -> Stats {
        let total = self.todos.len();
        let completed = self.completed_count();
        Stats { total, completed, pending: total - completed }
    }

    /// Heading and hint for an empty view, `None` if something is visible
    pub fn empty_message(&self, filter: Filter) -> Option<(&'static str, &'static str)> {
        if self.todos.is_empty() {
            Some(("No tasks yet", "Add a new task to get started!"))
        } else if !self.todos.iter().any(|t| filter.matches(t)) {
            Some(("No matching tasks", "Try a different filter"))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let mut list = TodoList::default();
        list.add("first", at(1_000)).unwrap();
        let added = list.add("  second  ", at(2_000)).unwrap();
        assert_eq!(added.text, "second");
        assert_eq!(added.id, 2_000);
        assert!(!added.completed);

        let texts: Vec<&str> = list.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_length_boundary() {
        let mut list = TodoList::default();
        let exactly = "a".repeat(MAX_TEXT_CHARS);
        assert!(list.add(&exactly, at(1)).is_ok());

        let too_long = "a".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(
            list.add(&too_long, at(2)).unwrap_err(),
            TodoError::TooLong { max: MAX_TEXT_CHARS }
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut list = TodoList::default();
        let kana = "あ".repeat(MAX_TEXT_CHARS);
        assert!(list.add(&kana, at(1)).is_ok());
    }

    #[test]
    fn test_limit_is_not_utf16_units() {
        // 60 emoji are 120 UTF-16 units but only 60 characters
        let mut list = TodoList::default();
        let emoji = "😀".repeat(60);
        assert_eq!(list.add(&emoji, at(1)).unwrap().text.chars().count(), 60);

        let pasted = "a".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(validate_text(&pasted), Err(TodoError::TooLong { max: MAX_TEXT_CHARS }));
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut list = TodoList::default();
        assert_eq!(list.add("   ", at(1)).unwrap_err(), TodoError::Empty);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TodoList::default();
        let a = list.add("a", at(5_000)).unwrap().id;
        let b = list.add("b", at(5_000)).unwrap().id;
        let c = list.add("c", at(4_000)).unwrap().id;
        assert_eq!((a, b, c), (5_000, 5_001, 5_002));
    }

    #[test]
    fn test_toggle_and_delete() {
        let mut list = TodoList::default();
        let id = list.add("task", at(1)).unwrap().id;

        assert_eq!(list.toggle(id), Some(true));
        assert_eq!(list.toggle(id), Some(false));
        assert_eq!(list.toggle(999), None);

        assert_eq!(list.delete(999), None);
        assert_eq!(list.delete(id).map(|t| t.text), Some("task".to_string()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_filters_and_stats() {
        let mut list = TodoList::default();
        let done = list.add("done", at(1)).unwrap().id;
        list.add("open", at(2)).unwrap();
        list.toggle(done);

        assert_eq!(list.filtered(Filter::All).len(), 2);
        assert_eq!(list.filtered(Filter::Completed)[0].text, "done");
        assert_eq!(list.filtered(Filter::Pending)[0].text, "open");
        assert_eq!(list.stats(), Stats { total: 2, completed: 1, pending: 1 });
    }

    #[test]
    fn test_bulk_removal() {
        let mut list = TodoList::default();
        let a = list.add("a", at(1)).unwrap().id;
        list.add("b", at(2)).unwrap();
        list.toggle(a);

        assert_eq!(list.remove_completed(), 1);
        assert_eq!(list.remove_completed(), 0);
        assert_eq!(list.remove_all(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_messages() {
        let mut list = TodoList::default();
        assert_eq!(list.empty_message(Filter::All).map(|m| m.0), Some("No tasks yet"));

        list.add("open", at(1)).unwrap();
        assert_eq!(list.empty_message(Filter::All), None);
        assert_eq!(list.empty_message(Filter::Completed).map(|m| m.0), Some("No matching tasks"));
    }
}
