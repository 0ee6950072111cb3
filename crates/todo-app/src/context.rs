//! Application Context
//!
//! Shared list session, filter and toast provided via Leptos Context API.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Filter, Notification};
use crate::session::TodoSession;
use crate::storage::LocalStorageStore;

/// How long a toast stays up, in milliseconds
const NOTIFICATION_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// List plus its backing store
    pub session: RwSignal<TodoSession<LocalStorageStore>>,
    /// Text of the new-task input
    pub input: RwSignal<String>,
    /// Active filter
    pub filter: RwSignal<Filter>,
    /// Current toast tagged with its sequence number
    pub notification: RwSignal<Option<(u32, Notification)>>,
}

impl TodoContext {
    pub fn new(session: TodoSession<LocalStorageStore>) -> Self {
        Self {
            session: RwSignal::new(session),
            input: RwSignal::new(String::new()),
            filter: RwSignal::new(Filter::All),
            notification: RwSignal::new(None),
        }
    }

    /// Show a toast, replacing the previous one
    pub fn notify(&self, note: Notification) {
        let seq = self
            .notification
            .get_untracked()
            .map(|(seq, _)| seq.wrapping_add(1))
            .unwrap_or(0);
        self.notification.set(Some((seq, note)));

        let notification = self.notification;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_MS).await;
            // A newer toast owns its own timer
            if notification.get_untracked().is_some_and(|(current, _)| current == seq) {
                notification.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.notification.set(None);
    }

    /// Add a task; returns whether it entered the list
    pub fn add(&self, text: &str) -> bool {
        let Some((note, added)) = self.session.try_update(|s| {
            let before = s.list().len();
            let note = s.add(text, Utc::now());
            (note, s.list().len() > before)
        }) else {
            return false;
        };
        self.notify(note);
        added
    }

    /// Add whatever is typed in the input, clearing it on success
    pub fn submit_input(&self) {
        let text = self.input.get_untracked();
        if self.add(&text) {
            self.input.set(String::new());
        }
    }

    pub fn toggle(&self, id: i64) {
        if let Some(note) = self.session.try_update(|s| s.toggle(id)).flatten() {
            self.notify(note);
        }
    }

    pub fn delete(&self, id: i64) {
        if let Some(note) = self.session.try_update(|s| s.delete(id)).flatten() {
            self.notify(note);
        }
    }

    pub fn clear_completed(&self) {
        if let Some(note) = self.session.try_update(|s| s.clear_completed(confirm)).flatten() {
            self.notify(note);
        }
    }

    pub fn clear_all(&self) {
        if let Some(note) = self.session.try_update(|s| s.clear_all(confirm)).flatten() {
            self.notify(note);
        }
    }

    pub fn reset_filter(&self) {
        self.filter.set(Filter::All);
    }
}

/// Blocking browser confirmation dialog
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
