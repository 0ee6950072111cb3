//! To-do App
//!
//! Main application component with the global keyboard shortcuts.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{BulkActions, FilterBar, NotificationToast, StatsBar, TodoForm, TodoListView};
use crate::context::TodoContext;
use crate::session::TodoSession;
use crate::storage::LocalStorageStore;

#[component]
pub fn App() -> impl IntoView {
    let mut session = TodoSession::open(LocalStorageStore::default());
    let load_warning = session.take_load_warning();
    let ctx = TodoContext::new(session);
    provide_context(ctx);
    if let Some(note) = load_warning {
        ctx.notify(note);
    }

    // Ctrl/Cmd+Enter adds from anywhere, Escape shows everything again
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            ctx.submit_input();
        } else if ev.key() == "Escape" {
            ctx.reset_filter();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="app-layout">
            <main class="todo-app">
                <h1>"To-do List"</h1>
                <TodoForm />
                <FilterBar />
                <StatsBar />
                <TodoListView />
                <BulkActions />
            </main>
            <NotificationToast />
        </div>
    }
}
