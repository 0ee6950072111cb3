//! To-do List Component
//!
//! Filtered items, or the matching empty-state message.

use leptos::prelude::*;

use super::TodoItem;
use crate::context::use_todo_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_todo_context();

    let visible = move || {
        let filter = ctx.filter.get();
        ctx.session.with(|s| s.list().filtered(filter))
    };
    let empty = move || {
        let filter = ctx.filter.get();
        ctx.session.with(|s| s.list().empty_message(filter))
    };

    view! {
        {move || match empty() {
            Some((title, hint)) => view! {
                <div class="empty-state">
                    <p class="empty-title">{title}</p>
                    <p class="empty-hint">{hint}</p>
                </div>
            }.into_any(),
            None => view! {
                <ul class="todo-list">
                    <For
                        each=visible
                        key=|todo| (todo.id, todo.completed)
                        children=|todo| view! { <TodoItem todo=todo /> }
                    />
                </ul>
            }.into_any(),
        }}
    }
}
