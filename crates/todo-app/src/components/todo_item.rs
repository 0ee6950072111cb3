//! To-do Item Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::models::Todo;

/// One row: checkbox, text, creation date and delete button
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();
    let id = todo.id;
    let created = todo.created_at.format("%Y-%m-%d %H:%M").to_string();

    view! {
        <li class={if todo.completed { "todo-item completed" } else { "todo-item" }}>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=todo.completed
                on:change=move |_| ctx.toggle(id)
            />
            <span class="todo-text">{todo.text}</span>
            <span class="todo-date">{created}</span>
            <button
                type="button"
                class="delete-btn"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete(id);
                }
            >
                "×"
            </button>
        </li>
    }
}
