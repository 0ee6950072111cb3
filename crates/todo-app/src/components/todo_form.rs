//! To-do Form Component
//!
//! Single input plus Add button. Enter submits through the form.
//! Length is checked on submit so over-long text gets an error toast.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_input();
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                autofocus=true
                prop:value=move || ctx.input.get()
                on:input=move |ev| ctx.input.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
