//! Stats Bar Component

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_todo_context();
    let stats = Memo::new(move |_| ctx.session.with(|s| s.list().stats()));

    view! {
        <div class="stats-bar">
            <span class="stat">"Total: " {move || stats.get().total}</span>
            <span class="stat">"Pending: " {move || stats.get().pending}</span>
            <span class="stat">"Completed: " {move || stats.get().completed}</span>
        </div>
    }
}
