//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || ctx.filter.get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.filter.set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
