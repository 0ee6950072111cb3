//! Bulk Actions Component
//!
//! Clear-completed and clear-all buttons. Both ask before deleting.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn BulkActions() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <div class="bulk-actions">
            <button type="button" class="clear-completed-btn" on:click=move |_| ctx.clear_completed()>
                "Clear completed"
            </button>
            <button type="button" class="clear-all-btn danger" on:click=move |_| ctx.clear_all()>
                "Clear all"
            </button>
        </div>
    }
}
