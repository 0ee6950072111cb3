//! Notification Toast Component

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_todo_context();

    move || {
        ctx.notification.get().map(|(_, note)| {
            view! {
                <div class=note.kind.css_class() role="status" on:click=move |_| ctx.dismiss()>
                    <span class="notification-icon">{note.kind.icon()}</span>
                    <span class="notification-message">{note.message}</span>
                </div>
            }
        })
    }
}
