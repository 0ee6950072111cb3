//! Hook List Component
//!
//! Selectable messaging angles. Selection stays in the browser and is
//! tracked by position, since hook ids from the backend may repeat.

use leptos::prelude::*;

use crate::models::HookItem;
use crate::store::{store_toggle_hook, use_dm_store, DmStateStoreFields};

#[component]
pub fn HookList() -> impl IntoView {
    let store = use_dm_store();

    let counter = move || {
        format!(
            "{}/{}",
            store.selected_hooks().get().len(),
            store.hooks().get().len()
        )
    };

    view! {
        <section class="panel hook-panel">
            <header class="panel-header">
                <h2>"Hooks for your DM"</h2>
                <span class="count-badge">{counter}</span>
            </header>
            <Show
                when=move || !store.hooks().get().is_empty()
                fallback=|| view! { <p class="empty-state">"Generated hooks will appear here."</p> }
            >
                <div class="hook-list">
                    {move || store.hooks().get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, hook)| view! { <HookEntry index=index hook=hook /> })
                        .collect_view()}
                </div>
            </Show>
        </section>
    }
}

/// One selectable hook; `index` is its position in the store
#[component]
fn HookEntry(index: usize, hook: HookItem) -> impl IntoView {
    let store = use_dm_store();
    let selected = move || store.selected_hooks().get().contains(&index);
    let badges = hook.evidence_badges();

    view! {
        <button
            type="button"
            class=move || if selected() { "hook-item selected" } else { "hook-item" }
            aria-pressed=move || selected().to_string()
            on:click=move |_| store_toggle_hook(&store, index)
        >
            <span class="hook-check">{move || if selected() { "✓" } else { "+" }}</span>
            <div class="hook-body">
                <p class="hook-title">{hook.title}</p>
                <p class="hook-reason">{hook.reason}</p>
                <div class="hook-badges">
                    {badges.into_iter()
                        .map(|badge| view! { <span class="evidence-badge">{badge}</span> })
                        .collect_view()}
                </div>
            </div>
        </button>
    }
}
