//! Draft Panel Component
//!
//! Lists the generated drafts, one card per tone.

use leptos::prelude::*;

use crate::components::DraftCard;
use crate::models::DmDraft;
use crate::store::{use_dm_store, DmStateStoreFields};

/// Row identity for a draft card.
///
/// Saving one draft only changes that draft's key, so the other cards
/// keep their local edit state.
fn draft_key(index: usize, draft: &DmDraft) -> (usize, String, String) {
    (index, draft.title.clone(), draft.body_markdown.clone())
}

#[component]
pub fn DraftPanel() -> impl IntoView {
    let store = use_dm_store();

    view! {
        <section class="panel draft-panel">
            <header class="panel-header">
                <div>
                    <h2>"Generated DM drafts"</h2>
                    <p class="panel-subtitle">"Three tones, written in Markdown"</p>
                </div>
                <Show when=move || !store.drafts().get().is_empty()>
                    <span class="count-badge">{move || store.drafts().get().len()}</span>
                </Show>
            </header>
            <div class="draft-grid">
                <Show
                    when=move || !store.drafts().get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"AI-generated sales DMs will appear here."</p>
                            <p class="empty-subtitle">"Fill in the form and click \"Generate DM with AI\"."</p>
                        </div>
                    }
                >
                    <For
                        each=move || store.drafts().get().into_iter().enumerate()
                        key=|(index, draft)| draft_key(*index, draft)
                        children=|(index, draft)| view! { <DraftCard index=index draft=draft /> }
                    />
                </Show>
            </div>
        </section>
    }
}
