//! Draft Card Component
//!
//! One generated message with preview, local editing and copy.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard;
use crate::markdown::parse_markdown;
use crate::models::DmDraft;
use crate::store::{store_edit_draft, use_dm_store};

/// How long the "Copied" state stays visible
const COPIED_RESET_MS: u32 = 2000;

/// Draft card
///
/// # Arguments
/// * `index` - Position of the draft in the store, used when saving edits
/// * `draft` - Draft as currently stored
#[component]
pub fn DraftCard(index: usize, draft: DmDraft) -> impl IntoView {
    let store = use_dm_store();
    let (editing, set_editing) = signal(false);
    let (edited_body, set_edited_body) = signal(draft.body_markdown.clone());
    let (copied, set_copied) = signal(false);

    let tone = draft.tone;
    let title = draft.title.clone();
    let original_body = draft.body_markdown.clone();
    let preview_html = parse_markdown(&draft.preview_markdown());

    let on_copy = {
        let title = title.clone();
        let original_body = original_body.clone();
        move |_| {
            let body = if editing.get_untracked() { edited_body.get_untracked() } else { original_body.clone() };
            let text = DmDraft { tone, title: title.clone(), body_markdown: body }.clipboard_text();
            spawn_local(async move {
                match clipboard::copy_text(&text).await {
                    Ok(()) => {
                        set_copied.set(true);
                        TimeoutFuture::new(COPIED_RESET_MS).await;
                        set_copied.set(false);
                    }
                    Err(e) => log::warn!("{}", e),
                }
            });
        }
    };

    let on_save = move |_| {
        store_edit_draft(&store, index, edited_body.get_untracked());
        set_editing.set(false);
    };

    let on_cancel = {
        let original_body = original_body.clone();
        move |_| {
            set_edited_body.set(original_body.clone());
            set_editing.set(false);
        }
    };

    view! {
        <article class={format!("draft-card {}", tone.css_class())}>
            <header class="draft-header">
                <div class="draft-tone">
                    <span class="draft-tone-caption">"Tone"</span>
                    <p class="draft-tone-label">{tone.label()}</p>
                </div>
                <button
                    type="button"
                    class=move || if copied.get() { "copy-btn copied" } else { "copy-btn" }
                    on:click=on_copy
                >
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </header>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="draft-preview" inner_html=preview_html.clone()></div>
                    <button type="button" class="edit-btn" on:click=move |_| set_editing.set(true)>
                        "Edit"
                    </button>
                }
            >
                <div class="draft-editor">
                    <h3 class="draft-title">{title.clone()}</h3>
                    <textarea
                        class="draft-textarea"
                        prop:value=move || edited_body.get()
                        on:input=move |ev| set_edited_body.set(event_target_value(&ev))
                    ></textarea>
                    <div class="draft-editor-actions">
                        <button type="button" class="save-btn" on:click=on_save>"Save"</button>
                        <button type="button" class="cancel-btn" on:click=on_cancel.clone()>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </article>
    }
}
