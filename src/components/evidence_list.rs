//! Evidence List Component
//!
//! Numbered research snippets returned by the backend.

use leptos::prelude::*;

use crate::markdown::is_safe_url;
use crate::models::EvidenceItem;
use crate::store::{use_dm_store, DmStateStoreFields};

#[component]
pub fn EvidenceList() -> impl IntoView {
    let store = use_dm_store();

    view! {
        <section class="panel evidence-panel">
            <header class="panel-header">
                <h2>"Evidence found by research"</h2>
                <span class="count-badge">{move || store.evidences().get().len()}</span>
            </header>
            <Show
                when=move || !store.evidences().get().is_empty()
                fallback=|| view! {
                    <p class="empty-state">
                        "No evidence yet. Enter a URL in the form and generate."
                    </p>
                }
            >
                <ol class="evidence-list">
                    {move || store.evidences().get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, evidence)| view! { <EvidenceEntry index=index evidence=evidence /> })
                        .collect_view()}
                </ol>
            </Show>
        </section>
    }
}

/// One evidence card; `index` is zero-based.
/// Only http(s) and mailto sources get an "Open" link.
#[component]
fn EvidenceEntry(index: usize, evidence: EvidenceItem) -> impl IntoView {
    view! {
        <li class="evidence-item">
            <div class="evidence-head">
                <span class="evidence-number">{index + 1}</span>
                {is_safe_url(&evidence.url).then(|| view! {
                    <a class="evidence-link" href=evidence.url.clone() target="_blank" rel="noreferrer noopener">"Open"</a>
                })}
            </div>
            <h3 class="evidence-title">{evidence.title}</h3>
            <p class="evidence-snippet">{evidence.snippet}</p>
            <p class="evidence-source">{evidence.source}</p>
        </li>
    }
}
