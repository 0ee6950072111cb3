//! Insight DM Frontend App
//!
//! Main application component: form on top, evidence/hooks and drafts below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DmFormPanel, DraftPanel, EvidenceList, HookList};
use crate::context::DmContext;
use crate::store::DmState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(DmState::default());
    let (generation, set_generation) = signal(0u32);
    let (live_progress, set_live_progress) = signal(true);

    // Provide context to all children
    provide_context(store);
    provide_context(DmContext::new((generation, set_generation), (live_progress, set_live_progress)));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Insight DM"</h1>

                <section class="panel form-panel">
                    <h2>"DM generation form"</h2>
                    <DmFormPanel />
                </section>

                <div class="results-layout">
                    // Left: Evidence & Hooks
                    <div class="results-column">
                        <EvidenceList />
                        <HookList />
                    </div>

                    // Right: Drafts
                    <DraftPanel />
                </div>
            </main>
        </div>
    }
}
