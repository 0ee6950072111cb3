//! Progress Indicator Component
//!
//! Shows the stage reported by the streaming endpoint.

use leptos::prelude::*;

use crate::models::Stage;
use crate::store::{use_dm_store, DmStateStoreFields};

#[component]
pub fn ProgressIndicator() -> impl IntoView {
    let store = use_dm_store();

    move || {
        store.progress().get().map(|update| {
            let spinning = update.stage != Stage::Completed;
            view! {
                <div class="progress-card">
                    <div class="progress-head">
                        <span class={if spinning { "stage-icon spinning" } else { "stage-icon" }}></span>
                        <div class="progress-text">
                            <p class="stage-label">{update.stage.label()}</p>
                            <p class="stage-message">{update.message.clone()}</p>
                        </div>
                        <span class="progress-percent">{format!("{}%", update.progress)}</span>
                    </div>
                    <progress class="progress-bar" max="100" value=update.progress.to_string()></progress>
                </div>
            }
        })
    }
}
