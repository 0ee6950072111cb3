//! DM Form Component
//!
//! Collects prospect and product details and starts a generation.

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DmApiClient;
use crate::components::ProgressIndicator;
use crate::context::use_dm_context;
use crate::form::{DmForm, FormError, FormField};
use crate::store::{
    store_apply_response, store_begin_generation, store_cancel_generation, store_fail_generation,
    store_set_progress, use_dm_store, DmStateStoreFields,
};

/// Generation form with progress, error and cancel controls
#[component]
pub fn DmFormPanel() -> impl IntoView {
    let store = use_dm_store();
    let ctx = use_dm_context();

    let form = RwSignal::new(DmForm::default());
    let (form_errors, set_form_errors) = signal(Vec::<FormError>::new());

    let field_error = move |field: FormField| {
        form_errors
            .get()
            .into_iter()
            .find(|e| e.field() == field)
            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.generating().get_untracked() {
            return;
        }

        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(errors) => {
                log::debug!("form rejected: {:?}", errors);
                set_form_errors.set(errors);
                return;
            }
        };
        set_form_errors.set(Vec::new());
        store_begin_generation(&store);

        let (handle, registration) = AbortHandle::new_pair();
        let id = ctx.start(handle);
        let live = ctx.live_progress.get_untracked();

        spawn_local(async move {
            let client = DmApiClient::default();
            let task = async {
                if live {
                    client
                        .generate_stream(&request, |update| {
                            if ctx.is_current(id) {
                                store_set_progress(&store, update);
                            }
                        })
                        .await
                } else {
                    client.generate(&request).await
                }
            };
            let outcome = Abortable::new(task, registration).await;

            // Cancelled or replaced by a newer request
            if !ctx.is_current(id) {
                return;
            }
            ctx.finish(id);

            match outcome {
                Ok(Ok(response)) => {
                    log::info!(
                        "generation finished: {} evidences, {} hooks, {} drafts",
                        response.evidences.len(),
                        response.hooks.len(),
                        response.drafts.len()
                    );
                    store_apply_response(&store, response);
                }
                Ok(Err(error)) => {
                    log::error!("generation failed: {}", error);
                    store_fail_generation(&store, error.to_string());
                }
                Err(_aborted) => store_cancel_generation(&store),
            }
        });
    };

    let on_cancel = move |_| {
        log::info!("generation cancelled by user");
        ctx.cancel();
        store_cancel_generation(&store);
    };

    view! {
        <form class="dm-form" novalidate=true on:submit=on_submit>
            <div class="form-grid">
                <div class="form-group">
                    <label>"Target URL " <span class="required">"*"</span></label>
                    <input
                        type="url"
                        placeholder="https://example.com"
                        prop:value=move || form.get().target_url
                        on:input=move |ev| form.update(|f| f.target_url = event_target_value(&ev))
                    />
                    {move || field_error(FormField::TargetUrl)}
                </div>

                <div class="form-group">
                    <label>"Target (optional)"</label>
                    <div class="input-pair">
                        <input
                            type="text"
                            placeholder="e.g. VP of Sales"
                            prop:value=move || form.get().target_role
                            on:input=move |ev| form.update(|f| f.target_role = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Company name"
                            prop:value=move || form.get().company_name
                            on:input=move |ev| form.update(|f| f.company_name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label>"Your product " <span class="required">"*"</span></label>
                    <div class="input-pair">
                        <input
                            type="text"
                            placeholder="Product name"
                            prop:value=move || form.get().product_name
                            on:input=move |ev| form.update(|f| f.product_name = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="One-line summary"
                            prop:value=move || form.get().product_summary
                            on:input=move |ev| form.update(|f| f.product_summary = event_target_value(&ev))
                        />
                    </div>
                    {move || field_error(FormField::ProductName)}
                    {move || field_error(FormField::ProductSummary)}
                </div>
            </div>

            <ProgressIndicator />

            <Show when=move || store.generating().get() && !ctx.live_progress.get()>
                <div class="status-banner">"Generating messages, please wait..."</div>
            </Show>

            {move || store.error().get().map(|message| view! {
                <div class="error-banner">
                    <span class="error-icon">"!"</span>
                    <span class="error-message">{message}</span>
                </div>
            })}

            <div class="form-actions">
                <label class="live-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.live_progress.get()
                        prop:disabled=move || store.generating().get()
                        on:change=move |ev| ctx.set_live_progress(event_target_checked(&ev))
                    />
                    "Live progress"
                </label>

                <Show when=move || store.generating().get() && ctx.live_progress.get()>
                    <button type="button" class="cancel-btn" on:click=on_cancel>"Cancel"</button>
                </Show>

                <button
                    type="submit"
                    class="submit-btn"
                    prop:disabled=move || store.generating().get()
                >
                    {move || if store.generating().get() { "Generating..." } else { "Generate DM with AI" }}
                </button>
            </div>
        </form>
    }
}
