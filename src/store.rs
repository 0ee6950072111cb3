//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DmDraft, EvidenceItem, GenerateDmResponse, HookItem, ProgressUpdate};

/// Results of the last generation plus request status
#[derive(Clone, Debug, Default, Store)]
pub struct DmState {
    pub evidences: Vec<EvidenceItem>,
    pub hooks: Vec<HookItem>,
    pub drafts: Vec<DmDraft>,
    /// Positions in `hooks` the user keeps selected (client-only)
    pub selected_hooks: Vec<usize>,
    /// Latest stream progress, `None` when idle
    pub progress: Option<ProgressUpdate>,
    /// Message of the last failed generation
    pub error: Option<String>,
    pub generating: bool,
}

impl DmState {
    /// Replace results with a fresh response; every hook starts selected
    pub fn apply_response(&mut self, response: GenerateDmResponse) {
        self.selected_hooks = all_hook_indices(&response.hooks);
        self.evidences = response.evidences;
        self.hooks = response.hooks;
        self.drafts = response.drafts;
    }
}

/// Hooks are addressed by position since the backend's ids can collide
pub fn all_hook_indices(hooks: &[HookItem]) -> Vec<usize> {
    (0..hooks.len()).collect()
}

/// Add the index if absent, remove every copy if present
pub fn toggle_selection(selected: &mut Vec<usize>, index: usize) {
    if selected.contains(&index) {
        selected.retain(|i| *i != index);
    } else {
        selected.push(index);
    }
}

fn replace_draft_body(drafts: &mut [DmDraft], index: usize, body: String) {
    if let Some(draft) = drafts.get_mut(index) {
        draft.body_markdown = body;
    }
}

/// Type alias for the store
pub type DmStore = Store<DmState>;

/// Get the DM store from context
pub fn use_dm_store() -> DmStore {
    expect_context::<DmStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark a request as started, clearing the previous outcome
pub fn store_begin_generation(store: &DmStore) {
    *store.error().write() = None;
    *store.progress().write() = None;
    *store.generating().write() = true;
}

/// Store a successful response
pub fn store_apply_response(store: &DmStore, response: GenerateDmResponse) {
    store.update(|state| {
        state.apply_response(response);
        state.progress = Some(ProgressUpdate::completed());
        state.generating = false;
    });
}

/// Store a failure message
pub fn store_fail_generation(store: &DmStore, message: String) {
    *store.error().write() = Some(message);
    *store.progress().write() = None;
    *store.generating().write() = false;
}

/// Drop progress after a manual cancel
pub fn store_cancel_generation(store: &DmStore) {
    *store.progress().write() = None;
    *store.generating().write() = false;
}

pub fn store_set_progress(store: &DmStore, update: ProgressUpdate) {
    *store.progress().write() = Some(update);
}

pub fn store_toggle_hook(store: &DmStore, index: usize) {
    toggle_selection(&mut store.selected_hooks().write(), index);
}

pub fn store_edit_draft(store: &DmStore, index: usize, body: String) {
    replace_draft_body(&mut store.drafts().write(), index, body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tone;
    use pretty_assertions::assert_eq;

    fn response(evidences: usize, hooks: i64) -> GenerateDmResponse {
        GenerateDmResponse {
            generation_id: None,
            evidences: (0..evidences)
                .map(|i| EvidenceItem {
                    source: "news".to_string(),
                    title: format!("Evidence {}", i),
                    snippet: "snippet".to_string(),
                    url: format!("https://example.com/{}", i),
                })
                .collect(),
            hooks: (1..=hooks)
                .map(|id| HookItem {
                    id,
                    title: format!("Hook {}", id),
                    reason: "reason".to_string(),
                    related_evidence_indices: vec![0],
                })
                .collect(),
            drafts: vec![DmDraft {
                tone: Tone::Polite,
                title: "Hello".to_string(),
                body_markdown: "Body".to_string(),
            }],
            created_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_apply_response_selects_every_hook() {
        let mut state = DmState::default();
        state.apply_response(response(4, 3));

        assert_eq!(state.evidences.len(), 4);
        assert_eq!(state.hooks.len(), 3);
        assert_eq!(state.selected_hooks, vec![0, 1, 2]);
    }

    #[test]
    fn test_apply_response_replaces_previous_results() {
        let mut state = DmState::default();
        state.apply_response(response(4, 3));
        toggle_selection(&mut state.selected_hooks, 2);
        state.apply_response(response(1, 1));

        assert_eq!(state.evidences.len(), 1);
        assert_eq!(state.selected_hooks, vec![0]);
    }

    #[test]
    fn test_toggle_hook_twice_restores_selection() {
        let mut state = DmState::default();
        state.apply_response(response(0, 2));

        toggle_selection(&mut state.selected_hooks, 1);
        assert_eq!(state.selected_hooks, vec![0]);
        toggle_selection(&mut state.selected_hooks, 1);
        assert_eq!(state.selected_hooks, vec![0, 1]);

        let mut selected = vec![];
        toggle_selection(&mut selected, 7);
        toggle_selection(&mut selected, 7);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_hooks_with_repeated_ids_toggle_independently() {
        let mut hooks = response(0, 3);
        for hook in &mut hooks.hooks {
            hook.id = 0;
        }
        let mut state = DmState::default();
        state.apply_response(hooks);
        assert_eq!(state.selected_hooks, vec![0, 1, 2]);

        toggle_selection(&mut state.selected_hooks, 1);
        assert!(!state.selected_hooks.contains(&1));
        assert_eq!(state.selected_hooks, vec![0, 2]);

        toggle_selection(&mut state.selected_hooks, 1);
        let mut restored = state.selected_hooks.clone();
        restored.sort_unstable();
        assert_eq!(restored, vec![0, 1, 2]);
    }

    #[test]
    fn test_toggle_removes_every_copy() {
        let mut selected = vec![3, 1, 3];
        toggle_selection(&mut selected, 3);
        assert_eq!(selected, vec![1]);
    }

    #[test]
    fn test_edit_draft_in_range_only() {
        let mut state = DmState::default();
        state.apply_response(response(0, 0));

        replace_draft_body(&mut state.drafts, 0, "Edited".to_string());
        replace_draft_body(&mut state.drafts, 5, "ignored".to_string());

        assert_eq!(state.drafts.len(), 1);
        assert_eq!(state.drafts[0].body_markdown, "Edited");
    }
}
