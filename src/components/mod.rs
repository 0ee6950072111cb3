//! UI Components
//!
//! Leptos components for the generation form and its results.

mod dm_form;
mod progress_indicator;
mod evidence_list;
mod hook_list;
mod draft_card;
mod draft_panel;

pub use dm_form::DmFormPanel;
pub use progress_indicator::ProgressIndicator;
pub use evidence_list::EvidenceList;
pub use hook_list::HookList;
pub use draft_card::DraftCard;
pub use draft_panel::DraftPanel;
