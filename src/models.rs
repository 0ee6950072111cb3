//! Frontend Models
//!
//! Data structures matching the DM generation API.

use serde::{Deserialize, Serialize};

/// A research snippet found by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub source: String,
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// A candidate messaging angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookItem {
    /// Model-assigned id; may repeat or be negative
    pub id: i64,
    pub title: String,
    pub reason: String,
    /// Zero-based indices into the evidence list
    #[serde(default)]
    pub related_evidence_indices: Vec<usize>,
}

impl HookItem {
    /// At most three 1-based evidence references, e.g. `#1`
    pub fn evidence_badges(&self) -> Vec<String> {
        self.related_evidence_indices
            .iter()
            .take(3)
            .map(|idx| format!("#{}", idx + 1))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Polite,
    Casual,
    ProblemSolver,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Polite, Tone::Casual, Tone::ProblemSolver];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Polite => "Polite",
            Tone::Casual => "Casual",
            Tone::ProblemSolver => "Problem solver",
        }
    }

    /// CSS modifier for the draft card accent
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Polite => "tone-polite",
            Tone::Casual => "tone-casual",
            Tone::ProblemSolver => "tone-problem-solver",
        }
    }
}

/// A generated message variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmDraft {
    pub tone: Tone,
    pub title: String,
    pub body_markdown: String,
}

impl DmDraft {
    /// Text placed on the clipboard by the copy button
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body_markdown)
    }

    /// Markdown shown in the preview pane
    pub fn preview_markdown(&self) -> String {
        format!("## {}\n\n{}", self.title, self.body_markdown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDmRequest {
    pub target_url: String,
    pub target_role: Option<String>,
    pub company_name: Option<String>,
    pub your_product_name: String,
    pub your_product_summary: String,
    pub preferred_tones: Vec<Tone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDmResponse {
    #[serde(default)]
    pub generation_id: Option<i64>,
    #[serde(default)]
    pub evidences: Vec<EvidenceItem>,
    #[serde(default)]
    pub hooks: Vec<HookItem>,
    #[serde(default)]
    pub drafts: Vec<DmDraft>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Researching,
    Analyzing,
    Writing,
    Completed,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Researching => "Researching",
            Stage::Analyzing => "Analyzing",
            Stage::Writing => "Writing",
            Stage::Completed => "Completed",
        }
    }
}

/// Progress report from the streaming endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub stage: Stage,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub progress: u8,
}

impl ProgressUpdate {
    pub fn completed() -> Self {
        Self {
            stage: Stage::Completed,
            message: "Generation complete".to_string(),
            progress: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_serializes_nulls_and_tones() {
        let request = GenerateDmRequest {
            target_url: "https://example.com".to_string(),
            target_role: None,
            company_name: Some("Example Inc".to_string()),
            your_product_name: "Acme CRM".to_string(),
            your_product_summary: "A CRM for small sales teams".to_string(),
            preferred_tones: Tone::ALL.to_vec(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["target_role"], serde_json::Value::Null);
        assert_eq!(json["company_name"], "Example Inc");
        assert_eq!(
            json["preferred_tones"],
            serde_json::json!(["polite", "casual", "problem_solver"])
        );
    }

    #[test]
    fn test_response_missing_lists_default_to_empty() {
        let response: GenerateDmResponse =
            serde_json::from_str(r#"{"created_at":"2024-01-01T00:00:00"}"#).unwrap();
        assert!(response.evidences.is_empty());
        assert!(response.hooks.is_empty());
        assert!(response.drafts.is_empty());
        assert_eq!(response.generation_id, None);
    }

    #[test]
    fn test_negative_hook_id_decodes() {
        let hook: HookItem =
            serde_json::from_str(r#"{"id":-1,"title":"t","reason":"r"}"#).unwrap();
        assert_eq!(hook.id, -1);
        assert!(hook.related_evidence_indices.is_empty());
    }

    #[test]
    fn test_evidence_badges_are_one_based_and_capped() {
        let hook = HookItem {
            id: 1,
            title: "Expansion".to_string(),
            reason: "New office".to_string(),
            related_evidence_indices: vec![0, 2, 3, 5],
        };
        assert_eq!(hook.evidence_badges(), vec!["#1", "#3", "#4"]);
    }

    #[test]
    fn test_draft_texts() {
        let draft = DmDraft {
            tone: Tone::Casual,
            title: "Quick idea".to_string(),
            body_markdown: "Hi there".to_string(),
        };
        assert_eq!(draft.clipboard_text(), "Quick idea\n\nHi there");
        assert_eq!(draft.preview_markdown(), "## Quick idea\n\nHi there");
    }
}
