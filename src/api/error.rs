//! API Errors
//!
//! Every failure of a generation request ends up as one `ApiError`,
//! whose `Display` text is what the form shows to the user.

use serde_json::Value;
use thiserror::Error;

/// One entry of a 422 validation response
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response
    #[error("Network error: could not connect to the server.\nURL: {base_url}\nCheck that the server is running. ({reason})")]
    Unreachable { base_url: String, reason: String },

    /// The connection dropped while reading the body
    #[error("Connection interrupted: {0}")]
    Interrupted(String),

    #[error("{}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The backend's AI provider rejected the call for billing reasons
    #[error("The AI service quota has been exceeded. Check the backend's API plan and billing details, then try again.")]
    QuotaExceeded(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    /// Terminal `{error}` event on the progress stream
    #[error("Generation failed: {0}")]
    Server(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("The progress stream closed before generation finished")]
    StreamEnded,
}

fn format_field_errors(errors: &[FieldError]) -> String {
    let mut text = String::from("Invalid input:");
    for error in errors {
        text.push_str(&format!("\n- {}: {}", error.field, error.message));
    }
    text
}

fn mentions_quota(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("insufficient_quota") || lower.contains("quota")
}

/// Field name from a FastAPI-style `loc` path, e.g. `["body", "target_url"]`
fn field_from_loc(loc: Option<&Value>) -> String {
    loc.and_then(Value::as_array)
        .and_then(|parts| {
            parts
                .iter()
                .rev()
                .find_map(|part| part.as_str().filter(|s| *s != "body"))
        })
        .unwrap_or("request")
        .to_string()
}

fn parse_field_errors(detail: &[Value]) -> Vec<FieldError> {
    detail
        .iter()
        .map(|entry| FieldError {
            field: field_from_loc(entry.get("loc")),
            message: entry
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("invalid value")
                .to_string(),
        })
        .collect()
}

impl ApiError {
    /// Classify a non-2xx response from its status code and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let json: Option<Value> = serde_json::from_str(body).ok();
        let detail = json.as_ref().and_then(|v| v.get("detail"));

        if let Some(entries) = detail.and_then(Value::as_array) {
            if !entries.is_empty() {
                return ApiError::Validation(parse_field_errors(entries));
            }
        }

        let message = detail
            .and_then(Value::as_str)
            .or_else(|| json.as_ref().and_then(|v| v.get("message")).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && json.is_none()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("API error: {}", status));

        if status == 429 || mentions_quota(&message) {
            return ApiError::QuotaExceeded(message);
        }
        ApiError::Http { status, message }
    }

    /// Classify the text of an `{error}` stream event
    pub fn from_server_message(message: String) -> Self {
        if mentions_quota(&message) {
            ApiError::QuotaExceeded(message)
        } else {
            ApiError::Server(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_errors_per_field() {
        let body = r#"{"detail":[
            {"loc":["body","target_url"],"msg":"invalid or missing URL scheme","type":"url_parsing"},
            {"loc":["body","your_product_summary"],"msg":"String should have at least 10 characters","type":"string_too_short"}
        ]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(
            err,
            ApiError::Validation(vec![
                FieldError {
                    field: "target_url".to_string(),
                    message: "invalid or missing URL scheme".to_string(),
                },
                FieldError {
                    field: "your_product_summary".to_string(),
                    message: "String should have at least 10 characters".to_string(),
                },
            ])
        );
        assert_eq!(
            err.to_string(),
            "Invalid input:\n- target_url: invalid or missing URL scheme\n- your_product_summary: String should have at least 10 characters"
        );
    }

    #[test]
    fn test_nested_loc_uses_last_named_segment() {
        let body = r#"{"detail":[{"loc":["body","preferred_tones",0],"msg":"bad tone"}]}"#;
        match ApiError::from_response(422, body) {
            ApiError::Validation(errors) => assert_eq!(errors[0].field, "preferred_tones"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_quota_by_status() {
        let err = ApiError::from_response(429, r#"{"detail":"Rate limited"}"#);
        assert!(matches!(err, ApiError::QuotaExceeded(_)));
        assert!(err.to_string().contains("quota has been exceeded"));
    }

    #[test]
    fn test_quota_by_detail_text() {
        let body = r#"{"detail":"Internal server error: Error code: 429 - {'error': {'code': 'insufficient_quota'}}"}"#;
        assert!(matches!(ApiError::from_response(500, body), ApiError::QuotaExceeded(_)));
        assert!(matches!(
            ApiError::from_server_message("You exceeded your current quota".to_string()),
            ApiError::QuotaExceeded(_)
        ));
    }

    #[test]
    fn test_detail_string_is_message() {
        let err = ApiError::from_response(502, r#"{"detail":"Search provider unavailable"}"#);
        assert_eq!(
            err,
            ApiError::Http { status: 502, message: "Search provider unavailable".to_string() }
        );
        assert_eq!(err.to_string(), "Search provider unavailable");
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        assert_eq!(
            ApiError::from_response(503, "Service Unavailable").to_string(),
            "Service Unavailable"
        );
        assert_eq!(ApiError::from_response(500, "").to_string(), "API error: 500");
        assert_eq!(ApiError::from_response(500, "{}").to_string(), "API error: 500");
    }

    #[test]
    fn test_unreachable_names_url() {
        let err = ApiError::Unreachable {
            base_url: "http://localhost:8000".to_string(),
            reason: "error sending request".to_string(),
        };
        let text = err.to_string();
        assert!(text.starts_with("Network error"));
        assert!(text.contains("URL: http://localhost:8000"));
    }

    #[test]
    fn test_server_event_message() {
        let err = ApiError::from_server_message("search failed".to_string());
        assert_eq!(err.to_string(), "Generation failed: search failed");
    }
}
