//! DM Form Input
//!
//! Raw field values and the checks run before any request is sent.

use thiserror::Error;

use crate::models::{GenerateDmRequest, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TargetUrl,
    ProductName,
    ProductSummary,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::TargetUrl => "Target URL",
            FormField::ProductName => "Product name",
            FormField::ProductSummary => "Product summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Required(FormField),
    #[error("Target URL must be an http:// or https:// address")]
    InvalidUrl,
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::Required(field) => *field,
            FormError::InvalidUrl => FormField::TargetUrl,
        }
    }
}

/// Values typed into the generation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DmForm {
    pub target_url: String,
    pub target_role: String,
    pub company_name: String,
    pub product_name: String,
    pub product_summary: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_web_url(value: &str) -> bool {
    reqwest::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

impl DmForm {
    /// Build the request, or every problem that blocks sending it
    pub fn validate(&self) -> Result<GenerateDmRequest, Vec<FormError>> {
        let mut errors = Vec::new();

        let target_url = self.target_url.trim();
        if target_url.is_empty() {
            errors.push(FormError::Required(FormField::TargetUrl));
        } else if !is_web_url(target_url) {
            errors.push(FormError::InvalidUrl);
        }
        if self.product_name.trim().is_empty() {
            errors.push(FormError::Required(FormField::ProductName));
        }
        if self.product_summary.trim().is_empty() {
            errors.push(FormError::Required(FormField::ProductSummary));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(GenerateDmRequest {
            target_url: target_url.to_string(),
            target_role: optional(&self.target_role),
            company_name: optional(&self.company_name),
            your_product_name: self.product_name.trim().to_string(),
            your_product_summary: self.product_summary.trim().to_string(),
            preferred_tones: Tone::ALL.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> DmForm {
        DmForm {
            target_url: "https://example.com".to_string(),
            target_role: String::new(),
            company_name: "  Example Inc ".to_string(),
            product_name: "Acme CRM".to_string(),
            product_summary: "Pipeline tracking for small sales teams".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.target_role, None);
        assert_eq!(request.company_name.as_deref(), Some("Example Inc"));
        assert_eq!(request.preferred_tones, Tone::ALL.to_vec());
    }

    #[test]
    fn test_each_blank_required_field_blocks_request() {
        let blanks: [(fn(&mut DmForm), FormField); 3] = [
            (|f| f.target_url = "  ".to_string(), FormField::TargetUrl),
            (|f| f.product_name = String::new(), FormField::ProductName),
            (|f| f.product_summary = "\t".to_string(), FormField::ProductSummary),
        ];
        for (blank, field) in blanks {
            let mut form = filled();
            blank(&mut form);
            assert_eq!(form.validate(), Err(vec![FormError::Required(field)]));
        }
    }

    #[test]
    fn test_empty_form_reports_all_fields() {
        let errors = DmForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].to_string(), "Target URL is required");
    }

    #[test]
    fn test_url_must_be_web_address() {
        for bad in ["example.com", "ftp://example.com", "mailto:sales@example.com"] {
            let mut form = filled();
            form.target_url = bad.to_string();
            assert_eq!(form.validate(), Err(vec![FormError::InvalidUrl]), "{}", bad);
        }
    }
}
