use serde::{Deserialize, Serialize};

/// The user-provided company identifiers. Sent to the endpoint verbatim;
/// validation only checks that at least one field carries input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub website: String,
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub description: String,
}

impl CompanyData {
    /// True iff any field is non-blank after trimming.
    pub fn has_input(&self) -> bool {
        [
            &self.website,
            &self.facebook,
            &self.instagram,
            &self.linkedin,
            &self.description,
        ]
        .iter()
        .any(|field| !field.trim().is_empty())
    }
}

/// Endpoint-reported certainty of the industry detection. Foreign values
/// collapse to `Unknown` rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Automation {
    pub title: String,
    pub productivity_gain: Option<String>,
    pub cost_savings: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Solution {
    pub title: String,
    pub summary: String,
    pub expanded_detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeepDiveExample {
    pub zoho_app: String,
    pub feature: String,
    pub benefit: String,
    pub implementation: String,
}

/// The endpoint's generated content. Every non-essential field is an explicit
/// option or defaults to empty; the renderer pattern-matches presence per
/// field. Replaced wholesale on each successful request, never merged.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pitch {
    pub industry: Option<String>,
    pub industry_confidence: Option<Confidence>,
    pub research_summary: Option<String>,
    pub pain_points: Vec<String>,
    pub automations: Vec<Automation>,
    pub solutions: Vec<Solution>,
    pub proposal_benefits: Vec<String>,
    pub sales_tip: Option<String>,
    pub deep_dive_examples: Vec<DeepDiveExample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_has_no_input() {
        let blank = CompanyData::default();
        assert!(!blank.has_input());

        let whitespace_only = CompanyData {
            website: "   ".to_string(),
            description: "\t\n".to_string(),
            ..CompanyData::default()
        };
        assert!(!whitespace_only.has_input());
    }

    #[test]
    fn any_single_field_counts_as_input() {
        let form = CompanyData {
            website: "acme.com".to_string(),
            ..CompanyData::default()
        };
        assert!(form.has_input());

        let form = CompanyData {
            description: "small retail chain".to_string(),
            ..CompanyData::default()
        };
        assert!(form.has_input());
    }

    #[test]
    fn company_data_serializes_camel_case() {
        let form = CompanyData {
            website: "acme.com".to_string(),
            ..CompanyData::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["website"], "acme.com");
        assert_eq!(value["facebook"], "");
        assert!(value.get("description").is_some());
    }

    #[test]
    fn minimal_payload_parses_with_absent_fields() {
        let pitch: Pitch =
            serde_json::from_str(r#"{"industry":"Retail","painPoints":["slow checkout"]}"#)
                .unwrap();
        assert_eq!(pitch.industry.as_deref(), Some("Retail"));
        assert_eq!(pitch.pain_points, vec!["slow checkout"]);
        assert_eq!(pitch.industry_confidence, None);
        assert!(pitch.automations.is_empty());
        assert!(pitch.solutions.is_empty());
        assert!(pitch.proposal_benefits.is_empty());
        assert!(pitch.deep_dive_examples.is_empty());
    }

    #[test]
    fn confidence_values_parse_case_sensitively() {
        let pitch: Pitch =
            serde_json::from_str(r#"{"industryConfidence":"high"}"#).unwrap();
        assert_eq!(pitch.industry_confidence, Some(Confidence::High));
    }

    #[test]
    fn foreign_confidence_values_collapse_to_unknown() {
        let pitch: Pitch =
            serde_json::from_str(r#"{"industryConfidence":"very-high"}"#).unwrap();
        assert_eq!(pitch.industry_confidence, Some(Confidence::Unknown));
    }

    #[test]
    fn nested_records_parse_camel_case() {
        let pitch: Pitch = serde_json::from_str(
            r#"{
                "automations":[{"title":"Auto-invoice","productivityGain":"3h/week"}],
                "solutions":[{"title":"CRM","summary":"Track leads","expandedDetail":"a\nb"}],
                "deepDiveExamples":[{"zohoApp":"Books","feature":"Recurring","benefit":"Less typing","implementation":"Enable it"}]
            }"#,
        )
        .unwrap();
        assert_eq!(pitch.automations[0].productivity_gain.as_deref(), Some("3h/week"));
        assert_eq!(pitch.automations[0].cost_savings, None);
        assert_eq!(pitch.solutions[0].expanded_detail.as_deref(), Some("a\nb"));
        assert_eq!(pitch.deep_dive_examples[0].zoho_app, "Books");
    }
}
