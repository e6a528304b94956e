use leptos::prelude::window;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::i18n::{t, Language};
use crate::pitch::{CompanyData, Pitch};

/// Everything that can go wrong between "submit" and a usable `Pitch`.
/// Only `Endpoint` carries text meant for the user; the rest collapse to the
/// localized generic fallback at display time.
#[derive(Debug, Error, PartialEq)]
pub enum PitchError {
    /// The endpoint answered with a structured `{"error": ...}` body.
    #[error("{0}")]
    Endpoint(String),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response payload: {0}")]
    Payload(String),
}

impl PitchError {
    /// The message shown to the user: the endpoint's own error text takes
    /// precedence, anything else becomes the generic localized fallback.
    pub fn display_message(&self, lang: Language) -> String {
        match self {
            PitchError::Endpoint(message) => message.clone(),
            _ => t("errorFallback", lang),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PitchRequest<'a> {
    r#type: &'static str,
    company_data: &'a CompanyData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionRequest<'a> {
    r#type: &'static str,
    suggestion: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,
}

/// Classifies a raw HTTP outcome into the error taxonomy. A 2xx body that
/// itself carries an `error` field outranks its status; a 2xx body that does
/// not parse as a pitch fails closed as `Payload`.
pub fn classify_response(status: u16, body: &str) -> Result<Pitch, PitchError> {
    if !(200..300).contains(&status) {
        return Err(PitchError::Status(status));
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| PitchError::Payload(e.to_string()))?;
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(PitchError::Endpoint(message.to_string()));
    }
    serde_json::from_value(value).map_err(|e| PitchError::Payload(e.to_string()))
}

/// Posts the form to the generation endpoint and returns the parsed pitch.
/// Single attempt by design: the configured timeout/retry budgets exist but
/// the observed request path never honored them, and we preserve that.
pub async fn generate_pitch(
    config: &AppConfig,
    company_data: &CompanyData,
) -> Result<Pitch, PitchError> {
    let response = Client::new()
        .post(&config.endpoint_url)
        .json(&PitchRequest {
            r#type: "pitch",
            company_data,
        })
        .send()
        .await
        .map_err(|e| PitchError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| PitchError::Network(e.to_string()))?;
    classify_response(status, &body)
}

/// Posts a free-text feature suggestion. Fire-and-acknowledge: the response
/// body is ignored, only the status matters, and nothing here touches the
/// pitch request state.
pub async fn submit_suggestion(config: &AppConfig, suggestion: &str) -> Result<(), PitchError> {
    let user_agent = window().navigator().user_agent().ok();
    let response = Client::new()
        .post(&config.endpoint_url)
        .json(&SuggestionRequest {
            r#type: "suggestion",
            suggestion,
            user_agent,
        })
        .send()
        .await
        .map_err(|e| PitchError::Network(e.to_string()))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(PitchError::Status(response.status().as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_request_payload_shape() {
        let company_data = CompanyData {
            website: "acme.com".to_string(),
            ..CompanyData::default()
        };
        let value = serde_json::to_value(PitchRequest {
            r#type: "pitch",
            company_data: &company_data,
        })
        .unwrap();
        assert_eq!(value["type"], "pitch");
        assert_eq!(value["companyData"]["website"], "acme.com");
        assert_eq!(value["companyData"]["description"], "");
    }

    #[test]
    fn suggestion_payload_shape() {
        let value = serde_json::to_value(SuggestionRequest {
            r#type: "suggestion",
            suggestion: "dark mode",
            user_agent: Some("test-agent".to_string()),
        })
        .unwrap();
        assert_eq!(value["type"], "suggestion");
        assert_eq!(value["suggestion"], "dark mode");
        assert_eq!(value["userAgent"], "test-agent");

        let without_agent = serde_json::to_value(SuggestionRequest {
            r#type: "suggestion",
            suggestion: "dark mode",
            user_agent: None,
        })
        .unwrap();
        assert!(without_agent.get("userAgent").is_none());
    }

    #[test]
    fn successful_body_parses_into_a_pitch() {
        let pitch =
            classify_response(200, r#"{"industry":"Retail","painPoints":["slow checkout"]}"#)
                .unwrap();
        assert_eq!(pitch.industry.as_deref(), Some("Retail"));
        assert_eq!(pitch.pain_points, vec!["slow checkout"]);
    }

    #[test]
    fn failed_status_maps_to_the_generic_fallback() {
        let err = classify_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, PitchError::Status(500));
        assert_eq!(
            err.display_message(Language::En),
            t("errorFallback", Language::En)
        );
    }

    #[test]
    fn structured_error_field_is_shown_verbatim() {
        let err = classify_response(200, r#"{"error":"quota exceeded"}"#).unwrap_err();
        assert_eq!(err, PitchError::Endpoint("quota exceeded".to_string()));
        assert_eq!(err.display_message(Language::En), "quota exceeded");
        assert_eq!(err.display_message(Language::Ar), "quota exceeded");
    }

    #[test]
    fn malformed_body_fails_closed() {
        let err = classify_response(200, "<!doctype html>").unwrap_err();
        assert!(matches!(err, PitchError::Payload(_)));
        assert_eq!(
            err.display_message(Language::Ar),
            t("errorFallback", Language::Ar)
        );
    }
}
