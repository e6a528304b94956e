use crate::i18n::Language;

/// Deployment configuration. Constructed once in `main`, shared read-only via
/// context; nothing mutates it at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// External Apps Script endpoint that performs the actual generation.
    pub endpoint_url: String,
    pub logo_eand: String,
    pub logo_zoho: String,
    /// Declared API budgets. Deliberately not wired into the request path;
    /// the request client performs a single attempt with no timeout.
    pub timeout_ms: u32,
    pub retry_attempts: u32,
    pub enable_presentation_mode: bool,
    pub enable_feature_suggestions: bool,
    pub default_language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            endpoint_url: "https://script.google.com/macros/s/AKfycbztKMM9RqAfM4K6qbVtTulAehOHptESmiy_gVdM01gtBycOqsVvArM_bxb1Kd_-AP7K/exec".to_string(),
            logo_eand: "https://ik.imagekit.io/xtj3m9hth/image-remove1bg-preview%20(3).png?updatedAt=1761220721716".to_string(),
            logo_zoho: "https://ik.imagekit.io/xtj3m9hth/image-removebg-preview%20(3).png?updatedAt=1761220721361".to_string(),
            timeout_ms: 60_000,
            retry_attempts: 2,
            enable_presentation_mode: true,
            enable_feature_suggestions: true,
            default_language: Language::En,
        }
    }
}
