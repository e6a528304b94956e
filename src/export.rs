//! Export adapters: PDF download, mail/WhatsApp deep links. Failures stay
//! local to the adapter (one-off alert or log line) and never touch the
//! request state.

use anyhow::{anyhow, Result};
use leptos::logging::log;
use leptos::prelude::{document, window};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use crate::i18n::{t, Language};
use crate::pdf;
use crate::pitch::Pitch;

pub fn download_pdf(pitch: &Pitch, lang: Language) {
    if let Err(e) = try_download_pdf(pitch, lang) {
        log!("[ERROR] [Export] PDF download failed: {e:?}");
        let _ = window().alert_with_message(&t("errorFallback", lang));
    }
}

fn try_download_pdf(pitch: &Pitch, lang: Language) -> Result<()> {
    let bytes = pdf::pitch_document(pitch, lang)?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| anyhow!("blob creation failed: {e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("object url failed: {e:?}"))?;

    let anchor: web_sys::HtmlAnchorElement = document()
        .create_element("a")
        .map_err(|e| anyhow!("anchor creation failed: {e:?}"))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(pdf::PDF_FILE_NAME);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

pub fn mailto_url(share_text: &str, lang: Language) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode(&t("appTitle", lang)),
        encode(share_text)
    )
}

pub fn whatsapp_url(share_text: &str) -> String {
    format!("https://wa.me/?text={}", encode(share_text))
}

/// Hands the deep link to the browser; no delivery confirmation exists.
pub fn open_share_url(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        log!("[ERROR] [Export] Failed to open share url: {e:?}");
    }
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_urls_percent_encode_the_text() {
        let url = whatsapp_url("Faster onboarding\n• Lower costs");
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
        assert!(url.contains("Faster%20onboarding"));
    }

    #[test]
    fn mailto_carries_subject_and_body() {
        let url = mailto_url("hello world", Language::En);
        assert!(url.starts_with("mailto:?subject="));
        assert!(url.contains("&body=hello%20world"));
    }
}
