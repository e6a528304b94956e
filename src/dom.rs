//! Small DOM affordances: document direction and the scroll-to-results hop.

use leptos::logging::log;
use leptos::prelude::document;

use crate::i18n::Language;

pub const RESULTS_SECTION_ID: &str = "results-section";

/// Mirrors the selected language onto `<html dir lang>`.
pub fn apply_direction(lang: Language) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.set_attribute("dir", lang.dir()) {
        log!("[WARN] [Dom] Failed to set dir attribute: {e:?}");
    }
    if let Err(e) = root.set_attribute("lang", lang.as_str()) {
        log!("[WARN] [Dom] Failed to set lang attribute: {e:?}");
    }
}

/// Smooth-scrolls to the results region. Presentation affordance only; a
/// missing element (e.g. results not yet mounted) is silently fine.
pub fn scroll_to_results() {
    let Some(element) = document().get_element_by_id(RESULTS_SECTION_ID) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
