use leptos::logging::log;
use leptos::{prelude::*, task::spawn_local};
use leptos_use::use_timeout_fn;
use wasm_bindgen_futures::JsFuture;

use crate::i18n::{t, Language};

pub const FEEDBACK_DURATION_MS: u32 = 2000;

/// Copies the share text to the clipboard and acknowledges with a transient
/// localized "copied" label.
#[component]
pub fn CopyButton(
    #[prop(into)] text_to_copy: Signal<String>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let timeout_controls = use_timeout_fn(
        move |_| {
            set_copied.set(false);
        },
        FEEDBACK_DURATION_MS as f64,
    );

    let on_copy = move |_event: web_sys::MouseEvent| {
        let current_text_to_copy = text_to_copy.get_untracked();
        if current_text_to_copy.is_empty() {
            return;
        }

        // The clipboard API may not be available in all contexts (e.g.
        // non-secure http), in which case the `Clipboard` object is
        // `undefined`.
        if let Some(clipboard) =
            Some(window().navigator().clipboard()).filter(|c| !c.is_undefined())
        {
            let promise = clipboard.write_text(&current_text_to_copy);

            let start = timeout_controls.start.clone();
            let stop = timeout_controls.stop.clone();

            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        stop();
                        set_copied.set(true);
                        start(());
                    }
                    Err(e) => {
                        log!("[ERROR] [CopyButton] Error copying to clipboard: {:?}", e);
                    }
                }
            });
        } else {
            log!("[ERROR] [CopyButton] Clipboard API not available or not in secure context.");
        }
    };

    view! {
        <button class="copy-button" data-size="compact" on:click=on_copy>
            {move || {
                if copied.get() {
                    t("copied", language.get())
                } else {
                    t("copyToClipboard", language.get())
                }
            }}
        </button>
    }
}
