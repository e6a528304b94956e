use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::use_timeout_fn;

use crate::api;
use crate::config::AppConfig;
use crate::i18n::{t, Language};

const STATUS_DURATION_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Success,
    Error,
}

/// Free-text feature suggestion box. Tracks its own in-flight flag and a
/// transient status; entirely independent of the pitch request state.
/// Rapid double-submits are not deduplicated beyond the disabled button.
#[component]
pub fn FeatureSuggestion(#[prop(into)] language: Signal<Language>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let (suggestion, set_suggestion) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (status, set_status) = signal::<Option<SubmitStatus>>(None);

    let timeout_controls = use_timeout_fn(
        move |_| {
            set_status.set(None);
        },
        STATUS_DURATION_MS,
    );

    let on_submit = move |_| {
        let text = suggestion.get_untracked();
        if text.trim().is_empty() || is_submitting.get_untracked() {
            return;
        }

        let config = config.clone();
        let start = timeout_controls.start.clone();
        let stop = timeout_controls.stop.clone();
        set_is_submitting.set(true);
        spawn_local(async move {
            match api::submit_suggestion(&config, &text).await {
                Ok(()) => {
                    set_status.set(Some(SubmitStatus::Success));
                    set_suggestion.set(String::new());
                }
                Err(err) => {
                    log!("[ERROR] [Suggestion] Submission failed: {err}");
                    set_status.set(Some(SubmitStatus::Error));
                }
            }
            set_is_submitting.set(false);
            stop();
            start(());
        });
    };

    view! {
        <section class="feature-suggestion">
            <h3>{move || t("featureSuggestionTitle", language.get())}</h3>
            <textarea
                prop:value=suggestion
                on:input:target=move |ev| set_suggestion.set(ev.target().value())
                placeholder=move || t("featurePlaceholder", language.get())
                rows="3"
                disabled=is_submitting
            />
            <div class="suggestion-actions">
                <p class="privacy-note">{move || t("privacyNote", language.get())}</p>
                <button
                    data-role="primary"
                    on:click=on_submit
                    disabled=move || {
                        suggestion.get().trim().is_empty() || is_submitting.get()
                    }
                >
                    {move || t("submitIdea", language.get())}
                </button>
            </div>
            {move || {
                status
                    .get()
                    .map(|status| match status {
                        SubmitStatus::Success => {
                            view! {
                                <p class="status-success">
                                    {t("featureSuccess", language.get())}
                                </p>
                            }
                                .into_any()
                        }
                        SubmitStatus::Error => {
                            view! {
                                <p class="status-error">{t("featureError", language.get())}</p>
                            }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}
