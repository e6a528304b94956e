mod actions;
mod api;
mod config;
mod copy_button;
mod dom;
mod export;
mod form;
mod header;
mod i18n;
mod pdf;
mod pitch;
mod presentation;
mod render;
mod results;
mod state;
mod suggestion;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::config::AppConfig;
use crate::form::{InputForm, LoadingPanel};
use crate::header::{Footer, Header};
use crate::i18n::Language;
use crate::presentation::PresentationOverlay;
use crate::results::ResultsDisplay;
use crate::state::Session;
use crate::suggestion::FeatureSuggestion;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = AppConfig::default();
    provide_context(config.clone());

    // The only durable preference: read once at startup, written on toggle.
    let (language, set_language, _) = use_local_storage_with_options::<Language, FromToStringCodec>(
        "language",
        UseStorageOptions::default().initial_value(config.default_language),
    );

    let session = Session::new();

    // Keep <html dir lang> in sync with the selected language.
    Effect::new(move |_| {
        dom::apply_direction(language.get());
    });

    let on_toggle_language = Callback::new(move |_| {
        set_language.set(language.get_untracked().toggled());
    });

    let generate_config = config.clone();
    let on_generate = Callback::new(move |_| {
        actions::generate_pitch_action(
            generate_config.clone(),
            session,
            language.get_untracked(),
        );
    });

    let is_loading = Memo::new(move |_| session.request.get().is_loading());
    let pitch = Memo::new(move |_| session.request.with(|r| r.pitch().cloned()));

    let suggestions_enabled = config.enable_feature_suggestions;

    view! {
        <div class="app">
            <Header language on_toggle_language />

            <main>
                <InputForm session language on_generate />

                {move || {
                    is_loading.get().then(|| view! { <LoadingPanel language /> })
                }}

                {move || {
                    pitch
                        .get()
                        .map(|pitch| {
                            view! { <ResultsDisplay session language pitch=Signal::derive(move || pitch.clone()) /> }
                        })
                }}
            </main>

            {suggestions_enabled.then(|| view! { <FeatureSuggestion language /> })}

            <Footer />

            {move || {
                (session.show_presentation.get())
                    .then(|| pitch.get())
                    .flatten()
                    .map(|pitch| {
                        view! {
                            <PresentationOverlay
                                session
                                language
                                pitch=Signal::derive(move || pitch.clone())
                            />
                        }
                    })
            }}
        </div>
    }
}
