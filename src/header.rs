use leptos::prelude::*;

use crate::config::AppConfig;
use crate::i18n::{t, Language};

#[component]
pub fn Header(
    #[prop(into)] language: Signal<Language>,
    #[prop(into)] on_toggle_language: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let logo_eand = config.logo_eand.clone();
    let logo_zoho = config.logo_zoho.clone();

    view! {
        <header class="app-header">
            <div class="header-logos">
                <img src=logo_eand alt="e& Logo" class="logo logo-eand" />
                <div class="logo-divider"></div>
                <img src=logo_zoho alt="Zoho Logo" class="logo logo-zoho" />
            </div>
            <h1>{move || t("appTitle", language.get())}</h1>
            <button
                data-role="primary"
                on:click=move |_| on_toggle_language.run(())
            >
                {move || t("languageToggle", language.get())}
            </button>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>"© 2025 ZOHO Sales Expert & Pitch Generator"</p>
        </footer>
    }
}
