use leptos::prelude::*;

use crate::i18n::{t, Language};
use crate::pitch::CompanyData;
use crate::state::Session;

#[component]
fn FormField(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type="text"
                prop:value=value
                on:input:target=move |ev| on_input.run(ev.target().value())
                placeholder=placeholder
                disabled=disabled
            />
        </div>
    }
}

#[component]
pub fn InputForm(
    session: Session,
    #[prop(into)] language: Signal<Language>,
    #[prop(into)] on_generate: Callback<()>,
) -> impl IntoView {
    let is_loading = Memo::new(move |_| session.request.get().is_loading());
    let error = Memo::new(move |_| session.request.with(|r| r.error().map(str::to_string)));

    // One (getter, setter-field, label key, placeholder key) row per input.
    let field = move |label_key: &'static str,
                      placeholder_key: &'static str,
                      get: fn(&CompanyData) -> &String,
                      set: fn(&mut CompanyData, String)| {
        view! {
            <FormField
                label=Signal::derive(move || t(label_key, language.get()))
                placeholder=Signal::derive(move || t(placeholder_key, language.get()))
                value=Signal::derive(move || session.company.with(|c| get(c).clone()))
                on_input=Callback::new(move |value| session.update_field(|c| set(c, value)))
                disabled=is_loading
            />
        }
    };

    view! {
        <section class="input-form card">
            <h2>{move || t("inputSectionTitle", language.get())}</h2>

            <div class="form-grid">
                {field(
                    "websiteLabel",
                    "websitePlaceholder",
                    |c| &c.website,
                    |c, v| c.website = v,
                )}
                {field(
                    "facebookLabel",
                    "facebookPlaceholder",
                    |c| &c.facebook,
                    |c, v| c.facebook = v,
                )}
                {field(
                    "instagramLabel",
                    "instagramPlaceholder",
                    |c| &c.instagram,
                    |c, v| c.instagram = v,
                )}
                {field(
                    "linkedinLabel",
                    "linkedinPlaceholder",
                    |c| &c.linkedin,
                    |c, v| c.linkedin = v,
                )}
                <div class="form-field form-field-wide">
                    <label>{move || t("descriptionLabel", language.get())}</label>
                    <textarea
                        prop:value=move || session.company.with(|c| c.description.clone())
                        on:input:target=move |ev| {
                            session.update_field(|c| c.description = ev.target().value())
                        }
                        placeholder=move || t("descriptionPlaceholder", language.get())
                        rows="4"
                        disabled=is_loading
                    />
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! { <error-box>{message}</error-box> }
                    })
            }}

            <div class="form-actions">
                <button
                    data-role="primary"
                    on:click=move |_| on_generate.run(())
                    disabled=is_loading
                >
                    {move || t("generateButton", language.get())}
                </button>
                <button
                    data-role="secondary"
                    on:click=move |_| session.clear()
                    disabled=is_loading
                >
                    {move || t("clearButton", language.get())}
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn LoadingPanel(#[prop(into)] language: Signal<Language>) -> impl IntoView {
    view! {
        <section class="loading-panel card">
            <span class="spinner"></span>
            <p class="loading-message">{move || t("loadingMessage", language.get())}</p>
            <p class="loading-subtext">{move || t("loadingSubtext", language.get())}</p>
        </section>
    }
}
