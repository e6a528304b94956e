use leptos::prelude::*;

use crate::config::AppConfig;
use crate::copy_button::CopyButton;
use crate::dom::RESULTS_SECTION_ID;
use crate::export;
use crate::i18n::{t, Language};
use crate::pitch::Pitch;
use crate::render::{project, DisplaySections};
use crate::state::{toggle_expanded, Session};

#[component]
pub fn ResultsDisplay(
    session: Session,
    #[prop(into)] language: Signal<Language>,
    #[prop(into)] pitch: Signal<Pitch>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let sections = Memo::new(move |_| project(&pitch.get(), language.get()));

    let presentation_enabled = config.enable_presentation_mode;
    let on_download = move |_| {
        export::download_pdf(&pitch.get_untracked(), language.get_untracked());
    };

    view! {
        <div id=RESULTS_SECTION_ID class="results">
            <section class="card results-toolbar">
                <h2>{move || t("resultsGenerated", language.get())}</h2>
                <div class="toolbar-buttons">
                    {presentation_enabled
                        .then(|| {
                            view! {
                                <button
                                    data-role="secondary"
                                    on:click=move |_| session.show_presentation.set(true)
                                >
                                    {move || t("presentationModeButton", language.get())}
                                </button>
                            }
                        })}
                    <button data-role="primary" on:click=on_download>
                        {move || t("downloadPDF", language.get())}
                    </button>
                </div>
            </section>

            <IndustryAndPainPoints sections language />
            <Automations sections language />
            <Solutions sections language session />
            <Proposal sections language />
            <SalesTip sections language />
            <DeepDives sections language />
        </div>
    }
}

/// Part A: always rendered; the industry falls back to the localized
/// placeholder and the badge appears only when the endpoint reported one.
#[component]
fn IndustryAndPainPoints(
    sections: Memo<DisplaySections>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    view! {
        <section class="card part-a">
            <h3>{move || t("partATitle", language.get())}</h3>
            <div class="industry-row">
                <h4>{move || t("detectedIndustry", language.get())}</h4>
                <span class="industry-name">{move || sections.get().industry.industry}</span>
                {move || {
                    sections
                        .get()
                        .industry
                        .badge
                        .map(|badge| {
                            view! { <span class=format!("badge {}", badge.class)>{badge.label}</span> }
                        })
                }}
            </div>
            {move || {
                sections
                    .get()
                    .research_summary
                    .map(|summary| {
                        view! {
                            <div class="research-summary">
                                <h4>{t("researchSummaryTitle", language.get())}</h4>
                                <p>{summary}</p>
                            </div>
                        }
                    })
            }}
            {move || {
                let pain_points = sections.get().pain_points;
                (!pain_points.is_empty())
                    .then(|| {
                        view! {
                            <div class="pain-points">
                                <h4>{t("painPointsTitle", language.get())}</h4>
                                <ul>
                                    {pain_points
                                        .into_iter()
                                        .map(|point| view! { <li>{point}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

/// Part B: hidden entirely when no automations came back; the gain/savings
/// rows render independently of each other.
#[component]
fn Automations(
    sections: Memo<DisplaySections>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    view! {
        {move || {
            let automations = sections.get().automations;
            (!automations.is_empty())
                .then(|| {
                    view! {
                        <section class="card part-b">
                            <h3>{t("partBTitle", language.get())}</h3>
                            <div class="automation-grid">
                                {automations
                                    .into_iter()
                                    .map(|card| {
                                        view! {
                                            <div class="automation-card">
                                                <h4>{card.title}</h4>
                                                {card
                                                    .productivity_gain
                                                    .map(|gain| {
                                                        view! {
                                                            <p>
                                                                <strong>
                                                                    {t("productivityGain", language.get())} ": "
                                                                </strong>
                                                                {gain}
                                                            </p>
                                                        }
                                                    })}
                                                {card
                                                    .cost_savings
                                                    .map(|savings| {
                                                        view! {
                                                            <p>
                                                                <strong>
                                                                    {t("costSavings", language.get())} ": "
                                                                </strong>
                                                                {savings}
                                                            </p>
                                                        }
                                                    })}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
        }}
    }
}

/// Part C: solution cards with a single expandable detail pane.
#[component]
fn Solutions(
    sections: Memo<DisplaySections>,
    #[prop(into)] language: Signal<Language>,
    session: Session,
) -> impl IntoView {
    view! {
        {move || {
            let solutions = sections.get().solutions;
            (!solutions.is_empty())
                .then(|| {
                    view! {
                        <section class="card part-c">
                            <h3>{t("partCTitle", language.get())}</h3>
                            <div class="solution-list">
                                {solutions
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, card)| {
                                        let expanded = Memo::new(move |_| {
                                            session.expanded_solution.get() == Some(index)
                                        });
                                        let has_detail = !card.detail_paragraphs.is_empty();
                                        let paragraphs = card.detail_paragraphs.clone();
                                        view! {
                                            <div class="solution-card">
                                                <div class="solution-summary">
                                                    <h4>{card.title}</h4>
                                                    <p>{card.summary}</p>
                                                    <button
                                                        data-size="compact"
                                                        on:click=move |_| {
                                                            session
                                                                .expanded_solution
                                                                .update(|current| {
                                                                    *current = toggle_expanded(*current, index);
                                                                })
                                                        }
                                                    >
                                                        {move || {
                                                            if expanded.get() {
                                                                t("collapseDetails", language.get())
                                                            } else {
                                                                t("expandDetails", language.get())
                                                            }
                                                        }}
                                                    </button>
                                                </div>
                                                {move || {
                                                    (expanded.get() && has_detail)
                                                        .then(|| {
                                                            view! {
                                                                <div class="solution-detail">
                                                                    {paragraphs
                                                                        .clone()
                                                                        .into_iter()
                                                                        .map(|paragraph| view! { <p>{paragraph}</p> })
                                                                        .collect_view()}
                                                                </div>
                                                            }
                                                        })
                                                }}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
        }}
    }
}

/// Part D: benefits plus the closing statement, and the three share paths
/// that all consume the identical derived share text.
#[component]
fn Proposal(
    sections: Memo<DisplaySections>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    let share_text =
        Signal::derive(move || {
            sections
                .get()
                .proposal
                .map(|p| p.share_text)
                .unwrap_or_default()
        });

    view! {
        {move || {
            sections
                .get()
                .proposal
                .map(|proposal| {
                    let email_url = export::mailto_url(&proposal.share_text, language.get());
                    let whatsapp_url = export::whatsapp_url(&proposal.share_text);
                    view! {
                        <section class="card part-d">
                            <h3>{t("partDTitle", language.get())}</h3>
                            <ul class="benefit-list">
                                {proposal
                                    .benefits
                                    .into_iter()
                                    .map(|benefit| view! { <li>{benefit}</li> })
                                    .collect_view()}
                            </ul>
                            <p class="proposal-closing">{proposal.closing}</p>
                            <div class="share-row">
                                <CopyButton text_to_copy=share_text language />
                                <button
                                    data-size="compact"
                                    on:click=move |_| export::open_share_url(&email_url)
                                >
                                    {t("shareEmail", language.get())}
                                </button>
                                <button
                                    data-size="compact"
                                    on:click=move |_| export::open_share_url(&whatsapp_url)
                                >
                                    {t("shareWhatsApp", language.get())}
                                </button>
                            </div>
                        </section>
                    }
                })
        }}
    }
}

#[component]
fn SalesTip(
    sections: Memo<DisplaySections>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    view! {
        {move || {
            sections
                .get()
                .sales_tip
                .map(|tip| {
                    view! {
                        <section class="card sales-tip">
                            <h3>{t("salesTipTitle", language.get())}</h3>
                            <p>{tip}</p>
                        </section>
                    }
                })
        }}
    }
}

#[component]
fn DeepDives(
    sections: Memo<DisplaySections>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    view! {
        {move || {
            let deep_dives = sections.get().deep_dives;
            (!deep_dives.is_empty())
                .then(|| {
                    view! {
                        <section class="card deep-dives">
                            <h3>{t("deepDiveTitle", language.get())}</h3>
                            <div class="deep-dive-grid">
                                {deep_dives
                                    .into_iter()
                                    .map(|card| {
                                        view! {
                                            <div class="deep-dive-card">
                                                <h4>{card.zoho_app}</h4>
                                                <p>
                                                    <strong>{t("feature", language.get())} ": "</strong>
                                                    {card.feature}
                                                </p>
                                                <p>
                                                    <strong>{t("benefit", language.get())} ": "</strong>
                                                    {card.benefit}
                                                </p>
                                                <p>
                                                    <strong>{t("howToBuild", language.get())} ": "</strong>
                                                    {card.implementation}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
        }}
    }
}
