use leptos::prelude::*;

use crate::i18n::{t, Language};
use crate::pitch::Pitch;
use crate::render::project;
use crate::state::{next_slide, prev_slide, Session, SLIDE_COUNT};

/// Full-screen slide deck over the generated pitch. Four fixed slides:
/// overview, challenges, solutions, proposal. Closing resets to slide 0.
#[component]
pub fn PresentationOverlay(
    session: Session,
    #[prop(into)] language: Signal<Language>,
    #[prop(into)] pitch: Signal<Pitch>,
) -> impl IntoView {
    let slide = session.slide;
    let sections = Memo::new(move |_| project(&pitch.get(), language.get()));

    let slide_title = move || {
        t(
            &format!("presentationSlide{}", slide.get() + 1),
            language.get(),
        )
    };

    let can_go_prev = Memo::new(move |_| slide.get() > 0);
    let can_go_next = Memo::new(move |_| slide.get() < SLIDE_COUNT - 1);

    view! {
        <div class="presentation-overlay">
            <div class="presentation-slide">
                <h2>{slide_title}</h2>
                {move || match slide.get() {
                    0 => {
                        let sections = sections.get();
                        view! {
                            <div class="slide-body">
                                <p class="slide-industry">{sections.industry.industry}</p>
                                {sections
                                    .research_summary
                                    .map(|summary| view! { <p>{summary}</p> })}
                            </div>
                        }
                            .into_any()
                    }
                    1 => {
                        view! {
                            <div class="slide-body">
                                <ul>
                                    {sections
                                        .get()
                                        .pain_points
                                        .into_iter()
                                        .map(|point| view! { <li>{point}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                            .into_any()
                    }
                    2 => {
                        view! {
                            <div class="slide-body">
                                {sections
                                    .get()
                                    .solutions
                                    .into_iter()
                                    .map(|solution| {
                                        view! {
                                            <div class="slide-solution">
                                                <h4>{solution.title}</h4>
                                                <p>{solution.summary}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    _ => {
                        let sections = sections.get();
                        view! {
                            <div class="slide-body">
                                <ul>
                                    {sections
                                        .proposal
                                        .as_ref()
                                        .map(|proposal| proposal.benefits.clone())
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|benefit| view! { <li>{benefit}</li> })
                                        .collect_view()}
                                </ul>
                                {sections
                                    .proposal
                                    .map(|proposal| view! { <p class="proposal-closing">{proposal.closing}</p> })}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <div class="presentation-controls">
                <button
                    data-size="compact"
                    on:click=move |_| slide.update(|s| *s = prev_slide(*s))
                    disabled=move || !can_go_prev.get()
                >
                    {move || t("previousSlide", language.get())}
                </button>
                <span class="slide-counter">
                    {move || format!("{} / {}", slide.get() + 1, SLIDE_COUNT)}
                </span>
                <button
                    data-size="compact"
                    on:click=move |_| slide.update(|s| *s = next_slide(*s))
                    disabled=move || !can_go_next.get()
                >
                    {move || t("nextSlide", language.get())}
                </button>
                <button
                    data-role="destructive"
                    data-size="compact"
                    on:click=move |_| session.close_presentation()
                >
                    {move || t("closePresentation", language.get())}
                </button>
            </div>
        </div>
    }
}
