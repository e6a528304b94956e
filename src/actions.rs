use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::dom;
use crate::i18n::Language;
use crate::state::{RequestState, Session};

/// Delay before scrolling so the results section exists in the DOM first.
const SCROLL_DELAY_MS: u32 = 100;

/// Validates and submits the form. Invalid input never reaches the network;
/// a valid submission moves the session to Loading and resolves to
/// Success/Error when the single request attempt completes. There is no
/// cancellation: a stale response simply overwrites whatever state is
/// current (last writer wins).
pub fn generate_pitch_action(config: AppConfig, session: Session, lang: Language) {
    if !session.validate(lang) {
        return;
    }

    session.request.set(RequestState::Loading);
    session.expanded_solution.set(None);

    spawn_local(async move {
        let company_data = session.company.get_untracked();
        match api::generate_pitch(&config, &company_data).await {
            Ok(pitch) => {
                session.request.set(RequestState::Success(pitch));
                TimeoutFuture::new(SCROLL_DELAY_MS).await;
                dom::scroll_to_results();
            }
            Err(err) => {
                log!("[ERROR] [Pitch] Generation failed: {err}");
                session
                    .request
                    .set(RequestState::Error(err.display_message(lang)));
            }
        }
    });
}
