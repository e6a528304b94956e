use leptos::prelude::*;

use crate::i18n::{t, Language};
use crate::pitch::{CompanyData, Pitch};

/// The presentation overlay always shows exactly four slides.
pub const SLIDE_COUNT: usize = 4;

/// The single in-flight pitch request. Exactly one variant is active at a
/// time; a new submission replaces any prior result or error wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(Pitch),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn pitch(&self) -> Option<&Pitch> {
        match self {
            RequestState::Success(pitch) => Some(pitch),
            _ => None,
        }
    }
}

/// Editing a field recovers from a previous error; everything else is kept.
pub fn edited(request: RequestState) -> RequestState {
    match request {
        RequestState::Error(_) => RequestState::Idle,
        other => other,
    }
}

/// At most one solution card is expanded; toggling the expanded card
/// collapses it, picking another replaces it.
pub fn toggle_expanded(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

pub fn next_slide(current: usize) -> usize {
    (current + 1).min(SLIDE_COUNT - 1)
}

pub fn prev_slide(current: usize) -> usize {
    current.saturating_sub(1)
}

/// All UI session state. Signals are cheap copies into event handlers, the
/// same shape the data takes everywhere else in the app.
#[derive(Clone, Copy)]
pub struct Session {
    pub company: RwSignal<CompanyData>,
    pub request: RwSignal<RequestState>,
    pub expanded_solution: RwSignal<Option<usize>>,
    pub show_presentation: RwSignal<bool>,
    pub slide: RwSignal<usize>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            company: RwSignal::new(CompanyData::default()),
            request: RwSignal::new(RequestState::Idle),
            expanded_solution: RwSignal::new(None),
            show_presentation: RwSignal::new(false),
            slide: RwSignal::new(0),
        }
    }

    pub fn update_field(&self, apply: impl FnOnce(&mut CompanyData)) {
        self.company.update(apply);
        self.request.update(|request| {
            *request = edited(std::mem::take(request));
        });
    }

    /// Resets the whole session: empty form, Idle request, no expanded
    /// solution, presentation closed at slide 0.
    pub fn clear(&self) {
        self.company.set(CompanyData::default());
        self.request.set(RequestState::Idle);
        self.expanded_solution.set(None);
        self.show_presentation.set(false);
        self.slide.set(0);
    }

    /// True iff the form passes validation. On failure the localized
    /// validation message becomes the active error.
    pub fn validate(&self, lang: Language) -> bool {
        if self.company.get_untracked().has_input() {
            true
        } else {
            self.request
                .set(RequestState::Error(t("validationError", lang)));
            false
        }
    }

    pub fn close_presentation(&self) {
        self.show_presentation.set(false);
        self.slide.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_clears_only_errors() {
        assert_eq!(
            edited(RequestState::Error("boom".to_string())),
            RequestState::Idle
        );
        assert_eq!(edited(RequestState::Idle), RequestState::Idle);
        assert_eq!(edited(RequestState::Loading), RequestState::Loading);
        let success = RequestState::Success(Pitch::default());
        assert_eq!(edited(success.clone()), success);
    }

    #[test]
    fn toggling_the_expanded_solution_collapses_it() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 2), None);
        // Picking another index replaces, never two expanded at once.
        assert_eq!(toggle_expanded(Some(2), 0), Some(0));
    }

    #[test]
    fn slides_clamp_to_the_fixed_deck() {
        assert_eq!(next_slide(0), 1);
        assert_eq!(next_slide(SLIDE_COUNT - 1), SLIDE_COUNT - 1);
        assert_eq!(prev_slide(0), 0);
        assert_eq!(prev_slide(3), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let session = Session::new();
        session.company.update(|c| c.website = "acme.com".to_string());
        session.request.set(RequestState::Success(Pitch::default()));
        session.expanded_solution.set(Some(1));
        session.show_presentation.set(true);
        session.slide.set(3);

        session.clear();

        assert_eq!(session.company.get_untracked(), CompanyData::default());
        assert_eq!(session.request.get_untracked(), RequestState::Idle);
        assert_eq!(session.expanded_solution.get_untracked(), None);
        assert!(!session.show_presentation.get_untracked());
        assert_eq!(session.slide.get_untracked(), 0);
    }

    #[test]
    fn validation_failure_sets_the_localized_message() {
        let session = Session::new();
        assert!(!session.validate(Language::En));
        assert_eq!(
            session.request.get_untracked().error(),
            Some(t("validationError", Language::En).as_str())
        );

        session.company.update(|c| c.website = "acme.com".to_string());
        assert!(session.validate(Language::En));
    }
}
