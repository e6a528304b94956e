//! Pure projection from a `Pitch` plus the active language into renderable
//! sections. All presence/absence branching lives here so it can be tested
//! without a DOM.

use crate::i18n::{confidence_key, t, Language};
use crate::pitch::{Confidence, Pitch};

/// Deep-dive battle cards are capped regardless of payload size.
pub const MAX_DEEP_DIVES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBadge {
    pub label: String,
    /// Fixed mapping: high/green, medium/yellow, low/red, anything else gray.
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndustrySection {
    pub industry: String,
    pub badge: Option<ConfidenceBadge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutomationCard {
    pub title: String,
    pub productivity_gain: Option<String>,
    pub cost_savings: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCard {
    pub title: String,
    pub summary: String,
    /// The expanded detail split on newlines, one paragraph per segment.
    /// Empty when the payload carried no detail.
    pub detail_paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProposalSection {
    pub benefits: Vec<String>,
    pub closing: String,
    /// The exact derived string every export adapter consumes.
    pub share_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeepDiveCard {
    pub zoho_app: String,
    pub feature: String,
    pub benefit: String,
    pub implementation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySections {
    /// Always present; shows the localized no-data placeholder when the
    /// endpoint stayed silent on the industry.
    pub industry: IndustrySection,
    pub research_summary: Option<String>,
    pub pain_points: Vec<String>,
    pub automations: Vec<AutomationCard>,
    pub solutions: Vec<SolutionCard>,
    pub proposal: Option<ProposalSection>,
    pub sales_tip: Option<String>,
    pub deep_dives: Vec<DeepDiveCard>,
}

pub fn confidence_badge(confidence: Confidence, lang: Language) -> ConfidenceBadge {
    let class = match confidence {
        Confidence::High => "badge-green",
        Confidence::Medium => "badge-yellow",
        Confidence::Low => "badge-red",
        Confidence::Unknown => "badge-gray",
    };
    ConfidenceBadge {
        label: t(&confidence_key(confidence.as_str()), lang),
        class,
    }
}

/// Bullet-joined benefits followed by the localized closing statement.
pub fn share_text(benefits: &[String], lang: Language) -> String {
    format!("{}\n\n{}", benefits.join("\n• "), t("proposalClosing", lang))
}

pub fn split_paragraphs(detail: &str) -> Vec<String> {
    detail.split('\n').map(str::to_string).collect()
}

pub fn project(pitch: &Pitch, lang: Language) -> DisplaySections {
    DisplaySections {
        industry: IndustrySection {
            industry: pitch
                .industry
                .clone()
                .unwrap_or_else(|| t("noData", lang)),
            badge: pitch
                .industry_confidence
                .map(|confidence| confidence_badge(confidence, lang)),
        },
        research_summary: pitch.research_summary.clone(),
        pain_points: pitch.pain_points.clone(),
        automations: pitch
            .automations
            .iter()
            .map(|automation| AutomationCard {
                title: automation.title.clone(),
                productivity_gain: automation.productivity_gain.clone(),
                cost_savings: automation.cost_savings.clone(),
            })
            .collect(),
        solutions: pitch
            .solutions
            .iter()
            .map(|solution| SolutionCard {
                title: solution.title.clone(),
                summary: solution.summary.clone(),
                detail_paragraphs: solution
                    .expanded_detail
                    .as_deref()
                    .map(split_paragraphs)
                    .unwrap_or_default(),
            })
            .collect(),
        proposal: (!pitch.proposal_benefits.is_empty()).then(|| ProposalSection {
            benefits: pitch.proposal_benefits.clone(),
            closing: t("proposalClosing", lang),
            share_text: share_text(&pitch.proposal_benefits, lang),
        }),
        sales_tip: pitch.sales_tip.clone(),
        deep_dives: pitch
            .deep_dive_examples
            .iter()
            .take(MAX_DEEP_DIVES)
            .map(|example| DeepDiveCard {
                zoho_app: example.zoho_app.clone(),
                feature: example.feature.clone(),
                benefit: example.benefit.clone(),
                implementation: example.implementation.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{DeepDiveExample, Solution};

    #[test]
    fn minimal_payload_projects_industry_and_pain_points_only() {
        let pitch: Pitch =
            serde_json::from_str(r#"{"industry":"Retail","painPoints":["slow checkout"]}"#)
                .unwrap();
        let sections = project(&pitch, Language::En);

        assert_eq!(sections.industry.industry, "Retail");
        assert_eq!(sections.industry.badge, None);
        assert_eq!(sections.pain_points, vec!["slow checkout"]);
        assert_eq!(sections.research_summary, None);
        assert!(sections.automations.is_empty());
        assert!(sections.solutions.is_empty());
        assert_eq!(sections.proposal, None);
        assert!(sections.deep_dives.is_empty());
    }

    #[test]
    fn absent_industry_shows_the_localized_placeholder() {
        let sections = project(&Pitch::default(), Language::En);
        assert_eq!(sections.industry.industry, t("noData", Language::En));
        let sections = project(&Pitch::default(), Language::Ar);
        assert_eq!(sections.industry.industry, t("noData", Language::Ar));
    }

    #[test]
    fn confidence_maps_to_fixed_badge_colors() {
        assert_eq!(confidence_badge(Confidence::High, Language::En).class, "badge-green");
        assert_eq!(confidence_badge(Confidence::Medium, Language::En).class, "badge-yellow");
        assert_eq!(confidence_badge(Confidence::Low, Language::En).class, "badge-red");
        assert_eq!(confidence_badge(Confidence::Unknown, Language::En).class, "badge-gray");
        assert_eq!(
            confidence_badge(Confidence::High, Language::En).label,
            "High Confidence"
        );
        assert_eq!(
            confidence_badge(Confidence::High, Language::Ar).label,
            "ثقة عالية"
        );
    }

    #[test]
    fn share_text_matches_the_exported_format_exactly() {
        let benefits = vec![
            "Faster onboarding".to_string(),
            "Lower costs".to_string(),
        ];
        assert_eq!(
            share_text(&benefits, Language::En),
            format!(
                "Faster onboarding\n• Lower costs\n\n{}",
                t("proposalClosing", Language::En)
            )
        );
    }

    #[test]
    fn expanded_detail_splits_into_ordered_paragraphs() {
        let pitch = Pitch {
            solutions: vec![Solution {
                title: "CRM".to_string(),
                summary: "Track leads".to_string(),
                expanded_detail: Some("First step\nSecond step\n\nClosing".to_string()),
            }],
            ..Pitch::default()
        };
        let sections = project(&pitch, Language::En);
        assert_eq!(
            sections.solutions[0].detail_paragraphs,
            vec!["First step", "Second step", "", "Closing"]
        );
    }

    #[test]
    fn deep_dives_are_capped_to_two() {
        let example = DeepDiveExample {
            zoho_app: "Books".to_string(),
            ..DeepDiveExample::default()
        };
        let pitch = Pitch {
            deep_dive_examples: vec![example.clone(), example.clone(), example],
            ..Pitch::default()
        };
        assert_eq!(project(&pitch, Language::En).deep_dives.len(), MAX_DEEP_DIVES);
    }

    #[test]
    fn proposal_present_only_with_benefits() {
        let pitch = Pitch {
            proposal_benefits: vec!["Faster onboarding".to_string()],
            ..Pitch::default()
        };
        let sections = project(&pitch, Language::En);
        let proposal = sections.proposal.unwrap();
        assert_eq!(proposal.benefits, vec!["Faster onboarding"]);
        assert_eq!(
            proposal.share_text,
            format!("Faster onboarding\n\n{}", t("proposalClosing", Language::En))
        );
    }
}
