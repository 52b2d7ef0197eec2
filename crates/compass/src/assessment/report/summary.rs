use super::views::{AssessmentSummary, OccupationGroupView, ThemePercentEntry};
use crate::assessment::domain::{AnswerSheet, Question, Theme, ThemeMap};
use crate::assessment::matching::{
    occupation_insight, rank_by_primary, theme_order, OccupationInsight, ScoredOccupation,
};
use crate::assessment::scoring::{InterestProfile, ScoringEngine};
use crate::catalog::OccupationRow;

/// Scored attempt plus its ranked occupation buckets.
#[derive(Debug)]
pub struct AssessmentReport {
    pub profile: InterestProfile,
    pub occupations: ThemeMap<Vec<ScoredOccupation>>,
    pub theme_order: Vec<Theme>,
}

impl AssessmentReport {
    /// Run scoring and matching over one answer sheet.
    ///
    /// The occupation rows are taken as a plain slice so any caching policy
    /// stays with the caller.
    pub fn build(
        engine: &ScoringEngine,
        questions: &[Question],
        answers: &AnswerSheet,
        rows: &[OccupationRow],
        explicit_order: Option<&[Theme]>,
    ) -> Self {
        let profile = engine.profile(questions, answers);
        let occupations = rank_by_primary(rows, &profile.theme_percents);
        let theme_order = theme_order(&profile.theme_percents, explicit_order);

        Self {
            profile,
            occupations,
            theme_order,
        }
    }

    pub fn summary(&self) -> AssessmentSummary {
        let theme_percents = Theme::ordered()
            .into_iter()
            .map(|code| ThemePercentEntry {
                code,
                label: code.label(),
                percent: self.profile.theme_percents[code],
            })
            .collect();

        AssessmentSummary {
            theme_percents,
            theme_order: self.theme_order.clone(),
            areas: self.profile.areas.clone(),
            top_areas: self.profile.highlights.top.clone(),
            growth_areas: self.profile.highlights.bottom.clone(),
            disc: self.profile.disc.clone(),
            bloom: self.profile.bloom.clone(),
            goals: self.profile.goals.clone(),
        }
    }

    /// Ranked occupation buckets, strongest theme first.
    pub fn occupation_groups(&self) -> Vec<OccupationGroupView> {
        self.theme_order
            .iter()
            .map(|&code| OccupationGroupView {
                code,
                label: code.label(),
                occupations: self.occupations[code].clone(),
            })
            .collect()
    }

    /// One narrative recommendation per theme, strongest theme first.
    pub fn insights(&self) -> Vec<OccupationInsight> {
        self.theme_order
            .iter()
            .map(|&code| occupation_insight(code, &self.occupations[code]))
            .collect()
    }
}
