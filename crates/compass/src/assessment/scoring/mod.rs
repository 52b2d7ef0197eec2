mod areas;
mod pillars;
mod themes;

pub use areas::{area_highlights, area_percents, AreaHighlights, AreaPercent};
pub use pillars::{
    bloom_bank_counts, bloom_tallies, disc_bank_counts, disc_tallies, goal_bank_counts,
    goal_tallies, pillar_percents, PillarPercent, PillarTallies, Tally,
};
pub use themes::{theme_counts, theme_percents, theme_scores};

use crate::assessment::domain::{AnswerSheet, Question, ThemeMap, SCALE_MAX};
use serde::Serialize;

/// Stateless engine applying one rating scale across every aggregate.
pub struct ScoringEngine {
    max_scale: u8,
}

impl ScoringEngine {
    pub fn new(max_scale: u8) -> Self {
        Self { max_scale }
    }

    /// Engine for the standard 1-5 Likert instrument.
    pub fn likert() -> Self {
        Self::new(SCALE_MAX)
    }

    pub fn max_scale(&self) -> u8 {
        self.max_scale
    }

    /// Score an answer sheet against a question bank across every dimension.
    ///
    /// Total over its inputs: empty questions or answers produce all-zero
    /// aggregates, never an error.
    pub fn profile(&self, questions: &[Question], answers: &AnswerSheet) -> InterestProfile {
        let theme_scores = theme_scores(questions, answers);
        let theme_counts = theme_counts(questions, answers);
        let theme_percents = theme_percents(&theme_scores, &theme_counts, self.max_scale);

        let areas = area_percents(questions, answers, self.max_scale);
        let highlights = area_highlights(&areas);

        let disc = self.pillar(disc_tallies(questions, answers), disc_bank_counts(questions));
        let bloom = self.pillar(bloom_tallies(questions, answers), bloom_bank_counts(questions));
        let goals = self.pillar(goal_tallies(questions, answers), goal_bank_counts(questions));

        InterestProfile {
            theme_scores,
            theme_counts,
            theme_percents,
            areas,
            highlights,
            disc,
            bloom,
            goals,
        }
    }

    fn pillar(&self, tallies: PillarTallies, bank: Tally) -> Vec<PillarPercent> {
        pillar_percents(&tallies.totals, &tallies.answered, &bank, self.max_scale)
    }
}

/// Every aggregate derived from one answer sheet.
#[derive(Debug, Clone, Serialize)]
pub struct InterestProfile {
    pub theme_scores: ThemeMap<u32>,
    pub theme_counts: ThemeMap<u32>,
    pub theme_percents: ThemeMap<f32>,
    pub areas: Vec<AreaPercent>,
    pub highlights: AreaHighlights,
    pub disc: Vec<PillarPercent>,
    pub bloom: Vec<PillarPercent>,
    pub goals: Vec<PillarPercent>,
}
