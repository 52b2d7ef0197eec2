use crate::assessment::domain::{AnswerSheet, Question, Theme, ThemeMap};

/// Per-theme sum of ratings over answered questions carrying that code.
///
/// Questions without a code never contribute; neither do answer-sheet
/// entries with no matching bank question. Always returns all six themes,
/// defaulting to 0.
pub fn theme_scores(questions: &[Question], answers: &AnswerSheet) -> ThemeMap<u32> {
    let mut scores = ThemeMap::default();
    for question in questions {
        let Some(code) = question.code else { continue };
        if let Some(rating) = answers.get(&question.id) {
            scores[code] += u32::from(*rating);
        }
    }
    scores
}

/// Per-theme count of *answered* questions carrying that code.
///
/// The denominator for theme percentages is this count, not the number of
/// questions in the bank: an attempt abandoned halfway is still scored
/// against what was actually answered.
pub fn theme_counts(questions: &[Question], answers: &AnswerSheet) -> ThemeMap<u32> {
    let mut counts = ThemeMap::default();
    for question in questions {
        let Some(code) = question.code else { continue };
        if answers.contains_key(&question.id) {
            counts[code] += 1;
        }
    }
    counts
}

/// Mean rating per answered item, scaled to 0-100.
///
/// Answering more questions at the same average rating leaves the percent
/// unchanged. Themes with no answered questions report 0 rather than
/// dividing by zero.
pub fn theme_percents(
    scores: &ThemeMap<u32>,
    counts: &ThemeMap<u32>,
    max_scale: u8,
) -> ThemeMap<f32> {
    scores.map(|theme, score| percent_of(*score, counts[theme], max_scale))
}

pub(crate) fn percent_of(sum: u32, count: u32, max_scale: u8) -> f32 {
    if count == 0 || max_scale == 0 {
        return 0.0;
    }
    let percent = (sum as f32 / (count as f32 * f32::from(max_scale))) * 100.0;
    percent.clamp(0.0, 100.0)
}
