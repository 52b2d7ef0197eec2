use super::themes::percent_of;
use crate::assessment::domain::{AnswerSheet, Question, Theme};
use serde::Serialize;
use std::collections::HashMap;

const TOP_AREAS: usize = 5;
const BOTTOM_AREAS: usize = 3;

/// Percentage for one `(theme, area)` group with at least one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPercent {
    pub code: Theme,
    pub area: String,
    pub percent: f32,
}

/// Strongest and weakest interest areas pulled from the ranked sequence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AreaHighlights {
    pub top: Vec<AreaPercent>,
    pub bottom: Vec<AreaPercent>,
}

/// Group answered questions by `(code, area)` and score each group as mean
/// rating scaled to 0-100, sorted descending by percent.
///
/// Questions missing either the code or the area are skipped. The sort is
/// stable, so groups with equal percents keep first-seen order.
pub fn area_percents(
    questions: &[Question],
    answers: &AnswerSheet,
    max_scale: u8,
) -> Vec<AreaPercent> {
    let mut groups: Vec<(Theme, String, u32, u32)> = Vec::new();
    let mut slots: HashMap<(Theme, String), usize> = HashMap::new();

    for question in questions {
        let (Some(code), Some(area)) = (question.code, question.area.as_deref()) else {
            continue;
        };
        let Some(rating) = answers.get(&question.id) else {
            continue;
        };

        let key = (code, area.to_string());
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((code, area.to_string(), 0, 0));
            groups.len() - 1
        });
        groups[slot].2 += u32::from(*rating);
        groups[slot].3 += 1;
    }

    let mut areas: Vec<AreaPercent> = groups
        .into_iter()
        .map(|(code, area, sum, count)| AreaPercent {
            code,
            area,
            percent: percent_of(sum, count, max_scale),
        })
        .collect();

    areas.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    areas
}

/// Top five and bottom three entries of a percent-descending sequence.
///
/// The bottom entries come back lowest-first. Short inputs return whatever
/// exists; there is no padding and no overlap once eight or more areas are
/// present.
pub fn area_highlights(areas: &[AreaPercent]) -> AreaHighlights {
    let top = areas.iter().take(TOP_AREAS).cloned().collect();
    let bottom = areas
        .iter()
        .rev()
        .take(BOTTOM_AREAS)
        .cloned()
        .collect();

    AreaHighlights { top, bottom }
}
