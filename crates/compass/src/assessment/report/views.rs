use crate::assessment::domain::Theme;
use crate::assessment::matching::ScoredOccupation;
use crate::assessment::scoring::{AreaPercent, PillarPercent};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ThemePercentEntry {
    pub code: Theme,
    pub label: &'static str,
    pub percent: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupationGroupView {
    pub code: Theme,
    pub label: &'static str,
    pub occupations: Vec<ScoredOccupation>,
}

/// Everything the presentation layer needs from one scored attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub theme_percents: Vec<ThemePercentEntry>,
    pub theme_order: Vec<Theme>,
    pub areas: Vec<AreaPercent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_areas: Vec<AreaPercent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub growth_areas: Vec<AreaPercent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disc: Vec<PillarPercent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bloom: Vec<PillarPercent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<PillarPercent>,
}
