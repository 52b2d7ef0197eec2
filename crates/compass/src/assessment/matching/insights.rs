use super::rank::ScoredOccupation;
use crate::assessment::domain::Theme;
use serde::Serialize;

const COMMIT_THRESHOLD: f32 = 80.0;
const PILOT_THRESHOLD: f32 = 60.0;

/// Recommendation strength derived from the best fit score in a bucket.
/// Boundary values belong to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    Commit,
    Pilot,
    Explore,
}

impl FitTier {
    pub fn from_score(score: f32) -> Self {
        if score >= COMMIT_THRESHOLD {
            Self::Commit
        } else if score >= PILOT_THRESHOLD {
            Self::Pilot
        } else {
            Self::Explore
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Commit => "Commit",
            Self::Pilot => "Pilot",
            Self::Explore => "Explore",
        }
    }
}

/// Narrative recommendation for one theme's ranked occupation bucket.
#[derive(Debug, Clone, Serialize)]
pub struct OccupationInsight {
    pub code: Theme,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<FitTier>,
}

/// Build the per-theme recommendation from a score-descending bucket.
///
/// An empty bucket produces a fixed no-match message with no tier.
pub fn occupation_insight(code: Theme, ranked: &[ScoredOccupation]) -> OccupationInsight {
    let title = format!("{} pathways", code.label());

    let Some(top) = ranked.first() else {
        return OccupationInsight {
            code,
            title,
            body: format!(
                "No catalog occupation currently leads with the {} theme. \
                 Revisit this direction after the occupation catalog grows or \
                 explore neighboring themes instead.",
                code.label()
            ),
            tier: None,
        };
    };

    let tier = FitTier::from_score(top.score);
    let action = match tier {
        FitTier::Commit => format!(
            "Commit to a concrete next step toward {}: targeted coursework, a \
             certification, or time with a mentor already in the field.",
            top.occupation
        ),
        FitTier::Pilot => format!(
            "Pilot {} first: shadow a practitioner, take on a short project, \
             or line up an informational interview before committing.",
            top.occupation
        ),
        FitTier::Explore => format!(
            "Explore {} casually; the current fit is modest, so treat it as \
             one option among several.",
            top.occupation
        ),
    };

    let runner_ups: Vec<&str> = ranked
        .iter()
        .skip(1)
        .take(2)
        .map(|entry| entry.occupation.as_str())
        .collect();

    let body = if runner_ups.is_empty() {
        action
    } else {
        format!("{} Also worth a look: {}.", action, runner_ups.join(" and "))
    };

    OccupationInsight {
        code,
        title,
        body,
        tier: Some(tier),
    }
}
