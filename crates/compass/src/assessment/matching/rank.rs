use super::score::{theme_letters, weighted_score};
use crate::assessment::domain::{Theme, ThemeMap};
use crate::catalog::OccupationRow;
use serde::Serialize;

/// One catalog occupation scored against a percent profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredOccupation {
    pub occupation: String,
    pub theme: String,
    pub score: f32,
}

/// Bucket every occupation under the first letter of its normalized theme
/// string and rank each bucket descending by fit score.
///
/// Rows whose theme yields no recognizable letter are dropped. The
/// per-bucket sort is stable: equal scores keep catalog order.
pub fn rank_by_primary(
    rows: &[OccupationRow],
    percents: &ThemeMap<f32>,
) -> ThemeMap<Vec<ScoredOccupation>> {
    let mut buckets: ThemeMap<Vec<ScoredOccupation>> = ThemeMap::default();

    for row in rows {
        let letters = theme_letters(&row.theme);
        let Some(primary) = letters.first().copied() else {
            continue;
        };

        buckets[primary].push(ScoredOccupation {
            occupation: row.occupation.clone(),
            theme: row.theme.clone(),
            score: weighted_score(&letters, percents),
        });
    }

    for theme in Theme::ordered() {
        buckets[theme].sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    buckets
}
