mod insights;
mod rank;
mod score;

pub use insights::{occupation_insight, FitTier, OccupationInsight};
pub use rank::{rank_by_primary, ScoredOccupation};
pub use score::{fit_score, theme_letters, theme_order};
