use crate::assessment::domain::{Theme, ThemeMap};

/// Weights applied to the first three letters of an occupation's theme
/// string. Shorter strings sum only the weights they reach; there is no
/// renormalization, so a single-letter theme tops out at `percent * 0.6`.
const POSITION_WEIGHTS: [f32; 3] = [0.6, 0.25, 0.15];

/// Themes recognized in a raw string, in order, with everything outside the
/// six-letter alphabet discarded.
pub fn theme_letters(raw: &str) -> Vec<Theme> {
    raw.chars().filter_map(Theme::from_letter).collect()
}

/// Weighted fit of a theme string against a percent profile.
///
/// A string that normalizes to nothing scores 0.
pub fn fit_score(theme: &str, percents: &ThemeMap<f32>) -> f32 {
    weighted_score(&theme_letters(theme), percents)
}

pub(super) fn weighted_score(letters: &[Theme], percents: &ThemeMap<f32>) -> f32 {
    letters
        .iter()
        .zip(POSITION_WEIGHTS)
        .map(|(theme, weight)| percents[*theme] * weight)
        .sum()
}

/// The six themes ordered strongest-first.
///
/// An explicit order is used verbatim when supplied. Otherwise the fixed
/// base sequence E-A-R-I-S-C is stable-sorted descending by percent, so
/// themes with equal percents always come back in that sequence.
pub fn theme_order(percents: &ThemeMap<f32>, explicit: Option<&[Theme]>) -> Vec<Theme> {
    if let Some(order) = explicit {
        return order.to_vec();
    }

    let mut order = Theme::ranking_base().to_vec();
    order.sort_by(|a, b| percents[*b].total_cmp(&percents[*a]));
    order
}
