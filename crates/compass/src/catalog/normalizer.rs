use crate::assessment::domain::Theme;

/// Collapse a raw theme string to its recognizable uppercase letters.
///
/// Byte-order marks and zero-width characters survive naive CSV handling,
/// so they are stripped before the alphabet filter.
pub(crate) fn normalize_theme(value: &str) -> String {
    value
        .replace(['\u{feff}', '\u{200b}'], "")
        .chars()
        .filter_map(|ch| Theme::from_letter(ch).map(|theme| theme.code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_noise_and_uppercases() {
        assert_eq!(normalize_theme("\u{feff}r-i/c"), "RIC");
        assert_eq!(normalize_theme("ric"), "RIC");
        assert_eq!(normalize_theme("??"), "");
    }
}
