use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Maximum value of the Likert rating scale; answers range over `1..=SCALE_MAX`.
pub const SCALE_MAX: u8 = 5;

/// Identifier a question carries in the bank and in answer sheets.
pub type QuestionId = u32;

/// Ratings keyed by question id. Unanswered questions are absent, never zero.
pub type AnswerSheet = HashMap<QuestionId, u8>;

/// The six RIASEC interest themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Theme {
    /// Canonical R-I-A-S-E-C presentation order.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    /// Base sequence applied before ranking themes by percent, so that equal
    /// percents always resolve to the same order.
    pub const fn ranking_base() -> [Self; 6] {
        [
            Self::Enterprising,
            Self::Artistic,
            Self::Realistic,
            Self::Investigative,
            Self::Social,
            Self::Conventional,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Realistic => "R",
            Self::Investigative => "I",
            Self::Artistic => "A",
            Self::Social => "S",
            Self::Enterprising => "E",
            Self::Conventional => "C",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    /// Case-insensitive letter lookup; anything outside the six-letter
    /// alphabet yields `None`.
    pub fn from_letter(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'R' => Some(Self::Realistic),
            'I' => Some(Self::Investigative),
            'A' => Some(Self::Artistic),
            'S' => Some(Self::Social),
            'E' => Some(Self::Enterprising),
            'C' => Some(Self::Conventional),
            _ => None,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Realistic => 0,
            Self::Investigative => 1,
            Self::Artistic => 2,
            Self::Social => 3,
            Self::Enterprising => 4,
            Self::Conventional => 5,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed-size record holding one value per theme.
///
/// Lookups cannot miss a key, so the zero-default behavior callers expect at
/// the boundary comes from `T: Default` at construction instead of from
/// silent key misses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeMap<T>([T; 6]);

impl<T: Default> Default for ThemeMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> ThemeMap<T> {
    pub fn from_fn(mut build: impl FnMut(Theme) -> T) -> Self {
        Self(Theme::ordered().map(&mut build))
    }

    /// Entries in canonical theme order.
    pub fn iter(&self) -> impl Iterator<Item = (Theme, &T)> {
        Theme::ordered().into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut convert: impl FnMut(Theme, &T) -> U) -> ThemeMap<U> {
        ThemeMap::from_fn(|theme| convert(theme, &self[theme]))
    }
}

impl<T> Index<Theme> for ThemeMap<T> {
    type Output = T;

    fn index(&self, theme: Theme) -> &T {
        &self.0[theme.slot()]
    }
}

impl<T> IndexMut<Theme> for ThemeMap<T> {
    fn index_mut(&mut self, theme: Theme) -> &mut T {
        &mut self.0[theme.slot()]
    }
}

impl<T: Serialize> Serialize for ThemeMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        for (theme, value) in self.iter() {
            map.serialize_entry(theme.code(), value)?;
        }
        map.end()
    }
}

/// DISC behavioral categories used as one of the pillar dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscCategory {
    #[serde(rename = "D")]
    Dominance,
    #[serde(rename = "I")]
    Influence,
    #[serde(rename = "S")]
    Steadiness,
    #[serde(rename = "C")]
    Conscientiousness,
}

impl DiscCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Dominance,
            Self::Influence,
            Self::Steadiness,
            Self::Conscientiousness,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dominance => "Dominance",
            Self::Influence => "Influence",
            Self::Steadiness => "Steadiness",
            Self::Conscientiousness => "Conscientiousness",
        }
    }
}

/// One questionnaire item, tagged with the dimensions it feeds.
///
/// All tags are optional: untagged questions are legal and simply never
/// contribute to the aggregate they lack a tag for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc: Option<DiscCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_goal: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_lookup() {
        for theme in Theme::ordered() {
            let letter = theme.code().chars().next().expect("single letter code");
            assert_eq!(Theme::from_letter(letter), Some(theme));
            assert_eq!(Theme::from_letter(letter.to_ascii_lowercase()), Some(theme));
        }
        assert_eq!(Theme::from_letter('X'), None);
    }

    #[test]
    fn theme_map_serializes_with_letter_keys() {
        let map: ThemeMap<u32> = ThemeMap::from_fn(|theme| theme.slot() as u32);
        let json = serde_json::to_value(&map).expect("serializes");
        assert_eq!(json["R"], 0);
        assert_eq!(json["C"], 5);
    }
}
