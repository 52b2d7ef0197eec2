use crate::assessment::domain::{AnswerSheet, DiscCategory, Question};
use serde::Serialize;

/// Insertion-ordered tally of per-label amounts.
///
/// Labels keep the order in which they were first seen, which later doubles
/// as the tie-break order for equal percents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    entries: Vec<(String, u32)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str, amount: u32) {
        match self.entries.iter_mut().find(|(name, _)| name == label) {
            Some((_, value)) => *value += amount,
            None => self.entries.push((label.to_string(), amount)),
        }
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Raw rating sums and answered counts for one pillar dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PillarTallies {
    pub totals: Tally,
    pub answered: Tally,
}

/// One ranked pillar entry; percents are rounded to whole numbers before
/// the ranking is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarPercent {
    pub label: String,
    pub percent: u8,
}

fn tallies_by(
    questions: &[Question],
    answers: &AnswerSheet,
    label: fn(&Question) -> Option<&str>,
) -> PillarTallies {
    let mut tallies = PillarTallies::default();
    for question in questions {
        let Some(label) = label(question) else { continue };
        // Seed the label so untouched categories still appear in the output.
        tallies.totals.add(label, 0);
        if let Some(rating) = answers.get(&question.id) {
            tallies.totals.add(label, u32::from(*rating));
            tallies.answered.add(label, 1);
        }
    }
    tallies
}

fn bank_counts_by(questions: &[Question], label: fn(&Question) -> Option<&str>) -> Tally {
    let mut counts = Tally::new();
    for question in questions {
        if let Some(label) = label(question) {
            counts.add(label, 1);
        }
    }
    counts
}

fn disc_label(question: &Question) -> Option<&str> {
    question.disc.map(DiscCategory::label)
}

fn bloom_label(question: &Question) -> Option<&str> {
    question.bloom.as_deref()
}

fn goal_label(question: &Question) -> Option<&str> {
    question.un_goal.as_deref()
}

pub fn disc_tallies(questions: &[Question], answers: &AnswerSheet) -> PillarTallies {
    tallies_by(questions, answers, disc_label)
}

pub fn bloom_tallies(questions: &[Question], answers: &AnswerSheet) -> PillarTallies {
    tallies_by(questions, answers, bloom_label)
}

pub fn goal_tallies(questions: &[Question], answers: &AnswerSheet) -> PillarTallies {
    tallies_by(questions, answers, goal_label)
}

pub fn disc_bank_counts(questions: &[Question]) -> Tally {
    bank_counts_by(questions, disc_label)
}

pub fn bloom_bank_counts(questions: &[Question]) -> Tally {
    bank_counts_by(questions, bloom_label)
}

pub fn goal_bank_counts(questions: &[Question]) -> Tally {
    bank_counts_by(questions, goal_label)
}

/// Integer percentages per label, sorted descending.
///
/// Labels follow `totals` insertion order into a stable sort, so equal
/// percents keep that order. When the `answered` tally is empty as a whole,
/// denominators fall back to the full-bank counts in `bank`: an attempt
/// that skipped an entire pillar still reports against the bank size
/// instead of flattening to zero. Labels whose resolved count is zero
/// report 0 rather than dividing by zero.
pub fn pillar_percents(
    totals: &Tally,
    answered: &Tally,
    bank: &Tally,
    max_scale: u8,
) -> Vec<PillarPercent> {
    let fall_back_to_bank = answered.is_empty();

    let mut percents: Vec<PillarPercent> = totals
        .iter()
        .map(|(label, sum)| {
            let count = if fall_back_to_bank {
                bank.get(label)
            } else {
                answered.get(label)
            }
            .unwrap_or(0);

            let percent = if count > 0 && max_scale > 0 {
                let raw = (sum as f32 / (count as f32 * f32::from(max_scale))) * 100.0;
                raw.round().clamp(0.0, 100.0) as u8
            } else {
                0
            };

            PillarPercent {
                label: label.to_string(),
                percent,
            }
        })
        .collect();

    percents.sort_by(|a, b| b.percent.cmp(&a.percent));
    percents
}
