use super::domain::{DiscCategory, Question, QuestionId, Theme};

/// Ordered, immutable collection of questionnaire items.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The bundled 24-item instrument: four items per theme, two areas per
    /// theme, with DISC, Bloom, and UN-goal tags spread across the bank.
    pub fn standard() -> Self {
        Self::new(standard_items())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn item(id: QuestionId, code: Theme, area: &str, text: &str) -> Question {
    Question {
        id,
        text: text.to_string(),
        code: Some(code),
        area: Some(area.to_string()),
        cluster: None,
        disc: None,
        bloom: None,
        un_goal: None,
    }
}

fn standard_items() -> Vec<Question> {
    vec![
        Question {
            bloom: Some("Apply".to_string()),
            cluster: Some("Skilled Trades".to_string()),
            ..item(
                1,
                Theme::Realistic,
                "Hands-On Trades",
                "I enjoy repairing machines, engines, or household appliances.",
            )
        },
        Question {
            bloom: Some("Create".to_string()),
            cluster: Some("Skilled Trades".to_string()),
            ..item(
                2,
                Theme::Realistic,
                "Hands-On Trades",
                "I like building things with wood, metal, or electronics.",
            )
        },
        Question {
            un_goal: Some("Climate Action".to_string()),
            ..item(
                3,
                Theme::Realistic,
                "Outdoor & Environment",
                "Working outdoors with plants, animals, or terrain appeals to me.",
            )
        },
        Question {
            bloom: Some("Apply".to_string()),
            ..item(
                4,
                Theme::Realistic,
                "Outdoor & Environment",
                "I would enjoy operating heavy equipment or precision tools.",
            )
        },
        Question {
            bloom: Some("Understand".to_string()),
            ..item(
                5,
                Theme::Investigative,
                "Science & Research",
                "I am curious about how natural phenomena work.",
            )
        },
        Question {
            bloom: Some("Create".to_string()),
            un_goal: Some("Industry, Innovation and Infrastructure".to_string()),
            ..item(
                6,
                Theme::Investigative,
                "Science & Research",
                "I enjoy designing experiments to test an idea.",
            )
        },
        Question {
            bloom: Some("Analyze".to_string()),
            disc: Some(DiscCategory::Conscientiousness),
            ..item(
                7,
                Theme::Investigative,
                "Data & Analysis",
                "I like digging through data to find the pattern underneath.",
            )
        },
        Question {
            bloom: Some("Analyze".to_string()),
            ..item(
                8,
                Theme::Investigative,
                "Data & Analysis",
                "Solving abstract puzzles energizes me.",
            )
        },
        Question {
            bloom: Some("Create".to_string()),
            cluster: Some("Creative Media".to_string()),
            ..item(
                9,
                Theme::Artistic,
                "Design & Media",
                "I enjoy sketching, painting, or digital illustration.",
            )
        },
        Question {
            cluster: Some("Creative Media".to_string()),
            ..item(
                10,
                Theme::Artistic,
                "Design & Media",
                "I like shaping a story through photography or video.",
            )
        },
        Question {
            disc: Some(DiscCategory::Influence),
            ..item(
                11,
                Theme::Artistic,
                "Performing Arts",
                "Performing music, dance, or theater excites me.",
            )
        },
        Question {
            bloom: Some("Create".to_string()),
            ..item(
                12,
                Theme::Artistic,
                "Performing Arts",
                "I enjoy writing stories, lyrics, or poetry.",
            )
        },
        Question {
            bloom: Some("Understand".to_string()),
            un_goal: Some("Quality Education".to_string()),
            ..item(
                13,
                Theme::Social,
                "Teaching & Coaching",
                "I find it rewarding to explain a difficult idea until it clicks.",
            )
        },
        Question {
            disc: Some(DiscCategory::Steadiness),
            un_goal: Some("Quality Education".to_string()),
            ..item(
                14,
                Theme::Social,
                "Teaching & Coaching",
                "I enjoy coaching someone through learning a new skill.",
            )
        },
        Question {
            disc: Some(DiscCategory::Steadiness),
            un_goal: Some("Good Health and Well-Being".to_string()),
            ..item(
                15,
                Theme::Social,
                "Community Care",
                "Supporting people through a difficult stretch matters to me.",
            )
        },
        Question {
            un_goal: Some("Reduced Inequalities".to_string()),
            ..item(
                16,
                Theme::Social,
                "Community Care",
                "I volunteer readily when someone nearby needs help.",
            )
        },
        Question {
            disc: Some(DiscCategory::Influence),
            ..item(
                17,
                Theme::Enterprising,
                "Business & Sales",
                "I enjoy persuading others to back a plan or product.",
            )
        },
        Question {
            disc: Some(DiscCategory::Dominance),
            un_goal: Some("Decent Work and Economic Growth".to_string()),
            ..item(
                18,
                Theme::Enterprising,
                "Business & Sales",
                "Negotiating a good deal energizes me.",
            )
        },
        Question {
            disc: Some(DiscCategory::Dominance),
            bloom: Some("Evaluate".to_string()),
            ..item(
                19,
                Theme::Enterprising,
                "Leadership",
                "I like taking charge when a group needs direction.",
            )
        },
        Question {
            un_goal: Some("Decent Work and Economic Growth".to_string()),
            ..item(
                20,
                Theme::Enterprising,
                "Leadership",
                "Starting a venture from nothing appeals to me.",
            )
        },
        Question {
            disc: Some(DiscCategory::Conscientiousness),
            bloom: Some("Remember".to_string()),
            ..item(
                21,
                Theme::Conventional,
                "Organization & Admin",
                "I like keeping schedules, files, and checklists tidy.",
            )
        },
        Question {
            disc: Some(DiscCategory::Steadiness),
            ..item(
                22,
                Theme::Conventional,
                "Organization & Admin",
                "Following a precise procedure end to end satisfies me.",
            )
        },
        Question {
            disc: Some(DiscCategory::Conscientiousness),
            bloom: Some("Evaluate".to_string()),
            ..item(
                23,
                Theme::Conventional,
                "Finance & Records",
                "I enjoy balancing numbers until everything reconciles.",
            )
        },
        Question {
            bloom: Some("Analyze".to_string()),
            ..item(
                24,
                Theme::Conventional,
                "Finance & Records",
                "Spotting the one error in a detailed report satisfies me.",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_covers_every_theme() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 24);
        for theme in Theme::ordered() {
            let tagged = bank
                .questions()
                .iter()
                .filter(|question| question.code == Some(theme))
                .count();
            assert_eq!(tagged, 4, "{} should carry four items", theme.label());
        }
    }

    #[test]
    fn standard_bank_ids_are_unique() {
        let bank = QuestionBank::standard();
        let mut ids: Vec<_> = bank.questions().iter().map(|question| question.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), bank.len());
    }
}
