use compass::assessment::domain::{AnswerSheet, Theme};
use compass::assessment::{AssessmentReport, QuestionBank, ScoringEngine};
use compass::catalog::OccupationRow;

fn row(occupation: &str, theme: &str) -> OccupationRow {
    OccupationRow {
        occupation: occupation.to_string(),
        theme: theme.to_string(),
    }
}

fn catalog_rows() -> Vec<OccupationRow> {
    vec![
        row("Automotive Mechanic", "RIC"),
        row("Field Technician", "RIS"),
        row("Data Analyst", "IRC"),
        row("Research Scientist", "IAR"),
        row("Graphic Designer", "AES"),
        row("School Counselor", "SEA"),
        row("Sales Manager", "ECS"),
        row("Auditor", "CEI"),
    ]
}

fn rating_for(theme: Theme) -> u8 {
    match theme {
        Theme::Realistic => 5,
        Theme::Investigative => 4,
        Theme::Conventional => 4,
        Theme::Social | Theme::Enterprising => 3,
        Theme::Artistic => 2,
    }
}

fn answers(bank: &QuestionBank) -> AnswerSheet {
    bank.questions()
        .iter()
        .filter_map(|question| question.code.map(|code| (question.id, rating_for(code))))
        .collect()
}

#[test]
fn report_threads_one_attempt_through_every_stage() {
    let bank = QuestionBank::standard();
    let answers = answers(&bank);
    let rows = catalog_rows();

    let report = AssessmentReport::build(
        &ScoringEngine::likert(),
        bank.questions(),
        &answers,
        &rows,
        None,
    );

    // Realistic items were rated highest, so they lead the ordering.
    assert_eq!(report.theme_order.len(), 6);
    assert_eq!(report.theme_order[0], Theme::Realistic);
    assert!((report.profile.theme_percents[Theme::Realistic] - 100.0).abs() < 1e-3);

    let summary = report.summary();
    assert_eq!(summary.theme_percents.len(), 6);
    let codes: Vec<Theme> = summary.theme_percents.iter().map(|entry| entry.code).collect();
    assert_eq!(codes, Theme::ordered().to_vec());
    assert!(!summary.top_areas.is_empty());
    assert_eq!(summary.disc.len(), 4);

    let groups = report.occupation_groups();
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[0].code, Theme::Realistic);
    assert_eq!(groups[0].occupations.len(), 2);
    // Within the Realistic bucket the stronger composite wins.
    assert!(groups[0].occupations[0].score >= groups[0].occupations[1].score);

    let insights = report.insights();
    assert_eq!(insights.len(), 6);
    assert_eq!(insights[0].code, Theme::Realistic);
    assert!(insights[0].tier.is_some());
}

#[test]
fn occupations_always_sit_under_their_own_primary_letter() {
    let bank = QuestionBank::standard();
    let answers = answers(&bank);
    let rows = catalog_rows();

    let report = AssessmentReport::build(
        &ScoringEngine::likert(),
        bank.questions(),
        &answers,
        &rows,
        None,
    );

    for theme in Theme::ordered() {
        for entry in &report.occupations[theme] {
            let primary = entry
                .theme
                .chars()
                .next()
                .and_then(Theme::from_letter)
                .expect("normalized themes start with a letter");
            assert_eq!(primary, theme);
        }
    }
}

#[test]
fn explicit_order_controls_presentation_not_scoring() {
    let bank = QuestionBank::standard();
    let answers = answers(&bank);
    let rows = catalog_rows();
    let explicit = [
        Theme::Conventional,
        Theme::Enterprising,
        Theme::Social,
        Theme::Artistic,
        Theme::Investigative,
        Theme::Realistic,
    ];

    let report = AssessmentReport::build(
        &ScoringEngine::likert(),
        bank.questions(),
        &answers,
        &rows,
        Some(&explicit),
    );

    assert_eq!(report.theme_order, explicit.to_vec());
    // Scoring is untouched by the presentation order.
    assert!((report.profile.theme_percents[Theme::Realistic] - 100.0).abs() < 1e-3);
    assert_eq!(report.insights()[0].code, Theme::Conventional);
}

#[test]
fn empty_inputs_yield_an_empty_but_valid_report() {
    let report = AssessmentReport::build(
        &ScoringEngine::likert(),
        &[],
        &AnswerSheet::new(),
        &[],
        None,
    );

    for theme in Theme::ordered() {
        assert_eq!(report.profile.theme_percents[theme], 0.0);
        assert!(report.occupations[theme].is_empty());
    }
    assert!(report.profile.areas.is_empty());

    let insights = report.insights();
    assert_eq!(insights.len(), 6);
    assert!(insights.iter().all(|insight| insight.tier.is_none()));
}
