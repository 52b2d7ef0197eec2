use crate::infra::{InMemoryNotifier, InMemorySubmissionRepository, SAMPLE_OCCUPATIONS_CSV};
use clap::Args;
use compass::assessment::domain::{AnswerSheet, Theme};
use compass::assessment::matching::theme_letters;
use compass::assessment::report::AssessmentReport;
use compass::assessment::submissions::{AssessmentService, AssessmentSubmission};
use compass::assessment::{QuestionBank, ScoringEngine};
use compass::catalog::{
    CachedCatalog, CatalogSource, FileCatalogSource, OccupationCatalog, StaticCatalogSource,
};
use compass::error::AppError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Name attached to the demo submission
    #[arg(long)]
    pub(crate) respondent: Option<String>,
    /// Occupations CSV to rank against instead of the bundled catalog
    #[arg(long)]
    pub(crate) occupations_csv: Option<PathBuf>,
    /// Include the full ranked occupation listing per theme
    #[arg(long)]
    pub(crate) include_occupations: bool,
    /// Skip the intake portion of the demo
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Path to a JSON answers file mapping question ids to 1-5 ratings
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Occupations CSV to rank against instead of the bundled catalog
    #[arg(long)]
    pub(crate) occupations_csv: Option<PathBuf>,
    /// Explicit theme presentation order, e.g. "RIASEC"
    #[arg(long)]
    pub(crate) theme_order: Option<String>,
    /// Include the full ranked occupation listing per theme
    #[arg(long)]
    pub(crate) list_occupations: bool,
}

pub(crate) fn run_assessment_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        occupations_csv,
        theme_order,
        list_occupations,
    } = args;

    let raw = std::fs::read_to_string(&answers)?;
    let answers: AnswerSheet = serde_json::from_str(&raw)
        .map_err(|err| AppError::InvalidInput(format!("answers file: {err}")))?;

    let catalog = load_catalog(occupations_csv.as_deref())?;
    let explicit = theme_order
        .as_deref()
        .map(theme_letters)
        .filter(|letters| !letters.is_empty());

    let bank = QuestionBank::standard();
    let report = AssessmentReport::build(
        &ScoringEngine::likert(),
        bank.questions(),
        &answers,
        catalog.rows(),
        explicit.as_deref(),
    );

    render_report(&report, list_occupations);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        respondent,
        occupations_csv,
        include_occupations,
        skip_submission,
    } = args;

    println!("Career interest assessment demo");

    let source: Box<dyn CatalogSource> = match &occupations_csv {
        Some(path) => Box::new(FileCatalogSource::new(path.clone())),
        None => Box::new(StaticCatalogSource::from_csv(SAMPLE_OCCUPATIONS_CSV)?),
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let notifier = Arc::new(InMemoryNotifier::default());
    let service = Arc::new(AssessmentService::new(
        Arc::new(QuestionBank::standard()),
        Arc::new(CachedCatalog::new(source)),
        repository,
        notifier.clone(),
    ));

    let answers = sample_answers(service.bank());
    let report = service.report(&answers, None)?;
    render_report(&report, include_occupations);

    if skip_submission {
        return Ok(());
    }

    println!("\nIntake demo");
    let submission = AssessmentSubmission {
        respondent: respondent.or_else(|| Some("Demo Respondent".to_string())),
        answers,
    };
    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };

    println!(
        "- Stored attempt {} -> status {} ({}/{} answered)",
        record.submission_id.0,
        record.status.label(),
        record.answered,
        record.question_count
    );

    match serde_json::to_string_pretty(&record.status_view()) {
        Ok(json) => println!("  Public status payload:\n{}", json),
        Err(err) => println!("  Public status payload unavailable: {}", err),
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("  Dashboard events: none published");
    } else {
        println!("  Dashboard events:");
        for event in events {
            let top = event
                .top_theme
                .map(|theme| theme.label())
                .unwrap_or("none");
            println!(
                "    - {} -> {} (top theme {})",
                event.submission_id.0,
                event.status.label(),
                top
            );
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<OccupationCatalog, AppError> {
    match path {
        Some(path) => Ok(OccupationCatalog::from_path(path)?),
        None => Ok(OccupationCatalog::from_reader(
            SAMPLE_OCCUPATIONS_CSV.as_bytes(),
        )?),
    }
}

/// Deterministic answer sheet leaning Realistic/Investigative so the demo
/// output has a clear leader.
fn sample_answers(bank: &QuestionBank) -> AnswerSheet {
    bank.questions()
        .iter()
        .map(|question| {
            let rating = match question.code {
                Some(Theme::Realistic) => 5,
                Some(Theme::Investigative) => 4,
                Some(Theme::Conventional) => 4,
                Some(Theme::Social) | Some(Theme::Enterprising) => 3,
                Some(Theme::Artistic) => 2,
                None => 3,
            };
            (question.id, rating)
        })
        .collect()
}

fn render_report(report: &AssessmentReport, include_occupations: bool) {
    let summary = report.summary();

    println!("Theme profile:");
    for entry in &summary.theme_percents {
        println!("  {} {:<13} {:>5.1}%", entry.code, entry.label, entry.percent);
    }

    let order: Vec<&str> = summary
        .theme_order
        .iter()
        .map(|theme| theme.code())
        .collect();
    println!("Ranked themes: {}", order.join(" > "));

    if !summary.top_areas.is_empty() {
        println!("Top areas:");
        for area in &summary.top_areas {
            println!("  - {} ({}) {:.1}%", area.area, area.code, area.percent);
        }
    }
    if !summary.growth_areas.is_empty() {
        println!("Growth areas (lowest first):");
        for area in &summary.growth_areas {
            println!("  - {} ({}) {:.1}%", area.area, area.code, area.percent);
        }
    }

    render_pillar("DISC", &summary.disc);
    render_pillar("Bloom", &summary.bloom);
    render_pillar("UN goals", &summary.goals);

    println!("Suggested directions:");
    for insight in report.insights() {
        let tier = insight.tier.map(|tier| tier.label()).unwrap_or("No match");
        println!("  - [{}] {}: {}", tier, insight.title, insight.body);
    }

    if include_occupations {
        println!("Occupation matches by theme:");
        for group in report.occupation_groups() {
            if group.occupations.is_empty() {
                continue;
            }
            println!("  {}:", group.label);
            for entry in group.occupations.iter().take(5) {
                println!(
                    "    - {} ({}) fit {:.1}",
                    entry.occupation, entry.theme, entry.score
                );
            }
        }
    }
}

fn render_pillar(name: &str, entries: &[compass::assessment::scoring::PillarPercent]) {
    if entries.is_empty() {
        return;
    }
    let rendered: Vec<String> = entries
        .iter()
        .map(|entry| format!("{} {}%", entry.label, entry.percent))
        .collect();
    println!("{}: {}", name, rendered.join(" | "));
}
