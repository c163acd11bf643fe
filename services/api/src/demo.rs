use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Deserialize;

use crate::infra::InMemorySubmissionRepository;
use safework::error::AppError;
use safework::forms::scoring::score_submission;
use safework::forms::{
    ChecklistEntry, ChecklistValue, CompanyId, ComplianceStatus, CountryCode, EmployeeId,
    FormResponses, FormType, HazardType, JobStep, ScoringConfig, SubmissionService,
    SubmissionSummary,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Company identifier used for the demo records
    #[arg(long, default_value = "demo-company")]
    pub(crate) company: String,
    /// Skip the Arbowet compliance audit portion of the demo
    #[arg(long)]
    pub(crate) skip_audit: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file with `form_type` and `responses` fields
    pub(crate) file: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ScorePayload {
    form_type: FormType,
    responses: FormResponses,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let payload: ScorePayload = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;

    let summary = score_submission(
        payload.form_type,
        &payload.responses,
        &ScoringConfig::default(),
    )
    .map_err(|err| AppError::Submission(err.into()))?;

    println!("Form: {}", payload.form_type.label());
    println!("Headline: {}", summary.headline());
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("summary unavailable: {err}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let company = CompanyId(args.company.clone());
    let repository = Arc::new(InMemorySubmissionRepository::default());
    let service = SubmissionService::new(repository, ScoringConfig::default());

    println!("Safety scoring demo");

    run_jha_walkthrough(&service, &company)?;
    if !args.skip_audit {
        run_arbowet_walkthrough(&service, &company)?;
    }
    run_checklist_preview(&service)?;

    Ok(())
}

fn run_jha_walkthrough(
    service: &SubmissionService<InMemorySubmissionRepository>,
    company: &CompanyId,
) -> Result<(), AppError> {
    println!("\nJob Hazard Analysis walkthrough");

    let draft = service.open_draft(company.clone(), FormType::Jha, CountryCode::Us)?;
    println!("- Draft {} opened", draft.id.0);

    service.save_draft(&draft.id, FormResponses::Jha { steps: demo_steps() })?;
    println!("- Responses saved (3 job steps)");

    let record = service.submit(&draft.id, Some(EmployeeId("emp-demo-001".to_string())))?;
    let view = record.status_view();
    println!(
        "- Submitted as {} -> {}",
        view.reference_number.as_deref().unwrap_or("(no reference)"),
        view.headline
    );

    if let Some(SubmissionSummary::JobHazard(outcome)) = &record.summary {
        for step in &outcome.step_scores {
            match step.score {
                Some(score) => println!(
                    "    step {}: {} -> {} ({})",
                    step.index + 1,
                    step.description,
                    score,
                    step.band.label()
                ),
                None => println!(
                    "    step {}: {} -> not assessed",
                    step.index + 1,
                    step.description
                ),
            }
        }
    }

    Ok(())
}

fn run_arbowet_walkthrough(
    service: &SubmissionService<InMemorySubmissionRepository>,
    company: &CompanyId,
) -> Result<(), AppError> {
    println!("\nArbowet compliance audit walkthrough");

    let draft = service.open_draft(company.clone(), FormType::Arbowet, CountryCode::Nl)?;

    let mut responses = match draft.responses.clone() {
        FormResponses::Arbowet { items } => items,
        other => {
            println!("  Unexpected draft payload: {other:?}");
            return Ok(());
        }
    };
    let statuses = [
        ComplianceStatus::Compliant,
        ComplianceStatus::Partial,
        ComplianceStatus::Compliant,
        ComplianceStatus::NonCompliant,
    ];
    for (index, item) in responses.values_mut().enumerate() {
        item.status = Some(statuses[index % statuses.len()]);
    }
    service.save_draft(&draft.id, FormResponses::Arbowet { items: responses })?;

    let record = service.submit(&draft.id, Some(EmployeeId("emp-demo-002".to_string())))?;
    let view = record.status_view();
    println!(
        "- Submitted as {} -> {}",
        view.reference_number.as_deref().unwrap_or("(no reference)"),
        view.headline
    );

    if let Some(SubmissionSummary::Compliance(outcome)) = &record.summary {
        for article in &outcome.per_article {
            println!(
                "    {}: {}/{} compliant",
                article.article.label(),
                article.compliant,
                article.total
            );
        }
    }

    Ok(())
}

fn run_checklist_preview(
    service: &SubmissionService<InMemorySubmissionRepository>,
) -> Result<(), AppError> {
    println!("\nForklift pre-shift checklist preview (not persisted)");

    let entries = vec![
        checklist_entry("Horn works", ChecklistValue::Flag(true)),
        checklist_entry("Forks undamaged", ChecklistValue::Text("pass".to_string())),
        checklist_entry("Seat belt latches", ChecklistValue::Text("fail".to_string())),
        checklist_entry("Propane hoses", ChecklistValue::Text("na".to_string())),
    ];

    let summary = service.preview(
        FormType::Checklist,
        &FormResponses::Checklist { entries },
    )?;
    println!("- {}", summary.headline());

    Ok(())
}

fn demo_steps() -> Vec<JobStep> {
    let mut unload = std::collections::BTreeSet::new();
    unload.insert(HazardType::StruckBy);
    unload.insert(HazardType::CaughtInBetween);

    let mut racking = std::collections::BTreeSet::new();
    racking.insert(HazardType::FallFromHeight);

    vec![
        JobStep {
            description: "Unload trailer with forklift".to_string(),
            hazards: unload,
            severity: 3,
            probability: 2,
            controls: "Spotter, dock lock engaged".to_string(),
        },
        JobStep {
            description: "Stock upper racking".to_string(),
            hazards: racking,
            severity: 4,
            probability: 3,
            controls: "Harness, guarded platform".to_string(),
        },
        JobStep {
            description: "Break down pallets".to_string(),
            hazards: std::collections::BTreeSet::new(),
            severity: 0,
            probability: 0,
            controls: String::new(),
        },
    ]
}

fn checklist_entry(item: &str, value: ChecklistValue) -> ChecklistEntry {
    ChecklistEntry {
        item: item.to_string(),
        value,
        comment: None,
        photo_keys: Vec::new(),
    }
}
