//! Shared submission lifecycle: draft → submitted, with reference minting.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use super::domain::{
    CompanyId, CountryCode, EmployeeId, FormResponses, FormType, SubmissionId, SubmissionStatus,
};
use super::repository::SubmissionRecord;
use super::scoring::{self, ScoringConfig, ScoringError};

/// Time source seam so the lifecycle stays pure in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the service by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of the reference-number sequence component.
pub trait ReferenceSequence: Send + Sync {
    fn next(&self) -> u16;
}

/// Random 1–999 sequence, as the platform has always minted references.
/// Collisions are tolerated by design: the reference is a human-readable
/// handle, not a key.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomReference;

impl ReferenceSequence for RandomReference {
    fn next(&self) -> u16 {
        rand::thread_rng().gen_range(1..=999)
    }
}

/// Errors raised by lifecycle transitions. A failed transition leaves the
/// record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("a submitter identity is required to finalize a submission")]
    MissingSubmitter,
    #[error("submission is already finalized and can no longer change")]
    AlreadySubmitted,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Human-readable reference: `{PREFIX}-{year}-{NNN}`.
pub fn reference_number(form_type: FormType, minted_at: DateTime<Utc>, sequence: u16) -> String {
    format!(
        "{}-{}-{:03}",
        form_type.reference_prefix(),
        minted_at.year(),
        sequence
    )
}

/// Open a fresh draft with every item at its not-assessed sentinel.
pub fn new_draft(
    id: SubmissionId,
    company_id: CompanyId,
    form_type: FormType,
    country: CountryCode,
    created_at: DateTime<Utc>,
) -> SubmissionRecord {
    SubmissionRecord {
        id,
        company_id,
        submitter_id: None,
        form_type,
        country,
        responses: FormResponses::empty_for(form_type),
        status: SubmissionStatus::Draft,
        created_at,
        submitted_at: None,
        reference_number: None,
        reviewed_by: None,
        reviewed_at: None,
        summary: None,
    }
}

/// Replace a draft's responses. Resuming a draft goes through here too:
/// the caller reloads the stored payload, edits it, and writes it back, so
/// previously entered values are never reset. RI&E priorities are derived
/// fields and are recomputed on every write.
pub fn update_responses(
    record: &mut SubmissionRecord,
    mut responses: FormResponses,
) -> Result<(), SubmissionError> {
    if record.status == SubmissionStatus::Submitted {
        return Err(SubmissionError::AlreadySubmitted);
    }
    if !responses.matches(record.form_type) {
        return Err(ScoringError::ResponsesMismatch {
            form_type: record.form_type,
        }
        .into());
    }

    if let FormResponses::Rie { items, .. } = &mut responses {
        for item in items.values_mut() {
            item.priority = scoring::rie::recompute_priority(item);
        }
    }

    record.responses = responses;
    Ok(())
}

/// Finalize a draft: score it, freeze the summary, mint a reference, and flip
/// the status. The status check up front is the at-most-once guard; callers
/// hold the record mutably for the duration, and a second call returns
/// [`SubmissionError::AlreadySubmitted`] with `submitted_at` untouched.
pub fn submit(
    record: &mut SubmissionRecord,
    submitter: Option<EmployeeId>,
    clock: &dyn Clock,
    references: &dyn ReferenceSequence,
    config: &ScoringConfig,
) -> Result<String, SubmissionError> {
    if record.status == SubmissionStatus::Submitted {
        return Err(SubmissionError::AlreadySubmitted);
    }

    let submitter = submitter
        .filter(|id| !id.0.trim().is_empty())
        .ok_or(SubmissionError::MissingSubmitter)?;

    // Score before touching the record so a rejected payload aborts cleanly.
    let summary = scoring::score_submission(record.form_type, &record.responses, config)?;

    let now = clock.now();
    let reference = reference_number(record.form_type, now, references.next());

    record.submitter_id = Some(submitter);
    record.summary = Some(summary);
    record.submitted_at = Some(now);
    record.reference_number = Some(reference.clone());
    record.status = SubmissionStatus::Submitted;

    Ok(reference)
}
