use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{CompanyId, CountryCode, EmployeeId, FormResponses, FormType, SubmissionId};
use super::lifecycle::{
    self, Clock, RandomReference, ReferenceSequence, SubmissionError, SystemClock,
};
use super::repository::{RepositoryError, SubmissionRecord, SubmissionRepository};
use super::scoring::{self, ScoringConfig, ScoringError, SubmissionSummary};

/// Service composing the repository, the clock, the reference source, and the
/// scoring configuration.
pub struct SubmissionService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    references: Arc<dyn ReferenceSequence>,
    config: ScoringConfig,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

impl<R> SubmissionService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self::with_sources(
            repository,
            Arc::new(SystemClock),
            Arc::new(RandomReference),
            config,
        )
    }

    pub fn with_sources(
        repository: Arc<R>,
        clock: Arc<dyn Clock>,
        references: Arc<dyn ReferenceSequence>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            references,
            config,
        }
    }

    /// Open a draft for a form the company's country actually offers.
    pub fn open_draft(
        &self,
        company_id: CompanyId,
        form_type: FormType,
        country: CountryCode,
    ) -> Result<SubmissionRecord, SubmissionServiceError> {
        if !country.offers(form_type) {
            return Err(SubmissionServiceError::FormNotOffered { form_type, country });
        }

        let record = lifecycle::new_draft(
            next_submission_id(),
            company_id,
            form_type,
            country,
            self.clock.now(),
        );
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Write draft responses back. Also the resume path: the caller fetches
    /// the draft, edits the payload, and saves it here.
    pub fn save_draft(
        &self,
        id: &SubmissionId,
        responses: FormResponses,
    ) -> Result<SubmissionRecord, SubmissionServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        lifecycle::update_responses(&mut record, responses)?;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Finalize a submission and persist the frozen summary.
    pub fn submit(
        &self,
        id: &SubmissionId,
        submitter: Option<EmployeeId>,
    ) -> Result<SubmissionRecord, SubmissionServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let reference = lifecycle::submit(
            &mut record,
            submitter,
            self.clock.as_ref(),
            self.references.as_ref(),
            &self.config,
        )?;
        self.repository.update(record.clone())?;

        info!(
            submission = %record.id.0,
            reference = %reference,
            form = record.form_type.label(),
            "submission finalized"
        );

        Ok(record)
    }

    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, SubmissionServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All submissions of one company, for dashboards and follow-up views.
    pub fn list_for_company(
        &self,
        company: &CompanyId,
    ) -> Result<Vec<SubmissionRecord>, SubmissionServiceError> {
        Ok(self.repository.for_company(company)?)
    }

    /// Score a payload without touching any record. Dashboards and form
    /// editors use this so they never recompute scores with their own logic.
    pub fn preview(
        &self,
        form_type: FormType,
        responses: &FormResponses,
    ) -> Result<SubmissionSummary, SubmissionServiceError> {
        Ok(scoring::score_submission(form_type, responses, &self.config)?)
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error("form '{}' is not offered in {}", .form_type.label(), .country.label())]
    FormNotOffered {
        form_type: FormType,
        country: CountryCode,
    },
    #[error(transparent)]
    Lifecycle(#[from] SubmissionError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
