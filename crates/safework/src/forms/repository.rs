use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    CompanyId, CountryCode, EmployeeId, FormResponses, FormType, SubmissionId, SubmissionStatus,
};
use super::scoring::SubmissionSummary;

/// One form or checklist instance, from draft through final submission.
/// This is the record the storage collaborator persists verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub company_id: CompanyId,
    pub submitter_id: Option<EmployeeId>,
    pub form_type: FormType,
    pub country: CountryCode,
    pub responses: FormResponses,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reference_number: Option<String>,
    pub reviewed_by: Option<EmployeeId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Frozen at submit time; `None` while the record is a draft.
    pub summary: Option<SubmissionSummary>,
}

impl SubmissionRecord {
    pub fn headline(&self) -> String {
        match &self.summary {
            Some(summary) => summary.headline(),
            None => "draft in progress".to_string(),
        }
    }

    pub fn status_view(&self) -> SubmissionStatusView {
        SubmissionStatusView {
            id: self.id.clone(),
            form: self.form_type.label(),
            status: self.status.label(),
            reference_number: self.reference_number.clone(),
            headline: self.headline(),
            submitted_at: self.submitted_at,
            summary: self.summary.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn for_company(&self, company: &CompanyId) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a submission's exposed state.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStatusView {
    pub id: SubmissionId,
    pub form: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SubmissionSummary>,
}
