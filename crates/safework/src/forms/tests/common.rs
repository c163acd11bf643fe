use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::forms::domain::{
    ChecklistEntry, ChecklistValue, CompanyId, ComplianceItem, ComplianceStatus, CountryCode,
    FormType, HazardType, JobStep, OsaAnswer, RieRiskItem, SamRiskItem, SubmissionId,
};
use crate::forms::lifecycle::{Clock, ReferenceSequence};
use crate::forms::repository::{RepositoryError, SubmissionRecord, SubmissionRepository};
use crate::forms::router::submission_router;
use crate::forms::scoring::ScoringConfig;
use crate::forms::service::SubmissionService;

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        external_review_employee_threshold: 25,
    }
}

pub(super) fn frozen_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

/// Clock pinned to [`frozen_instant`] so reference years are predictable.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        frozen_instant()
    }
}

/// Reference source yielding a fixed sequence value.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedReference(pub(super) u16);

impl ReferenceSequence for FixedReference {
    fn next(&self) -> u16 {
        self.0
    }
}

pub(super) fn job_step(description: &str, severity: u8, probability: u8) -> JobStep {
    let mut hazards = BTreeSet::new();
    hazards.insert(HazardType::StruckBy);
    JobStep {
        description: description.to_string(),
        hazards,
        severity,
        probability,
        controls: "standard controls".to_string(),
    }
}

pub(super) fn hazardless_step(description: &str, severity: u8, probability: u8) -> JobStep {
    JobStep {
        description: description.to_string(),
        hazards: BTreeSet::new(),
        severity,
        probability,
        controls: String::new(),
    }
}

pub(super) fn rie_item(severity: u8, probability: u8, exposure: u8) -> RieRiskItem {
    RieRiskItem {
        severity,
        probability,
        exposure,
        current_controls: "existing guarding".to_string(),
        action_required: String::new(),
        priority: None,
    }
}

pub(super) fn sam_item(severity: u8, probability: u8) -> SamRiskItem {
    SamRiskItem {
        severity,
        probability,
        measures: "planned measures".to_string(),
    }
}

pub(super) fn compliance_item(status: Option<ComplianceStatus>) -> ComplianceItem {
    ComplianceItem {
        status,
        evidence: String::new(),
        action: String::new(),
    }
}

pub(super) fn osa_answer(rating: u8, concern: bool) -> OsaAnswer {
    OsaAnswer {
        rating,
        concern,
        notes: String::new(),
    }
}

pub(super) fn checklist_entry(item: &str, value: ChecklistValue) -> ChecklistEntry {
    ChecklistEntry {
        item: item.to_string(),
        value,
        comment: None,
        photo_keys: Vec::new(),
    }
}

pub(super) fn rie_items(entries: &[(&str, u8, u8, u8)]) -> BTreeMap<String, RieRiskItem> {
    entries
        .iter()
        .map(|(key, severity, probability, exposure)| {
            (key.to_string(), rie_item(*severity, *probability, *exposure))
        })
        .collect()
}

pub(super) fn sam_items(entries: &[(&str, u8, u8)]) -> BTreeMap<String, SamRiskItem> {
    entries
        .iter()
        .map(|(key, severity, probability)| (key.to_string(), sam_item(*severity, *probability)))
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_company(&self, company: &CompanyId) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.company_id == company)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SubmissionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_company(&self, _company: &CompanyId) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (SubmissionService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SubmissionService::with_sources(
        repository.clone(),
        Arc::new(FixedClock),
        Arc::new(FixedReference(42)),
        scoring_config(),
    );
    (service, repository)
}

pub(super) fn company() -> CompanyId {
    CompanyId("acme-fabrication".to_string())
}

pub(super) fn submission_router_with_service(
    service: SubmissionService<MemoryRepository>,
) -> axum::Router {
    submission_router(Arc::new(service))
}

pub(super) fn us_jha() -> (CompanyId, FormType, CountryCode) {
    (company(), FormType::Jha, CountryCode::Us)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
