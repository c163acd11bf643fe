//! Submission intake, scoring, and lifecycle for safety forms and checklists.

pub mod catalog;
pub mod classification;
pub mod domain;
pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{ArbowetArticle, OsaSection};
pub use classification::{RiskBand, SamRiskBand, SectionBand};
pub use domain::{
    ChecklistEntry, ChecklistValue, CompanyId, ComplianceItem, ComplianceStatus, CountryCode,
    EmployeeId, FormResponses, FormType, HazardType, JobStep, OsaAnswer, RieRiskItem, SamRiskItem,
    SubmissionId, SubmissionStatus,
};
pub use lifecycle::{
    Clock, RandomReference, ReferenceSequence, SubmissionError, SystemClock,
};
pub use repository::{
    RepositoryError, SubmissionRecord, SubmissionRepository, SubmissionStatusView,
};
pub use router::submission_router;
pub use scoring::{ScoringConfig, ScoringError, SubmissionSummary};
pub use service::{SubmissionService, SubmissionServiceError};
