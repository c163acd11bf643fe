//! Scoring algorithms, one per form family.
//!
//! Every scorer is a pure function over the response payload: no I/O, no
//! shared state, identical output for identical input. Band thresholds live
//! in [`super::classification`]; the formulas differ per jurisdiction on
//! purpose and must not be unified.

pub mod arbowet;
pub mod checklist;
pub mod jha;
pub mod osa;
pub mod rie;
pub mod sam;

use serde::{Deserialize, Serialize};

use super::classification::RiskBand;
use super::domain::{FormResponses, FormType};

pub use arbowet::{ArbowetOutcome, ArticleScore};
pub use checklist::ChecklistOutcome;
pub use jha::{JhaOutcome, StepScore};
pub use osa::{OsaOutcome, SectionScore};
pub use rie::{RieItemScore, RieOutcome};
pub use sam::{SamBandCounts, SamItemScore, SamOutcome};

/// Policy dials that feed scoring without changing any formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// RI&E submissions above this head count must be reviewed by a certified
    /// external expert (a business rule, not a risk score).
    pub external_review_employee_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            external_review_employee_threshold: 25,
        }
    }
}

/// Errors raised while scoring a single submission. A failed call never
/// partially mutates anything; the caller keeps its prior state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// Out-of-range ratings are rejected outright. Clamping would silently
    /// move the value into a different band.
    #[error("{dimension} rating {value} outside the allowed range 0..={max}")]
    InvalidRating {
        dimension: &'static str,
        value: u8,
        max: u8,
    },
    #[error("responses payload does not belong to form type '{}'", .form_type.label())]
    ResponsesMismatch { form_type: FormType },
}

/// Items per risk band for the three-tier classifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl BandCounts {
    pub(crate) fn record(&mut self, band: RiskBand) {
        match band {
            RiskBand::Low => self.low += 1,
            RiskBand::Medium => self.medium += 1,
            RiskBand::High => self.high += 1,
            RiskBand::NotAssessed => {}
        }
    }

    pub fn assessed(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Frozen submission-level summary, one variant per form family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionSummary {
    JobHazard(JhaOutcome),
    RiskInventory(RieOutcome),
    Compliance(ArbowetOutcome),
    SamRisk(SamOutcome),
    Psychosocial(OsaOutcome),
    Checklist(ChecklistOutcome),
}

impl SubmissionSummary {
    /// One-line description for status views and notifications.
    pub fn headline(&self) -> String {
        match self {
            SubmissionSummary::JobHazard(outcome) => format!(
                "worst step scores {} ({} risk)",
                outcome.overall_score,
                outcome.band.label()
            ),
            SubmissionSummary::RiskInventory(outcome) => format!(
                "{} risks assessed, {} need action",
                outcome.counts.assessed(),
                outcome.action_plan.len()
            ),
            SubmissionSummary::Compliance(outcome) => {
                format!("{}% compliant", outcome.compliance_score)
            }
            SubmissionSummary::SamRisk(outcome) => format!(
                "{} risks assessed, {} in the action plan",
                outcome.counts.assessed(),
                outcome.action_plan.len()
            ),
            SubmissionSummary::Psychosocial(outcome) => format!(
                "{} concerns flagged, {} low ratings",
                outcome.concern_count, outcome.low_rating_count
            ),
            SubmissionSummary::Checklist(outcome) => {
                format!("{}% passed", outcome.score)
            }
        }
    }
}

/// Dispatch to the algorithm matching the submission's form type. A payload
/// that does not belong to the form type is rejected rather than coerced.
pub fn score_submission(
    form_type: FormType,
    responses: &FormResponses,
    config: &ScoringConfig,
) -> Result<SubmissionSummary, ScoringError> {
    if !responses.matches(form_type) {
        return Err(ScoringError::ResponsesMismatch { form_type });
    }

    match responses {
        FormResponses::Jha { steps } => {
            jha::score_job_steps(steps).map(SubmissionSummary::JobHazard)
        }
        FormResponses::Rie {
            items,
            employee_count,
        } => rie::score_risk_items(items, *employee_count, config)
            .map(SubmissionSummary::RiskInventory),
        FormResponses::Arbowet { items } => {
            Ok(SubmissionSummary::Compliance(arbowet::score_compliance(
                items,
            )))
        }
        FormResponses::Sam { items } => {
            sam::score_risk_items(items).map(SubmissionSummary::SamRisk)
        }
        FormResponses::Osa { answers } => {
            osa::score_questionnaire(answers).map(SubmissionSummary::Psychosocial)
        }
        FormResponses::Checklist { entries } => Ok(SubmissionSummary::Checklist(
            checklist::score_entries(entries),
        )),
    }
}
