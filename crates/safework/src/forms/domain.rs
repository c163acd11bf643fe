use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::catalog;
use super::classification::RiskBand;

/// Identifier wrapper for submission records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Company tenant reference. Owned by the identity layer, never minted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Employee reference used for submitters and reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Form families the engine can score. The tag selects the scoring algorithm;
/// JSA shares the JHA formula but keeps its own reference prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    Jha,
    Jsa,
    Rie,
    Arbowet,
    Sam,
    Osa,
    Checklist,
}

impl FormType {
    pub const fn label(self) -> &'static str {
        match self {
            FormType::Jha => "Job Hazard Analysis",
            FormType::Jsa => "Job Safety Analysis",
            FormType::Rie => "Risico-Inventarisatie & -Evaluatie",
            FormType::Arbowet => "Arbowet Compliance Audit",
            FormType::Sam => "SAM Riskbedömning",
            FormType::Osa => "OSA Medarbetarenkät",
            FormType::Checklist => "Routine Checklist",
        }
    }

    /// Prefix used when minting human-readable reference numbers.
    pub const fn reference_prefix(self) -> &'static str {
        match self {
            FormType::Jha => "JHA",
            FormType::Jsa => "JSA",
            FormType::Rie => "RIE",
            FormType::Arbowet => "ARBO",
            FormType::Sam => "SAM",
            FormType::Osa => "OSA",
            FormType::Checklist => "CHK",
        }
    }
}

/// Jurisdictions the platform serves. The country decides which forms are
/// offered; it never alters how any individual form is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Us,
    Nl,
    Se,
}

impl CountryCode {
    pub const fn label(self) -> &'static str {
        match self {
            CountryCode::Us => "United States",
            CountryCode::Nl => "Netherlands",
            CountryCode::Se => "Sweden",
        }
    }

    pub const fn forms_offered(self) -> &'static [FormType] {
        match self {
            CountryCode::Us => &[FormType::Jha, FormType::Jsa, FormType::Checklist],
            CountryCode::Nl => &[FormType::Rie, FormType::Arbowet, FormType::Checklist],
            CountryCode::Se => &[FormType::Sam, FormType::Osa, FormType::Checklist],
        }
    }

    pub fn offers(self, form_type: FormType) -> bool {
        self.forms_offered().contains(&form_type)
    }
}

/// Submission lifecycle states. `Submitted` is terminal; responses freeze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
        }
    }
}

/// Hazard categories selectable on a JHA/JSA job step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardType {
    StruckBy,
    CaughtInBetween,
    FallFromHeight,
    SlipTrip,
    Electrical,
    Chemical,
    Ergonomic,
    Noise,
    TemperatureExtreme,
    Respiratory,
    Other,
}

/// One step of a JHA/JSA, rated on two five-point dimensions.
/// A rating of 0 means "not yet assessed" and is excluded from scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStep {
    pub description: String,
    pub hazards: BTreeSet<HazardType>,
    pub severity: u8,
    pub probability: u8,
    pub controls: String,
}

/// RI&E risk item with the three-dimensional Kinney-style rating.
/// `priority` is derived from the dimensions; it is never entered directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RieRiskItem {
    pub severity: u8,
    pub probability: u8,
    pub exposure: u8,
    pub current_controls: String,
    pub action_required: String,
    pub priority: Option<RiskBand>,
}

/// SAM risk item: two four-point dimensions, no exposure axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamRiskItem {
    pub severity: u8,
    pub probability: u8,
    pub measures: String,
}

/// Answer states for an Arbowet compliance item. Unanswered items are `None`
/// on [`ComplianceItem::status`]; `NotApplicable` drops out of the headline
/// denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
    NotApplicable,
}

/// Response to one item of the Arbowet compliance catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub status: Option<ComplianceStatus>,
    pub evidence: String,
    pub action: String,
}

/// Response to one OSA questionnaire item. Rating 0 means unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsaAnswer {
    pub rating: u8,
    pub concern: bool,
    pub notes: String,
}

/// Checklist answers arrive either as booleans or as loose strings
/// ("pass"/"fail"/"yes"/"no"/"na"). Anything else still counts against the
/// denominator without counting as a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChecklistValue {
    Flag(bool),
    Text(String),
}

impl ChecklistValue {
    pub fn is_pass(&self) -> bool {
        match self {
            ChecklistValue::Flag(flag) => *flag,
            ChecklistValue::Text(text) => {
                text.eq_ignore_ascii_case("pass") || text.eq_ignore_ascii_case("yes")
            }
        }
    }

    pub fn is_fail(&self) -> bool {
        match self {
            ChecklistValue::Flag(flag) => !*flag,
            ChecklistValue::Text(text) => {
                text.eq_ignore_ascii_case("fail") || text.eq_ignore_ascii_case("no")
            }
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        match self {
            ChecklistValue::Flag(_) => false,
            ChecklistValue::Text(text) => {
                text.eq_ignore_ascii_case("na") || text.eq_ignore_ascii_case("n/a")
            }
        }
    }
}

/// One answered checklist item, with optional field evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub item: String,
    pub value: ChecklistValue,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub photo_keys: Vec<String>,
}

/// Form-specific response payload. Opaque to the lifecycle; interpreted only
/// by the scoring algorithm matching the submission's [`FormType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FormResponses {
    Jha {
        steps: Vec<JobStep>,
    },
    Rie {
        items: BTreeMap<String, RieRiskItem>,
        employee_count: u32,
    },
    Arbowet {
        items: BTreeMap<String, ComplianceItem>,
    },
    Sam {
        items: BTreeMap<String, SamRiskItem>,
    },
    Osa {
        answers: BTreeMap<String, OsaAnswer>,
    },
    Checklist {
        entries: Vec<ChecklistEntry>,
    },
}

impl FormResponses {
    /// Payload for a fresh draft: fixed-catalog forms are pre-seeded with
    /// every item at its not-assessed sentinel, free-form lists start empty.
    pub fn empty_for(form_type: FormType) -> Self {
        match form_type {
            FormType::Jha | FormType::Jsa => FormResponses::Jha { steps: Vec::new() },
            FormType::Rie => FormResponses::Rie {
                items: BTreeMap::new(),
                employee_count: 0,
            },
            FormType::Arbowet => {
                let items = catalog::arbowet_items()
                    .iter()
                    .map(|template| {
                        (
                            template.key.to_string(),
                            ComplianceItem {
                                status: None,
                                evidence: String::new(),
                                action: String::new(),
                            },
                        )
                    })
                    .collect();
                FormResponses::Arbowet { items }
            }
            FormType::Sam => FormResponses::Sam {
                items: BTreeMap::new(),
            },
            FormType::Osa => {
                let answers = catalog::osa_questions()
                    .iter()
                    .map(|question| {
                        (
                            question.key.to_string(),
                            OsaAnswer {
                                rating: 0,
                                concern: false,
                                notes: String::new(),
                            },
                        )
                    })
                    .collect();
                FormResponses::Osa { answers }
            }
            FormType::Checklist => FormResponses::Checklist {
                entries: Vec::new(),
            },
        }
    }

    pub fn matches(&self, form_type: FormType) -> bool {
        matches!(
            (self, form_type),
            (FormResponses::Jha { .. }, FormType::Jha | FormType::Jsa)
                | (FormResponses::Rie { .. }, FormType::Rie)
                | (FormResponses::Arbowet { .. }, FormType::Arbowet)
                | (FormResponses::Sam { .. }, FormType::Sam)
                | (FormResponses::Osa { .. }, FormType::Osa)
                | (FormResponses::Checklist { .. }, FormType::Checklist)
        )
    }
}
