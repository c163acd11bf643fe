//! Fixed item catalogs for the catalog-driven forms.
//!
//! The Arbowet audit and the OSA questionnaire present the same items to every
//! company; respondents rate them rather than author them. Keys are stable and
//! double as the map keys inside [`super::domain::FormResponses`].

use serde::{Deserialize, Serialize};

/// Articles of the Dutch Working Conditions Act covered by the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArbowetArticle {
    PolicyArticle3,
    RiskInventoryArticle5,
    InstructionArticle8,
    PreventionOfficerArticle13,
    EmergencyResponseArticle15,
}

impl ArbowetArticle {
    pub const fn label(self) -> &'static str {
        match self {
            ArbowetArticle::PolicyArticle3 => "Art. 3 — Working conditions policy",
            ArbowetArticle::RiskInventoryArticle5 => "Art. 5 — Risk inventory & evaluation",
            ArbowetArticle::InstructionArticle8 => "Art. 8 — Information and instruction",
            ArbowetArticle::PreventionOfficerArticle13 => "Art. 13 — Prevention officer",
            ArbowetArticle::EmergencyResponseArticle15 => "Art. 15 — In-house emergency response",
        }
    }

    pub const fn ordered() -> [ArbowetArticle; 5] {
        [
            ArbowetArticle::PolicyArticle3,
            ArbowetArticle::RiskInventoryArticle5,
            ArbowetArticle::InstructionArticle8,
            ArbowetArticle::PreventionOfficerArticle13,
            ArbowetArticle::EmergencyResponseArticle15,
        ]
    }
}

/// One item of the Arbowet compliance catalog.
#[derive(Debug, Clone, Copy)]
pub struct ArbowetItemTemplate {
    pub key: &'static str,
    pub article: ArbowetArticle,
    pub requirement: &'static str,
}

pub fn arbowet_items() -> &'static [ArbowetItemTemplate] {
    ARBOWET_ITEMS
}

const ARBOWET_ITEMS: &[ArbowetItemTemplate] = &[
    ArbowetItemTemplate {
        key: "policy_written_arbo_policy",
        article: ArbowetArticle::PolicyArticle3,
        requirement: "A written working conditions policy exists and is reviewed with staff representation.",
    },
    ArbowetItemTemplate {
        key: "policy_adapted_work",
        article: ArbowetArticle::PolicyArticle3,
        requirement: "Work is adapted to the personal characteristics of employees where reasonably possible.",
    },
    ArbowetItemTemplate {
        key: "policy_monotonous_work_limited",
        article: ArbowetArticle::PolicyArticle3,
        requirement: "Monotonous and pace-bound work is avoided or limited.",
    },
    ArbowetItemTemplate {
        key: "policy_psa_program",
        article: ArbowetArticle::PolicyArticle3,
        requirement: "Psychosocial workload (PSA) is addressed in the working conditions policy.",
    },
    ArbowetItemTemplate {
        key: "rie_current_inventory",
        article: ArbowetArticle::RiskInventoryArticle5,
        requirement: "A current risk inventory and evaluation (RI&E) is on file.",
    },
    ArbowetItemTemplate {
        key: "rie_action_plan",
        article: ArbowetArticle::RiskInventoryArticle5,
        requirement: "The RI&E includes an action plan with deadlines and owners.",
    },
    ArbowetItemTemplate {
        key: "rie_reviewed_after_changes",
        article: ArbowetArticle::RiskInventoryArticle5,
        requirement: "The RI&E is revisited after material changes to working methods or conditions.",
    },
    ArbowetItemTemplate {
        key: "rie_employee_access",
        article: ArbowetArticle::RiskInventoryArticle5,
        requirement: "Every employee can consult the RI&E and its action plan.",
    },
    ArbowetItemTemplate {
        key: "instruction_onboarding",
        article: ArbowetArticle::InstructionArticle8,
        requirement: "New employees receive documented safety instruction before starting work.",
    },
    ArbowetItemTemplate {
        key: "instruction_recurring_training",
        article: ArbowetArticle::InstructionArticle8,
        requirement: "Refresher instruction is scheduled for hazardous tasks and equipment.",
    },
    ArbowetItemTemplate {
        key: "instruction_ppe_use",
        article: ArbowetArticle::InstructionArticle8,
        requirement: "Employees are instructed in the correct use of the issued personal protective equipment.",
    },
    ArbowetItemTemplate {
        key: "instruction_supervision",
        article: ArbowetArticle::InstructionArticle8,
        requirement: "Supervision verifies that instructions are followed in practice.",
    },
    ArbowetItemTemplate {
        key: "prevention_officer_appointed",
        article: ArbowetArticle::PreventionOfficerArticle13,
        requirement: "At least one prevention officer is appointed (or the employer role is formally assumed).",
    },
    ArbowetItemTemplate {
        key: "prevention_officer_capacity",
        article: ArbowetArticle::PreventionOfficerArticle13,
        requirement: "The prevention officer has the time and expertise the RI&E calls for.",
    },
    ArbowetItemTemplate {
        key: "prevention_officer_involved",
        article: ArbowetArticle::PreventionOfficerArticle13,
        requirement: "The prevention officer cooperates on the RI&E and advises the works council.",
    },
    ArbowetItemTemplate {
        key: "bhv_responders_appointed",
        article: ArbowetArticle::EmergencyResponseArticle15,
        requirement: "Enough in-house emergency responders (BHV) are appointed for the site occupancy.",
    },
    ArbowetItemTemplate {
        key: "bhv_training_current",
        article: ArbowetArticle::EmergencyResponseArticle15,
        requirement: "BHV responders hold current first-aid, fire, and evacuation training.",
    },
    ArbowetItemTemplate {
        key: "bhv_evacuation_drill",
        article: ArbowetArticle::EmergencyResponseArticle15,
        requirement: "An evacuation drill was held within the last year and findings were recorded.",
    },
];

/// Sections of the OSA questionnaire per AFS 2015:4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsaSection {
    Workload,
    WorkingHours,
    SocialClimate,
    Leadership,
    Victimization,
}

impl OsaSection {
    pub const fn label(self) -> &'static str {
        match self {
            OsaSection::Workload => "Workload",
            OsaSection::WorkingHours => "Working hours",
            OsaSection::SocialClimate => "Social climate",
            OsaSection::Leadership => "Leadership",
            OsaSection::Victimization => "Victimization",
        }
    }

    pub const fn ordered() -> [OsaSection; 5] {
        [
            OsaSection::Workload,
            OsaSection::WorkingHours,
            OsaSection::SocialClimate,
            OsaSection::Leadership,
            OsaSection::Victimization,
        ]
    }
}

/// One question of the OSA catalog.
#[derive(Debug, Clone, Copy)]
pub struct OsaQuestionTemplate {
    pub key: &'static str,
    pub section: OsaSection,
    pub prompt: &'static str,
}

pub fn osa_questions() -> &'static [OsaQuestionTemplate] {
    OSA_QUESTIONS
}

const OSA_QUESTIONS: &[OsaQuestionTemplate] = &[
    OsaQuestionTemplate {
        key: "workload_resources_match",
        section: OsaSection::Workload,
        prompt: "The demands of my work match the resources I am given.",
    },
    OsaQuestionTemplate {
        key: "workload_recovery_time",
        section: OsaSection::Workload,
        prompt: "I can recover between periods of high workload.",
    },
    OsaQuestionTemplate {
        key: "workload_priorities_clear",
        section: OsaSection::Workload,
        prompt: "When everything cannot be done, it is clear what to prioritize.",
    },
    OsaQuestionTemplate {
        key: "workload_help_available",
        section: OsaSection::Workload,
        prompt: "I can get help when the workload becomes too high.",
    },
    OsaQuestionTemplate {
        key: "hours_overtime_reasonable",
        section: OsaSection::WorkingHours,
        prompt: "Overtime stays within reasonable bounds.",
    },
    OsaQuestionTemplate {
        key: "hours_rest_respected",
        section: OsaSection::WorkingHours,
        prompt: "Rest periods between shifts are respected.",
    },
    OsaQuestionTemplate {
        key: "hours_reachability_expectations",
        section: OsaSection::WorkingHours,
        prompt: "Expectations about reachability outside working hours are clear and fair.",
    },
    OsaQuestionTemplate {
        key: "hours_schedule_predictable",
        section: OsaSection::WorkingHours,
        prompt: "My schedule is predictable enough to plan my private life.",
    },
    OsaQuestionTemplate {
        key: "climate_respectful_tone",
        section: OsaSection::SocialClimate,
        prompt: "The tone between colleagues is respectful.",
    },
    OsaQuestionTemplate {
        key: "climate_can_raise_problems",
        section: OsaSection::SocialClimate,
        prompt: "I can raise problems without fear of negative consequences.",
    },
    OsaQuestionTemplate {
        key: "climate_cooperation_works",
        section: OsaSection::SocialClimate,
        prompt: "Cooperation between teams works well.",
    },
    OsaQuestionTemplate {
        key: "climate_conflicts_addressed",
        section: OsaSection::SocialClimate,
        prompt: "Conflicts are addressed early instead of being left to grow.",
    },
    OsaQuestionTemplate {
        key: "leadership_goals_clear",
        section: OsaSection::Leadership,
        prompt: "My manager makes goals and expectations clear.",
    },
    OsaQuestionTemplate {
        key: "leadership_feedback_regular",
        section: OsaSection::Leadership,
        prompt: "I receive regular feedback on my work.",
    },
    OsaQuestionTemplate {
        key: "leadership_acts_on_signals",
        section: OsaSection::Leadership,
        prompt: "My manager acts on signals of unhealthy workload.",
    },
    OsaQuestionTemplate {
        key: "leadership_fair_treatment",
        section: OsaSection::Leadership,
        prompt: "Decisions that affect me are made fairly.",
    },
    OsaQuestionTemplate {
        key: "victimization_no_exclusion",
        section: OsaSection::Victimization,
        prompt: "Nobody in my workplace is deliberately excluded.",
    },
    OsaQuestionTemplate {
        key: "victimization_reporting_known",
        section: OsaSection::Victimization,
        prompt: "I know where to report victimization or harassment.",
    },
    OsaQuestionTemplate {
        key: "victimization_reports_taken_seriously",
        section: OsaSection::Victimization,
        prompt: "Reports of victimization are taken seriously.",
    },
    OsaQuestionTemplate {
        key: "victimization_zero_tolerance_communicated",
        section: OsaSection::Victimization,
        prompt: "Management clearly communicates that victimization is not accepted.",
    },
];
