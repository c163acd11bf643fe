//! Shared score-to-band threshold tables.
//!
//! Every algorithm classifies through one of these tables instead of inline
//! comparisons, so the jurisdictional cutoffs live in exactly one place.

use serde::{Deserialize, Serialize};

/// Risk tier shared by the JHA/JSA and RI&E classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    NotAssessed,
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::NotAssessed => "not assessed",
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }
}

/// Swedish SAM risk tiers per AFS 2023:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamRiskBand {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SamRiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            SamRiskBand::Low => "low",
            SamRiskBand::Medium => "medium",
            SamRiskBand::High => "high",
            SamRiskBand::VeryHigh => "very high",
        }
    }

    pub const fn label_sv(self) -> &'static str {
        match self {
            SamRiskBand::Low => "Låg",
            SamRiskBand::Medium => "Medel",
            SamRiskBand::High => "Hög",
            SamRiskBand::VeryHigh => "Mycket hög",
        }
    }

    /// Follow-up priority as stored in the source data: 0 is the most urgent.
    /// Kept inverse to the band ordering on purpose; do not flip the sign.
    pub const fn priority_rank(self) -> u8 {
        match self {
            SamRiskBand::Low => 3,
            SamRiskBand::Medium => 2,
            SamRiskBand::High => 1,
            SamRiskBand::VeryHigh => 0,
        }
    }
}

/// Display tier for OSA section averages. Never routes action plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBand {
    Unrated,
    Poor,
    Fair,
    Good,
}

impl SectionBand {
    pub const fn label(self) -> &'static str {
        match self {
            SectionBand::Unrated => "unrated",
            SectionBand::Poor => "poor",
            SectionBand::Fair => "fair",
            SectionBand::Good => "good",
        }
    }
}

/// JHA/JSA: severity × probability on 1..=5 axes, so scores run 1..=25.
const JHA_BAND_TABLE: [(u8, RiskBand); 2] = [(5, RiskBand::Low), (11, RiskBand::Medium)];

/// RI&E: severity × probability × exposure on 1..=3 axes, scores 1..=27.
const RIE_BAND_TABLE: [(u8, RiskBand); 2] = [(3, RiskBand::Low), (9, RiskBand::Medium)];

/// SAM: severity × probability on 1..=4 axes, scores 1..=16.
const SAM_BAND_TABLE: [(u8, SamRiskBand); 3] = [
    (4, SamRiskBand::Low),
    (8, SamRiskBand::Medium),
    (12, SamRiskBand::High),
];

pub fn jha_band(score: u8) -> RiskBand {
    if score == 0 {
        return RiskBand::NotAssessed;
    }
    for (upper, band) in JHA_BAND_TABLE {
        if score <= upper {
            return band;
        }
    }
    RiskBand::High
}

pub fn rie_band(score: u8) -> RiskBand {
    if score == 0 {
        return RiskBand::NotAssessed;
    }
    for (upper, band) in RIE_BAND_TABLE {
        if score <= upper {
            return band;
        }
    }
    RiskBand::High
}

pub fn sam_band(score: u8) -> SamRiskBand {
    for (upper, band) in SAM_BAND_TABLE {
        if score <= upper {
            return band;
        }
    }
    SamRiskBand::VeryHigh
}

/// Coloring for an OSA section average. An average of exactly zero means no
/// question in the section was rated, which is distinct from a low score.
pub fn osa_section_band(average: f64) -> SectionBand {
    if average >= 4.0 {
        SectionBand::Good
    } else if average >= 3.0 {
        SectionBand::Fair
    } else if average > 0.0 {
        SectionBand::Poor
    } else {
        SectionBand::Unrated
    }
}
