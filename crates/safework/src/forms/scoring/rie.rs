//! RI&E scoring (NL, Arbowet Art. 5): severity × probability × exposure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::classification::{rie_band, RiskBand};
use super::super::domain::RieRiskItem;
use super::{BandCounts, ScoringConfig, ScoringError};

const AXIS_MAX: u8 = 3;

/// Per-item result. Items missing any of the three dimensions stay unscored
/// and are excluded from every count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RieItemScore {
    pub score: Option<u8>,
    pub priority: Option<RiskBand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RieOutcome {
    pub item_scores: BTreeMap<String, RieItemScore>,
    pub counts: BandCounts,
    /// Item keys with medium or high priority, highest score first. These are
    /// the rows surfaced in the action-plan view.
    pub action_plan: Vec<String>,
    pub highest_risk: Option<String>,
    /// Companies above the configured head count must have the RI&E reviewed
    /// by a certified external expert.
    pub external_review_required: bool,
}

/// Derived priority for a single item: set the instant all three dimensions
/// are rated, cleared again when any of them returns to the sentinel. Callers
/// apply this after every dimension edit.
pub fn recompute_priority(item: &RieRiskItem) -> Option<RiskBand> {
    (item.severity > 0 && item.probability > 0 && item.exposure > 0)
        .then(|| rie_band(item.severity * item.probability * item.exposure))
}

pub fn score_risk_items(
    items: &BTreeMap<String, RieRiskItem>,
    employee_count: u32,
    config: &ScoringConfig,
) -> Result<RieOutcome, ScoringError> {
    for item in items.values() {
        validate_axis("severity", item.severity)?;
        validate_axis("probability", item.probability)?;
        validate_axis("exposure", item.exposure)?;
    }

    let mut item_scores = BTreeMap::new();
    let mut counts = BandCounts::default();
    let mut ranked: Vec<(String, u8, RiskBand)> = Vec::new();
    let mut highest: Option<(String, u8)> = None;

    for (key, item) in items {
        let score = (item.severity > 0 && item.probability > 0 && item.exposure > 0)
            .then(|| item.severity * item.probability * item.exposure);
        let priority = score.map(rie_band);

        if let (Some(score), Some(priority)) = (score, priority) {
            counts.record(priority);
            if priority >= RiskBand::Medium {
                ranked.push((key.clone(), score, priority));
            }
            if highest.as_ref().map(|(_, best)| score > *best).unwrap_or(true) {
                highest = Some((key.clone(), score));
            }
        }

        item_scores.insert(key.clone(), RieItemScore { score, priority });
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(RieOutcome {
        item_scores,
        counts,
        action_plan: ranked.into_iter().map(|(key, _, _)| key).collect(),
        highest_risk: highest.map(|(key, _)| key),
        external_review_required: employee_count > config.external_review_employee_threshold,
    })
}

fn validate_axis(dimension: &'static str, value: u8) -> Result<(), ScoringError> {
    if value > AXIS_MAX {
        return Err(ScoringError::InvalidRating {
            dimension,
            value,
            max: AXIS_MAX,
        });
    }
    Ok(())
}
