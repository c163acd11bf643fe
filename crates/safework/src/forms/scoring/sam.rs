//! SAM risk scoring (SE, AFS 2023:1): severity × probability on four-point
//! axes, four bands, explicit priority ranks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::classification::{sam_band, SamRiskBand};
use super::super::domain::SamRiskItem;
use super::ScoringError;

const AXIS_MAX: u8 = 4;

/// Per-item result. `priority_rank` mirrors the source data where 0 is the
/// most urgent; keep it alongside the band to avoid sign confusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamItemScore {
    pub score: Option<u8>,
    pub band: Option<SamRiskBand>,
    pub priority_rank: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamBandCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub very_high: usize,
}

impl SamBandCounts {
    fn record(&mut self, band: SamRiskBand) {
        match band {
            SamRiskBand::Low => self.low += 1,
            SamRiskBand::Medium => self.medium += 1,
            SamRiskBand::High => self.high += 1,
            SamRiskBand::VeryHigh => self.very_high += 1,
        }
    }

    pub fn assessed(&self) -> usize {
        self.low + self.medium + self.high + self.very_high
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamOutcome {
    pub item_scores: BTreeMap<String, SamItemScore>,
    pub counts: SamBandCounts,
    /// Item keys with score > 4 (medium or worse), highest score first.
    pub action_plan: Vec<String>,
    pub highest_risk: Option<String>,
}

pub fn score_risk_items(
    items: &BTreeMap<String, SamRiskItem>,
) -> Result<SamOutcome, ScoringError> {
    for item in items.values() {
        validate_axis("severity", item.severity)?;
        validate_axis("probability", item.probability)?;
    }

    let mut item_scores = BTreeMap::new();
    let mut counts = SamBandCounts::default();
    let mut ranked: Vec<(String, u8)> = Vec::new();
    let mut highest: Option<(String, u8)> = None;

    for (key, item) in items {
        let score = (item.severity > 0 && item.probability > 0)
            .then(|| item.severity * item.probability);
        let band = score.map(sam_band);

        if let (Some(score), Some(band)) = (score, band) {
            counts.record(band);
            if score > 4 {
                ranked.push((key.clone(), score));
            }
            if highest.as_ref().map(|(_, best)| score > *best).unwrap_or(true) {
                highest = Some((key.clone(), score));
            }
        }

        item_scores.insert(
            key.clone(),
            SamItemScore {
                score,
                band,
                priority_rank: band.map(SamRiskBand::priority_rank),
            },
        );
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(SamOutcome {
        item_scores,
        counts,
        action_plan: ranked.into_iter().map(|(key, _)| key).collect(),
        highest_risk: highest.map(|(key, _)| key),
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
