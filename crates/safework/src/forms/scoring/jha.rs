//! JHA/JSA scoring (US): severity × probability per job step, worst step wins.

use serde::{Deserialize, Serialize};

use super::super::classification::{jha_band, RiskBand};
use super::super::domain::JobStep;
use super::{BandCounts, ScoringError};

const AXIS_MAX: u8 = 5;

/// Score assigned to one job step. `score` stays `None` until both axes are
/// rated and at least one hazard is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepScore {
    pub index: usize,
    pub description: String,
    pub score: Option<u8>,
    pub band: RiskBand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JhaOutcome {
    pub step_scores: Vec<StepScore>,
    /// Highest single step score. The classification follows the worst
    /// hazard, not a sum or an average.
    pub overall_score: u8,
    pub band: RiskBand,
    pub counts: BandCounts,
    pub highest_risk_step: Option<usize>,
}

pub fn score_job_steps(steps: &[JobStep]) -> Result<JhaOutcome, ScoringError> {
    for step in steps {
        validate_axis("severity", step.severity)?;
        validate_axis("probability", step.probability)?;
    }

    let mut step_scores = Vec::with_capacity(steps.len());
    let mut counts = BandCounts::default();
    let mut overall_score = 0u8;
    let mut highest_risk_step = None;

    for (index, step) in steps.iter().enumerate() {
        let assessed = step.severity > 0 && step.probability > 0 && !step.hazards.is_empty();
        let score = assessed.then(|| step.severity * step.probability);
        let band = jha_band(score.unwrap_or(0));
        counts.record(band);

        if let Some(score) = score {
            if score > overall_score {
                overall_score = score;
                highest_risk_step = Some(index);
            }
        }

        step_scores.push(StepScore {
            index,
            description: step.description.clone(),
            score,
            band,
        });
    }

    Ok(JhaOutcome {
        step_scores,
        overall_score,
        band: jha_band(overall_score),
        counts,
        highest_risk_step,
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
