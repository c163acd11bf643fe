//! OSA psychosocial questionnaire (SE, AFS 2015:4): section averages and
//! concern counts. No multiplicative risk score exists for this form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::catalog::{osa_questions, OsaSection};
use super::super::classification::{osa_section_band, SectionBand};
use super::super::domain::OsaAnswer;
use super::ScoringError;

const RATING_MAX: u8 = 5;

/// Average for one catalog section. `rated` disambiguates "nobody answered"
/// (average 0.0, rated 0) from a genuinely low average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section: OsaSection,
    pub average: f64,
    pub rated: usize,
    pub band: SectionBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsaOutcome {
    pub sections: Vec<SectionScore>,
    pub concern_count: usize,
    /// Answers with 0 < rating ≤ 2 across the whole questionnaire.
    pub low_rating_count: usize,
}

pub fn score_questionnaire(
    answers: &BTreeMap<String, OsaAnswer>,
) -> Result<OsaOutcome, ScoringError> {
    for answer in answers.values() {
        if answer.rating > RATING_MAX {
            return Err(ScoringError::InvalidRating {
                dimension: "rating",
                value: answer.rating,
                max: RATING_MAX,
            });
        }
    }

    let sections = OsaSection::ordered()
        .into_iter()
        .map(|section| {
            let mut sum = 0u32;
            let mut rated = 0usize;
            for question in osa_questions() {
                if question.section != section {
                    continue;
                }
                if let Some(answer) = answers.get(question.key) {
                    if answer.rating > 0 {
                        sum += u32::from(answer.rating);
                        rated += 1;
                    }
                }
            }
            let average = if rated == 0 {
                0.0
            } else {
                f64::from(sum) / rated as f64
            };
            SectionScore {
                section,
                average,
                rated,
                band: osa_section_band(average),
            }
        })
        .collect();

    let concern_count = answers.values().filter(|answer| answer.concern).count();
    let low_rating_count = answers
        .values()
        .filter(|answer| answer.rating > 0 && answer.rating <= 2)
        .count();

    Ok(OsaOutcome {
        sections,
        concern_count,
        low_rating_count,
    })
}
