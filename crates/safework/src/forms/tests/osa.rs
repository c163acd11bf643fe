use std::collections::BTreeMap;

use super::common::*;
use crate::forms::catalog::{osa_questions, OsaSection};
use crate::forms::classification::SectionBand;
use crate::forms::domain::OsaAnswer;
use crate::forms::scoring::osa::score_questionnaire;
use crate::forms::scoring::ScoringError;

fn answers_for_section(section: OsaSection, rating: u8) -> BTreeMap<String, OsaAnswer> {
    osa_questions()
        .iter()
        .filter(|question| question.section == section)
        .map(|question| (question.key.to_string(), osa_answer(rating, false)))
        .collect()
}

#[test]
fn section_average_skips_unrated_questions() {
    let mut answers = answers_for_section(OsaSection::Workload, 0);
    answers.insert(
        "workload_resources_match".to_string(),
        osa_answer(4, false),
    );
    answers.insert("workload_recovery_time".to_string(), osa_answer(2, false));

    let outcome = score_questionnaire(&answers).expect("valid answers");

    let workload = outcome
        .sections
        .iter()
        .find(|section| section.section == OsaSection::Workload)
        .expect("workload section present");
    assert_eq!(workload.rated, 2);
    assert!((workload.average - 3.0).abs() < f64::EPSILON);
    assert_eq!(workload.band, SectionBand::Fair);
}

#[test]
fn an_unrated_section_is_distinct_from_a_low_scoring_one() {
    let mut answers = answers_for_section(OsaSection::Victimization, 0);
    answers.extend(answers_for_section(OsaSection::Leadership, 1));

    let outcome = score_questionnaire(&answers).expect("valid answers");

    let unrated = outcome
        .sections
        .iter()
        .find(|section| section.section == OsaSection::Victimization)
        .expect("victimization section present");
    assert_eq!(unrated.rated, 0);
    assert_eq!(unrated.average, 0.0);
    assert_eq!(unrated.band, SectionBand::Unrated);

    let poor = outcome
        .sections
        .iter()
        .find(|section| section.section == OsaSection::Leadership)
        .expect("leadership section present");
    assert!(poor.rated > 0);
    assert!(poor.average > 0.0);
    assert_eq!(poor.band, SectionBand::Poor);
}

#[test]
fn display_bands_follow_the_average_thresholds() {
    let cases = [
        (5, SectionBand::Good),
        (4, SectionBand::Good),
        (3, SectionBand::Fair),
        (2, SectionBand::Poor),
    ];

    for (rating, expected) in cases {
        let answers = answers_for_section(OsaSection::SocialClimate, rating);
        let outcome = score_questionnaire(&answers).expect("valid answers");
        let section = outcome
            .sections
            .iter()
            .find(|section| section.section == OsaSection::SocialClimate)
            .expect("section present");
        assert_eq!(section.band, expected, "rating {rating}");
    }
}

#[test]
fn concern_and_low_rating_counts_span_the_whole_questionnaire() {
    let mut answers = BTreeMap::new();
    answers.insert("workload_recovery_time".to_string(), osa_answer(2, true));
    answers.insert("hours_rest_respected".to_string(), osa_answer(1, true));
    answers.insert("leadership_goals_clear".to_string(), osa_answer(5, false));
    answers.insert(
        "victimization_no_exclusion".to_string(),
        osa_answer(0, true),
    );

    let outcome = score_questionnaire(&answers).expect("valid answers");

    assert_eq!(outcome.concern_count, 3);
    // Rating 0 is "not assessed", never a low rating.
    assert_eq!(outcome.low_rating_count, 2);
}

#[test]
fn ratings_above_five_are_rejected() {
    let mut answers = BTreeMap::new();
    answers.insert("workload_recovery_time".to_string(), osa_answer(6, false));

    match score_questionnaire(&answers) {
        Err(ScoringError::InvalidRating { value, .. }) => assert_eq!(value, 6),
        other => panic!("expected invalid rating, got {other:?}"),
    }
}
