use super::common::*;
use crate::forms::classification::RiskBand;
use crate::forms::scoring::jha::score_job_steps;
use crate::forms::scoring::ScoringError;

#[test]
fn worst_step_drives_the_overall_classification() {
    let steps = vec![
        job_step("stage materials", 2, 2),
        job_step("work at height", 5, 4),
        job_step("hand tools", 3, 2),
    ];

    let outcome = score_job_steps(&steps).expect("valid steps");

    assert_eq!(outcome.overall_score, 20);
    assert_eq!(outcome.band, RiskBand::High);
    assert_eq!(outcome.highest_risk_step, Some(1));
    assert_eq!(
        outcome.step_scores.iter().filter_map(|s| s.score).collect::<Vec<_>>(),
        vec![4, 20, 6]
    );
}

#[test]
fn unrated_and_hazardless_steps_stay_out_of_scoring() {
    let steps = vec![
        job_step("not yet assessed", 0, 3),
        hazardless_step("no hazards selected", 4, 4),
        job_step("rated", 1, 2),
    ];

    let outcome = score_job_steps(&steps).expect("valid steps");

    assert_eq!(outcome.step_scores[0].score, None);
    assert_eq!(outcome.step_scores[0].band, RiskBand::NotAssessed);
    assert_eq!(outcome.step_scores[1].score, None);
    assert_eq!(outcome.step_scores[1].band, RiskBand::NotAssessed);
    assert_eq!(outcome.overall_score, 2);
    assert_eq!(outcome.band, RiskBand::Low);
    assert_eq!(outcome.counts.assessed(), 1);
}

#[test]
fn band_boundaries_split_at_five_and_eleven() {
    let cases = [
        (1, 5, RiskBand::Low),
        (2, 3, RiskBand::Medium),
        (3, 3, RiskBand::Medium),
        (3, 4, RiskBand::High),
        (5, 5, RiskBand::High),
    ];

    for (severity, probability, expected) in cases {
        let outcome =
            score_job_steps(&[job_step("case", severity, probability)]).expect("valid step");
        assert_eq!(
            outcome.band, expected,
            "severity {severity} x probability {probability}"
        );
    }
}

#[test]
fn raising_either_axis_never_lowers_the_band() {
    for probability in 1..=5u8 {
        let mut previous = RiskBand::NotAssessed;
        for severity in 1..=5u8 {
            let outcome =
                score_job_steps(&[job_step("mono", severity, probability)]).expect("valid step");
            assert!(outcome.band >= previous);
            previous = outcome.band;
        }
    }

    for severity in 1..=5u8 {
        let mut previous = RiskBand::NotAssessed;
        for probability in 1..=5u8 {
            let outcome =
                score_job_steps(&[job_step("mono", severity, probability)]).expect("valid step");
            assert!(outcome.band >= previous);
            previous = outcome.band;
        }
    }
}

#[test]
fn out_of_range_ratings_are_rejected_not_clamped() {
    let result = score_job_steps(&[job_step("bad", 6, 2)]);

    match result {
        Err(ScoringError::InvalidRating {
            dimension, value, ..
        }) => {
            assert_eq!(dimension, "severity");
            assert_eq!(value, 6);
        }
        other => panic!("expected invalid rating, got {other:?}"),
    }
}

#[test]
fn repeated_calls_return_identical_outcomes() {
    let steps = vec![job_step("first", 3, 3), job_step("second", 2, 5)];

    let first = score_job_steps(&steps).expect("valid steps");
    let second = score_job_steps(&steps).expect("valid steps");

    assert_eq!(first, second);
}
