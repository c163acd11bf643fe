use super::common::*;
use crate::forms::classification::{sam_band, SamRiskBand};
use crate::forms::scoring::sam::score_risk_items;
use crate::forms::scoring::ScoringError;

#[test]
fn band_table_matches_afs_cutoffs() {
    let cases = [
        (4, SamRiskBand::Low),
        (5, SamRiskBand::Medium),
        (8, SamRiskBand::Medium),
        (9, SamRiskBand::High),
        (12, SamRiskBand::High),
        (13, SamRiskBand::VeryHigh),
    ];

    for (score, expected) in cases {
        assert_eq!(sam_band(score), expected, "score {score}");
    }
}

#[test]
fn priority_rank_is_inverse_to_urgency() {
    assert_eq!(SamRiskBand::Low.priority_rank(), 3);
    assert_eq!(SamRiskBand::Medium.priority_rank(), 2);
    assert_eq!(SamRiskBand::High.priority_rank(), 1);
    assert_eq!(SamRiskBand::VeryHigh.priority_rank(), 0);
}

#[test]
fn items_carry_score_band_and_rank() {
    let items = sam_items(&[
        ("truck_charging", 1, 4),
        ("night_lone_work", 4, 4),
        ("chemical_storage", 3, 3),
    ]);

    let outcome = score_risk_items(&items).expect("valid items");

    let low = &outcome.item_scores["truck_charging"];
    assert_eq!(low.score, Some(4));
    assert_eq!(low.band, Some(SamRiskBand::Low));
    assert_eq!(low.priority_rank, Some(3));

    let worst = &outcome.item_scores["night_lone_work"];
    assert_eq!(worst.score, Some(16));
    assert_eq!(worst.band, Some(SamRiskBand::VeryHigh));
    assert_eq!(worst.priority_rank, Some(0));

    assert_eq!(outcome.counts.low, 1);
    assert_eq!(outcome.counts.high, 1);
    assert_eq!(outcome.counts.very_high, 1);
    assert_eq!(outcome.highest_risk.as_deref(), Some("night_lone_work"));
}

#[test]
fn action_plan_keeps_only_scores_above_four() {
    let items = sam_items(&[
        ("low_risk", 2, 2),
        ("medium_risk", 2, 3),
        ("high_risk", 3, 4),
        ("unrated", 0, 3),
    ]);

    let outcome = score_risk_items(&items).expect("valid items");

    assert_eq!(outcome.action_plan, vec!["high_risk", "medium_risk"]);
    let unrated = &outcome.item_scores["unrated"];
    assert_eq!(unrated.score, None);
    assert_eq!(unrated.priority_rank, None);
}

#[test]
fn five_point_ratings_are_rejected() {
    let items = sam_items(&[("bad", 5, 2)]);

    match score_risk_items(&items) {
        Err(ScoringError::InvalidRating {
            dimension, value, ..
        }) => {
            assert_eq!(dimension, "severity");
            assert_eq!(value, 5);
        }
        other => panic!("expected invalid rating, got {other:?}"),
    }
}
