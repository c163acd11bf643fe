use super::common::*;
use crate::forms::classification::RiskBand;
use crate::forms::scoring::rie::{recompute_priority, score_risk_items};
use crate::forms::scoring::ScoringError;

#[test]
fn items_missing_a_dimension_stay_unscored() {
    let items = rie_items(&[("machine_guarding", 2, 0, 3)]);

    let outcome = score_risk_items(&items, 10, &scoring_config()).expect("valid items");

    let entry = &outcome.item_scores["machine_guarding"];
    assert_eq!(entry.score, None);
    assert_eq!(entry.priority, None);
    assert_eq!(outcome.counts.assessed(), 0);
    assert!(outcome.action_plan.is_empty());
    assert_eq!(outcome.highest_risk, None);
}

#[test]
fn priority_appears_the_moment_the_last_dimension_lands() {
    let mut item = rie_item(2, 0, 3);
    assert_eq!(recompute_priority(&item), None);

    item.probability = 2;
    assert_eq!(recompute_priority(&item), Some(RiskBand::High));

    item.exposure = 0;
    assert_eq!(recompute_priority(&item), None);
}

#[test]
fn band_boundaries_split_at_three_and_nine() {
    let cases = [
        (1, 1, 3, RiskBand::Low),
        (1, 2, 2, RiskBand::Medium),
        (1, 3, 3, RiskBand::Medium),
        (2, 3, 2, RiskBand::High),
        (3, 3, 3, RiskBand::High),
    ];

    for (severity, probability, exposure, expected) in cases {
        let item = rie_item(severity, probability, exposure);
        assert_eq!(
            recompute_priority(&item),
            Some(expected),
            "{severity}x{probability}x{exposure}"
        );
    }
}

#[test]
fn action_plan_lists_medium_and_high_risks_worst_first() {
    let items = rie_items(&[
        ("ladder_storage", 1, 1, 2),
        ("welding_fumes", 3, 3, 3),
        ("forklift_traffic", 2, 2, 2),
        ("unrated", 0, 2, 2),
    ]);

    let outcome = score_risk_items(&items, 12, &scoring_config()).expect("valid items");

    assert_eq!(outcome.action_plan, vec!["welding_fumes", "forklift_traffic"]);
    assert_eq!(outcome.highest_risk.as_deref(), Some("welding_fumes"));
    assert_eq!(outcome.counts.low, 1);
    assert_eq!(outcome.counts.medium, 1);
    assert_eq!(outcome.counts.high, 1);
}

#[test]
fn external_review_follows_the_head_count_threshold() {
    let items = rie_items(&[("noise", 1, 1, 1)]);

    let under = score_risk_items(&items, 25, &scoring_config()).expect("valid items");
    assert!(!under.external_review_required);

    let over = score_risk_items(&items, 26, &scoring_config()).expect("valid items");
    assert!(over.external_review_required);
}

#[test]
fn out_of_range_dimensions_are_rejected() {
    let items = rie_items(&[("bad", 2, 2, 4)]);

    match score_risk_items(&items, 5, &scoring_config()) {
        Err(ScoringError::InvalidRating {
            dimension, value, ..
        }) => {
            assert_eq!(dimension, "exposure");
            assert_eq!(value, 4);
        }
        other => panic!("expected invalid rating, got {other:?}"),
    }
}
