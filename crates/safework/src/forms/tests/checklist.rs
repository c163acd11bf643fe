use super::common::*;
use crate::forms::domain::ChecklistValue;
use crate::forms::scoring::checklist::score_entries;

fn text(value: &str) -> ChecklistValue {
    ChecklistValue::Text(value.to_string())
}

#[test]
fn a_fully_not_applicable_checklist_scores_one_hundred() {
    let entries = vec![
        checklist_entry("guard rails", text("na")),
        checklist_entry("lockout tags", text("N/A")),
        checklist_entry("eye wash", text("n/a")),
    ];

    let outcome = score_entries(&entries);

    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.na_count, 3);
    assert_eq!(outcome.applicable, 0);
    assert_eq!(outcome.pass_count, 0);
}

#[test]
fn booleans_and_strings_mix_in_one_checklist() {
    let entries = vec![
        checklist_entry("extinguishers charged", ChecklistValue::Flag(true)),
        checklist_entry("exits clear", text("pass")),
        checklist_entry("first aid stocked", text("yes")),
        checklist_entry("forklift horn", ChecklistValue::Flag(false)),
        checklist_entry("spill kit", text("fail")),
        checklist_entry("eyewash flushed", text("no")),
        checklist_entry("sprinklers", text("na")),
    ];

    let outcome = score_entries(&entries);

    assert_eq!(outcome.pass_count, 3);
    assert_eq!(outcome.fail_count, 3);
    assert_eq!(outcome.na_count, 1);
    assert_eq!(outcome.applicable, 6);
    assert_eq!(outcome.score, 50);
}

#[test]
fn free_text_counts_against_the_score_without_being_a_fail() {
    let entries = vec![
        checklist_entry("belt tension", text("pass")),
        checklist_entry("chain wear", text("needs grease")),
    ];

    let outcome = score_entries(&entries);

    assert_eq!(outcome.pass_count, 1);
    assert_eq!(outcome.fail_count, 0);
    assert_eq!(outcome.applicable, 2);
    assert_eq!(outcome.score, 50);
}

#[test]
fn rounding_is_to_the_nearest_whole_percent() {
    let entries = vec![
        checklist_entry("one", ChecklistValue::Flag(true)),
        checklist_entry("two", ChecklistValue::Flag(true)),
        checklist_entry("three", ChecklistValue::Flag(false)),
    ];

    // 2/3 = 66.66… -> 67.
    assert_eq!(score_entries(&entries).score, 67);
}

#[test]
fn an_empty_checklist_has_nothing_to_fail() {
    let outcome = score_entries(&[]);

    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.applicable, 0);
}
