//! Generic checklist scoring: pass percentage over the applicable items.

use serde::{Deserialize, Serialize};

use super::super::domain::ChecklistEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistOutcome {
    /// round(100 × passes / applicable). A checklist where every item is
    /// marked N/A scores 100: there was nothing left to fail.
    pub score: u8,
    pub pass_count: usize,
    pub fail_count: usize,
    pub na_count: usize,
    pub applicable: usize,
}

pub fn score_entries(entries: &[ChecklistEntry]) -> ChecklistOutcome {
    let mut pass_count = 0usize;
    let mut fail_count = 0usize;
    let mut na_count = 0usize;

    for entry in entries {
        if entry.value.is_not_applicable() {
            na_count += 1;
        } else if entry.value.is_pass() {
            pass_count += 1;
        } else if entry.value.is_fail() {
            fail_count += 1;
        }
    }

    let applicable = entries.len() - na_count;
    let score = if applicable == 0 {
        100
    } else {
        (100.0 * pass_count as f64 / applicable as f64).round() as u8
    };

    ChecklistOutcome {
        score,
        pass_count,
        fail_count,
        na_count,
        applicable,
    }
}
