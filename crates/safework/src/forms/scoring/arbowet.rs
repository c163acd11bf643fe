//! Arbowet compliance scoring (NL): weighted headline percentage plus
//! unweighted per-article progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::catalog::{arbowet_items, ArbowetArticle};
use super::super::domain::{ComplianceItem, ComplianceStatus};

/// Unweighted per-article progress, for display only. `total` covers every
/// catalog item of the article, including N/A and unanswered ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleScore {
    pub article: ArbowetArticle,
    pub compliant: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbowetOutcome {
    /// round(100 × (compliant + 0.5 × partial) / applicable); 0 when nothing
    /// is applicable. Partial answers earn exactly half credit.
    pub compliance_score: u8,
    pub applicable: usize,
    pub compliant: usize,
    pub partial: usize,
    pub non_compliant: usize,
    pub per_article: Vec<ArticleScore>,
}

pub fn score_compliance(items: &BTreeMap<String, ComplianceItem>) -> ArbowetOutcome {
    let mut compliant = 0usize;
    let mut partial = 0usize;
    let mut non_compliant = 0usize;

    for item in items.values() {
        match item.status {
            Some(ComplianceStatus::Compliant) => compliant += 1,
            Some(ComplianceStatus::Partial) => partial += 1,
            Some(ComplianceStatus::NonCompliant) => non_compliant += 1,
            Some(ComplianceStatus::NotApplicable) | None => {}
        }
    }

    let applicable = compliant + partial + non_compliant;
    let compliance_score = if applicable == 0 {
        0
    } else {
        let weighted = compliant as f64 + 0.5 * partial as f64;
        (100.0 * weighted / applicable as f64).round() as u8
    };

    let per_article = ArbowetArticle::ordered()
        .into_iter()
        .map(|article| {
            let mut article_compliant = 0usize;
            let mut total = 0usize;
            for template in arbowet_items() {
                if template.article != article {
                    continue;
                }
                total += 1;
                if items
                    .get(template.key)
                    .map(|item| item.status == Some(ComplianceStatus::Compliant))
                    .unwrap_or(false)
                {
                    article_compliant += 1;
                }
            }
            ArticleScore {
                article,
                compliant: article_compliant,
                total,
            }
        })
        .collect();

    ArbowetOutcome {
        compliance_score,
        applicable,
        compliant,
        partial,
        non_compliant,
        per_article,
    }
}
