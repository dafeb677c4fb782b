//! Aggregate score calculation.
//!
//! Combines the validator issue lists and per-entity schema results into
//! three sub-scores and a normalized 0-100 total. Each sub-score is rescaled
//! to a percentage before averaging so the three categories contribute
//! equally regardless of their native maxima.

use crate::domain::{IssueRecord, IssueSeverity, SchemaAnalysisResult, ScoreBreakdown, TagBag};
use crate::extractor::OG_REQUIRED_FIELDS;

pub const META_MAX: u32 = 25;
pub const SNS_MAX: u32 = 15;
pub const SCHEMA_MAX: u32 = 20;

// Meta deductions per issue
const META_ERROR_PENALTY: u32 = 5;
const META_WARNING_PENALTY: u32 = 2;
// SNS deduction per absent required og: field
const SNS_MISSING_PENALTY: f64 = 1.5;

/// Meta sub-score: start at 25, deduct per issue, floor at 0.
pub fn meta_score(issues: &[IssueRecord]) -> u32 {
    let deduction: u32 = issues
        .iter()
        .map(|issue| match issue.severity {
            IssueSeverity::Error => META_ERROR_PENALTY,
            IssueSeverity::Warning => META_WARNING_PENALTY,
        })
        .sum();
    META_MAX.saturating_sub(deduction)
}

/// SNS sub-score: driven solely by which of the five required Open Graph
/// fields are present. Twitter issues do not affect it.
pub fn sns_score(open_graph: &TagBag) -> u32 {
    let missing = OG_REQUIRED_FIELDS
        .iter()
        .filter(|field| !open_graph.contains_key(**field))
        .count();
    let raw = SNS_MAX as f64 - SNS_MISSING_PENALTY * missing as f64;
    raw.max(0.0).round() as u32
}

/// Schema sub-score: summed entity scores rescaled to 0-20. Zero entities,
/// or only unsupported ones, score 0. Sums are order-independent.
pub fn schema_score(results: &[SchemaAnalysisResult]) -> u32 {
    let score: u32 = results.iter().map(|r| r.score).sum();
    let max_score: u32 = results.iter().map(|r| r.max_score).sum();
    if max_score == 0 {
        return 0;
    }
    (score as f64 / max_score as f64 * SCHEMA_MAX as f64).round() as u32
}

/// Unweighted average of the three sub-scores, each rescaled to 0-100 first.
pub fn total_score(meta: u32, sns: u32, schema: u32) -> u32 {
    let meta_pct = meta as f64 / META_MAX as f64 * 100.0;
    let sns_pct = sns as f64 / SNS_MAX as f64 * 100.0;
    let schema_pct = schema as f64 / SCHEMA_MAX as f64 * 100.0;
    ((meta_pct + sns_pct + schema_pct) / 3.0).round() as u32
}

pub fn calculate_scores(
    meta_issues: &[IssueRecord],
    open_graph: &TagBag,
    schema_results: &[SchemaAnalysisResult],
) -> ScoreBreakdown {
    let meta = meta_score(meta_issues);
    let sns = sns_score(open_graph);
    let schema = schema_score(schema_results);
    ScoreBreakdown {
        meta,
        sns,
        schema,
        total_score: total_score(meta, sns, schema),
    }
}
