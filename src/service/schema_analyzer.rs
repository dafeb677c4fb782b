//! Per-entity schema checklist analysis.
//!
//! Walks an entity against its catalog profile tier by tier and produces a
//! checklist, a tier-weighted score and a severity verdict. Deterministic and
//! infallible: malformed inputs degrade to the unsupported outcome.

use serde_json::Value;

use crate::catalog::SchemaTypeProfile;
use crate::domain::{ChecklistItem, RequirementLevel, SchemaAnalysisResult, Severity};
use crate::extractor::entity_type;

const UNSUPPORTED_MESSAGE: &str = "This type is not supported for automatic analysis";
const COMPLETE_MESSAGE: &str = "All required and recommended properties are present";

/// Presence rule: missing and `null` and `""` are absent; everything else,
/// including `0` and `false`, is present.
fn property_present(entity: &serde_json::Map<String, Value>, key: &str) -> bool {
    match entity.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn unsupported(entity: &Value) -> SchemaAnalysisResult {
    SchemaAnalysisResult {
        is_supported_type: false,
        type_label: entity_type(entity).map(str::to_string),
        checklist: Vec::new(),
        score: 0,
        max_score: 0,
        percentage: None,
        severity: Severity::Info,
        message: UNSUPPORTED_MESSAGE.to_string(),
        missing_required: Vec::new(),
        missing_recommended: Vec::new(),
    }
}

/// Analyze one structured-data entity against its catalog profile.
/// `profile` is the result of the catalog lookup; `None` means the type is
/// not auto-analyzable.
pub fn analyze_entity(
    entity: &Value,
    profile: Option<&SchemaTypeProfile>,
) -> SchemaAnalysisResult {
    let Some(profile) = profile else {
        return unsupported(entity);
    };
    let Some(properties) = entity.as_object() else {
        tracing::warn!(
            type_label = %profile.label,
            "structured-data entity is not an object; skipping analysis"
        );
        return unsupported(entity);
    };

    let mut checklist = Vec::new();
    let mut score = 0u32;
    let mut max_score = 0u32;
    let mut missing_required = Vec::new();
    let mut missing_required_labels = Vec::new();
    let mut missing_recommended = Vec::new();
    let mut missing_recommended_labels = Vec::new();

    for (level, specs) in profile.tiers() {
        for spec in specs {
            let present = property_present(properties, &spec.key);
            let weight = level.weight();
            max_score += weight;
            if present {
                score += weight;
            } else {
                match level {
                    RequirementLevel::Required => {
                        missing_required.push(spec.key.clone());
                        missing_required_labels.push(spec.label.clone());
                    }
                    RequirementLevel::Recommended => {
                        missing_recommended.push(spec.key.clone());
                        missing_recommended_labels.push(spec.label.clone());
                    }
                    RequirementLevel::Optimization => {}
                }
            }
            checklist.push(ChecklistItem {
                level,
                key: spec.key.clone(),
                label: spec.label.clone(),
                description: spec.description.clone(),
                present,
                score: if present { weight } else { 0 },
            });
        }
    }

    // first match wins: required > recommended > success
    let (severity, message) = if !missing_required.is_empty() {
        (
            Severity::Error,
            format!(
                "Missing required properties: {}",
                missing_required_labels.join(", ")
            ),
        )
    } else if !missing_recommended.is_empty() {
        (
            Severity::Warning,
            format!(
                "Missing recommended properties: {}",
                missing_recommended_labels.join(", ")
            ),
        )
    } else {
        (Severity::Success, COMPLETE_MESSAGE.to_string())
    };

    let percentage = (max_score > 0)
        .then(|| (score as f64 / max_score as f64 * 100.0).round() as u32);

    SchemaAnalysisResult {
        is_supported_type: true,
        type_label: Some(profile.label.clone()),
        checklist,
        score,
        max_score,
        percentage,
        severity,
        message,
        missing_required,
        missing_recommended,
    }
}
