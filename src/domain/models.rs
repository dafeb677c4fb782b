//! Domain entities shared across the engine.
//!
//! Everything the engine hands to the rendering layer is serializable and
//! immutable once produced. Nothing in here performs I/O.

use std::collections::BTreeMap;

use serde::Serialize;

/// Property-suffix -> value bag for `og:*` / `twitter:*` meta tags.
/// Keys are present only if the tag existed with non-empty content.
/// Ordered so serialized reports are reproducible byte for byte.
pub type TagBag = BTreeMap<String, String>;

/// A structured-data entity is an arbitrary JSON-LD property bag with an
/// `@type` designator, exactly as it appeared in the page.
pub type StructuredDataEntity = serde_json::Value;

// ====== Issues ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }
}

/// One finding from a tag validator. Never mutated after creation; consumed
/// for counting and `field`-keyed lookups only.
#[derive(Debug, Clone, Serialize)]
pub struct IssueRecord {
    pub severity: IssueSeverity,
    pub field: String,
    pub message: String,
}

impl IssueRecord {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

// ====== Extracted head tags ======

/// Basic `<head>` facts for one document. Absent tags are empty strings;
/// the lengths are derived once at extraction and never re-validated
/// downstream.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractedMeta {
    pub title: String,
    pub title_length: usize,
    pub description: String,
    pub description_length: usize,
    pub keywords: String,
    pub canonical: String,
    pub robots: String,
    pub viewport: String,
    pub charset: String,
    pub language: String,
}

// ====== Schema checklist ======

/// How essential a property is to its schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementLevel {
    Required,
    Recommended,
    Optimization,
}

impl RequirementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementLevel::Required => "required",
            RequirementLevel::Recommended => "recommended",
            RequirementLevel::Optimization => "optimization",
        }
    }

    /// Tier weight used by the checklist scorer.
    pub fn weight(&self) -> u32 {
        match self {
            RequirementLevel::Required => 3,
            RequirementLevel::Recommended => 2,
            RequirementLevel::Optimization => 1,
        }
    }
}

/// One line of an entity's checklist: a catalog property spec plus whether
/// the entity satisfied it.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItem {
    pub level: RequirementLevel,
    pub key: String,
    pub label: String,
    pub description: String,
    pub present: bool,
    pub score: u32,
}

/// Verdict summarizing how well one entity satisfies its tier requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Analysis outcome for a single structured-data entity.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaAnalysisResult {
    pub is_supported_type: bool,
    /// Display label of the matched profile, or the raw type name when the
    /// catalog had no profile for it.
    pub type_label: Option<String>,
    pub checklist: Vec<ChecklistItem>,
    pub score: u32,
    pub max_score: u32,
    pub percentage: Option<u32>,
    pub severity: Severity,
    pub message: String,
    /// Property keys (not labels) of unmet required specs.
    pub missing_required: Vec<String>,
    pub missing_recommended: Vec<String>,
}

// ====== Scores ======

/// The three sub-scores and the normalized total. `total_score` is always
/// recomputable from the sub-scores; nothing stores it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// 0..=25
    pub meta: u32,
    /// 0..=15
    pub sns: u32,
    /// 0..=20
    pub schema: u32,
    /// 0..=100
    pub total_score: u32,
}

// ====== Guidance ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidanceLevel {
    Missing,
    Low,
    Fair,
    Good,
    Optimal,
}

impl GuidanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuidanceLevel::Missing => "missing",
            GuidanceLevel::Low => "low",
            GuidanceLevel::Fair => "fair",
            GuidanceLevel::Good => "good",
            GuidanceLevel::Optimal => "optimal",
        }
    }
}

/// Recommendation priority, serialized with the display strings the
/// rendering layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationPriority {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

impl RecommendationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationPriority::High => "高",
            RecommendationPriority::Medium => "中",
            RecommendationPriority::Low => "低",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub example: String,
}

/// Guidance for one score category (meta, sns or schema).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGuidance {
    pub score: u32,
    pub max_score: u32,
    pub level: GuidanceLevel,
    pub message: String,
    pub details: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub seo_impact: String,
}

/// One improvement area the overall guidance flags, ordered by fixed rank.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityArea {
    pub priority: u32,
    pub area: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallGuidance {
    pub total_score: u32,
    pub overall_level: GuidanceLevel,
    pub priority: Vec<PriorityArea>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceBundle {
    pub meta: CategoryGuidance,
    pub sns: CategoryGuidance,
    pub schema: CategoryGuidance,
    pub overall: OverallGuidance,
}

// ====== Assembled report ======

/// Everything the engine produces for one document, in the shape the
/// rendering layer (and the AI-advisor context payload) consumes.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub meta: ExtractedMeta,
    pub meta_issues: Vec<IssueRecord>,
    pub open_graph: TagBag,
    pub open_graph_issues: Vec<IssueRecord>,
    pub twitter: TagBag,
    pub twitter_issues: Vec<IssueRecord>,
    pub schema_results: Vec<SchemaAnalysisResult>,
    pub scores: ScoreBreakdown,
    pub guidance: GuidanceBundle,
}
