//! Guidance generation.
//!
//! Maps each sub-score to a qualitative level, a human-readable message, an
//! SEO-impact estimate and a ranked recommendation list, plus an overall
//! verdict with prioritized improvement areas. Entirely lookup-table driven;
//! the bracket boundaries are load-bearing and covered by tests.

use crate::domain::{
    CategoryGuidance, ExtractedMeta, GuidanceBundle, GuidanceLevel, OverallGuidance, PriorityArea,
    Recommendation, RecommendationPriority, SchemaAnalysisResult, ScoreBreakdown, TagBag,
};
use crate::extractor::OG_REQUIRED_FIELDS;

use super::scorer::{META_MAX, SCHEMA_MAX, SNS_MAX};

// Sub-score thresholds below which a category becomes a priority area
const META_PRIORITY_BELOW: u32 = 20;
const SCHEMA_PRIORITY_BELOW: u32 = 15;
const SNS_PRIORITY_BELOW: u32 = 12;

fn rec(
    priority: RecommendationPriority,
    title: impl Into<String>,
    description: impl Into<String>,
    example: impl Into<String>,
) -> Recommendation {
    Recommendation {
        priority,
        title: title.into(),
        description: description.into(),
        example: example.into(),
    }
}

/// Generate the complete guidance bundle for one analyzed document.
pub fn generate_guidance(
    scores: ScoreBreakdown,
    meta: &ExtractedMeta,
    open_graph: &TagBag,
    schema_results: &[SchemaAnalysisResult],
) -> GuidanceBundle {
    GuidanceBundle {
        meta: meta_guidance(scores.meta, meta),
        sns: sns_guidance(scores.sns, open_graph),
        schema: schema_guidance(scores.schema, schema_results),
        overall: overall_guidance(&scores),
    }
}

// ====== Schema guidance ======

pub fn schema_guidance(score: u32, results: &[SchemaAnalysisResult]) -> CategoryGuidance {
    let details = schema_details(results);

    let (level, message, seo_impact, recommendations) = match score {
        0 => (
            GuidanceLevel::Missing,
            "No structured data was detected on this page".to_string(),
            "High - without structured data the page is not eligible for rich results".to_string(),
            vec![rec(
                RecommendationPriority::High,
                "Add JSON-LD structured data",
                "Describe the page's main entity so search engines can show rich results",
                r#"<script type="application/ld+json">{"@context":"https://schema.org","@type":"Article","headline":"..."}</script>"#,
            )],
        ),
        1..=5 => (
            GuidanceLevel::Low,
            "Structured data is present but low quality; required properties are missing"
                .to_string(),
            "High - incomplete required properties disqualify the page from rich results"
                .to_string(),
            required_fixes(results),
        ),
        6..=10 => (
            GuidanceLevel::Fair,
            "Structured data covers the basics but lacks detail".to_string(),
            "Medium - richer markup improves how results display".to_string(),
            {
                let mut recs = required_fixes(results);
                recs.extend(recommended_fixes(results));
                recs.push(rec(
                    RecommendationPriority::Medium,
                    "Use the most specific @type available",
                    "Prefer NewsArticle or BlogPosting over Article, LocalBusiness over Organization, when they fit",
                    r#""@type": "BlogPosting""#,
                ));
                recs
            },
        ),
        11..=15 => (
            GuidanceLevel::Good,
            "Structured data is in good shape".to_string(),
            "Low - remaining gains come from optional enrichment".to_string(),
            {
                let mut recs = recommended_fixes(results);
                recs.push(rec(
                    RecommendationPriority::Low,
                    "Add optional enrichment properties",
                    "Ratings, images and dates in the optimization tier round out the markup",
                    r#""aggregateRating": {"@type": "AggregateRating", "ratingValue": 4.6, "reviewCount": 120}"#,
                ));
                recs
            },
        ),
        _ => (
            GuidanceLevel::Optimal,
            "Structured data is optimal".to_string(),
            "Minimal - keep the markup consistent with the visible page".to_string(),
            vec![rec(
                RecommendationPriority::Low,
                "Maintain the markup",
                "Keep dates current and re-validate whenever page templates change",
                "https://search.google.com/test/rich-results",
            )],
        ),
    };

    CategoryGuidance {
        score,
        max_score: SCHEMA_MAX,
        level,
        message,
        details,
        recommendations,
        seo_impact,
    }
}

fn schema_details(results: &[SchemaAnalysisResult]) -> Vec<String> {
    if results.is_empty() {
        return vec!["No JSON-LD entities found".to_string()];
    }
    results
        .iter()
        .map(|r| {
            let label = r.type_label.as_deref().unwrap_or("(untyped)");
            if r.is_supported_type {
                format!(
                    "{label}: {}/{} ({})",
                    r.score,
                    r.max_score,
                    r.severity.as_str()
                )
            } else {
                format!("{label}: not auto-analyzable")
            }
        })
        .collect()
}

/// One high-priority fix per entity that is missing required properties.
fn required_fixes(results: &[SchemaAnalysisResult]) -> Vec<Recommendation> {
    results
        .iter()
        .filter(|r| r.is_supported_type && !r.missing_required.is_empty())
        .map(|r| {
            let label = r.type_label.as_deref().unwrap_or("entity");
            rec(
                RecommendationPriority::High,
                format!("Add required properties to {label}"),
                format!("Missing: {}", r.missing_required.join(", ")),
                format!(r#""{}": "...""#, r.missing_required[0]),
            )
        })
        .collect()
}

fn recommended_fixes(results: &[SchemaAnalysisResult]) -> Vec<Recommendation> {
    results
        .iter()
        .filter(|r| r.is_supported_type && !r.missing_recommended.is_empty())
        .map(|r| {
            let label = r.type_label.as_deref().unwrap_or("entity");
            rec(
                RecommendationPriority::Medium,
                format!("Add recommended properties to {label}"),
                format!("Missing: {}", r.missing_recommended.join(", ")),
                format!(r#""{}": "...""#, r.missing_recommended[0]),
            )
        })
        .collect()
}

// ====== Meta guidance ======

pub fn meta_guidance(score: u32, meta: &ExtractedMeta) -> CategoryGuidance {
    let (level, message, seo_impact) = match score {
        0..=10 => (
            GuidanceLevel::Low,
            "Basic meta tags have serious gaps".to_string(),
            "High - title and description drive every search impression".to_string(),
        ),
        11..=15 => (
            GuidanceLevel::Fair,
            "Basic meta tags are partially in place".to_string(),
            "Medium - fixing the remaining tags should lift click-through".to_string(),
        ),
        16..=20 => (
            GuidanceLevel::Good,
            "Basic meta tags are mostly in good shape".to_string(),
            "Low - only minor refinements remain".to_string(),
        ),
        _ => (
            GuidanceLevel::Optimal,
            "Basic meta tags are optimal".to_string(),
            "Minimal - keep titles and descriptions aligned with content".to_string(),
        ),
    };

    CategoryGuidance {
        score,
        max_score: META_MAX,
        level,
        message,
        details: meta_details(meta),
        recommendations: meta_recommendations(meta),
        seo_impact,
    }
}

fn meta_details(meta: &ExtractedMeta) -> Vec<String> {
    let field = |name: &str, value: &str| {
        if value.is_empty() {
            format!("{name}: missing")
        } else {
            format!("{name}: {value}")
        }
    };
    vec![
        if meta.title.is_empty() {
            "title: missing".to_string()
        } else {
            format!("title: \"{}\" ({} chars)", meta.title, meta.title_length)
        },
        if meta.description.is_empty() {
            "description: missing".to_string()
        } else {
            format!("description: {} chars", meta.description_length)
        },
        field("canonical", &meta.canonical),
        field("viewport", &meta.viewport),
        field("language", &meta.language),
    ]
}

/// Per-field recommendations built from the actual extracted values.
fn meta_recommendations(meta: &ExtractedMeta) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if meta.title.is_empty() {
        recs.push(rec(
            RecommendationPriority::High,
            "Add a title tag",
            "Every page needs a unique, descriptive title of 30-70 characters",
            "<title>Primary keyword - Brand name</title>",
        ));
    } else if meta.title_length < 30 {
        recs.push(rec(
            RecommendationPriority::Medium,
            "Expand the title",
            format!(
                "\"{}\" is only {} characters; aim for 30-70 with the main keyword first",
                meta.title, meta.title_length
            ),
            "<title>Primary keyword - supporting detail | Brand</title>",
        ));
    } else if meta.title_length > 70 {
        recs.push(rec(
            RecommendationPriority::Medium,
            "Shorten the title",
            format!(
                "{} characters will be truncated in results; keep it within 70",
                meta.title_length
            ),
            "<title>Primary keyword - Brand</title>",
        ));
    }

    if meta.description.is_empty() {
        recs.push(rec(
            RecommendationPriority::High,
            "Add a meta description",
            "Summarize the page in 70-200 characters with a call to action",
            r#"<meta name="description" content="...">"#,
        ));
    } else if meta.description_length < 70 {
        recs.push(rec(
            RecommendationPriority::Medium,
            "Expand the meta description",
            format!(
                "{} characters is too thin to earn the click; aim for 70-200",
                meta.description_length
            ),
            r#"<meta name="description" content="What the page offers, why it matters, what to do next.">"#,
        ));
    } else if meta.description_length > 200 {
        recs.push(rec(
            RecommendationPriority::Medium,
            "Tighten the meta description",
            format!(
                "{} characters will be cut off in results; keep it within 200",
                meta.description_length
            ),
            r#"<meta name="description" content="...">"#,
        ));
    }

    if meta.canonical.is_empty() {
        recs.push(rec(
            RecommendationPriority::Medium,
            "Add a canonical URL",
            "Prevents duplicate-content dilution when the page is reachable under several URLs",
            r#"<link rel="canonical" href="https://example.com/page">"#,
        ));
    } else if url::Url::parse(&meta.canonical).is_err() {
        recs.push(rec(
            RecommendationPriority::High,
            "Fix the canonical URL",
            format!(
                "\"{}\" is not an absolute URL; search engines will ignore it",
                meta.canonical
            ),
            r#"<link rel="canonical" href="https://example.com/page">"#,
        ));
    }

    if meta.viewport.is_empty() {
        recs.push(rec(
            RecommendationPriority::Medium,
            "Add a viewport meta tag",
            "Required for mobile-friendly rendering and mobile-first indexing",
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
        ));
    }

    if meta.language.is_empty() {
        recs.push(rec(
            RecommendationPriority::Low,
            "Declare the document language",
            "Helps search engines serve the page to the right audience",
            r#"<html lang="en">"#,
        ));
    }

    recs
}

// ====== SNS guidance ======

pub fn sns_guidance(score: u32, open_graph: &TagBag) -> CategoryGuidance {
    let details: Vec<String> = OG_REQUIRED_FIELDS
        .iter()
        .map(|field| {
            if open_graph.contains_key(*field) {
                format!("og:{field}: present")
            } else {
                format!("og:{field}: missing")
            }
        })
        .collect();

    let (level, message, seo_impact) = match score {
        0 => (
            GuidanceLevel::Missing,
            "No Open Graph tags were detected".to_string(),
            "High - shared links render as bare URLs without a preview".to_string(),
        ),
        1..=8 => (
            GuidanceLevel::Low,
            "Open Graph coverage is partial".to_string(),
            "Medium - incomplete previews reduce click-through from social feeds".to_string(),
        ),
        _ => (
            GuidanceLevel::Good,
            "Open Graph tags are complete or nearly complete".to_string(),
            "Low - shared links render with a full preview".to_string(),
        ),
    };

    let mut recommendations: Vec<Recommendation> = OG_REQUIRED_FIELDS
        .iter()
        .filter(|field| !open_graph.contains_key(**field))
        .map(|field| {
            rec(
                RecommendationPriority::High,
                format!("Add og:{field}"),
                format!("og:{field} is one of the five tags every share preview needs"),
                format!(r#"<meta property="og:{field}" content="...">"#),
            )
        })
        .collect();
    if recommendations.is_empty() {
        recommendations.push(rec(
            RecommendationPriority::Low,
            "Verify share previews",
            "Check how links render in the social platforms' card validators after publishing changes",
            "https://developers.facebook.com/tools/debug/",
        ));
    }

    CategoryGuidance {
        score,
        max_score: SNS_MAX,
        level,
        message,
        details,
        recommendations,
        seo_impact,
    }
}

// ====== Overall guidance ======

pub fn overall_guidance(scores: &ScoreBreakdown) -> OverallGuidance {
    let overall_level = match scores.total_score {
        0..=39 => GuidanceLevel::Low,
        40..=59 => GuidanceLevel::Fair,
        60..=79 => GuidanceLevel::Good,
        _ => GuidanceLevel::Optimal,
    };

    // fixed ranks break ties: meta first, then schema, then sns
    let mut priority = Vec::new();
    if scores.meta < META_PRIORITY_BELOW {
        priority.push(PriorityArea {
            priority: 1,
            area: "meta".to_string(),
            score: scores.meta,
        });
    }
    if scores.schema < SCHEMA_PRIORITY_BELOW {
        priority.push(PriorityArea {
            priority: 2,
            area: "schema".to_string(),
            score: scores.schema,
        });
    }
    if scores.sns < SNS_PRIORITY_BELOW {
        priority.push(PriorityArea {
            priority: 3,
            area: "sns".to_string(),
            score: scores.sns,
        });
    }
    priority.truncate(3);

    let tips = match scores.total_score {
        0..=39 => vec![
            "Start with the fundamentals: a descriptive title, a meta description and the five Open Graph tags".to_string(),
            "Add JSON-LD structured data for the page's main entity".to_string(),
            "Re-run the analysis after each change to confirm the score moves".to_string(),
        ],
        40..=59 => vec![
            "Close out the error-level issues before polishing warnings".to_string(),
            "Fill in the missing required schema properties; they gate rich results".to_string(),
            "Complete the Open Graph set so shares get a full preview".to_string(),
        ],
        60..=79 => vec![
            "Add the recommended-tier schema properties to stand out in results".to_string(),
            "Tune title and description lengths to their display brackets".to_string(),
            "Consider more specific schema types where they apply".to_string(),
        ],
        _ => vec![
            "Signals are strong; keep markup in sync as content changes".to_string(),
            "Re-validate structured data after template updates".to_string(),
            "Monitor how search and social render the page over time".to_string(),
        ],
    };

    OverallGuidance {
        total_score: scores.total_score,
        overall_level,
        priority,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    fn result_missing_required(label: &str, missing: &[&str]) -> SchemaAnalysisResult {
        SchemaAnalysisResult {
            is_supported_type: true,
            type_label: Some(label.to_string()),
            checklist: Vec::new(),
            score: 3,
            max_score: 15,
            percentage: Some(20),
            severity: Severity::Error,
            message: String::new(),
            missing_required: missing.iter().map(|s| s.to_string()).collect(),
            missing_recommended: Vec::new(),
        }
    }

    fn og_with(fields: &[&str]) -> TagBag {
        fields
            .iter()
            .map(|f| (f.to_string(), "value".to_string()))
            .collect()
    }

    fn scores(meta: u32, sns: u32, schema: u32) -> ScoreBreakdown {
        ScoreBreakdown {
            meta,
            sns,
            schema,
            total_score: super::super::scorer::total_score(meta, sns, schema),
        }
    }

    #[test]
    fn test_schema_guidance_zero_recommends_adding_markup() {
        let g = schema_guidance(0, &[]);
        assert_eq!(g.level, GuidanceLevel::Missing);
        assert_eq!(g.recommendations.len(), 1);
        assert_eq!(
            g.recommendations[0].priority,
            RecommendationPriority::High
        );
        assert_eq!(g.details, vec!["No JSON-LD entities found"]);
    }

    #[test]
    fn test_schema_guidance_low_bracket_names_the_type() {
        let results = vec![result_missing_required("Blog post", &["datePublished"])];
        let g = schema_guidance(3, &results);
        assert_eq!(g.level, GuidanceLevel::Low);
        assert!(g.recommendations[0].title.contains("Blog post"));
        assert!(g.recommendations[0].description.contains("datePublished"));
    }

    #[test]
    fn test_schema_guidance_bracket_boundaries() {
        assert_eq!(schema_guidance(1, &[]).level, GuidanceLevel::Low);
        assert_eq!(schema_guidance(5, &[]).level, GuidanceLevel::Low);
        assert_eq!(schema_guidance(6, &[]).level, GuidanceLevel::Fair);
        assert_eq!(schema_guidance(10, &[]).level, GuidanceLevel::Fair);
        assert_eq!(schema_guidance(11, &[]).level, GuidanceLevel::Good);
        assert_eq!(schema_guidance(15, &[]).level, GuidanceLevel::Good);
        assert_eq!(schema_guidance(16, &[]).level, GuidanceLevel::Optimal);
        assert_eq!(schema_guidance(20, &[]).level, GuidanceLevel::Optimal);
    }

    #[test]
    fn test_meta_guidance_bracket_boundaries() {
        assert_eq!(meta_guidance(10, &ExtractedMeta::default()).level, GuidanceLevel::Low);
        assert_eq!(meta_guidance(11, &ExtractedMeta::default()).level, GuidanceLevel::Fair);
        assert_eq!(meta_guidance(15, &ExtractedMeta::default()).level, GuidanceLevel::Fair);
        assert_eq!(meta_guidance(16, &ExtractedMeta::default()).level, GuidanceLevel::Good);
        assert_eq!(meta_guidance(20, &ExtractedMeta::default()).level, GuidanceLevel::Good);
        assert_eq!(meta_guidance(21, &ExtractedMeta::default()).level, GuidanceLevel::Optimal);
    }

    #[test]
    fn test_meta_guidance_references_actual_title() {
        let meta = ExtractedMeta {
            title: "Tiny".into(),
            title_length: 4,
            description: "d".repeat(100),
            description_length: 100,
            ..Default::default()
        };
        let g = meta_guidance(23, &meta);
        let expand = g
            .recommendations
            .iter()
            .find(|r| r.title == "Expand the title")
            .expect("expand-title recommendation");
        assert!(expand.description.contains("\"Tiny\""));
        assert!(expand.description.contains("4 characters"));
    }

    #[test]
    fn test_meta_guidance_missing_everything_leads_with_high_priority() {
        let g = meta_guidance(5, &ExtractedMeta::default());
        assert!(g
            .recommendations
            .iter()
            .any(|r| r.title == "Add a title tag" && r.priority == RecommendationPriority::High));
        assert!(g
            .recommendations
            .iter()
            .any(|r| r.title == "Add a meta description"));
        assert!(g.recommendations.iter().any(|r| r.title == "Add a viewport meta tag"));
    }

    #[test]
    fn test_sns_guidance_details_always_list_all_five() {
        for bag in [TagBag::new(), og_with(&["title", "image"])] {
            let g = sns_guidance(sns_score_for(&bag), &bag);
            assert_eq!(g.details.len(), 5);
        }
    }

    fn sns_score_for(bag: &TagBag) -> u32 {
        super::super::scorer::sns_score(bag)
    }

    #[test]
    fn test_sns_guidance_bracket_boundaries() {
        assert_eq!(sns_guidance(0, &TagBag::new()).level, GuidanceLevel::Missing);
        assert_eq!(sns_guidance(1, &TagBag::new()).level, GuidanceLevel::Low);
        assert_eq!(sns_guidance(8, &TagBag::new()).level, GuidanceLevel::Low);
        assert_eq!(sns_guidance(9, &TagBag::new()).level, GuidanceLevel::Good);
        assert_eq!(sns_guidance(15, &TagBag::new()).level, GuidanceLevel::Good);
    }

    #[test]
    fn test_sns_guidance_recommends_each_missing_field() {
        let bag = og_with(&["title", "description", "type"]);
        let g = sns_guidance(12, &bag);
        let titles: Vec<&str> = g.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Add og:image", "Add og:url"]);
    }

    #[test]
    fn test_sns_guidance_complete_set_gets_maintenance_rec() {
        let bag = og_with(&["title", "description", "image", "url", "type"]);
        let g = sns_guidance(15, &bag);
        assert_eq!(g.recommendations.len(), 1);
        assert_eq!(g.recommendations[0].priority, RecommendationPriority::Low);
    }

    #[test]
    fn test_overall_priority_areas_use_fixed_rank_order() {
        // all three below threshold; order must be meta, schema, sns even
        // though sns has the lowest score
        let g = overall_guidance(&scores(19, 2, 14));
        let areas: Vec<&str> = g.priority.iter().map(|p| p.area.as_str()).collect();
        assert_eq!(areas, vec!["meta", "schema", "sns"]);
        assert_eq!(g.priority[0].priority, 1);
        assert_eq!(g.priority[2].priority, 3);
    }

    #[test]
    fn test_overall_priority_thresholds_are_exclusive() {
        let g = overall_guidance(&scores(20, 12, 15));
        assert!(g.priority.is_empty());

        let g = overall_guidance(&scores(19, 12, 15));
        assert_eq!(g.priority.len(), 1);
        assert_eq!(g.priority[0].area, "meta");
    }

    #[test]
    fn test_overall_level_brackets() {
        assert_eq!(overall_guidance(&scores(5, 2, 1)).overall_level, GuidanceLevel::Low);
        assert_eq!(overall_guidance(&scores(15, 12, 0)).overall_level, GuidanceLevel::Fair); // 47
        assert_eq!(overall_guidance(&scores(20, 12, 12)).overall_level, GuidanceLevel::Good); // 73
        assert_eq!(
            overall_guidance(&scores(25, 15, 20)).overall_level,
            GuidanceLevel::Optimal
        );
    }

    #[test]
    fn test_overall_tips_track_total_brackets() {
        let low = overall_guidance(&scores(5, 2, 1));
        let optimal = overall_guidance(&scores(25, 15, 20));
        assert_eq!(low.tips.len(), 3);
        assert_ne!(low.tips, optimal.tips);
    }
}
