//! Analysis pipeline: validators -> analyzer -> scorer -> guidance.

pub mod guidance;
pub mod schema_analyzer;
pub mod scorer;

pub use guidance::generate_guidance;
pub use schema_analyzer::analyze_entity;
pub use scorer::calculate_scores;

use scraper::Html;

use crate::catalog::SchemaRequirementCatalog;
use crate::domain::{AnalysisReport, ExtractedMeta, StructuredDataEntity, TagBag};
use crate::extractor;

/// Run the full pipeline over a parsed document, extracting everything the
/// engine needs itself.
pub fn audit_document(document: &Html, catalog: &SchemaRequirementCatalog) -> AnalysisReport {
    let entities = extractor::extract_entities(document);
    audit_parts(
        extractor::extract_meta(document),
        extractor::extract_open_graph(document),
        extractor::extract_twitter_card(document),
        &entities,
        catalog,
    )
}

/// Run the pipeline over already-extracted facts. For callers that have
/// their own extraction layer and only want scoring and guidance.
pub fn audit_parts(
    meta: ExtractedMeta,
    open_graph: TagBag,
    twitter: TagBag,
    entities: &[StructuredDataEntity],
    catalog: &SchemaRequirementCatalog,
) -> AnalysisReport {
    let meta_issues = extractor::validate_meta(&meta);
    let open_graph_issues = extractor::validate_open_graph(&open_graph);
    let twitter_issues = extractor::validate_twitter_card(&twitter);

    let schema_results: Vec<_> = entities
        .iter()
        .map(|entity| {
            let profile = extractor::entity_type(entity).and_then(|t| catalog.lookup(t));
            analyze_entity(entity, profile)
        })
        .collect();

    let scores = calculate_scores(&meta_issues, &open_graph, &schema_results);
    let guidance = generate_guidance(scores, &meta, &open_graph, &schema_results);

    AnalysisReport {
        meta,
        meta_issues,
        open_graph,
        open_graph_issues,
        twitter,
        twitter_issues,
        schema_results,
        scores,
        guidance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_document_minimal_page() {
        let catalog = SchemaRequirementCatalog::builtin();
        let document = Html::parse_document("<html><head></head><body></body></html>");
        let report = audit_document(&document, &catalog);

        assert_eq!(report.meta.title, "");
        assert_eq!(report.scores.schema, 0);
        assert!(report.schema_results.is_empty());
        // two errors (title, description) -> 15
        assert_eq!(report.scores.meta, 15);
        // no og tags -> 15 - 7.5 -> 8
        assert_eq!(report.scores.sns, 8);
    }

    #[test]
    fn test_audit_parts_matches_audit_document() {
        let catalog = SchemaRequirementCatalog::builtin();
        let html = r#"<html lang="en"><head>
            <title>A perfectly reasonable page title for tests</title>
            <meta name="description" content="A description long enough to pass the minimum length check for meta descriptions in this engine.">
            <meta property="og:title" content="T">
            <script type="application/ld+json">{"@type":"WebSite","name":"n","url":"https://example.com"}</script>
        </head><body></body></html>"#;
        let document = Html::parse_document(html);

        let via_document = audit_document(&document, &catalog);

        let entities = extractor::extract_entities(&document);
        let via_parts = audit_parts(
            extractor::extract_meta(&document),
            extractor::extract_open_graph(&document),
            extractor::extract_twitter_card(&document),
            &entities,
            &catalog,
        );

        assert_eq!(via_document.scores, via_parts.scores);
        assert_eq!(
            serde_json::to_string(&via_document).unwrap(),
            serde_json::to_string(&via_parts).unwrap()
        );
    }
}
