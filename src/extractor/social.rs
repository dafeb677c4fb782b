//! Open Graph and Twitter Card extraction and validation.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::domain::{IssueRecord, TagBag};

/// The five Open Graph tags every page should carry. Also drives the SNS
/// sub-score and guidance; keep this the only copy of the set.
pub const OG_REQUIRED_FIELDS: [&str; 5] = ["title", "description", "image", "url", "type"];

/// Twitter tags needed for a card to render.
pub const TWITTER_REQUIRED_FIELDS: [&str; 4] = ["card", "title", "description", "image"];

/// Valid values for `twitter:card`.
pub const TWITTER_CARD_TYPES: [&str; 4] = ["summary", "summary_large_image", "app", "player"];

fn selector(s: &'static str) -> Selector {
    Selector::parse(s).expect("static selector must parse")
}

static OG_PROPERTY_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[property^="og:"]"#));
static OG_NAME_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name^="og:"]"#));
static TWITTER_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name^="twitter:"]"#));

fn collect_prefixed(document: &Html, sel: &Selector, attr: &str, prefix: &str, bag: &mut TagBag) {
    for element in document.select(sel) {
        let Some(name) = element.value().attr(attr) else {
            continue;
        };
        let Some(suffix) = name.strip_prefix(prefix) else {
            continue;
        };
        let content = element
            .value()
            .attr("content")
            .map(str::trim)
            .unwrap_or_default();
        if suffix.is_empty() || content.is_empty() {
            continue;
        }
        // first occurrence wins; fallback sources never overwrite
        bag.entry(suffix.to_string())
            .or_insert_with(|| content.to_string());
    }
}

/// Collect `og:*` tags into a suffix-keyed bag. `meta[property]` is the
/// canonical source; `meta[name]` is merged afterwards for pages that use
/// the non-standard attribute.
pub fn extract_open_graph(document: &Html) -> TagBag {
    let mut bag = TagBag::new();
    collect_prefixed(document, &OG_PROPERTY_SEL, "property", "og:", &mut bag);
    collect_prefixed(document, &OG_NAME_SEL, "name", "og:", &mut bag);
    bag
}

/// Collect `twitter:*` tags into a suffix-keyed bag.
pub fn extract_twitter_card(document: &Html) -> TagBag {
    let mut bag = TagBag::new();
    collect_prefixed(document, &TWITTER_SEL, "name", "twitter:", &mut bag);
    bag
}

pub fn validate_open_graph(tags: &TagBag) -> Vec<IssueRecord> {
    let mut issues = Vec::new();

    for field in OG_REQUIRED_FIELDS {
        if !tags.contains_key(field) {
            issues.push(IssueRecord::error(
                format!("og:{field}"),
                format!("Missing required Open Graph tag og:{field}"),
            ));
        }
    }

    for field in ["image", "url"] {
        if let Some(value) = tags.get(field) {
            if Url::parse(value).is_err() {
                issues.push(IssueRecord::error(
                    format!("og:{field}"),
                    format!("og:{field} is not a valid URL: {value}"),
                ));
            }
        }
    }

    issues
}

pub fn validate_twitter_card(tags: &TagBag) -> Vec<IssueRecord> {
    let mut issues = Vec::new();

    for field in TWITTER_REQUIRED_FIELDS {
        if !tags.contains_key(field) {
            issues.push(IssueRecord::warning(
                format!("twitter:{field}"),
                format!("Missing Twitter Card tag twitter:{field}"),
            ));
        }
    }

    if let Some(card) = tags.get("card") {
        if !TWITTER_CARD_TYPES.contains(&card.as_str()) {
            issues.push(IssueRecord::error(
                "twitter:card",
                format!(
                    "Unknown twitter:card type '{card}' (expected one of: {})",
                    TWITTER_CARD_TYPES.join(", ")
                ),
            ));
        }
    }

    if let Some(image) = tags.get("image") {
        if Url::parse(image).is_err() {
            issues.push(IssueRecord::error(
                "twitter:image",
                format!("twitter:image is not a valid URL: {image}"),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IssueSeverity;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    fn bag(pairs: &[(&str, &str)]) -> TagBag {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_open_graph_strips_prefix() {
        let document = doc(
            r#"<html><head>
                <meta property="og:title" content="Title">
                <meta property="og:image" content="https://example.com/i.png">
            </head></html>"#,
        );
        let tags = extract_open_graph(&document);
        assert_eq!(tags.get("title").map(String::as_str), Some("Title"));
        assert_eq!(
            tags.get("image").map(String::as_str),
            Some("https://example.com/i.png")
        );
        assert!(!tags.contains_key("og:title"));
    }

    #[test]
    fn test_extract_open_graph_name_fallback_does_not_overwrite() {
        let document = doc(
            r#"<html><head>
                <meta property="og:title" content="From property">
                <meta name="og:title" content="From name">
                <meta name="og:description" content="Only as name">
            </head></html>"#,
        );
        let tags = extract_open_graph(&document);
        assert_eq!(tags.get("title").map(String::as_str), Some("From property"));
        assert_eq!(
            tags.get("description").map(String::as_str),
            Some("Only as name")
        );
    }

    #[test]
    fn test_extract_skips_empty_content() {
        let document = doc(
            r#"<html><head>
                <meta property="og:title" content="   ">
                <meta property="og:type">
            </head></html>"#,
        );
        assert!(extract_open_graph(&document).is_empty());
    }

    #[test]
    fn test_extract_twitter_card() {
        let document = doc(
            r#"<html><head>
                <meta name="twitter:card" content="summary">
                <meta name="twitter:title" content="T">
            </head></html>"#,
        );
        let tags = extract_twitter_card(&document);
        assert_eq!(tags.get("card").map(String::as_str), Some("summary"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_validate_open_graph_all_required_missing() {
        let issues = validate_open_graph(&TagBag::new());
        assert_eq!(issues.len(), 5);
        assert!(issues.iter().all(|i| i.severity == IssueSeverity::Error));
    }

    #[test]
    fn test_validate_open_graph_bad_image_url() {
        let tags = bag(&[
            ("title", "T"),
            ("description", "D"),
            ("image", "not a url"),
            ("url", "https://example.com/"),
            ("type", "website"),
        ]);
        let issues = validate_open_graph(&tags);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "og:image");
        assert_eq!(issues[0].severity, IssueSeverity::Error);
    }

    #[test]
    fn test_validate_open_graph_complete_is_clean() {
        let tags = bag(&[
            ("title", "T"),
            ("description", "D"),
            ("image", "https://example.com/i.png"),
            ("url", "https://example.com/"),
            ("type", "article"),
        ]);
        assert!(validate_open_graph(&tags).is_empty());
    }

    #[test]
    fn test_validate_twitter_missing_tags_are_warnings() {
        let issues = validate_twitter_card(&TagBag::new());
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|i| i.severity == IssueSeverity::Warning));
    }

    #[test]
    fn test_validate_twitter_unknown_card_type_is_error() {
        let tags = bag(&[("card", "gallery")]);
        let issues = validate_twitter_card(&tags);
        assert!(issues
            .iter()
            .any(|i| i.field == "twitter:card" && i.severity == IssueSeverity::Error));
    }

    #[test]
    fn test_validate_twitter_valid_card_types_accepted() {
        for card in TWITTER_CARD_TYPES {
            let tags = bag(&[
                ("card", card),
                ("title", "T"),
                ("description", "D"),
                ("image", "https://example.com/i.png"),
            ]);
            assert!(
                validate_twitter_card(&tags).is_empty(),
                "card type {card} should validate"
            );
        }
    }
}
