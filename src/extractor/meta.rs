//! Basic `<head>` tag extraction and validation.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::domain::{ExtractedMeta, IssueRecord};

// Length brackets follow common SERP display limits
const TITLE_MIN_CHARS: usize = 30;
const TITLE_MAX_CHARS: usize = 70;
const DESCRIPTION_MIN_CHARS: usize = 70;
const DESCRIPTION_MAX_CHARS: usize = 200;

fn selector(s: &'static str) -> Selector {
    Selector::parse(s).expect("static selector must parse")
}

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static KEYWORDS_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="keywords"]"#));
static CANONICAL_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"link[rel="canonical"]"#));
static ROBOTS_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="robots"]"#));
static VIEWPORT_SEL: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="viewport"]"#));
static CHARSET_SEL: LazyLock<Selector> = LazyLock::new(|| selector("meta[charset]"));
static CONTENT_TYPE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[http-equiv="Content-Type"]"#));
static HTML_SEL: LazyLock<Selector> = LazyLock::new(|| selector("html"));

fn first_attr(document: &Html, sel: &Selector, attr: &str) -> String {
    document
        .select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn charset_hint(document: &Html) -> String {
    let declared = first_attr(document, &CHARSET_SEL, "charset");
    if !declared.is_empty() {
        return declared;
    }
    // Legacy form: <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
    let content = first_attr(document, &CONTENT_TYPE_SEL, "content");
    content
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("charset="))
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Extract the basic head facts. Absent tags become empty strings; this
/// never fails.
pub fn extract_meta(document: &Html) -> ExtractedMeta {
    let title = document
        .select(&TITLE_SEL)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    let description = first_attr(document, &DESCRIPTION_SEL, "content");

    ExtractedMeta {
        title_length: title.chars().count(),
        description_length: description.chars().count(),
        title,
        description,
        keywords: first_attr(document, &KEYWORDS_SEL, "content"),
        canonical: first_attr(document, &CANONICAL_SEL, "href"),
        robots: first_attr(document, &ROBOTS_SEL, "content"),
        viewport: first_attr(document, &VIEWPORT_SEL, "content"),
        charset: charset_hint(document),
        language: first_attr(document, &HTML_SEL, "lang"),
    }
}

/// Validate an extracted record. Pure function; issues are the only output.
pub fn validate_meta(meta: &ExtractedMeta) -> Vec<IssueRecord> {
    let mut issues = Vec::new();

    if meta.title.is_empty() {
        issues.push(IssueRecord::error("title", "Page has no title tag"));
    } else if meta.title_length < TITLE_MIN_CHARS {
        issues.push(IssueRecord::warning(
            "title",
            format!(
                "Title is only {} characters (recommend {}-{})",
                meta.title_length, TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        ));
    } else if meta.title_length > TITLE_MAX_CHARS {
        issues.push(IssueRecord::warning(
            "title",
            format!(
                "Title is {} characters (recommend {}-{})",
                meta.title_length, TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        ));
    }

    if meta.description.is_empty() {
        issues.push(IssueRecord::error(
            "description",
            "Page has no meta description",
        ));
    } else if meta.description_length < DESCRIPTION_MIN_CHARS {
        issues.push(IssueRecord::warning(
            "description",
            format!(
                "Meta description is only {} characters (recommend {}-{})",
                meta.description_length, DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
            ),
        ));
    } else if meta.description_length > DESCRIPTION_MAX_CHARS {
        issues.push(IssueRecord::warning(
            "description",
            format!(
                "Meta description is {} characters (recommend {}-{})",
                meta.description_length, DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
            ),
        ));
    }

    if !meta.canonical.is_empty() && Url::parse(&meta.canonical).is_err() {
        issues.push(IssueRecord::error(
            "canonical",
            format!("Canonical URL is not absolute: {}", meta.canonical),
        ));
    }

    issues
}
