//! Built-in schema type profiles.
//!
//! Encodes which schema.org properties search engines expect for each entity
//! kind. Tier placement follows Google's structured-data documentation:
//! `required` gates rich-result eligibility, `recommended` improves how the
//! result displays, `optimization` is extra polish.

use std::collections::HashMap;

use super::{PropertySpec, SchemaTypeProfile};

fn spec(key: &str, label: &str, description: &str) -> PropertySpec {
    PropertySpec {
        key: key.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn profile(
    label: &str,
    required: Vec<PropertySpec>,
    recommended: Vec<PropertySpec>,
    optimization: Vec<PropertySpec>,
) -> SchemaTypeProfile {
    SchemaTypeProfile {
        label: label.to_string(),
        required,
        recommended,
        optimization,
    }
}

pub(super) fn builtin() -> HashMap<String, SchemaTypeProfile> {
    let mut map = HashMap::new();

    map.insert(
        "Article".to_string(),
        profile(
            "Article",
            vec![
                spec("headline", "Headline", "Title of the article"),
                spec("datePublished", "Publication date", "ISO 8601 first publication date"),
                spec("author", "Author", "Person or Organization who wrote the article"),
            ],
            vec![
                spec("image", "Image", "Representative image, ideally 1200px wide or more"),
                spec("description", "Description", "Short summary of the article"),
                spec("articleBody", "Article body", "Full text content of the article"),
            ],
            vec![
                spec("dateModified", "Modification date", "Date of the most recent edit"),
                spec("publisher", "Publisher", "Organization publishing the article"),
                spec("mainEntityOfPage", "Main entity of page", "Canonical URL this article describes"),
            ],
        ),
    );

    map.insert(
        "BlogPosting".to_string(),
        profile(
            "Blog post",
            vec![
                spec("headline", "Headline", "Title of the post"),
                spec("datePublished", "Publication date", "ISO 8601 first publication date"),
            ],
            vec![
                spec("author", "Author", "Person who wrote the post"),
                spec("image", "Image", "Representative image for the post"),
                spec("description", "Description", "Short summary of the post"),
            ],
            vec![
                spec("dateModified", "Modification date", "Date of the most recent edit"),
                spec("publisher", "Publisher", "Organization publishing the blog"),
                spec("articleBody", "Post body", "Full text content of the post"),
            ],
        ),
    );

    map.insert(
        "NewsArticle".to_string(),
        profile(
            "News article",
            vec![
                spec("headline", "Headline", "Title of the news article"),
                spec("datePublished", "Publication date", "ISO 8601 first publication date"),
                spec("author", "Author", "Reporter or news organization"),
                spec("image", "Image", "Representative image, 1200px or wider for Top Stories"),
            ],
            vec![
                spec("dateModified", "Modification date", "Date of the most recent edit"),
                spec("publisher", "Publisher", "News organization with name and logo"),
                spec("description", "Description", "Short summary of the article"),
            ],
            vec![
                spec("articleSection", "Article section", "News section such as Politics or Sports"),
                spec("isAccessibleForFree", "Free access flag", "Whether the article is paywalled"),
            ],
        ),
    );

    map.insert(
        "JobPosting".to_string(),
        profile(
            "Job posting",
            vec![
                spec("title", "Job title", "Title of the position, not the page"),
                spec("description", "Description", "Full HTML description of the role"),
                spec("datePosted", "Posting date", "ISO 8601 date the job was posted"),
                spec("hiringOrganization", "Hiring organization", "Organization offering the job"),
                spec("jobLocation", "Job location", "Place where the work is performed"),
            ],
            vec![
                spec("employmentType", "Employment type", "FULL_TIME, PART_TIME, CONTRACTOR, ..."),
                spec("validThrough", "Valid through", "Expiration date of the posting"),
                spec("baseSalary", "Base salary", "MonetaryAmount with currency and unit"),
            ],
            vec![
                spec("identifier", "Identifier", "Hiring organization's internal requisition id"),
                spec("applicantLocationRequirements", "Applicant location", "Countries remote applicants may work from"),
                spec("jobLocationType", "Location type", "TELECOMMUTE for fully remote roles"),
            ],
        ),
    );

    map.insert(
        "Organization".to_string(),
        profile(
            "Organization",
            vec![
                spec("name", "Name", "Legal or commonly known organization name"),
                spec("url", "URL", "Official website"),
            ],
            vec![
                spec("logo", "Logo", "Logo image, at least 112x112px"),
                spec("contactPoint", "Contact point", "Customer service contact information"),
                spec("sameAs", "Profiles", "Social and reference profile URLs"),
            ],
            vec![
                spec("address", "Address", "PostalAddress of the headquarters"),
                spec("founder", "Founder", "Founding person or people"),
                spec("foundingDate", "Founding date", "Date the organization was founded"),
            ],
        ),
    );

    map.insert(
        "LocalBusiness".to_string(),
        profile(
            "Local business",
            vec![
                spec("name", "Name", "Business name as shown on signage"),
                spec("address", "Address", "PostalAddress with street, locality and region"),
                spec("telephone", "Telephone", "Primary contact number"),
            ],
            vec![
                spec("openingHoursSpecification", "Opening hours", "Structured opening hours"),
                spec("geo", "Coordinates", "GeoCoordinates with latitude and longitude"),
                spec("url", "URL", "Business website"),
                spec("priceRange", "Price range", "Relative price band such as $$"),
            ],
            vec![
                spec("aggregateRating", "Aggregate rating", "Average review rating"),
                spec("review", "Reviews", "Individual customer reviews"),
                spec("image", "Image", "Photo of the business"),
            ],
        ),
    );

    map.insert(
        "Product".to_string(),
        profile(
            "Product",
            vec![
                spec("name", "Name", "Product name"),
                spec("image", "Image", "Product photo, multiple aspect ratios preferred"),
                spec("description", "Description", "Product description"),
            ],
            vec![
                spec("offers", "Offers", "Offer with price, currency and availability"),
                spec("brand", "Brand", "Brand or manufacturer"),
                spec("sku", "SKU", "Merchant-specific identifier"),
            ],
            vec![
                spec("aggregateRating", "Aggregate rating", "Average review rating"),
                spec("review", "Reviews", "Individual product reviews"),
                spec("gtin", "GTIN", "Global trade item number"),
            ],
        ),
    );

    map.insert(
        "WebPage".to_string(),
        profile(
            "Web page",
            vec![
                spec("name", "Name", "Page title"),
                spec("url", "URL", "Canonical URL of the page"),
            ],
            vec![spec("description", "Description", "Short summary of the page")],
            vec![
                spec("breadcrumb", "Breadcrumb", "BreadcrumbList locating the page in the site"),
                spec("dateModified", "Modification date", "Date of the most recent edit"),
                spec("primaryImageOfPage", "Primary image", "Main image of the page"),
            ],
        ),
    );

    map.insert(
        "WebSite".to_string(),
        profile(
            "Web site",
            vec![
                spec("name", "Name", "Site name shown in search results"),
                spec("url", "URL", "Site root URL"),
            ],
            vec![
                spec("description", "Description", "What the site is about"),
                spec("potentialAction", "Search action", "SearchAction enabling the sitelinks search box"),
            ],
            vec![
                spec("publisher", "Publisher", "Organization operating the site"),
                spec("inLanguage", "Language", "Primary content language"),
            ],
        ),
    );

    map.insert(
        "BreadcrumbList".to_string(),
        profile(
            "Breadcrumb list",
            vec![spec(
                "itemListElement",
                "Items",
                "ListItem entries with position, name and item URL",
            )],
            vec![],
            vec![spec("numberOfItems", "Item count", "Number of breadcrumb levels")],
        ),
    );

    map.insert(
        "Person".to_string(),
        profile(
            "Person",
            vec![spec("name", "Name", "Full name")],
            vec![
                spec("jobTitle", "Job title", "Role or position"),
                spec("url", "URL", "Personal or profile page"),
                spec("image", "Image", "Portrait photo"),
            ],
            vec![
                spec("sameAs", "Profiles", "Social and reference profile URLs"),
                spec("worksFor", "Works for", "Employing organization"),
                spec("alumniOf", "Alumni of", "Educational background"),
            ],
        ),
    );

    map.insert(
        "Event".to_string(),
        profile(
            "Event",
            vec![
                spec("name", "Name", "Event title"),
                spec("startDate", "Start date", "ISO 8601 start date and time"),
                spec("location", "Location", "Place or VirtualLocation"),
            ],
            vec![
                spec("endDate", "End date", "ISO 8601 end date and time"),
                spec("description", "Description", "What the event is about"),
                spec("image", "Image", "Event image or poster"),
                spec("offers", "Offers", "Ticket offer with price and availability"),
            ],
            vec![
                spec("performer", "Performer", "Headline act or speaker"),
                spec("organizer", "Organizer", "Person or organization hosting"),
                spec("eventStatus", "Event status", "Scheduled, postponed, cancelled, ..."),
            ],
        ),
    );

    map.insert(
        "SoftwareApplication".to_string(),
        profile(
            "Software application",
            vec![
                spec("name", "Name", "Application name"),
                spec("applicationCategory", "Category", "GameApplication, BusinessApplication, ..."),
                spec("operatingSystem", "Operating system", "Supported platforms"),
            ],
            vec![
                spec("offers", "Offers", "Price, or 0 for free applications"),
                spec("aggregateRating", "Aggregate rating", "Average user rating"),
            ],
            vec![
                spec("screenshot", "Screenshot", "Application screenshot"),
                spec("softwareVersion", "Version", "Current release version"),
                spec("downloadUrl", "Download URL", "Direct download location"),
            ],
        ),
    );

    map.insert(
        "FAQPage".to_string(),
        profile(
            "FAQ page",
            vec![spec(
                "mainEntity",
                "Questions",
                "Question entities each with an acceptedAnswer",
            )],
            vec![
                spec("name", "Name", "Title of the FAQ page"),
                spec("description", "Description", "What the FAQ covers"),
            ],
            vec![],
        ),
    );

    map.insert(
        "Recipe".to_string(),
        profile(
            "Recipe",
            vec![
                spec("name", "Name", "Dish name"),
                spec("image", "Image", "Photo of the finished dish"),
                spec("recipeIngredient", "Ingredients", "Ingredient list"),
                spec("recipeInstructions", "Instructions", "HowToStep preparation steps"),
            ],
            vec![
                spec("author", "Author", "Recipe creator"),
                spec("prepTime", "Preparation time", "ISO 8601 duration"),
                spec("cookTime", "Cooking time", "ISO 8601 duration"),
                spec("nutrition", "Nutrition", "NutritionInformation with calories"),
            ],
            vec![
                spec("aggregateRating", "Aggregate rating", "Average review rating"),
                spec("video", "Video", "Preparation video"),
                spec("recipeYield", "Yield", "Number of servings produced"),
            ],
        ),
    );

    map
}
