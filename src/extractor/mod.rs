//! Pure extraction passes over an already-parsed document.
//!
//! Every function here is a read-only query against a `scraper::Html`;
//! parsing bytes into that document is the caller's concern.

pub mod meta;
pub mod social;
pub mod structured;

pub use meta::{extract_meta, validate_meta};
pub use social::{
    extract_open_graph, extract_twitter_card, validate_open_graph, validate_twitter_card,
    OG_REQUIRED_FIELDS, TWITTER_CARD_TYPES, TWITTER_REQUIRED_FIELDS,
};
pub use structured::{entity_type, extract_entities};
