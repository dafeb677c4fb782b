//! metalens - offline scoring and advisory engine for on-page SEO signals.
//!
//! Evaluates a single parsed HTML document: basic meta tags, Open Graph,
//! Twitter Cards, and embedded JSON-LD structured data. Everything here is a
//! pure function of its inputs - no network, no I/O, no shared mutable state.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod service;
