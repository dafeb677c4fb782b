//! Error types for the scoring engine.
//!
//! The analysis path itself never fails: malformed inputs degrade into
//! well-formed results (see `service::schema_analyzer`). The only fallible
//! operation is building a catalog from user-supplied profile definitions.

use thiserror::Error;

/// Errors raised while constructing a `SchemaRequirementCatalog` from
/// external profile definitions. Surfaced once at startup; the analyzers
/// never see a half-validated profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A profile definition is missing one of its three tier lists
    #[error("profile '{type_name}' is missing its '{tier}' tier")]
    MissingTier {
        type_name: String,
        tier: &'static str,
    },

    /// A profile definition has an empty display label
    #[error("profile '{0}' has an empty label")]
    EmptyLabel(String),

    /// The same type name was defined twice
    #[error("duplicate profile for type '{0}'")]
    DuplicateType(String),

    /// A property spec inside a tier has an empty key
    #[error("profile '{type_name}' has a property with an empty key in tier '{tier}'")]
    EmptyPropertyKey {
        type_name: String,
        tier: &'static str,
    },
}

impl CatalogError {
    pub fn missing_tier(type_name: impl Into<String>, tier: &'static str) -> Self {
        Self::MissingTier {
            type_name: type_name.into(),
            tier,
        }
    }
}

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
