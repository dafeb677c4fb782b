//! Schema requirement catalog.
//!
//! A read-only mapping from schema.org type name to three tiers of property
//! specifications (required / recommended / optimization). The catalog is the
//! single source of which properties matter for which entity kind; nothing
//! else in the engine duplicates that knowledge.
//!
//! Built once at process start and shared by reference. Lookup misses are not
//! errors - they mean "not auto-analyzable" (see `service::schema_analyzer`).

mod profiles;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::RequirementLevel;
use crate::error::{CatalogError, Result};

/// One catalog line item: a schema.org property and how to present it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySpec {
    pub key: String,
    pub label: String,
    pub description: String,
}

/// Tier requirements for one schema.org type.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTypeProfile {
    pub label: String,
    pub required: Vec<PropertySpec>,
    pub recommended: Vec<PropertySpec>,
    pub optimization: Vec<PropertySpec>,
}

impl SchemaTypeProfile {
    /// Tiers in checklist order, paired with their requirement level.
    pub fn tiers(&self) -> [(RequirementLevel, &[PropertySpec]); 3] {
        [
            (RequirementLevel::Required, self.required.as_slice()),
            (RequirementLevel::Recommended, self.recommended.as_slice()),
            (RequirementLevel::Optimization, self.optimization.as_slice()),
        ]
    }

    /// Maximum attainable checklist score for this profile.
    pub fn max_score(&self) -> u32 {
        self.tiers()
            .iter()
            .map(|(level, specs)| level.weight() * specs.len() as u32)
            .sum()
    }
}

/// Externally supplied profile definition, validated before it enters the
/// catalog. Tier lists are optional in the wire format; a missing tier is a
/// construction error, never silently defaulted at analysis time.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDef {
    pub label: String,
    pub required: Option<Vec<PropertySpec>>,
    pub recommended: Option<Vec<PropertySpec>>,
    pub optimization: Option<Vec<PropertySpec>>,
}

impl ProfileDef {
    pub fn validate(self, type_name: &str) -> Result<SchemaTypeProfile> {
        if self.label.trim().is_empty() {
            return Err(CatalogError::EmptyLabel(type_name.to_string()));
        }

        let required = self
            .required
            .ok_or_else(|| CatalogError::missing_tier(type_name, "required"))?;
        let recommended = self
            .recommended
            .ok_or_else(|| CatalogError::missing_tier(type_name, "recommended"))?;
        let optimization = self
            .optimization
            .ok_or_else(|| CatalogError::missing_tier(type_name, "optimization"))?;

        for (tier, specs) in [
            ("required", &required),
            ("recommended", &recommended),
            ("optimization", &optimization),
        ] {
            if specs.iter().any(|s| s.key.trim().is_empty()) {
                return Err(CatalogError::EmptyPropertyKey {
                    type_name: type_name.to_string(),
                    tier,
                });
            }
        }

        Ok(SchemaTypeProfile {
            label: self.label,
            required,
            recommended,
            optimization,
        })
    }
}

/// Immutable type-name -> profile table.
#[derive(Debug, Clone)]
pub struct SchemaRequirementCatalog {
    profiles: HashMap<String, SchemaTypeProfile>,
}

impl SchemaRequirementCatalog {
    /// The built-in catalog covering the common schema.org content types.
    pub fn builtin() -> Self {
        Self {
            profiles: profiles::builtin(),
        }
    }

    /// Build a catalog from external definitions, validating each entry.
    /// Fails fast on the first malformed definition.
    pub fn from_defs(defs: impl IntoIterator<Item = (String, ProfileDef)>) -> Result<Self> {
        let mut profiles = HashMap::new();
        for (type_name, def) in defs {
            let profile = def.validate(&type_name)?;
            if profiles.insert(type_name.clone(), profile).is_some() {
                return Err(CatalogError::DuplicateType(type_name));
            }
        }
        Ok(Self { profiles })
    }

    /// Extend this catalog with additional validated definitions.
    /// Redefining an existing type is rejected.
    pub fn extend(mut self, defs: impl IntoIterator<Item = (String, ProfileDef)>) -> Result<Self> {
        for (type_name, def) in defs {
            if self.profiles.contains_key(&type_name) {
                return Err(CatalogError::DuplicateType(type_name));
            }
            let profile = def.validate(&type_name)?;
            self.profiles.insert(type_name, profile);
        }
        Ok(self)
    }

    /// Exact-name lookup. `None` means the type is not auto-analyzable.
    pub fn lookup(&self, type_name: &str) -> Option<&SchemaTypeProfile> {
        self.profiles.get(type_name)
    }

    pub fn supported_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(key: &str) -> PropertySpec {
        PropertySpec {
            key: key.to_string(),
            label: key.to_string(),
            description: String::new(),
        }
    }

    fn full_def() -> ProfileDef {
        ProfileDef {
            label: "Test".to_string(),
            required: Some(vec![spec("a")]),
            recommended: Some(vec![spec("b")]),
            optimization: Some(vec![spec("c")]),
        }
    }

    #[test]
    fn test_builtin_lookup_known_type() {
        let catalog = SchemaRequirementCatalog::builtin();
        let profile = catalog.lookup("Article").expect("Article profile");
        assert!(!profile.required.is_empty());
        assert!(profile.max_score() > 0);
    }

    #[test]
    fn test_builtin_lookup_unknown_type_is_none() {
        let catalog = SchemaRequirementCatalog::builtin();
        assert!(catalog.lookup("Spaceship").is_none());
        // lookup is exact-string; no case folding
        assert!(catalog.lookup("article").is_none());
    }

    #[test]
    fn test_max_score_is_weighted_tier_sum() {
        let profile = ProfileDef {
            label: "T".into(),
            required: Some(vec![spec("a"), spec("b")]),
            recommended: Some(vec![spec("c")]),
            optimization: Some(vec![spec("d"), spec("e"), spec("f")]),
        }
        .validate("T")
        .unwrap();
        // 2*3 + 1*2 + 3*1
        assert_eq!(profile.max_score(), 11);
    }

    #[test]
    fn test_missing_tier_is_construction_error() {
        let def = ProfileDef {
            required: None,
            ..full_def()
        };
        let err = def.validate("Broken").unwrap_err();
        assert_eq!(err, CatalogError::missing_tier("Broken", "required"));
    }

    #[test]
    fn test_empty_label_rejected() {
        let def = ProfileDef {
            label: "  ".into(),
            ..full_def()
        };
        assert_eq!(
            def.validate("X").unwrap_err(),
            CatalogError::EmptyLabel("X".into())
        );
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let defs = vec![
            ("Thing".to_string(), full_def()),
            ("Thing".to_string(), full_def()),
        ];
        assert_eq!(
            SchemaRequirementCatalog::from_defs(defs).unwrap_err(),
            CatalogError::DuplicateType("Thing".into())
        );
    }

    #[test]
    fn test_extend_rejects_builtin_override() {
        let catalog = SchemaRequirementCatalog::builtin();
        let result = catalog.extend(vec![("Article".to_string(), full_def())]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateType("Article".into())
        );
    }

    #[test]
    fn test_profile_def_deserializes_from_json() {
        let def: ProfileDef = serde_json::from_str(
            r#"{
                "label": "Podcast",
                "required": [{"key": "name", "label": "Name", "description": "Series name"}],
                "recommended": [],
                "optimization": []
            }"#,
        )
        .unwrap();
        let profile = def.validate("PodcastSeries").unwrap();
        assert_eq!(profile.max_score(), 3);
    }
}
