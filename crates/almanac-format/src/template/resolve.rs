//! Template resolution: explicit overrides first, then the catalog.

use std::collections::HashMap;

use serde::Deserialize;

use almanac_core::catalog::LocaleCatalog;

use super::TEMPLATE_NAMESPACE;
use crate::classify::RangeCategory;

/// Caller-supplied templates keyed by category name, consulted before
/// the catalog. Overrides are taken verbatim, with no further
/// localization.
///
/// Deserializes transparently from a flat `category -> template` map so
/// hosts can carry overrides in their configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TemplateOverrides {
    entries: HashMap<String, String>,
}

impl TemplateOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: RangeCategory, template: impl Into<String>) {
        self.entries.insert(category.as_str().to_string(), template.into());
    }

    #[must_use]
    pub fn get(&self, category: RangeCategory) -> Option<&str> {
        self.entries.get(category.as_str()).map(String::as_str)
    }
}

/// Resolves the template for a category.
///
/// Precedence: override entry, then the catalog under
/// `"Calendar.<category>"`, then the category name itself as a literal
/// template. Never fails; the worst case is a visible but unlocalized
/// result.
#[must_use]
pub fn resolve_template(
    category: RangeCategory,
    overrides: Option<&TemplateOverrides>,
    catalog: &dyn LocaleCatalog,
) -> String {
    if let Some(template) = overrides.and_then(|o| o.get(category)) {
        return template.to_string();
    }

    let key = format!("{TEMPLATE_NAMESPACE}.{category}");
    catalog.translate(&key, category.as_str())
}
