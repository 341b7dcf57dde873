use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::engine::HierarchyFilterEngine;
use super::error::FilterError;
use super::level::HierarchyDef;

pub const AREA_HIERARCHY: &str = "area";
pub const CATEGORY_HIERARCHY: &str = "category";

/// Hierarchies used by the feedback dashboard, embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[[hierarchy]]
id = "area"
title = "Территория"
ancestor_rule = "keep_partial"
levels = [
    { id = "division", title = "Дивизион" },
    { id = "region", title = "Регион" },
    { id = "zone", title = "Зона" },
    { id = "branch", title = "Отделение" },
]

[[hierarchy]]
id = "category"
title = "Категории"
ancestor_rule = "full_only"
levels = [
    { id = "main_category", title = "Категория" },
    { id = "sub_category", title = "Подкатегория" },
]
"#;

static DEFAULT: Lazy<FilterConfig> = Lazy::new(|| {
    // The embedded document is covered by tests; an empty config is the fallback
    FilterConfig::from_toml_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("embedded hierarchy config is invalid: {}", e);
        FilterConfig::default()
    })
});

/// Set of named hierarchy definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default, rename = "hierarchy")]
    pub hierarchies: Vec<HierarchyDef>,
}

impl FilterConfig {
    /// Parse and validate a TOML document with `[[hierarchy]]` tables
    pub fn from_toml_str(contents: &str) -> Result<Self, FilterError> {
        let config: FilterConfig = toml::from_str(contents)?;
        for def in &config.hierarchies {
            def.validate()?;
        }
        Ok(config)
    }

    /// The embedded dashboard configuration
    pub fn default_config() -> &'static FilterConfig {
        &DEFAULT
    }

    pub fn get(&self, id: &str) -> Result<&HierarchyDef, FilterError> {
        self.hierarchies
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| FilterError::UnknownHierarchy(id.to_string()))
    }

    /// Fresh, uninitialized engine for the hierarchy `id`
    pub fn engine(&self, id: &str) -> Result<HierarchyFilterEngine, FilterError> {
        HierarchyFilterEngine::from_def(self.get(id)?)
    }
}
