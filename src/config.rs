//! # Scan Configuration
//!
//! Settings for a route scan, loaded from a YAML, TOML or JSON file and
//! optionally overridden from the environment.
//!
//! ```yaml
//! kinds: [GetMapping, PostMapping, RequestMapping]
//! class_mapping_annotation: org.springframework.web.bind.annotation.RequestMapping
//! path_variable_annotation: org.springframework.web.bind.annotation.PathVariable
//! wildcard_method: "*"
//! ```
//!
//! ## Environment Variables
//!
//! - `ROUTELENS_WILDCARD_METHOD` - verb shown for generic mappings that
//!   declare no `method` (default `*`)

use crate::mapping::{MappingAnnotationKind, PATH_VARIABLE, REQUEST_MAPPING};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Mapping annotation kinds to search for.
    pub kinds: Vec<MappingAnnotationKind>,
    /// Type-level annotation contributing the class path prefix.
    pub class_mapping_annotation: String,
    /// Parameter-level marker for path variables.
    pub path_variable_annotation: String,
    /// Verb used when a generic mapping resolves no `method`.
    pub wildcard_method: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            kinds: MappingAnnotationKind::ALL.to_vec(),
            class_mapping_annotation: REQUEST_MAPPING.to_string(),
            path_variable_annotation: PATH_VARIABLE.to_string(),
            wildcard_method: "*".to_string(),
        }
    }
}

impl ScanConfig {
    /// Load from a file; `.yaml`/`.yml` and `.toml` by extension, JSON otherwise.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let config: ScanConfig = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML config {}", path.display()))?,
            "toml" => toml::from_str(&content)
                .with_context(|| format!("invalid TOML config {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON config {}", path.display()))?,
        };
        Ok(config)
    }

    /// Apply `ROUTELENS_*` environment overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(verb) = env::var("ROUTELENS_WILDCARD_METHOD") {
            let verb = verb.trim();
            if !verb.is_empty() {
                self.wildcard_method = verb.to_string();
            }
        }
        self
    }
}
