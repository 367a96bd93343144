use crate::controller::InheritancePolicy;
use crate::engine::MetadataKind;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// Comma separated annotation patterns inherited by generated resources.
pub const INHERITED_ANNOTATIONS_KEY: &str = "INHERITED_ANNOTATIONS";

/// Comma separated label patterns inherited by generated resources.
pub const INHERITED_LABELS_KEY: &str = "INHERITED_LABELS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid inheritance configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Operator settings listing which parent metadata is inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InheritanceConfig {
    pub inherited_annotations: Vec<String>,
    pub inherited_labels: Vec<String>,
}

impl InheritanceConfig {
    /// Reads the settings from ConfigMap or Secret style data.
    pub fn from_map(data: &BTreeMap<String, String>) -> Self {
        Self::from_lookup(|key| data.get(key).cloned())
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let list = |key: &str| lookup(key).map(|raw| split_list(&raw)).unwrap_or_default();
        Self {
            inherited_annotations: list(INHERITED_ANNOTATIONS_KEY),
            inherited_labels: list(INHERITED_LABELS_KEY),
        }
    }

    pub fn policy(&self) -> InheritancePolicy {
        InheritancePolicy::Patterns {
            labels: compile(&self.inherited_labels, MetadataKind::Labels),
            annotations: compile(&self.inherited_annotations, MetadataKind::Annotations),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

// A run of `*` matches like a single `*` and never crosses `/`.
fn collapse_wildcards(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

// A malformed pattern can never match anything, so it is left out.
fn compile(patterns: &[String], kind: MetadataKind) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|raw| match Pattern::new(&collapse_wildcards(raw)) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!(kind = kind.as_str(), pattern = %raw, error = %err, "skipping inheritance pattern");
                None
            }
        })
        .collect()
}
