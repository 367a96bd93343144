use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;

/// Decides whether a label or annotation of a parent resource is copied to
/// the resources generated from it.
pub trait InheritanceController {
    fn is_label_inherited(&self, name: &str) -> bool;
    fn is_annotation_inherited(&self, name: &str) -> bool;
}

impl<T: InheritanceController + ?Sized> InheritanceController for &T {
    fn is_label_inherited(&self, name: &str) -> bool {
        (**self).is_label_inherited(name)
    }

    fn is_annotation_inherited(&self, name: &str) -> bool {
        (**self).is_annotation_inherited(name)
    }
}

// `*` stops at `/`, so `example.com/*` covers one namespace level only.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Configuration profiles for inheritance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InheritancePolicy {
    #[default]
    Nothing,
    Everything,
    AllowList {
        labels: BTreeSet<String>,
        annotations: BTreeSet<String>,
    },
    Patterns {
        labels: Vec<Pattern>,
        annotations: Vec<Pattern>,
    },
}

impl InheritancePolicy {
    pub fn allow_list<L, A>(labels: L, annotations: A) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        InheritancePolicy::AllowList {
            labels: labels.into_iter().map(Into::into).collect(),
            annotations: annotations.into_iter().map(Into::into).collect(),
        }
    }

    fn approves(&self, name: &str, labels: bool) -> bool {
        match self {
            InheritancePolicy::Nothing => false,
            InheritancePolicy::Everything => true,
            InheritancePolicy::AllowList {
                labels: label_keys,
                annotations: annotation_keys,
            } => {
                let keys = if labels { label_keys } else { annotation_keys };
                keys.contains(name)
            }
            InheritancePolicy::Patterns {
                labels: label_patterns,
                annotations: annotation_patterns,
            } => {
                let patterns = if labels {
                    label_patterns
                } else {
                    annotation_patterns
                };
                patterns
                    .iter()
                    .any(|pattern| pattern.matches_with(name, MATCH_OPTIONS))
            }
        }
    }
}

impl InheritanceController for InheritancePolicy {
    fn is_label_inherited(&self, name: &str) -> bool {
        self.approves(name, true)
    }

    fn is_annotation_inherited(&self, name: &str) -> bool {
        self.approves(name, false)
    }
}
