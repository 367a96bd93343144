use crate::config::{INHERITED_ANNOTATIONS_KEY, INHERITED_LABELS_KEY};
use crate::{
    inherit_annotations, inherit_labels, InheritanceConfig, InheritanceController,
    InheritancePolicy, InheritanceReport,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use meta_core::{MetadataSet, MetadataStore};
use rand::Rng;
use std::collections::BTreeMap;

fn set(entries: &[(&str, &str)]) -> MetadataSet {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn random_set(rng: &mut impl Rng, prefix: &str) -> MetadataSet {
    (0..rng.gen_range(0..8))
        .map(|_| {
            (
                format!("{prefix}{}", rng.gen_range(0..12)),
                format!("v{}", rng.gen_range(0..100)),
            )
        })
        .collect()
}

#[test]
fn null_sets_are_created_and_populated() {
    let mut meta = ObjectMeta::default();
    let policy = InheritancePolicy::Everything;

    inherit_labels(&mut meta, &set(&[("team", "db")]), &MetadataSet::new(), &policy);
    inherit_annotations(&mut meta, &MetadataSet::new(), &MetadataSet::new(), &policy);

    assert_eq!(meta.labels, Some(set(&[("team", "db")])));
    assert_eq!(meta.annotations, Some(MetadataSet::new()));
}

#[test]
fn fixed_values_ignore_policy() {
    let mut meta = ObjectMeta {
        labels: Some(set(&[("cnpg.io/cluster", "stale")])),
        ..Default::default()
    };
    let report = inherit_labels(
        &mut meta,
        &set(&[("team", "db")]),
        &set(&[("cnpg.io/cluster", "pg-main")]),
        &InheritancePolicy::Nothing,
    );

    assert_eq!(meta.labels(), &set(&[("cnpg.io/cluster", "pg-main")]));
    assert_eq!(
        report,
        InheritanceReport {
            fixed: 1,
            inherited: 0,
            rejected: 1,
        }
    );
}

#[test]
fn rejected_keys_keep_existing_values() {
    let mut rng = rand::thread_rng();
    let policy = InheritancePolicy::allow_list(
        ["k0", "k2", "k4", "k6", "k8", "k10"],
        ["k1", "k3", "k5", "k7", "k9", "k11"],
    );

    for _ in 0..100 {
        let before = random_set(&mut rng, "k");
        let candidates = random_set(&mut rng, "k");
        let fixed = random_set(&mut rng, "fixed-");

        let mut meta = ObjectMeta {
            labels: Some(before.clone()),
            ..Default::default()
        };
        inherit_labels(&mut meta, &candidates, &fixed, &policy);

        for (key, value) in &fixed {
            assert_eq!(meta.labels().get(key), Some(value));
        }
        for (key, value) in &candidates {
            let expected = if policy.is_label_inherited(key) {
                Some(value)
            } else {
                before.get(key)
            };
            assert_eq!(meta.labels().get(key), expected);
        }
    }
}

#[test]
fn labels_and_annotations_use_their_own_lists() {
    let policy = InheritancePolicy::allow_list(["shared"], ["note"]);
    let mut meta = ObjectMeta::default();
    let source = set(&[("shared", "1"), ("note", "2")]);

    inherit_labels(&mut meta, &source, &MetadataSet::new(), &policy);
    inherit_annotations(&mut meta, &source, &MetadataSet::new(), &policy);

    assert_eq!(meta.labels(), &set(&[("shared", "1")]));
    assert_eq!(meta.annotations(), &set(&[("note", "2")]));
}

#[test]
fn approved_candidate_overrides_fixed_value() {
    // Fixed values go in first, so an approved candidate with the same key
    // replaces them. Kept as observed; callers must not approve fixed keys.
    let mut meta = ObjectMeta::default();
    inherit_annotations(
        &mut meta,
        &set(&[("cnpg.io/operatorVersion", "from-parent")]),
        &set(&[("cnpg.io/operatorVersion", "1.22.1")]),
        &InheritancePolicy::Everything,
    );
    assert_eq!(
        meta.annotations().get("cnpg.io/operatorVersion").map(String::as_str),
        Some("from-parent")
    );
}

#[test]
fn patterns_stop_at_path_separator() {
    let policy = InheritanceConfig {
        inherited_annotations: vec!["example.com/*".into()],
        inherited_labels: vec!["app".into(), "team-?".into()],
    }
    .policy();

    assert!(policy.is_annotation_inherited("example.com/team"));
    assert!(!policy.is_annotation_inherited("example.com/a/b"));
    assert!(!policy.is_annotation_inherited("other.com/team"));
    assert!(!policy.is_label_inherited("example.com/team"));

    assert!(policy.is_label_inherited("app"));
    assert!(policy.is_label_inherited("team-a"));
    assert!(!policy.is_label_inherited("team-ab"));
    assert!(!policy.is_label_inherited("App"));
}

#[test]
fn malformed_patterns_never_match() {
    let config = InheritanceConfig {
        inherited_annotations: vec!["[".into(), "keep".into()],
        inherited_labels: Vec::new(),
    };
    let policy = config.policy();
    match &policy {
        InheritancePolicy::Patterns { annotations, labels } => {
            assert_eq!(annotations.len(), 1);
            assert!(labels.is_empty());
        }
        other => panic!("unexpected policy {other:?}"),
    }
    assert!(policy.is_annotation_inherited("keep"));
    assert!(!policy.is_annotation_inherited("["));
}

#[test]
fn config_map_lists_are_split_and_trimmed() {
    let data: BTreeMap<String, String> = [
        (INHERITED_LABELS_KEY.to_string(), "a, b/*,,".to_string()),
        ("UNRELATED".to_string(), "x".to_string()),
    ]
    .into_iter()
    .collect();

    let config = InheritanceConfig::from_map(&data);
    assert_eq!(config.inherited_labels, vec!["a", "b/*"]);
    assert!(config.inherited_annotations.is_empty());

    let with_annotations: BTreeMap<String, String> =
        [(INHERITED_ANNOTATIONS_KEY.to_string(), " one ".to_string())]
            .into_iter()
            .collect();
    assert_eq!(
        InheritanceConfig::from_map(&with_annotations).inherited_annotations,
        vec!["one"]
    );
}

#[test]
fn json_config_round_trips_field_names() -> anyhow::Result<()> {
    let config = InheritanceConfig::from_json(
        r#"{"inheritedAnnotations": ["example.com/*"], "inheritedLabels": ["app"]}"#,
    )?;
    assert_eq!(config.inherited_annotations, vec!["example.com/*"]);
    assert_eq!(config.inherited_labels, vec!["app"]);

    let partial = InheritanceConfig::from_json(r#"{"inheritedLabels": []}"#)?;
    assert_eq!(partial, InheritanceConfig::default());
    Ok(())
}

#[test]
fn json_config_rejects_garbage() {
    let err = InheritanceConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid inheritance configuration"));
}

#[test]
fn default_policy_inherits_nothing() {
    let policy = InheritancePolicy::default();
    assert!(!policy.is_label_inherited("anything"));
    assert!(!policy.is_annotation_inherited("anything"));
}

#[test]
fn double_star_matches_like_single_star() {
    let policy = InheritanceConfig {
        inherited_annotations: vec!["example.com/**".into(), "team**".into()],
        inherited_labels: Vec::new(),
    }
    .policy();

    match &policy {
        InheritancePolicy::Patterns { annotations, .. } => assert_eq!(annotations.len(), 2),
        other => panic!("unexpected policy {other:?}"),
    }
    assert!(policy.is_annotation_inherited("example.com/owner"));
    assert!(!policy.is_annotation_inherited("example.com/a/b"));
    assert!(policy.is_annotation_inherited("team-x"));
    assert!(policy.is_annotation_inherited("team"));
    assert!(!policy.is_annotation_inherited("team/x"));
}

#[test]
fn env_lists_are_read() {
    std::env::set_var(INHERITED_LABELS_KEY, "env-label-a, env.io/*");
    std::env::set_var(INHERITED_ANNOTATIONS_KEY, "env-annotation");

    let config = InheritanceConfig::from_env();

    std::env::remove_var(INHERITED_LABELS_KEY);
    std::env::remove_var(INHERITED_ANNOTATIONS_KEY);

    assert_eq!(config.inherited_labels, vec!["env-label-a", "env.io/*"]);
    assert_eq!(config.inherited_annotations, vec!["env-annotation"]);
}
