use crate::keys::{CLUSTER_LABEL_NAME, OPERATOR_VERSION_ANNOTATION_NAME};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Labels or annotations of a resource.
pub type MetadataSet = BTreeMap<String, String>;

static EMPTY: MetadataSet = BTreeMap::new();

/// Access to the label and annotation sets owned by a resource.
///
/// Readers see an absent set as empty. Writers create the set on first use,
/// so once mutated a resource never carries a null set again.
pub trait MetadataStore {
    fn labels(&self) -> &MetadataSet;
    fn annotations(&self) -> &MetadataSet;
    fn labels_mut(&mut self) -> &mut MetadataSet;
    fn annotations_mut(&mut self) -> &mut MetadataSet;
}

impl MetadataStore for ObjectMeta {
    fn labels(&self) -> &MetadataSet {
        self.labels.as_ref().unwrap_or(&EMPTY)
    }

    fn annotations(&self) -> &MetadataSet {
        self.annotations.as_ref().unwrap_or(&EMPTY)
    }

    fn labels_mut(&mut self) -> &mut MetadataSet {
        self.labels.get_or_insert_with(MetadataSet::new)
    }

    fn annotations_mut(&mut self) -> &mut MetadataSet {
        self.annotations.get_or_insert_with(MetadataSet::new)
    }
}

/// Copies every entry of `giver` into `receiver`, overwriting existing values.
pub fn merge_map(receiver: &mut MetadataSet, giver: &MetadataSet) {
    for (key, value) in giver {
        receiver.insert(key.clone(), value.clone());
    }
}

pub fn apply_fixed_labels<M: MetadataStore + ?Sized>(object: &mut M, fixed: &MetadataSet) {
    merge_map(object.labels_mut(), fixed);
}

pub fn apply_fixed_annotations<M: MetadataStore + ?Sized>(object: &mut M, fixed: &MetadataSet) {
    merge_map(object.annotations_mut(), fixed);
}

/// Labels the object with the name of the cluster owning it.
pub fn label_cluster_name<M: MetadataStore + ?Sized>(object: &mut M, name: &str) {
    object
        .labels_mut()
        .insert(CLUSTER_LABEL_NAME.to_string(), name.to_string());
}

/// Records the version of the operator that generated the object.
pub fn set_operator_version<M: MetadataStore + ?Sized>(object: &mut M, version: &str) {
    object
        .annotations_mut()
        .insert(OPERATOR_VERSION_ANNOTATION_NAME.to_string(), version.to_string());
}
