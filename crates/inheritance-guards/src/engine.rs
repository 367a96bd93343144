use crate::controller::InheritanceController;
use meta_core::{merge_map, MetadataSet, MetadataStore};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataKind {
    Labels,
    Annotations,
}

impl MetadataKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            MetadataKind::Labels => "labels",
            MetadataKind::Annotations => "annotations",
        }
    }
}

/// Number of keys written or skipped by one inheritance call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InheritanceReport {
    pub fixed: usize,
    pub inherited: usize,
    pub rejected: usize,
}

/// Puts the fixed labels into the object, then every candidate label the
/// controller approves.
///
/// Fixed labels are written first: a key that is both fixed and an approved
/// candidate ends up with the candidate's value.
pub fn inherit_labels<M, C>(
    object: &mut M,
    labels: &MetadataSet,
    fixed_labels: &MetadataSet,
    controller: &C,
) -> InheritanceReport
where
    M: MetadataStore + ?Sized,
    C: InheritanceController + ?Sized,
{
    inherit(
        object.labels_mut(),
        labels,
        fixed_labels,
        MetadataKind::Labels,
        |key| controller.is_label_inherited(key),
    )
}

/// Annotation counterpart of [`inherit_labels`], with the same ordering.
pub fn inherit_annotations<M, C>(
    object: &mut M,
    annotations: &MetadataSet,
    fixed_annotations: &MetadataSet,
    controller: &C,
) -> InheritanceReport
where
    M: MetadataStore + ?Sized,
    C: InheritanceController + ?Sized,
{
    inherit(
        object.annotations_mut(),
        annotations,
        fixed_annotations,
        MetadataKind::Annotations,
        |key| controller.is_annotation_inherited(key),
    )
}

fn inherit(
    target: &mut MetadataSet,
    candidates: &MetadataSet,
    fixed: &MetadataSet,
    kind: MetadataKind,
    approves: impl Fn(&str) -> bool,
) -> InheritanceReport {
    merge_map(target, fixed);

    let mut report = InheritanceReport {
        fixed: fixed.len(),
        ..Default::default()
    };

    for (key, value) in candidates {
        if approves(key) {
            target.insert(key.clone(), value.clone());
            report.inherited += 1;
        } else {
            trace!(kind = kind.as_str(), key = %key, "key not inherited");
            report.rejected += 1;
        }
    }

    debug!(
        kind = kind.as_str(),
        fixed = report.fixed,
        inherited = report.inherited,
        rejected = report.rejected,
        "applied inherited metadata"
    );
    report
}
