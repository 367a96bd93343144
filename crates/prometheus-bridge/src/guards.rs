use crate::InheritanceMetrics;
use inheritance_guards::{
    inherit_annotations, inherit_labels, InheritanceController, InheritanceReport, MetadataKind,
};
use meta_core::{MetadataSet, MetadataStore, PodContainers};

pub fn inherit_labels_observed<M, C>(
    metrics: &InheritanceMetrics,
    object: &mut M,
    labels: &MetadataSet,
    fixed_labels: &MetadataSet,
    controller: &C,
) -> InheritanceReport
where
    M: MetadataStore + ?Sized,
    C: InheritanceController + ?Sized,
{
    let report = inherit_labels(object, labels, fixed_labels, controller);
    metrics.observe_inheritance(MetadataKind::Labels, &report);
    report
}

pub fn inherit_annotations_observed<M, C>(
    metrics: &InheritanceMetrics,
    object: &mut M,
    annotations: &MetadataSet,
    fixed_annotations: &MetadataSet,
    controller: &C,
) -> InheritanceReport
where
    M: MetadataStore + ?Sized,
    C: InheritanceController + ?Sized,
{
    let report = inherit_annotations(object, annotations, fixed_annotations, controller);
    metrics.observe_inheritance(MetadataKind::Annotations, &report);
    report
}

pub fn annotate_app_armor_observed<M, P>(
    metrics: &InheritanceMetrics,
    object: &mut M,
    spec: &P,
    annotations: &MetadataSet,
) -> usize
where
    M: MetadataStore + ?Sized,
    P: PodContainers + ?Sized,
{
    let applied = apparmor_guards::annotate_app_armor(object, spec, annotations);
    metrics.observe_app_armor(applied);
    applied
}
