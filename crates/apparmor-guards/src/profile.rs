use meta_core::keys::APP_ARMOR_ANNOTATION_PREFIX;
use meta_core::{merge_map, MetadataSet, MetadataStore, PodContainers};
use tracing::debug;

/// AppArmor annotations bound to a container the pod actually declares.
///
/// Keys carrying the prefix but no `/<container>` segment, or naming an
/// unknown container, are dropped silently.
pub fn app_armor_annotations<P>(spec: &P, annotations: &MetadataSet) -> MetadataSet
where
    P: PodContainers + ?Sized,
{
    annotations
        .iter()
        .filter(|(key, _)| key.starts_with(APP_ARMOR_ANNOTATION_PREFIX))
        .filter_map(|(key, value)| {
            let (_, container) = key.split_once('/')?;
            spec.has_container(container)
                .then(|| (key.clone(), value.clone()))
        })
        .collect()
}

pub fn is_app_armor_annotation_present<P>(spec: &P, annotations: &MetadataSet) -> bool
where
    P: PodContainers + ?Sized,
{
    !app_armor_annotations(spec, annotations).is_empty()
}

/// Whether the object already carries exactly the AppArmor annotations
/// requested for `spec`, no more and no less.
pub fn is_app_armor_annotation_present_in_object<M, P>(
    object: &M,
    spec: &P,
    annotations: &MetadataSet,
) -> bool
where
    M: MetadataStore + ?Sized,
    P: PodContainers + ?Sized,
{
    app_armor_annotations(spec, object.annotations()) == app_armor_annotations(spec, annotations)
}

/// Copies the AppArmor annotations matching `spec` onto the object and
/// returns how many were written.
pub fn annotate_app_armor<M, P>(object: &mut M, spec: &P, annotations: &MetadataSet) -> usize
where
    M: MetadataStore + ?Sized,
    P: PodContainers + ?Sized,
{
    let profiles = app_armor_annotations(spec, annotations);
    merge_map(object.annotations_mut(), &profiles);
    debug!(count = profiles.len(), "applied apparmor annotations");
    profiles.len()
}
