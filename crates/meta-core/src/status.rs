use crate::keys::{RECONCILIATION_LOOP_ANNOTATION_NAME, SKIP_EMPTY_WAL_ARCHIVE_CHECK};
use crate::roles::AnnotationStatus;
use crate::store::MetadataStore;

fn annotation_equals<M: MetadataStore + ?Sized>(
    object: &M,
    key: &str,
    status: AnnotationStatus,
) -> bool {
    object
        .annotations()
        .get(key)
        .is_some_and(|value| value == status.as_str())
}

/// Reconciliation is disabled only by the exact value `disabled`.
pub fn is_reconciliation_disabled<M: MetadataStore + ?Sized>(object: &M) -> bool {
    annotation_equals(object, RECONCILIATION_LOOP_ANNOTATION_NAME, AnnotationStatus::Disabled)
}

/// The empty WAL archive check runs unless the skip annotation is exactly
/// `enabled`.
pub fn is_empty_wal_archive_check_enabled<M: MetadataStore + ?Sized>(object: &M) -> bool {
    !annotation_equals(object, SKIP_EMPTY_WAL_ARCHIVE_CHECK, AnnotationStatus::Enabled)
}
