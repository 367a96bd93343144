pub mod containers;
pub mod keys;
pub mod roles;
pub mod status;
pub mod store;


pub use containers::PodContainers;
pub use roles::{AnnotationStatus, PodRole, PvcRole};
pub use status::{is_empty_wal_archive_check_enabled, is_reconciliation_disabled};
pub use store::{
    apply_fixed_annotations, apply_fixed_labels, label_cluster_name, merge_map,
    set_operator_version, MetadataSet, MetadataStore,
};
