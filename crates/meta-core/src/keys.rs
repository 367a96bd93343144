//! Label and annotation names recognized by the metadata policy engine.
//!
//! When a key is added here, the public documentation of labels and
//! annotations has to be updated as well.

// ============================================================================
// Labels
// ============================================================================

/// Name of the cluster owning the object
pub const CLUSTER_LABEL_NAME: &str = "cnpg.io/cluster";

/// Purpose of the executed job
pub const JOB_ROLE_LABEL_NAME: &str = "cnpg.io/jobRole";

/// Purpose of the PVC, see [`crate::PvcRole`]
pub const PVC_ROLE_LABEL_NAME: &str = "cnpg.io/pvcRole";

/// Role of the pod, see [`crate::PodRole`]
pub const POD_ROLE_LABEL_NAME: &str = "cnpg.io/podRole";

/// Name of the instance running in the pod
pub const INSTANCE_NAME_LABEL_NAME: &str = "cnpg.io/instanceName";

/// Name of the backup the object belongs to
pub const BACKUP_NAME_LABEL_NAME: &str = "cnpg.io/backupName";

// ============================================================================
// Annotations
// ============================================================================

/// Version of the operator that generated the object
pub const OPERATOR_VERSION_ANNOTATION_NAME: &str = "cnpg.io/operatorVersion";

/// Prefix of the per-container AppArmor profile annotations. Required on some
/// managed platforms, optional elsewhere.
pub const APP_ARMOR_ANNOTATION_PREFIX: &str = "container.apparmor.security.beta.kubernetes.io";

/// Controls the status of the reconciliation loop for the cluster
pub const RECONCILIATION_LOOP_ANNOTATION_NAME: &str = "cnpg.io/reconciliationLoop";

/// Hibernated cluster manifest.
#[deprecated(note = "replaced by CLUSTER_MANIFEST_ANNOTATION_NAME, kept for backward compatibility")]
pub const HIBERNATE_CLUSTER_MANIFEST_ANNOTATION_NAME: &str = "cnpg.io/hibernateClusterManifest";

/// pg_controldata output of the hibernated cluster.
#[deprecated(note = "replaced by PG_CONTROLDATA_ANNOTATION_NAME, kept for backward compatibility")]
pub const HIBERNATE_PG_CONTROL_DATA_ANNOTATION_NAME: &str = "cnpg.io/hibernatePgControlData";

/// Environment hash of the pod.
#[deprecated(note = "the pod spec annotation covers environment drift, kept for backward compatibility")]
pub const POD_ENV_HASH_ANNOTATION_NAME: &str = "cnpg.io/podEnvHash";

/// Pod spec derived from the cluster
pub const POD_SPEC_ANNOTATION_NAME: &str = "cnpg.io/podSpec";

/// Manifest of the cluster
pub const CLUSTER_MANIFEST_ANNOTATION_NAME: &str = "cnpg.io/clusterManifest";

/// pg_controldata output of the cluster
pub const PG_CONTROLDATA_ANNOTATION_NAME: &str = "cnpg.io/pgControldata";

/// Turns off the check ensuring the WAL archive is empty before writing data
pub const SKIP_EMPTY_WAL_ARCHIVE_CHECK: &str = "cnpg.io/skipEmptyWalArchiveCheck";
