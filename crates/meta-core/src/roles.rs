use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the on/off control annotations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStatus {
    Enabled,
    Disabled,
}

impl AnnotationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            AnnotationStatus::Enabled => "enabled",
            AnnotationStatus::Disabled => "disabled",
        }
    }
}

impl fmt::Display for AnnotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PodRole {
    #[serde(rename = "instance")]
    Instance,
}

impl PodRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            PodRole::Instance => "instance",
        }
    }
}

impl fmt::Display for PodRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a PVC is used for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PvcRole {
    #[serde(rename = "PG_DATA")]
    PgData,
    #[serde(rename = "PG_WAL")]
    PgWal,
}

impl PvcRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            PvcRole::PgData => "PG_DATA",
            PvcRole::PgWal => "PG_WAL",
        }
    }
}

impl fmt::Display for PvcRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
