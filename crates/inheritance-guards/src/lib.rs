pub mod config;
pub mod controller;
pub mod engine;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, InheritanceConfig};
pub use controller::{InheritanceController, InheritancePolicy};
pub use engine::{inherit_annotations, inherit_labels, InheritanceReport, MetadataKind};
