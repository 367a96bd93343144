pub mod guards;
pub mod metrics;


pub use guards::{annotate_app_armor_observed, inherit_annotations_observed, inherit_labels_observed};
pub use metrics::InheritanceMetrics;
