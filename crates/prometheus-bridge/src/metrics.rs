use inheritance_guards::{InheritanceReport, MetadataKind};
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

pub struct InheritanceMetrics {
    pub inheritance_keys_total: IntCounterVec,
    pub apparmor_annotations_applied_total: IntCounter,
}

impl InheritanceMetrics {
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let inheritance_keys_total = IntCounterVec::new(
            Opts::new(
                "metadata_inheritance_keys_total",
                "Metadata keys handled by inheritance, by kind and outcome",
            ),
            &["kind", "outcome"],
        )?;
        registry.register(Box::new(inheritance_keys_total.clone()))?;

        let apparmor_annotations_applied_total = IntCounter::new(
            "metadata_apparmor_annotations_applied_total",
            "AppArmor annotations written onto generated objects",
        )?;
        registry.register(Box::new(apparmor_annotations_applied_total.clone()))?;

        Ok(Self {
            inheritance_keys_total,
            apparmor_annotations_applied_total,
        })
    }

    pub fn observe_inheritance(&self, kind: MetadataKind, report: &InheritanceReport) {
        for (outcome, count) in [
            ("fixed", report.fixed),
            ("inherited", report.inherited),
            ("rejected", report.rejected),
        ] {
            self.inheritance_keys_total
                .with_label_values(&[kind.as_str(), outcome])
                .inc_by(count as u64);
        }
    }

    pub fn observe_app_armor(&self, applied: usize) {
        self.apparmor_annotations_applied_total.inc_by(applied as u64);
    }
}
