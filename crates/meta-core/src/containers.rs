use k8s_openapi::api::core::v1::PodSpec;

/// Names of the containers declared by a pod, primary containers first and
/// init containers after them.
pub trait PodContainers {
    fn container_names(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    fn has_container(&self, name: &str) -> bool {
        self.container_names().any(|candidate| candidate == name)
    }
}

impl PodContainers for PodSpec {
    fn container_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            self.containers
                .iter()
                .chain(self.init_containers.iter().flatten())
                .map(|container| container.name.as_str()),
        )
    }
}
