use std::sync::Arc;

use crate::container::{Container, ContainerId, ContainerState};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("No committed state for version {version} of container {container}")]
    SnapshotUnavailable { container: String, version: u64 },
}

/// Read handle onto one committed version of a container.
///
/// A snapshot is an opaque `(container, version token)` pair. The state is
/// re-resolved on every use, so a token retired by
/// [`Container::release_snapshot`] fails with
/// [`SnapshotError::SnapshotUnavailable`] instead of serving stale data.
/// Release is always the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) container: Arc<Container>,
    pub(crate) version: u64,
    pub(crate) token: u64,
}

impl Snapshot {
    pub fn container_id(&self) -> &ContainerId {
        self.container.id()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Resolve the snapshot to its committed state.
    pub fn state(&self) -> Result<Arc<ContainerState>, SnapshotError> {
        self.container.state_for(self)
    }
}
