//! End-to-end walkthrough of the model: build, render, clone, find, mutate.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Computer, Cpu, Disk, DiskKind, Memory, Network};

/// Host the walkthrough modifies inside the clone.
pub const TARGET_HOST: &str = "server2.misis.ru";

/// The two-server reference network.
pub fn misis_network() -> Network {
    Network::new("MISIS network")
        .with_computer(
            Computer::new("server1.misis.ru")
                .with_address("192.168.1.1")
                .with_component(Cpu::new(4, 2500))
                .with_component(Memory::new(16000)),
        )
        .with_computer(
            Computer::new(TARGET_HOST)
                .with_address("10.0.0.1")
                .with_component(Cpu::new(8, 3200))
                .with_component(
                    Disk::new(DiskKind::Magnetic, 2000)
                        .with_partition(500, "system")
                        .with_partition(1500, "data"),
                ),
        )
}

/// Outcome of [`run_demo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Diagram of the source network before anything happens.
    pub original: String,
    /// Diagram of the clone after the extra disk was attached.
    pub modified_clone: String,
    /// Diagram of the source network after the clone was modified.
    pub original_after: String,
    pub original_components: usize,
    pub clone_components: usize,
}

impl DemoReport {
    /// Whether the source network survived the clone's modification untouched.
    pub fn is_independent(&self) -> bool {
        self.original == self.original_after && self.clone_components == self.original_components + 1
    }
}

/// Clone `network`, attach an SSD to `host` inside the clone and report
/// both trees.
#[instrument(level = "debug", skip(network), fields(network = network.name()))]
pub fn run_demo(network: &Network, host: &str) -> ApplicationResult<DemoReport> {
    let original = network.render();

    let mut copy = network.clone();
    let target = copy
        .find_computer_mut(host)
        .ok_or_else(|| ApplicationError::HostNotFound(host.to_string()))?;
    target.add_component(Disk::new(DiskKind::Ssd, 500).with_partition(500, "fast_storage"));
    debug!("attached disk to '{}' in clone", host);

    let original_components = component_count(network, host)?;
    let clone_components = component_count(&copy, host)?;
    info!(
        original_components,
        clone_components, "demo finished for '{}'", host
    );

    Ok(DemoReport {
        original,
        modified_clone: copy.render(),
        original_after: network.render(),
        original_components,
        clone_components,
    })
}

fn component_count(network: &Network, host: &str) -> ApplicationResult<usize> {
    network
        .find_computer(host)
        .map(|computer| computer.components().len())
        .ok_or_else(|| ApplicationError::HostNotFound(host.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_reference_network_when_running_demo_then_clone_gains_disk() {
        let network = misis_network();
        let report = run_demo(&network, TARGET_HOST).unwrap();

        assert_eq!(report.original_components, 2);
        assert_eq!(report.clone_components, 3);
        assert!(report.is_independent());
        assert!(report.modified_clone.ends_with("    \\-[0]: 500 GiB, fast_storage"));
    }

    #[test]
    fn given_unknown_host_when_running_demo_then_host_not_found() {
        let err = run_demo(&misis_network(), "nope").unwrap_err();
        assert!(matches!(err, ApplicationError::HostNotFound(name) if name == "nope"));
    }
}
