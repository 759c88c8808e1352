//! Inventory manifests
//!
//! A manifest is a TOML description of one network, read as input only:
//!
//! ```toml
//! name = "MISIS network"
//!
//! [[computers]]
//! name = "server2.misis.ru"
//! addresses = ["10.0.0.1"]
//!
//! [[computers.components]]
//! type = "cpu"
//! cores = 8
//! mhz = 3200
//!
//! [[computers.components]]
//! type = "disk"
//! kind = "magnetic"
//! size_gib = 2000
//! partitions = [
//!     { size_gib = 500, label = "system" },
//!     { size_gib = 1500, label = "data" },
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Network;

/// Read and parse a manifest file.
#[instrument(level = "debug")]
pub fn load_network(path: &Path) -> ApplicationResult<Network> {
    let content = std::fs::read_to_string(path).with_path_context("read manifest", path)?;
    parse_network(&content, path)
}

/// Parse manifest text. `path` is only used for error messages.
pub fn parse_network(content: &str, path: &Path) -> ApplicationResult<Network> {
    let network: Network = toml::from_str(content).map_err(|e| ApplicationError::Manifest {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    debug!(
        "parsed network '{}' with {} computers",
        network.name(),
        network.computers().len()
    );

    for name in duplicate_names(&network) {
        warn!("computer name '{}' is used more than once, lookups return the first", name);
    }
    Ok(network)
}

/// Computer names that occur more than once, in first-repeat order.
pub fn duplicate_names(network: &Network) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for computer in network.computers() {
        let name = computer.name();
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name);
        }
    }
    duplicates
}
