//! Tests for loading inventory manifests from disk

use std::path::PathBuf;

use tempfile::TempDir;

use netinv::application::{load_network, misis_network, ApplicationError};

const MISIS_MANIFEST: &str = r#"
name = "MISIS network"

[[computers]]
name = "server1.misis.ru"
addresses = ["192.168.1.1"]

[[computers.components]]
type = "cpu"
cores = 4
mhz = 2500

[[computers.components]]
type = "memory"
size_mib = 16000

[[computers]]
name = "server2.misis.ru"
addresses = ["10.0.0.1"]

[[computers.components]]
type = "cpu"
cores = 8
mhz = 3200

[[computers.components]]
type = "disk"
kind = "magnetic"
size_gib = 2000
partitions = [
    { size_gib = 500, label = "system" },
    { size_gib = 1500, label = "data" },
]
"#;

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write manifest");
    path
}

#[test]
fn given_manifest_file_when_loading_then_equals_built_network() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "misis.toml", MISIS_MANIFEST);

    // Act
    let network = load_network(&path).unwrap();

    // Assert
    assert_eq!(network, misis_network());
    assert_eq!(network.render(), misis_network().render());
}

#[test]
fn given_missing_file_when_loading_then_operation_failed() {
    let temp = TempDir::new().unwrap();
    let err = load_network(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
}

#[test]
fn given_malformed_toml_when_loading_then_manifest_error() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "broken.toml", "name = \n");

    let err = load_network(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::Manifest { .. }));
}

#[test]
fn given_network_without_computers_when_loading_then_empty_network() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "empty.toml", "name = \"void\"\n");

    let network = load_network(&path).unwrap();

    assert_eq!(network.render(), "Network: void");
}
