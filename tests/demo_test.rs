//! Tests for the clone walkthrough

use netinv::application::demo::TARGET_HOST;
use netinv::application::{misis_network, run_demo};
use netinv::util::testing;

#[test]
fn given_reference_network_when_running_demo_then_original_is_unchanged() {
    testing::init_test_setup();
    let network = misis_network();

    let report = run_demo(&network, TARGET_HOST).unwrap();

    assert_eq!(report.original, report.original_after);
    assert_eq!(report.original_components, 2);
    assert_eq!(report.clone_components, 3);
    assert!(report.is_independent());
    assert!(report.modified_clone.contains("  +-HDD, 2000 GiB\n  | +-[0]: 500 GiB, system"));
    assert!(report.modified_clone.contains("  \\-SSD, 500 GiB"));
}
