//! Tests for deep-clone independence

use netinv::application::misis_network;
use netinv::domain::{Computer, Disk, DiskKind, Memory, Network};

#[test]
fn given_cloned_network_when_adding_disk_to_clone_then_original_keeps_two_components() {
    let original = misis_network();
    let mut copy = original.clone();

    copy.find_computer_mut("server2.misis.ru")
        .expect("server2 in clone")
        .add_component(Disk::new(DiskKind::Ssd, 500).with_partition(500, "fast_storage"));

    let original_server = original.find_computer("server2.misis.ru").unwrap();
    let cloned_server = copy.find_computer("server2.misis.ru").unwrap();
    assert_eq!(original_server.components().len(), 2);
    assert_eq!(cloned_server.components().len(), 3);
    assert_eq!(original, misis_network());
}

#[test]
fn given_cloned_network_when_mutating_original_then_clone_unchanged() {
    let mut original = misis_network();
    let copy = original.clone();

    original.add_computer(Computer::new("server3.misis.ru"));
    original
        .find_computer_mut("server1.misis.ru")
        .unwrap()
        .add_address("192.168.1.2");

    assert_eq!(copy, misis_network());
    assert_eq!(copy.computers().len(), 2);
    assert!(copy.find_computer("server3.misis.ru").is_none());
}

#[test]
fn given_network_when_cloning_then_clone_is_equal_but_separate() {
    let original = misis_network();
    let copy = original.clone();

    assert_eq!(copy, original);
    assert_ne!(
        copy.computers().as_ptr(),
        original.computers().as_ptr(),
        "clone must own its own computer storage"
    );
}

#[test]
fn given_empty_computer_when_cloning_then_sequences_stay_empty() {
    let copy = Computer::new("empty").clone();
    assert!(copy.addresses().is_empty());
    assert!(copy.components().is_empty());
}

#[test]
fn given_empty_network_when_cloning_then_empty_network() {
    let copy = Network::new("void").clone();
    assert_eq!(copy.name(), "void");
    assert!(copy.computers().is_empty());
}

#[test]
fn given_cloned_computer_when_extending_then_render_differs_only_in_clone() {
    let original = Computer::new("h").with_component(Memory::new(512));
    let mut copy = original.clone();
    copy.add_component(Memory::new(512));

    let original_net = Network::new("n").with_computer(original);
    let copy_net = Network::new("n").with_computer(copy);
    assert_eq!(original_net.render().lines().count(), 3);
    assert_eq!(copy_net.render().lines().count(), 4);
}
