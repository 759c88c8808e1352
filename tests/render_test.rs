//! Tests for the ASCII tree diagram

use rstest::{fixture, rstest};

use netinv::application::misis_network;
use netinv::domain::{Computer, Cpu, Disk, DiskKind, Memory, Network, Render};

const MISIS: &str = r"Network: MISIS network
+-Host: server1.misis.ru
| +-192.168.1.1
| +-CPU, 4 cores @ 2500MHz
| \-Memory, 16000 MiB
\-Host: server2.misis.ru
  +-10.0.0.1
  +-CPU, 8 cores @ 3200MHz
  \-HDD, 2000 GiB
    +-[0]: 500 GiB, system
    \-[1]: 1500 GiB, data";

#[fixture]
fn network() -> Network {
    misis_network()
}

#[rstest]
fn given_reference_network_when_rendering_then_matches_literal_diagram(network: Network) {
    assert_eq!(network.render(), MISIS);
}

#[rstest]
fn given_reference_network_when_rendering_with_protocol_then_only_trailing_newline_differs(
    network: Network,
) {
    let text = Render::render(&network, "ignored", true);
    assert_eq!(text, format!("{MISIS}\n"));
}

#[rstest]
fn given_same_tree_when_rendering_twice_then_identical(network: Network) {
    assert_eq!(network.render(), network.render());
    assert_eq!(network.render(), network.clone().render());
}

#[test]
fn given_interleaved_mutations_when_rendering_then_partitions_keep_insertion_order() {
    let mut disk = Disk::new(DiskKind::Ssd, 300);
    disk.add_partition(100, "boot");
    let mut computer = Computer::new("host").with_component(Memory::new(1024));
    disk.add_partition(100, "root");
    computer.add_address("10.1.1.1");
    disk.add_partition(100, "home");
    computer.add_component(disk);

    let text = Network::new("n").with_computer(computer).render();

    assert_eq!(
        text,
        "Network: n\n\
         \\-Host: host\n\
         \x20 +-10.1.1.1\n\
         \x20 +-Memory, 1024 MiB\n\
         \x20 \\-SSD, 300 GiB\n\
         \x20   +-[0]: 100 GiB, boot\n\
         \x20   +-[1]: 100 GiB, root\n\
         \x20   \\-[2]: 100 GiB, home"
    );
}

#[rstest]
#[case(DiskKind::Ssd, "SSD")]
#[case(DiskKind::Magnetic, "HDD")]
fn given_disk_kind_when_rendering_then_contains_label(#[case] kind: DiskKind, #[case] label: &str) {
    let text = Disk::new(kind, 256).render("", false);
    assert!(text.contains(label), "{text}");
}

#[test]
fn given_partitioned_disk_not_last_when_rendering_then_partition_glyphs_follow_partitions() {
    let computer = Computer::new("h")
        .with_component(Disk::new(DiskKind::Ssd, 10).with_partition(10, "only"))
        .with_component(Cpu::new(1, 1000));

    assert_eq!(
        computer.render("", true),
        "\\-Host: h\n  +-SSD, 10 GiB\n  | \\-[0]: 10 GiB, only\n  \\-CPU, 1 cores @ 1000MHz\n"
    );
}
