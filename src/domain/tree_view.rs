//! Conversion of inventory nodes into `termtree` trees for box-drawing output.
//!
//! The ASCII diagram of `render` is the canonical format; this view is for
//! humans only.

use termtree::Tree;

use crate::domain::computer::Computer;
use crate::domain::entities::{Address, Component, Disk};
use crate::domain::network::Network;

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for Network {
    fn to_term_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .computers()
            .iter()
            .map(ToTermTree::to_term_tree)
            .collect();
        Tree::new(self.to_string()).with_leaves(leaves)
    }
}

impl ToTermTree for Computer {
    fn to_term_tree(&self) -> Tree<String> {
        let addresses = self.addresses().iter().map(ToTermTree::to_term_tree);
        let components = self.components().iter().map(ToTermTree::to_term_tree);
        Tree::new(self.to_string()).with_leaves(addresses.chain(components))
    }
}

impl ToTermTree for Address {
    fn to_term_tree(&self) -> Tree<String> {
        Tree::new(self.to_string())
    }
}

impl ToTermTree for Component {
    fn to_term_tree(&self) -> Tree<String> {
        match self {
            Component::Disk(disk) => disk.to_term_tree(),
            other => Tree::new(other.to_string()),
        }
    }
}

impl ToTermTree for Disk {
    fn to_term_tree(&self) -> Tree<String> {
        let mut tree = Tree::new(self.to_string());
        for (index, partition) in self.partitions().iter().enumerate() {
            tree.push(Tree::new(format!("[{index}]: {partition}")));
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Cpu, DiskKind};

    #[test]
    fn given_network_when_converting_then_tree_mirrors_structure() {
        let network = Network::new("lab").with_computer(
            Computer::new("db")
                .with_address("10.0.0.5")
                .with_component(Cpu::new(2, 2000))
                .with_component(Disk::new(DiskKind::Ssd, 256).with_partition(256, "root")),
        );

        let tree = network.to_term_tree();

        assert_eq!(tree.root, "Network: lab");
        assert_eq!(tree.leaves.len(), 1);
        let host = &tree.leaves[0];
        assert_eq!(host.root, "Host: db");
        assert_eq!(host.leaves.len(), 3);
        assert_eq!(host.leaves[2].leaves[0].root, "[0]: 256 GiB, root");
    }

    #[test]
    fn given_network_when_displaying_term_tree_then_contains_every_label() {
        let network = Network::new("lab").with_computer(Computer::new("db").with_address("10.0.0.5"));
        let text = network.to_term_tree().to_string();
        assert!(text.contains("Network: lab"));
        assert!(text.contains("Host: db"));
        assert!(text.contains("10.0.0.5"));
    }
}
