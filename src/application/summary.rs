//! Aggregate figures over a network

use std::fmt;

use crate::domain::{Component, Network};

/// Counts and total magnitudes of everything a network owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub computers: usize,
    pub addresses: usize,
    pub cpus: usize,
    pub cores: u64,
    pub memory_mib: u64,
    pub disks: usize,
    pub disk_gib: u64,
    pub partitions: usize,
}

impl Summary {
    pub fn of(network: &Network) -> Self {
        let mut summary = Self {
            computers: network.computers().len(),
            ..Self::default()
        };
        for computer in network.computers() {
            summary.addresses += computer.addresses().len();
            for component in computer.components() {
                summary.add(component);
            }
        }
        summary
    }

    fn add(&mut self, component: &Component) {
        match component {
            Component::Cpu(cpu) => {
                self.cpus += 1;
                self.cores += u64::from(cpu.cores());
            }
            Component::Memory(_) => {
                self.memory_mib += component.magnitude().unwrap_or_default();
            }
            Component::Disk(disk) => {
                self.disks += 1;
                self.partitions += disk.partitions().len();
                self.disk_gib += component.magnitude().unwrap_or_default();
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "computers:  {}", self.computers)?;
        writeln!(f, "addresses:  {}", self.addresses)?;
        writeln!(f, "cpus:       {} ({} cores)", self.cpus, self.cores)?;
        writeln!(f, "memory:     {} MiB", self.memory_mib)?;
        write!(
            f,
            "disks:      {} ({} GiB, {} partitions)",
            self.disks, self.disk_gib, self.partitions
        )
    }
}
