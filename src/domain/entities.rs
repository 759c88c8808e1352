//! Leaf entities: addresses and hardware components.

use std::fmt;

use serde::Deserialize;

use crate::domain::collection::Collection;
use crate::domain::render::{child_prefix, write_line, Render};

/// Network address of a host. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Render for Address {
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        write_line(out, prefix, is_last, self)
    }
}

/// Processor with a core count and a clock rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cpu {
    cores: u32,
    mhz: u32,
}

impl Cpu {
    pub fn new(cores: u32, mhz: u32) -> Self {
        Self { cores, mhz }
    }

    pub fn cores(&self) -> u32 {
        self.cores
    }

    pub fn mhz(&self) -> u32 {
        self.mhz
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU, {} cores @ {}MHz", self.cores, self.mhz)
    }
}

impl Render for Cpu {
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        write_line(out, prefix, is_last, self)
    }
}

/// Main memory, sized in MiB.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Memory {
    size_mib: u64,
}

impl Memory {
    pub fn new(size_mib: u64) -> Self {
        Self { size_mib }
    }

    pub fn size_mib(&self) -> u64 {
        self.size_mib
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memory, {} MiB", self.size_mib)
    }
}

impl Render for Memory {
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        write_line(out, prefix, is_last, self)
    }
}

/// Storage technology of a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskKind {
    Ssd,
    #[serde(alias = "hdd")]
    Magnetic,
}

impl DiskKind {
    /// Label used in the tree diagram.
    pub fn label(self) -> &'static str {
        match self {
            DiskKind::Ssd => "SSD",
            DiskKind::Magnetic => "HDD",
        }
    }
}

impl fmt::Display for DiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A slice of a disk, sized in GiB.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Partition {
    size_gib: u64,
    label: String,
}

impl Partition {
    pub fn new(size_gib: u64, label: impl Into<String>) -> Self {
        Self {
            size_gib,
            label: label.into(),
        }
    }

    pub fn size_gib(&self) -> u64 {
        self.size_gib
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GiB, {}", self.size_gib, self.label)
    }
}

/// Disk with an ordered partition table.
///
/// Partitions keep insertion order; their position is the index shown in the
/// diagram.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct Disk {
    kind: DiskKind,
    size_gib: u64,
    #[serde(default)]
    partitions: Vec<Partition>,
}

impl Disk {
    pub fn new(kind: DiskKind, size_gib: u64) -> Self {
        Self {
            kind,
            size_gib,
            partitions: Vec::new(),
        }
    }

    /// Append a partition, builder style.
    pub fn with_partition(mut self, size_gib: u64, label: impl Into<String>) -> Self {
        self.add_partition(size_gib, label);
        self
    }

    /// Append a partition in place.
    pub fn add_partition(&mut self, size_gib: u64, label: impl Into<String>) -> &mut Self {
        self.partitions.push(Partition::new(size_gib, label));
        self
    }

    pub fn kind(&self) -> DiskKind {
        self.kind
    }

    pub fn size_gib(&self) -> u64 {
        self.size_gib
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

impl Clone for Disk {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            size_gib: self.size_gib,
            partitions: self.partitions.iter().cloned().collect(),
        }
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} GiB", self.kind, self.size_gib)
    }
}

impl Render for Disk {
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        write_line(out, prefix, is_last, self)?;
        let nested = child_prefix(prefix, is_last);
        let last = self.partitions.len().saturating_sub(1);
        for (index, partition) in self.partitions.iter().enumerate() {
            write_line(
                out,
                &nested,
                index == last,
                &format_args!("[{index}]: {partition}"),
            )?;
        }
        Ok(())
    }
}

/// Hardware a computer owns.
///
/// Each variant renders and clones itself; containers only need these shared
/// capabilities, never the concrete type.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Disk(Disk),
}

impl Component {
    /// Numeric magnitude of the component: MiB for memory, GiB for disks.
    pub fn magnitude(&self) -> Option<u64> {
        match self {
            Component::Cpu(_) => None,
            Component::Memory(memory) => Some(memory.size_mib()),
            Component::Disk(disk) => Some(disk.size_gib()),
        }
    }

    /// Nested search entry point when the component is itself a container.
    pub fn as_collection(&self) -> Option<&dyn Collection> {
        match self {
            Component::Cpu(_) | Component::Memory(_) | Component::Disk(_) => None,
        }
    }

    pub fn as_collection_mut(&mut self) -> Option<&mut dyn Collection> {
        match self {
            Component::Cpu(_) | Component::Memory(_) | Component::Disk(_) => None,
        }
    }

    fn as_render(&self) -> &dyn Render {
        match self {
            Component::Cpu(cpu) => cpu,
            Component::Memory(memory) => memory,
            Component::Disk(disk) => disk,
        }
    }
}

impl Clone for Component {
    fn clone(&self) -> Self {
        match self {
            Component::Cpu(cpu) => Component::Cpu(cpu.clone()),
            Component::Memory(memory) => Component::Memory(memory.clone()),
            Component::Disk(disk) => Component::Disk(disk.clone()),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Cpu(cpu) => fmt::Display::fmt(cpu, f),
            Component::Memory(memory) => fmt::Display::fmt(memory, f),
            Component::Disk(disk) => fmt::Display::fmt(disk, f),
        }
    }
}

impl Render for Component {
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        self.as_render().render_into(out, prefix, is_last)
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Component::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Component::Memory(memory)
    }
}

impl From<Disk> for Component {
    fn from(disk: Disk) -> Self {
        Component::Disk(disk)
    }
}
