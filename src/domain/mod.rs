//! Domain layer: the inventory tree and its capabilities
//!
//! Pure in-memory model. No I/O, no configuration, no errors: lookups that
//! miss return `None`.

pub mod collection;
pub mod computer;
pub mod entities;
pub mod network;
pub mod render;
pub mod tree_view;

pub use collection::Collection;
pub use computer::Computer;
pub use entities::{Address, Component, Cpu, Disk, DiskKind, Memory, Partition};
pub use network::Network;
pub use render::Render;
pub use tree_view::ToTermTree;
