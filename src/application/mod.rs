//! Application layer: use cases around the inventory model
//!
//! Loads manifests, aggregates figures and runs the clone walkthrough. This
//! is the only layer besides the CLI that touches the filesystem.

pub mod demo;
pub mod error;
pub mod error_ext;
pub mod manifest;
pub mod summary;

pub use demo::{misis_network, run_demo, DemoReport};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use manifest::{load_network, parse_network};
pub use summary::Summary;
