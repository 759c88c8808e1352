//! netinv: inventory of networks, hosts and their hardware as a composite tree
//!
//! A [`domain::Network`] owns [`domain::Computer`]s, which own addresses and
//! hardware [`domain::Component`]s. The whole tree renders as an ASCII
//! diagram and clones into a copy that shares nothing with its source.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
