//! Root of the inventory tree.

use std::fmt;

use serde::Deserialize;

use crate::domain::collection::Collection;
use crate::domain::computer::Computer;
use crate::domain::render::{render_children, Render};

/// A named set of computers. Entry point for rendering, cloning and search.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct Network {
    name: String,
    #[serde(default)]
    computers: Vec<Computer>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            computers: Vec::new(),
        }
    }

    pub fn with_computer(mut self, computer: Computer) -> Self {
        self.add_computer(computer);
        self
    }

    pub fn add_computer(&mut self, computer: Computer) -> &mut Self {
        self.computers.push(computer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn computers(&self) -> &[Computer] {
        &self.computers
    }

    /// First computer named exactly `name`, if any.
    pub fn find_computer(&self, name: &str) -> Option<&Computer> {
        self.find(name)
    }

    pub fn find_computer_mut(&mut self, name: &str) -> Option<&mut Computer> {
        self.find_mut(name)
    }

    /// Whole tree diagram without the trailing newline.
    pub fn render(&self) -> String {
        let mut text = Render::render(self, "", false);
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }
}

impl Clone for Network {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            computers: self.computers.iter().cloned().collect(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network: {}", self.name)
    }
}

impl Render for Network {
    /// The network is always the root: its header is unprefixed and its
    /// computers start from an empty prefix regardless of the arguments.
    fn render_into(&self, out: &mut dyn fmt::Write, _prefix: &str, _is_last: bool) -> fmt::Result {
        writeln!(out, "{self}")?;
        render_children(
            out,
            "",
            self.computers.iter().map(|computer| computer as &dyn Render),
        )
    }
}

impl Collection for Network {
    fn nested(&self) -> Box<dyn Iterator<Item = &dyn Collection> + '_> {
        Box::new(
            self.computers
                .iter()
                .map(|computer| computer as &dyn Collection),
        )
    }

    fn nested_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Collection> + '_> {
        Box::new(
            self.computers
                .iter_mut()
                .map(|computer| computer as &mut dyn Collection),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Component, Cpu, Memory};

    #[test]
    fn given_empty_network_when_rendering_then_only_header() {
        assert_eq!(Network::new("lab").render(), "Network: lab");
    }

    #[test]
    fn given_empty_network_when_finding_then_none() {
        let mut network = Network::new("lab");
        assert!(network.find_computer("anything").is_none());
        assert!(network.find_computer_mut("anything").is_none());
    }

    #[test]
    fn given_duplicate_names_when_finding_then_first_wins() {
        let network = Network::new("lab")
            .with_computer(Computer::new("twin").with_component(Cpu::new(1, 100)))
            .with_computer(Computer::new("twin").with_component(Memory::new(512)));

        let found = network.find_computer("twin").expect("twin present");
        assert_eq!(found.components()[0], Component::from(Cpu::new(1, 100)));
    }

    #[test]
    fn given_single_computer_when_rendering_then_computer_is_last() {
        let network = Network::new("lab").with_computer(Computer::new("solo").with_address("::1"));
        assert_eq!(network.render(), "Network: lab\n\\-Host: solo\n  \\-::1");
    }
}
