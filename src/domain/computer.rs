//! A named host owning addresses and hardware.

use std::fmt;

use serde::Deserialize;

use crate::domain::collection::Collection;
use crate::domain::entities::{Address, Component};
use crate::domain::render::{child_prefix, render_children, write_line, Render};

/// Host in a network, searchable by name.
///
/// Renders its addresses first and its components after them, as one run of
/// siblings.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct Computer {
    name: String,
    #[serde(default)]
    addresses: Vec<Address>,
    #[serde(default)]
    components: Vec<Component>,
}

impl Computer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.add_address(address);
        self
    }

    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }

    pub fn add_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.addresses.push(Address::new(address));
        self
    }

    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl Clone for Computer {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            addresses: self.addresses.iter().cloned().collect(),
            components: self.components.iter().cloned().collect(),
        }
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Host: {}", self.name)
    }
}

impl Render for Computer {
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        write_line(out, prefix, is_last, self)?;
        let children = self
            .addresses
            .iter()
            .map(|address| address as &dyn Render)
            .chain(self.components.iter().map(|component| component as &dyn Render));
        render_children(out, &child_prefix(prefix, is_last), children)
    }
}

impl Collection for Computer {
    fn as_computer(&self) -> Option<&Computer> {
        Some(self)
    }

    fn as_computer_mut(&mut self) -> Option<&mut Computer> {
        Some(self)
    }

    fn nested(&self) -> Box<dyn Iterator<Item = &dyn Collection> + '_> {
        Box::new(
            self.components
                .iter()
                .filter_map(|component| component.as_collection()),
        )
    }

    fn nested_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Collection> + '_> {
        Box::new(
            self.components
                .iter_mut()
                .filter_map(|component| component.as_collection_mut()),
        )
    }
}
