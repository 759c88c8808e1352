//! Name search over the composite tree.

use crate::domain::computer::Computer;

/// A node that owns children and can look computers up by name.
///
/// Search is depth-first in sibling order and stops at the first match. Only
/// computers are ever returned.
pub trait Collection {
    /// The computer this node itself stands for, if it is one.
    fn as_computer(&self) -> Option<&Computer> {
        None
    }

    fn as_computer_mut(&mut self) -> Option<&mut Computer> {
        None
    }

    /// Children that can host a nested search, in sibling order.
    fn nested(&self) -> Box<dyn Iterator<Item = &dyn Collection> + '_>;

    fn nested_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Collection> + '_>;

    fn find(&self, name: &str) -> Option<&Computer> {
        if let Some(computer) = self.as_computer() {
            if computer.name() == name {
                return Some(computer);
            }
        }
        self.nested().find_map(|child| child.find(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Computer> {
        if self.as_computer().is_some_and(|computer| computer.name() == name) {
            return self.as_computer_mut();
        }
        self.nested_mut().find_map(|child| child.find_mut(name))
    }
}
