//! ASCII tree rendering protocol shared by every inventory node.
//!
//! A node writes its own line as `prefix + glyph + description` and hands its
//! children a prefix extended by two characters. Whether the extension is a
//! pipe depends on the *parent* being the last sibling, not the child.

use std::fmt;

/// Branch glyph for a sibling that has more siblings after it.
pub const MIDDLE_BRANCH: &str = "+-";
/// Branch glyph for the final sibling.
pub const LAST_BRANCH: &str = "\\-";

const PIPE_INDENT: &str = "| ";
const BLANK_INDENT: &str = "  ";

/// Capability to project a node into the tree diagram.
pub trait Render {
    /// Write this node (and its descendants) as newline-terminated lines.
    fn render_into(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result;

    /// Render into a fresh string.
    fn render(&self, prefix: &str, is_last: bool) -> String {
        let mut out = String::new();
        match self.render_into(&mut out, prefix, is_last) {
            Ok(()) => out,
            Err(fmt::Error) => String::new(),
        }
    }
}

/// Glyph for a sibling at the given position.
pub fn branch(is_last: bool) -> &'static str {
    if is_last {
        LAST_BRANCH
    } else {
        MIDDLE_BRANCH
    }
}

/// Prefix handed to the children of a node rendered with `prefix` and `is_last`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
    format!("{prefix}{indent}")
}

/// Write a single `prefix + glyph + description` line.
pub fn write_line(
    out: &mut dyn fmt::Write,
    prefix: &str,
    is_last: bool,
    description: &dyn fmt::Display,
) -> fmt::Result {
    writeln!(out, "{}{}{}", prefix, branch(is_last), description)
}

/// Render an ordered run of siblings, marking only the final one as last.
pub fn render_children<'a, I>(out: &mut dyn fmt::Write, prefix: &str, children: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a dyn Render>,
{
    let mut children = children.into_iter().peekable();
    while let Some(child) = children.next() {
        child.render_into(out, prefix, children.peek().is_none())?;
    }
    Ok(())
}
