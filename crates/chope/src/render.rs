//! Text serialization shared by rules, style sheets and elements.
//!
//! ## Indentation
//!
//! `render(indent)` with `indent > 0` puts every block member on its own
//! line and adds `indent` spaces per nesting level. `indent <= 0` renders
//! flat: the renderer adds no newlines or padding of its own, so a sheet
//! with rules `a {b: c;}` and `d {e: f;}` renders as `a {b: c;}d {e: f;}`.
//!
//! Newlines inside text content never reach the output; each one becomes
//! [`LINE_BREAK`].

use crate::error::RenderError;

/// Indentation used by [`Render::render_default`].
pub const DEFAULT_INDENT: i32 = 2;

/// Replacement for newlines embedded in text content.
pub const LINE_BREAK: &str = "<br>";

/// A tree that serializes to markup text.
pub trait Render {
    /// Renders with `indent` spaces per nesting level.
    ///
    /// Fails atomically: either the whole tree renders or an error is
    /// returned.
    fn render(&self, indent: i32) -> Result<String, RenderError>;

    fn render_default(&self) -> Result<String, RenderError> {
        self.render(DEFAULT_INDENT)
    }
}

/// Whitespace injected at one nesting level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    pub pad: String,
    pub newline: &'static str,
}

impl Layout {
    pub fn new(indent: i32) -> Self {
        if indent > 0 {
            Self {
                pad: " ".repeat(indent as usize),
                newline: "\n",
            }
        } else {
            Self {
                pad: String::new(),
                newline: "",
            }
        }
    }

    pub fn is_flat(&self) -> bool {
        self.newline.is_empty()
    }

    /// Indents every continuation line of an already rendered block so it
    /// sits one level deeper than its first line.
    pub fn nest(&self, block: &str) -> String {
        if self.is_flat() {
            block.to_string()
        } else {
            block.replace('\n', &format!("\n{}", self.pad))
        }
    }
}

/// Replaces embedded newlines with [`LINE_BREAK`].
pub(crate) fn break_lines(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

pub(crate) fn quote(text: &str) -> String {
    format!("\"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indent_is_flat() {
        assert_eq!(Layout::new(-3), Layout::new(0));
        assert!(Layout::new(-1).is_flat());
    }

    #[test]
    fn nest_pads_continuation_lines() {
        let layout = Layout::new(2);
        assert_eq!(layout.nest("a {\n  b;\n}"), "a {\n    b;\n  }");
    }

    #[test]
    fn flat_nest_is_identity() {
        assert_eq!(Layout::new(0).nest("<a>x</a>"), "<a>x</a>");
    }

    #[test]
    fn newlines_become_markers() {
        assert_eq!(break_lines("one\ntwo\n"), "one<br>two<br>");
    }
}
