//! Code builder utility for generating properly indented code.

use crate::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use mochi_codegen::CodeBuilder;
///
/// let code = CodeBuilder::python()
///     .line("def main():")
///     .indent()
///     .line("print(\"hello\")")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "def main():\n    print(\"hello\")\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Python default).
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with automatic indentation.
    ///
    /// # Example
    ///
    /// ```
    /// use mochi_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::python()
    ///     .block("class Foo:", |b| b.line("pass"))
    ///     .build();
    ///
    /// assert_eq!(code, "class Foo:\n    pass\n");
    /// ```
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Add a `#` comment line.
    pub fn comment(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("# ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(mut self, node: &impl Renderable) -> Self {
        for fragment in node.to_fragments() {
            self = self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(mut self, fragment: CodeFragment) -> Self {
        match fragment {
            CodeFragment::Line(s) => self.line(&s),
            CodeFragment::Blank => self.blank(),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self = self.line(&header).indent();
                for f in body {
                    self = self.apply_fragment(f);
                }
                self = self.dedent();
                match close {
                    Some(c) => self.line(&c),
                    None => self,
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self = self.apply_fragment(f);
                }
                self
            }
            CodeFragment::Comment(text) => self.comment(&text),
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::python()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::python().line("x = 1").build();
        assert_eq!(code, "x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::python()
            .line("class Foo:")
            .indent()
            .line("x: int")
            .dedent()
            .build();

        assert_eq!(code, "class Foo:\n    x: int\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::python()
            .block("class Foo:", |b| b.line("pass"))
            .build();

        assert_eq!(code, "class Foo:\n    pass\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::python()
            .line("import os")
            .blank()
            .line("x = 1")
            .build();

        assert_eq!(code, "import os\n\nx = 1\n");
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::python()
            .comment("generated")
            .line("x = 1")
            .build();

        assert_eq!(code, "# generated\nx = 1\n");
    }

    #[test]
    fn test_conditional() {
        let with_decorator = CodeBuilder::python()
            .when(true, |b| b.line("@dataclass"))
            .line("class Foo:")
            .build();

        let without_decorator = CodeBuilder::python()
            .when(false, |b| b.line("@dataclass"))
            .line("class Foo:")
            .build();

        assert_eq!(with_decorator, "@dataclass\nclass Foo:\n");
        assert_eq!(without_decorator, "class Foo:\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::python()
            .each(["a", "b"], |b, name| b.line(&format!("{}: int", name)))
            .build();

        assert_eq!(code, "a: int\nb: int\n");
    }

    #[test]
    fn test_apply_block_fragment() {
        let fragment = CodeFragment::block(
            "class Foo:",
            vec![CodeFragment::line("x: int"), CodeFragment::line("y: str")],
            None,
        );
        let code = CodeBuilder::python().apply_fragment(fragment).build();

        assert_eq!(code, "class Foo:\n    x: int\n    y: str\n");
    }

    #[test]
    fn test_dedent_at_zero_is_noop() {
        let code = CodeBuilder::python().dedent().line("x = 1").build();
        assert_eq!(code, "x = 1\n");
    }
}
