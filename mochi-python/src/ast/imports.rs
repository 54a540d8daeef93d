//! Python import builder.

use mochi_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for Python import statements.
#[derive(Debug, Clone)]
pub struct ImportFrom {
    module: String,
    names: Vec<String>,
}

impl ImportFrom {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
        }
    }

    /// Import a named symbol from the module.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }
}

impl Renderable for ImportFrom {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = if self.names.is_empty() {
            format!("import {}", self.module)
        } else {
            format!("from {} import {}", self.module, self.names.join(", "))
        };
        vec![CodeFragment::Line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name() {
        let i = ImportFrom::new("typing").name("TypedDict").build();
        assert_eq!(i, "from typing import TypedDict\n");
    }

    #[test]
    fn test_multiple_names() {
        let i = ImportFrom::new("typing")
            .name("Any")
            .name("NamedTuple")
            .build();
        assert_eq!(i, "from typing import Any, NamedTuple\n");
    }

    #[test]
    fn test_bare_module_import() {
        let i = ImportFrom::new("json").build();
        assert_eq!(i, "import json\n");
    }
}
