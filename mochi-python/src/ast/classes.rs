//! Python class definition builder.

use mochi_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Stmt;

/// Builder for Python class definitions.
///
/// An empty body renders as the `pass` placeholder so the generated
/// class is always syntactically valid.
#[derive(Debug, Clone)]
pub struct ClassDef {
    name: String,
    bases: Vec<String>,
    decorators: Vec<String>,
    body: Vec<Stmt>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            decorators: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a base class.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add a decorator (without the leading `@`).
    pub fn decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    /// Add an annotated field declaration to the body.
    pub fn field(mut self, name: impl Into<String>, annotation: impl Into<String>) -> Self {
        self.body.push(Stmt::ann_assign(name, annotation));
        self
    }

    /// Add a statement to the body.
    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    fn header(&self) -> String {
        if self.bases.is_empty() {
            format!("class {}:", self.name)
        } else {
            format!("class {}({}):", self.name, self.bases.join(", "))
        }
    }

    /// Render the class definition to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self)
    }

    /// Build the class definition as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }
}

impl Renderable for ClassDef {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .decorators
            .iter()
            .map(|d| CodeFragment::Line(format!("@{}", d)))
            .collect();

        let body = if self.body.is_empty() {
            Stmt::Pass.to_fragments()
        } else {
            self.body.iter().flat_map(Stmt::to_fragments).collect()
        };

        fragments.push(CodeFragment::block(self.header(), body, None));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class_has_pass_body() {
        let c = ClassDef::new("Empty").build();
        assert_eq!(c, "class Empty:\n    pass\n");
    }

    #[test]
    fn test_class_with_base() {
        let c = ClassDef::new("User")
            .base("TypedDict")
            .field("id", "int")
            .field("name", "str")
            .build();

        assert_eq!(c, "class User(TypedDict):\n    id: int\n    name: str\n");
    }

    #[test]
    fn test_class_with_multiple_bases() {
        let c = ClassDef::new("Mixed").base("A").base("B").build();
        assert!(c.contains("class Mixed(A, B):"));
    }

    #[test]
    fn test_class_with_decorator() {
        let c = ClassDef::new("User")
            .decorator("dataclass")
            .field("id", "int")
            .build();

        assert_eq!(c, "@dataclass\nclass User:\n    id: int\n");
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let c = ClassDef::new("Ordered")
            .field("zebra", "int")
            .field("apple", "str")
            .build();

        let zebra = c.find("zebra").unwrap();
        let apple = c.find("apple").unwrap();
        assert!(zebra < apple);
    }
}
