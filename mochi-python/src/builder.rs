//! Structure builders and the builder registry.

use mochi_codegen::CodeBuilder;
use mochi_schema::FieldSchema;

use crate::ast::{ClassDef, ImportFrom};
use crate::error::Result;
use crate::kind::StructureKind;

/// Builds one Python declaration from a class name and a field schema.
///
/// One shared assembly consumes the per-kind metadata on
/// [`StructureKind`]: the kind's import, then the class definition with
/// its base or decorator and one annotated field per schema entry, in
/// schema order. Builders are stateless and freely reusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureBuilder {
    kind: StructureKind,
}

impl StructureBuilder {
    /// Create a builder for the given kind.
    pub fn new(kind: StructureKind) -> Self {
        Self { kind }
    }

    /// The kind this builder produces.
    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    /// Build the Python source for one declaration.
    ///
    /// Total: accepts any schema, including the empty one (which
    /// renders a `pass` body).
    ///
    /// # Example
    ///
    /// ```
    /// use mochi_python::{StructureBuilder, StructureKind};
    /// use mochi_schema::FieldSchema;
    ///
    /// let builder = StructureBuilder::new(StructureKind::TypedDict);
    /// let fields = FieldSchema::from([("id".to_string(), "int".to_string())]);
    /// let code = builder.build("User", &fields);
    ///
    /// assert!(code.contains("class User(TypedDict):"));
    /// assert!(code.contains("id: int"));
    /// ```
    pub fn build(&self, class_name: &str, fields: &FieldSchema) -> String {
        let (module, symbol) = self.kind.import();
        let import = ImportFrom::new(module).name(symbol);

        let mut class_def = ClassDef::new(class_name);
        if let Some(base) = self.kind.base() {
            class_def = class_def.base(base);
        }
        if let Some(decorator) = self.kind.decorator() {
            class_def = class_def.decorator(decorator);
        }
        for (name, annotation) in fields {
            class_def = class_def.field(name.as_str(), annotation.as_str());
        }

        CodeBuilder::python()
            .emit(&import)
            .blank()
            .emit(&class_def)
            .build()
    }
}

/// Look up the builder for a kind identifier.
///
/// The registry is the fixed set of five identifiers; anything else
/// fails with [`Error::UnknownKind`](crate::Error::UnknownKind) naming
/// the offending identifier.
pub fn get_builder(identifier: &str) -> Result<StructureBuilder> {
    let kind: StructureKind = identifier.parse()?;
    Ok(StructureBuilder::new(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_fields() -> FieldSchema {
        FieldSchema::from([
            ("id".to_string(), "int".to_string()),
            ("name".to_string(), "str".to_string()),
        ])
    }

    #[test]
    fn test_typed_dict() {
        let code = StructureBuilder::new(StructureKind::TypedDict).build("User", &sample_fields());

        assert!(code.contains("from typing import TypedDict"));
        assert!(code.contains("class User(TypedDict):"));
        assert!(code.contains("id: int"));
        assert!(code.contains("name: str"));
    }

    #[test]
    fn test_dataclass() {
        let code = StructureBuilder::new(StructureKind::Dataclass).build("User", &sample_fields());

        assert!(code.contains("from dataclasses import dataclass"));
        assert!(code.contains("@dataclass"));
        assert!(code.contains("class User:"));
    }

    #[test]
    fn test_pydantic() {
        let code = StructureBuilder::new(StructureKind::Pydantic).build("User", &sample_fields());

        assert!(code.contains("from pydantic import BaseModel"));
        assert!(code.contains("class User(BaseModel):"));
    }

    #[test]
    fn test_namedtuple() {
        let code = StructureBuilder::new(StructureKind::NamedTuple).build("User", &sample_fields());

        assert!(code.contains("from typing import NamedTuple"));
        assert!(code.contains("class User(NamedTuple):"));
    }

    #[test]
    fn test_attrs() {
        let code = StructureBuilder::new(StructureKind::Attrs).build("User", &sample_fields());

        assert!(code.contains("from attrs import define"));
        assert!(code.contains("@define"));
        assert!(code.contains("class User:"));
    }

    #[test]
    fn test_empty_fields_render_pass() {
        for kind in StructureKind::ALL {
            let code = StructureBuilder::new(kind).build("Empty", &FieldSchema::new());
            assert!(code.contains("    pass\n"), "{kind} should emit pass");
        }
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = StructureBuilder::new(StructureKind::TypedDict);
        let first = builder.build("User", &sample_fields());
        let second = builder.build("User", &sample_fields());
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_builder_known_kinds() {
        for kind in StructureKind::ALL {
            let builder = get_builder(kind.as_str()).unwrap();
            assert_eq!(builder.kind(), kind);
        }
    }

    #[test]
    fn test_get_builder_unknown_kind_names_identifier() {
        let err = get_builder("invalid").unwrap_err();
        match *err {
            Error::UnknownKind { ref kind } => assert_eq!(kind, "invalid"),
        }
        let err = get_builder("invalid").unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }
}
