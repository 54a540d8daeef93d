//! The five supported declaration shapes.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// A kind of Python record-style declaration.
///
/// Each kind carries fixed metadata: the import it needs and either a
/// base class (inheritance-based kinds) or a decorator
/// (annotation-based kinds). All five render fields as plain annotated
/// assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    /// `class User(TypedDict)`
    TypedDict,
    /// `@dataclass class User`
    Dataclass,
    /// `class User(BaseModel)` (pydantic)
    Pydantic,
    /// `class User(NamedTuple)`
    NamedTuple,
    /// `@define class User` (attrs)
    Attrs,
}

impl StructureKind {
    /// All kinds, in the order they are documented and listed.
    pub const ALL: [StructureKind; 5] = [
        StructureKind::TypedDict,
        StructureKind::Dataclass,
        StructureKind::Pydantic,
        StructureKind::NamedTuple,
        StructureKind::Attrs,
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::TypedDict => "typed_dict",
            StructureKind::Dataclass => "dataclass",
            StructureKind::Pydantic => "pydantic",
            StructureKind::NamedTuple => "namedtuple",
            StructureKind::Attrs => "attrs",
        }
    }

    /// The import this kind needs, as `(module, symbol)`.
    pub fn import(&self) -> (&'static str, &'static str) {
        match self {
            StructureKind::TypedDict => ("typing", "TypedDict"),
            StructureKind::Dataclass => ("dataclasses", "dataclass"),
            StructureKind::Pydantic => ("pydantic", "BaseModel"),
            StructureKind::NamedTuple => ("typing", "NamedTuple"),
            StructureKind::Attrs => ("attrs", "define"),
        }
    }

    /// The base class, for inheritance-based kinds.
    pub fn base(&self) -> Option<&'static str> {
        match self {
            StructureKind::TypedDict => Some("TypedDict"),
            StructureKind::Pydantic => Some("BaseModel"),
            StructureKind::NamedTuple => Some("NamedTuple"),
            StructureKind::Dataclass | StructureKind::Attrs => None,
        }
    }

    /// The decorator (without `@`), for annotation-based kinds.
    pub fn decorator(&self) -> Option<&'static str> {
        match self {
            StructureKind::Dataclass => Some("dataclass"),
            StructureKind::Attrs => Some("define"),
            StructureKind::TypedDict | StructureKind::Pydantic | StructureKind::NamedTuple => None,
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StructureKind {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typed_dict" => Ok(StructureKind::TypedDict),
            "dataclass" => Ok(StructureKind::Dataclass),
            "pydantic" => Ok(StructureKind::Pydantic),
            "namedtuple" => Ok(StructureKind::NamedTuple),
            "attrs" => Ok(StructureKind::Attrs),
            _ => Err(Error::unknown_kind(s)),
        }
    }
}
