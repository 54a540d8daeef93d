//! Python data-structure builders for the mochi generator.
//!
//! Takes a [`FieldSchema`](mochi_schema::FieldSchema) and produces
//! Python source for one of five record-style declarations: TypedDict,
//! dataclass, pydantic model, NamedTuple, or attrs class. Declarations
//! are assembled from syntax-tree nodes ([`ast`]) rendered through
//! `mochi-codegen`, never by string templating.
//!
//! # Module Organization
//!
//! - [`ast`] - Python syntax-tree builders (ImportFrom, ClassDef, statements)
//! - [`StructureKind`] - The five supported declaration shapes
//! - [`StructureBuilder`] / [`get_builder`] - Assembly and registry
//! - [`Generator`] - Output file naming, preview, and writing

pub mod ast;

mod builder;
mod error;
mod generator;
mod kind;

pub use builder::{StructureBuilder, get_builder};
pub use error::{Error, Result};
pub use generator::{Generator, PreviewFile};
pub use kind::StructureKind;
