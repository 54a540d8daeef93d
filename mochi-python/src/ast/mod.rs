//! Python syntax-tree builders.
//!
//! These provide a high-level API for constructing Python syntax,
//! which is then rendered via CodeBuilder. Building declarations from
//! nodes rather than templates keeps indentation and structure correct
//! by construction.

mod classes;
mod imports;
mod stmt;

pub use classes::ClassDef;
pub use imports::ImportFrom;
pub use stmt::Stmt;
