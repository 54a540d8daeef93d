//! Python statement nodes for class bodies.

use mochi_codegen::{CodeFragment, Renderable};

/// A statement inside a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// An annotated assignment without a value (`name: type`).
    AnnAssign { target: String, annotation: String },
    /// The `pass` placeholder statement.
    Pass,
}

impl Stmt {
    /// Create an annotated field declaration.
    pub fn ann_assign(target: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self::AnnAssign {
            target: target.into(),
            annotation: annotation.into(),
        }
    }
}

impl Renderable for Stmt {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::AnnAssign { target, annotation } => {
                vec![CodeFragment::Line(format!("{}: {}", target, annotation))]
            }
            Self::Pass => vec![CodeFragment::Line("pass".to_string())],
        }
    }
}
