use miette::Diagnostic;
use thiserror::Error;

/// Result type for mochi-python operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors produced by the builder registry.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown structure kind '{kind}'")]
    #[diagnostic(
        code(mochi::unknown_kind),
        help("valid kinds are: typed_dict, dataclass, pydantic, namedtuple, attrs")
    )]
    UnknownKind { kind: String },
}

impl Error {
    pub(crate) fn unknown_kind(kind: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownKind { kind: kind.into() })
    }
}
