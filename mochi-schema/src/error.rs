use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for mochi-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors produced while loading JSON input.
///
/// Inference itself is total; only I/O and parsing can fail.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(mochi::io_error),
        help("check that the file exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON from {origin}")]
    #[diagnostic(code(mochi::parse_error))]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request to '{url}' failed")]
    #[diagnostic(
        code(mochi::http_error),
        help("check the URL and your network connection")
    )]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("expected a JSON object at the top level of {origin}, found {found}")]
    #[diagnostic(
        code(mochi::not_an_object),
        help("field inference needs an object mapping field names to values")
    )]
    NotAnObject {
        origin: String,
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn parse(origin: impl Into<String>, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Parse {
            origin: origin.into(),
            source,
        })
    }

    pub(crate) fn http(url: impl Into<String>, source: reqwest::Error) -> Box<Self> {
        Box::new(Error::Http {
            url: url.into(),
            source,
        })
    }

    pub(crate) fn not_an_object(origin: impl Into<String>, found: &'static str) -> Box<Self> {
        Box::new(Error::NotAnObject {
            origin: origin.into(),
            found,
        })
    }
}
