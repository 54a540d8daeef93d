//! JSON loading and field type inference for the mochi generator.
//!
//! This crate owns the schema side of the pipeline: load a JSON object
//! from a file or URL, then infer a [`FieldSchema`] (ordered mapping of
//! field names to Python type annotations) from it. The generator
//! crates consume the schema; they never touch JSON directly.

mod error;
mod infer;
mod load;

pub use error::{Error, Result};
pub use infer::{FieldSchema, infer_fields, infer_type};
pub use load::{load_json_from_file, load_json_from_url};
