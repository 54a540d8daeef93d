//! Output assembly: file naming, preview, and writing.

use std::fs;
use std::path::Path;

use eyre::Result;
use mochi_schema::FieldSchema;

use crate::builder::StructureBuilder;
use crate::kind::StructureKind;

/// A generated file for preview.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Pairs a class name, kind, and field schema into one output file.
pub struct Generator {
    class_name: String,
    kind: StructureKind,
    fields: FieldSchema,
}

impl Generator {
    pub fn new(class_name: impl Into<String>, kind: StructureKind, fields: FieldSchema) -> Self {
        Self {
            class_name: class_name.into(),
            kind,
            fields,
        }
    }

    /// Default output file name: `<classname_lower>_<kind>.py`.
    pub fn default_output_path(&self) -> String {
        format!("{}_{}.py", self.class_name.to_lowercase(), self.kind)
    }

    /// Render the declaration source.
    pub fn render(&self) -> String {
        StructureBuilder::new(self.kind).build(&self.class_name, &self.fields)
    }

    /// Preview the generated file without writing to disk.
    pub fn preview(&self) -> PreviewFile {
        PreviewFile {
            path: self.default_output_path(),
            content: self.render(),
        }
    }

    /// Write the generated file to the given path, creating parent
    /// directories as needed. Always overwrites.
    pub fn generate(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render())?;
        Ok(())
    }
}
