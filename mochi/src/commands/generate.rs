use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use eyre::Result;
use mochi_python::{Generator, get_builder};
use mochi_schema::{FieldSchema, infer_fields, load_json_from_file, load_json_from_url};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Kind of data structure to generate
    /// (typed_dict, dataclass, pydantic, namedtuple, attrs)
    #[arg(short, long, default_value = "typed_dict", verbatim_doc_comment)]
    pub kind: String,

    /// Name of the generated class
    #[arg(short, long, default_value = "GeneratedModel")]
    pub name: String,

    /// Path to a JSON file to infer fields from
    #[arg(short, long)]
    pub json: Option<PathBuf>,

    /// URL to fetch JSON from
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output file path (defaults to <classname>_<kind>.py)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let builder = get_builder(&self.kind).unwrap_or_exit();
        let fields = self.load_fields();

        let generator = Generator::new(&self.name, builder.kind(), fields);
        let preview = generator.preview();

        println!("{}", "Generated code:".bold());
        println!("{}", preview.content);

        if self.dry_run {
            return Ok(());
        }

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&preview.path));
        generator.generate(&path)?;

        println!("{}", format!("Saved to {}", path.display()).green());
        Ok(())
    }

    fn load_fields(&self) -> FieldSchema {
        let data = if let Some(path) = &self.json {
            println!(
                "{}",
                format!("Loading JSON from file: {}", path.display()).cyan()
            );
            Some(load_json_from_file(path).unwrap_or_exit())
        } else if let Some(url) = &self.url {
            println!("{}", format!("Fetching JSON from URL: {url}").cyan());
            Some(load_json_from_url(url).unwrap_or_exit())
        } else {
            None
        };

        match data {
            Some(data) => {
                let fields = infer_fields(&data);
                println!(
                    "{}",
                    format!("Inferred {} fields from JSON", fields.len()).green()
                );
                fields
            }
            None => {
                println!("{}", "Using default example fields".yellow());
                default_fields()
            }
        }
    }
}

fn default_fields() -> FieldSchema {
    FieldSchema::from([
        ("user_id".to_string(), "int".to_string()),
        ("username".to_string(), "str".to_string()),
        ("is_active".to_string(), "bool".to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields_scenario() {
        let fields = default_fields();

        assert_eq!(fields["user_id"], "int");
        assert_eq!(fields["username"], "str");
        assert_eq!(fields["is_active"], "bool");
    }
}
