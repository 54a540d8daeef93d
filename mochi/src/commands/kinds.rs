use clap::Args;
use eyre::Result;
use mochi_python::StructureKind;

#[derive(Args)]
pub struct KindsCommand {}

impl KindsCommand {
    pub fn run(&self) -> Result<()> {
        println!("Kinds:");
        for kind in StructureKind::ALL {
            let (module, symbol) = kind.import();
            let shape = match (kind.base(), kind.decorator()) {
                (Some(base), _) => format!("class Name({base})"),
                (None, Some(decorator)) => format!("@{decorator} class Name"),
                (None, None) => "class Name".to_string(),
            };
            println!(
                "  {:<11} from {} import {:<10} {}",
                kind.as_str(),
                module,
                symbol,
                shape
            );
        }

        Ok(())
    }
}
