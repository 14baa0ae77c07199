use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use terrabind_codegen::ScaffoldGenerator;
use terrabind_fetch::{FetchOptions, FetchReport, Language, Pipeline};

use super::UnwrapOrExit;
use crate::config::Config;

#[derive(Args)]
pub struct FetchCommand {
    /// Provider or module constraints (defaults to terrabind.json entries)
    pub names: Vec<String>,

    /// Target language for generated bindings
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output directory for generated bindings
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat the given names as modules rather than providers
    #[arg(long)]
    pub module: bool,

    /// Path to terrabind.json (defaults to ./terrabind.json)
    #[arg(short, long, default_value = "terrabind.json")]
    pub config: PathBuf,
}

impl FetchCommand {
    /// Run the fetch command
    pub fn run(&self) -> Result<()> {
        let config = Config::open_or_default(&self.config)?;
        let language = self.language.unwrap_or(config.language);
        let output = self.output.clone().unwrap_or(config.output);

        let (providers, modules) = if self.names.is_empty() {
            (config.terraform_providers, config.terraform_modules)
        } else if self.module {
            (Vec::new(), self.names.clone())
        } else {
            (self.names.clone(), Vec::new())
        };

        if providers.is_empty() && modules.is_empty() {
            println!("Nothing to fetch: no providers or modules configured");
            return Ok(());
        }

        if !providers.is_empty() {
            let pipeline = Pipeline::for_providers(Box::new(ScaffoldGenerator));
            let report = pipeline
                .run(&FetchOptions {
                    language,
                    output: output.clone(),
                    names: providers,
                    is_module: false,
                })
                .unwrap_or_exit();
            Self::print_report("provider", &report);
        }

        if !modules.is_empty() {
            let pipeline = Pipeline::for_modules(Box::new(ScaffoldGenerator));
            let report = pipeline
                .run(&FetchOptions {
                    language,
                    output,
                    names: modules,
                    is_module: true,
                })
                .unwrap_or_exit();
            Self::print_report("module", &report);
        }

        Ok(())
    }

    fn print_report(kind: &str, report: &FetchReport) {
        println!(
            "Generated {} {} bindings: {}",
            report.language,
            kind,
            report.output.display()
        );
        for module in &report.harvested {
            println!("  + {}", module);
        }
    }
}
