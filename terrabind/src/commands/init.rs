use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use terrabind_fetch::Language;

use crate::config::Config;

#[derive(Args)]
pub struct InitCommand {
    /// Target language for generated bindings
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Path of the config file to create
    #[arg(short, long, default_value = "terrabind.json")]
    pub config: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.config.exists() {
            bail!("'{}' already exists", self.config.display());
        }

        let config = Config {
            language: self.language.unwrap_or(Language::TypeScript),
            terraform_providers: vec!["aws@~> 2.0".to_string()],
            ..Config::default()
        };

        fs::write(&self.config, config.render())
            .wrap_err_with(|| format!("Failed to write '{}'", self.config.display()))?;

        println!("Created {}", self.config.display());
        println!("Run 'terrabind fetch' to generate bindings");
        Ok(())
    }
}
