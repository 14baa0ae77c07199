//! Project configuration (`terrabind.json`).

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use terrabind_fetch::Language;

/// Per-project settings, read from `terrabind.json` in the working
/// directory.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Target language for generated bindings.
    pub language: Language,
    /// Output directory for generated bindings.
    pub output: PathBuf,
    /// Provider constraints, e.g. "aws@~> 2.0".
    pub terraform_providers: Vec<String>,
    /// Module constraints, e.g. "terraform-aws-modules/vpc/aws".
    pub terraform_modules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::TypeScript,
            output: PathBuf::from(".gen"),
            terraform_providers: Vec::new(),
            terraform_modules: Vec::new(),
        }
    }
}

impl Config {
    /// Read a config file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse '{}'", path.display()))
    }

    /// Read a config file, falling back to defaults when it is absent.
    pub fn open_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn render(&self) -> String {
        // serializing a plain struct cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default() + "\n"
    }
}
