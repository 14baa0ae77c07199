//! Harvesting packager output into the requested output directory.

use std::path::Path;

use terrabind_core::{move_dir, write_file};

use crate::{
    error::{Error, Result},
    language::Language,
};

/// Per-language rules for relocating the packager's conventional
/// output.
///
/// Adding a target language means adding one variant here with its own
/// convention path and marker rules; the pipeline stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestStrategy {
    Python,
}

impl HarvestStrategy {
    /// Resolve the harvest strategy for a target language.
    ///
    /// Fails with [`Error::UnsupportedLanguage`] for languages without
    /// a strategy, before any staging directory is created.
    ///
    /// # Panics
    ///
    /// TypeScript output is written directly and short-circuits before
    /// harvesting; asking for its strategy is a programming error.
    pub fn for_language(language: Language) -> Result<Self> {
        match language {
            Language::TypeScript => {
                unreachable!("typescript bindings are written directly, never harvested")
            }
            Language::Python => Ok(HarvestStrategy::Python),
            Language::DotNet | Language::Java => Err(Error::UnsupportedLanguage { language }),
        }
    }

    pub fn language(&self) -> Language {
        match self {
            HarvestStrategy::Python => Language::Python,
        }
    }

    /// Move one harvested module from the staging directory into the
    /// output directory, replacing any prior output of the same name.
    pub fn harvest(&self, staging: &Path, outdir: &Path, sanitized_name: &str) -> Result<()> {
        match self {
            HarvestStrategy::Python => {
                let packaged = staging
                    .join("dist")
                    .join("python")
                    .join("src")
                    .join(sanitized_name);
                let target = outdir.join(sanitized_name);
                move_dir(&packaged, &target).map_err(|source| Error::Harvest {
                    language: self.language(),
                    name: sanitized_name.to_string(),
                    source,
                })
            }
        }
    }

    /// Per-request finishing touches at the output-directory root.
    ///
    /// Python needs an `__init__.py` marker so IDEs and linters treat
    /// the output directory as a package. Written once per request, not
    /// once per harvested module.
    pub fn finalize(&self, outdir: &Path) -> Result<()> {
        match self {
            HarvestStrategy::Python => {
                let path = outdir.join("__init__.py");
                write_file(&path, "").map_err(|source| Error::Io { path, source })
            }
        }
    }
}
