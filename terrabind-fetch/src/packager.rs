//! Multi-language packaging of a compiled artifact.

use std::path::Path;

use terrabind_core::shell;

use crate::{compiler::ToolError, language::Language};

/// Capability turning the schema compiler's output into source code for
/// one target language, under `root/dist/<language>/src/`.
pub trait Packager {
    /// Tool name used in error messages.
    fn tool(&self) -> &'static str;

    fn pack(&self, root: &Path, language: Language) -> Result<(), ToolError>;
}

/// Runs `jsii-pacmak` in the staging root.
///
/// `--code-only` skips distribution packaging; the harvest step only
/// needs the emitted source tree.
#[derive(Debug, Default)]
pub struct JsiiPacmak;

impl Packager for JsiiPacmak {
    fn tool(&self) -> &'static str {
        "jsii-pacmak"
    }

    fn pack(&self, root: &Path, language: Language) -> Result<(), ToolError> {
        shell(
            "jsii-pacmak",
            &["--target", language.as_str(), "--code-only"],
            root,
        )?;
        Ok(())
    }
}
