use std::path::PathBuf;

use miette::Diagnostic;
use terrabind_codegen::EmitError;
use thiserror::Error;

use crate::{compiler::ToolError, constraint::ConstraintError, language::Language};

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy of the generation and harvest pipeline.
///
/// Every failure aborts its per-name iteration and, because names are
/// processed sequentially with no retry, the whole request. Staging
/// directories are still cleaned up. Messages identify the name and
/// the stage that failed.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported language '{language}' (yet)")]
    #[diagnostic(
        code(terrabind::unsupported_language),
        help("supported targets are: typescript, python")
    )]
    UnsupportedLanguage { language: Language },

    #[error("failed to resolve constraint '{name}'")]
    #[diagnostic(code(terrabind::resolution))]
    Resolution {
        name: String,
        #[source]
        source: ConstraintError,
    },

    #[error("failed to generate typescript bindings")]
    #[diagnostic(code(terrabind::generation))]
    Generation {
        #[source]
        source: EmitError,
    },

    #[error("failed to write generated bindings")]
    #[diagnostic(code(terrabind::persist))]
    Persist {
        #[source]
        source: EmitError,
    },

    #[error("failed to create staging directory for '{name}'")]
    #[diagnostic(code(terrabind::staging))]
    Staging {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stage generated code for '{name}'")]
    #[diagnostic(code(terrabind::staging))]
    Stage {
        name: String,
        #[source]
        source: EmitError,
    },

    #[error("{tool} failed for '{name}'")]
    #[diagnostic(
        code(terrabind::external_tool),
        help("make sure the tool is installed and on PATH, then inspect its stderr")
    )]
    ExternalTool {
        tool: &'static str,
        name: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to harvest {language} bindings for '{name}'")]
    #[diagnostic(code(terrabind::harvest))]
    Harvest {
        language: Language,
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to prepare output directory '{path}'")]
    #[diagnostic(code(terrabind::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
