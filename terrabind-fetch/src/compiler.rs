//! Schema compilation against a staging directory.

use std::{
    io,
    path::{Path, PathBuf},
};

use terrabind_core::{ShellError, shell, write_file};
use thiserror::Error;

/// Failure modes shared by the external compile and package steps.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to write '{path}'")]
    Setup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// Inputs for one schema compilation.
#[derive(Debug)]
pub struct CompileOptions<'a> {
    /// Compilation entry point — the resolved source identifier.
    pub entry_point: &'a str,
    /// Compile-safe artifact name (path separators replaced).
    pub artifact_name: &'a str,
    /// Directory holding the entry point's type declarations.
    pub types_path: PathBuf,
}

/// Capability compiling staged bindings into a multi-language artifact.
///
/// Output is written to a conventional location under `root`, where the
/// packager expects to find it.
pub trait SchemaCompiler {
    /// Tool name used in error messages.
    fn tool(&self) -> &'static str;

    fn compile(&self, root: &Path, opts: &CompileOptions) -> Result<(), ToolError>;
}

/// Compiles staged TypeScript with the `jsii` compiler.
///
/// Writes a jsii package manifest into the staging root, then runs the
/// `jsii` executable there. The python target is named after the
/// compile-safe artifact so the packager's module layout is
/// predictable.
#[derive(Debug, Default)]
pub struct JsiiCompiler;

impl SchemaCompiler for JsiiCompiler {
    fn tool(&self) -> &'static str {
        "jsii"
    }

    fn compile(&self, root: &Path, opts: &CompileOptions) -> Result<(), ToolError> {
        let manifest = serde_json::json!({
            "name": opts.artifact_name,
            "version": "0.0.0",
            "main": format!("{}.js", opts.entry_point),
            "types": format!("{}/index.d.ts", opts.types_path.display()),
            "author": { "name": "terrabind" },
            "license": "MPL-2.0",
            "jsii": {
                "outdir": "dist",
                "targets": {
                    "python": {
                        "distName": opts.artifact_name,
                        "module": opts.artifact_name,
                    },
                },
            },
        });

        let path = root.join("package.json");
        // to_string_pretty on a json! literal cannot fail
        let content = serde_json::to_string_pretty(&manifest).unwrap_or_default();
        write_file(&path, &content).map_err(|source| ToolError::Setup { path, source })?;

        shell("jsii", &["--silence-warnings=reserved-word"], root)?;
        Ok(())
    }
}
