//! The source generation seam.

use std::path::Path;

use terrabind_core::compile_safe;

use crate::{CodeEmitter, EmitError};

/// Capability for emitting primary-language (TypeScript) bindings.
///
/// TypeScript is the canonical intermediate form: the pipeline always
/// runs the generator once per request, and derives every other target
/// language from the emitted code. Schema-driven generators implement
/// this trait; the pipeline never cares how the source is rendered.
pub trait SourceGenerator {
    /// Emit TypeScript bindings for every requested name into `code`.
    ///
    /// `output` is the final output directory of the request, available
    /// to generators that look up previously generated type packages.
    fn generate(
        &self,
        code: &mut CodeEmitter,
        names: &[String],
        output: &Path,
    ) -> Result<(), EmitError>;
}

/// Minimal built-in generator emitting constraint scaffolding.
///
/// Emits one module per requested name carrying its resolved source and
/// version constraint, plus a `constraints.ts` index. Schema-driven
/// rendering replaces this by supplying another [`SourceGenerator`].
#[derive(Debug, Default)]
pub struct ScaffoldGenerator;

impl SourceGenerator for ScaffoldGenerator {
    fn generate(
        &self,
        code: &mut CodeEmitter,
        names: &[String],
        _output: &Path,
    ) -> Result<(), EmitError> {
        code.open_file("constraints.ts");
        code.line("export const constraints = [");
        for name in names {
            code.line(format!("  {:?},", name));
        }
        code.line("];").close_file();

        for name in names {
            let (source, version) = split_constraint(name);
            let module = compile_safe(source);
            code.open_file(format!("{}/index.ts", module))
                .line(format!("export const source = {:?};", source))
                .line(format!("export const version = {:?};", version))
                .close_file();
        }
        Ok(())
    }
}

/// Split `name[@version]` into its source and version parts.
fn split_constraint(name: &str) -> (&str, &str) {
    match name.split_once('@') {
        Some((source, version)) => (source.trim(), version.trim()),
        None => (name.trim(), "*"),
    }
}
