//! The generation and harvest orchestrator.

use std::{fs, path::PathBuf};

use terrabind_codegen::{CodeEmitter, SourceGenerator};
use terrabind_core::{StagingDir, compile_safe, harvest_safe};

use crate::{
    compiler::{CompileOptions, JsiiCompiler, SchemaCompiler},
    constraint::{ConstraintParser, ConstraintResolver},
    error::{Error, Result},
    harvest::HarvestStrategy,
    language::Language,
    packager::{JsiiPacmak, Packager},
    types_path::{ModuleTypes, ProviderTypes, TypesPath},
};

/// One binding-generation request.
#[derive(Debug)]
pub struct FetchOptions {
    pub language: Language,
    /// Final output directory; created if missing.
    pub output: PathBuf,
    /// Provider or module constraint strings, processed in order.
    pub names: Vec<String>,
    /// Resolve names as modules (fully-qualified) rather than providers.
    pub is_module: bool,
}

/// What a completed request produced.
#[derive(Debug)]
pub struct FetchReport {
    pub language: Language,
    pub output: PathBuf,
    /// Module directories harvested into the output directory. Empty
    /// for TypeScript, which is written directly.
    pub harvested: Vec<String>,
}

/// Coordinates emission, staging, compilation, packaging, and harvest
/// for one request.
///
/// TypeScript is always emitted first, for every requested name: it is
/// the canonical intermediate form all other languages are derived
/// from. For TypeScript requests the emission is saved directly and the
/// pipeline stops. For every other supported language, each name gets
/// its own scoped staging directory where the shared emission is
/// persisted, compiled, and packaged before its output is harvested.
pub struct Pipeline {
    generator: Box<dyn SourceGenerator>,
    resolver: Box<dyn ConstraintResolver>,
    compiler: Box<dyn SchemaCompiler>,
    packager: Box<dyn Packager>,
    types: Box<dyn TypesPath>,
}

impl Pipeline {
    pub fn new(
        generator: Box<dyn SourceGenerator>,
        resolver: Box<dyn ConstraintResolver>,
        compiler: Box<dyn SchemaCompiler>,
        packager: Box<dyn Packager>,
        types: Box<dyn TypesPath>,
    ) -> Self {
        Self {
            generator,
            resolver,
            compiler,
            packager,
            types,
        }
    }

    /// Pipeline for provider bindings, wired with the jsii toolchain.
    pub fn for_providers(generator: Box<dyn SourceGenerator>) -> Self {
        Self::new(
            generator,
            Box::new(ConstraintParser),
            Box::new(JsiiCompiler),
            Box::new(JsiiPacmak),
            Box::new(ProviderTypes),
        )
    }

    /// Pipeline for module bindings, wired with the jsii toolchain.
    pub fn for_modules(generator: Box<dyn SourceGenerator>) -> Self {
        Self::new(
            generator,
            Box::new(ConstraintParser),
            Box::new(JsiiCompiler),
            Box::new(JsiiPacmak),
            Box::new(ModuleTypes),
        )
    }

    /// Run one request to completion.
    ///
    /// Names are processed sequentially; the first failure aborts the
    /// request so a partially harvested multi-provider output is never
    /// mistaken for a complete one. Staging directories are released on
    /// every exit path.
    pub fn run(&self, options: &FetchOptions) -> Result<FetchReport> {
        fs::create_dir_all(&options.output).map_err(|source| Error::Io {
            path: options.output.clone(),
            source,
        })?;

        let mut code = CodeEmitter::new();
        self.generator
            .generate(&mut code, &options.names, &options.output)
            .map_err(|source| Error::Generation { source })?;

        if options.language == Language::TypeScript {
            code.save(&options.output)
                .map_err(|source| Error::Persist { source })?;
            return Ok(FetchReport {
                language: options.language,
                output: options.output.clone(),
                harvested: Vec::new(),
            });
        }

        // Resolved before any staging directory exists, so unsupported
        // languages fail without touching the filesystem.
        let strategy = HarvestStrategy::for_language(options.language)?;

        let mut harvested = Vec::with_capacity(options.names.len());
        for name in &options.names {
            harvested.push(self.fetch_one(&code, strategy, name, options)?);
        }

        strategy.finalize(&options.output)?;

        Ok(FetchReport {
            language: options.language,
            output: options.output.clone(),
            harvested,
        })
    }

    /// Stage, compile, package, and harvest bindings for one name.
    ///
    /// The emitter is shared read-only across iterations: generation
    /// ran once, and each staging directory receives the same persisted
    /// emission.
    fn fetch_one(
        &self,
        code: &CodeEmitter,
        strategy: HarvestStrategy,
        name: &str,
        options: &FetchOptions,
    ) -> Result<String> {
        let constraint = self
            .resolver
            .resolve(name)
            .map_err(|source| Error::Resolution {
                name: name.to_string(),
                source,
            })?;
        let source = if options.is_module {
            constraint.fqn
        } else {
            constraint.name
        };
        let artifact = compile_safe(&source);

        let staging = StagingDir::new("fetch").map_err(|source| Error::Staging {
            name: name.to_string(),
            source,
        })?;

        code.save(staging.path()).map_err(|source| Error::Stage {
            name: name.to_string(),
            source,
        })?;

        self.compiler
            .compile(
                staging.path(),
                &CompileOptions {
                    entry_point: &source,
                    artifact_name: &artifact,
                    types_path: self.types.types_path(&source),
                },
            )
            .map_err(|source| Error::ExternalTool {
                tool: self.compiler.tool(),
                name: name.to_string(),
                source,
            })?;

        self.packager
            .pack(staging.path(), options.language)
            .map_err(|source| Error::ExternalTool {
                tool: self.packager.tool(),
                name: name.to_string(),
                source,
            })?;

        let module = harvest_safe(&source);
        strategy.harvest(staging.path(), &options.output, &module)?;

        // staging drops here, deleting intermediate state whatever the
        // outcome of the steps above
        Ok(module)
    }
}
