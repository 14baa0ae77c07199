//! End-to-end pipeline behavior with mock external tooling.
//!
//! The jsii compiler and packager are replaced by recording mocks: the
//! compiler captures every invocation, the packager fabricates the
//! conventional `dist/<language>/src/<module>` output the real tool
//! would produce.

use std::{
    cell::RefCell,
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use tempfile::TempDir;
use terrabind_codegen::{CodeEmitter, EmitError, SourceGenerator};
use terrabind_core::{ShellError, write_file};
use terrabind_fetch::{
    CompileOptions, ConstraintError, ConstraintParser, ConstraintResolver, Error, FetchOptions,
    Language, Packager, Pipeline, ProviderTypes, SchemaCompiler, ToolError, TypesPath,
};

/// Emits one marker file so saves are observable.
struct MarkerGenerator;

impl SourceGenerator for MarkerGenerator {
    fn generate(
        &self,
        code: &mut CodeEmitter,
        names: &[String],
        _output: &Path,
    ) -> Result<(), EmitError> {
        code.open_file("index.ts");
        for name in names {
            code.line(format!("// {}", name));
        }
        code.close_file();
        Ok(())
    }
}

struct FailingGenerator;

impl SourceGenerator for FailingGenerator {
    fn generate(
        &self,
        _code: &mut CodeEmitter,
        _names: &[String],
        _output: &Path,
    ) -> Result<(), EmitError> {
        Err(EmitError::Generation {
            message: "schema unavailable".to_string(),
        })
    }
}

struct FailingResolver;

impl ConstraintResolver for FailingResolver {
    fn resolve(
        &self,
        name: &str,
    ) -> Result<terrabind_fetch::Constraint, ConstraintError> {
        Err(ConstraintError::EmptySource {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
struct CompileCall {
    root: PathBuf,
    entry_point: String,
    artifact_name: String,
    types_path: PathBuf,
    staged_code_present: bool,
}

/// Records every compile invocation; never fails.
struct RecordingCompiler {
    calls: Rc<RefCell<Vec<CompileCall>>>,
}

impl SchemaCompiler for RecordingCompiler {
    fn tool(&self) -> &'static str {
        "mock-compiler"
    }

    fn compile(&self, root: &Path, opts: &CompileOptions) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(CompileCall {
            root: root.to_path_buf(),
            entry_point: opts.entry_point.to_string(),
            artifact_name: opts.artifact_name.to_string(),
            types_path: opts.types_path.clone(),
            staged_code_present: root.join("index.ts").exists(),
        });
        Ok(())
    }
}

/// Fabricates packager output for one preset module name per call, and
/// optionally fails on the nth call.
struct FakePacmak {
    modules: RefCell<VecDeque<String>>,
    calls: Rc<RefCell<usize>>,
    fail_on_call: Option<usize>,
}

impl FakePacmak {
    fn new(modules: &[&str], calls: Rc<RefCell<usize>>) -> Self {
        Self {
            modules: RefCell::new(modules.iter().map(|m| m.to_string()).collect()),
            calls,
            fail_on_call: None,
        }
    }

    fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }
}

impl Packager for FakePacmak {
    fn tool(&self) -> &'static str {
        "mock-pacmak"
    }

    fn pack(&self, root: &Path, language: Language) -> Result<(), ToolError> {
        let call = *self.calls.borrow();
        *self.calls.borrow_mut() += 1;

        if self.fail_on_call == Some(call) {
            return Err(ToolError::Shell(ShellError::Exit {
                program: "mock-pacmak".to_string(),
                code: 1,
                stderr: "packaging failed".to_string(),
            }));
        }

        let module = self.modules.borrow_mut().pop_front().expect("preset module name");
        let target = root
            .join("dist")
            .join(language.as_str())
            .join("src")
            .join(&module);
        write_file(&target.join("module.py"), &format!("# {}\n", module)).unwrap();
        Ok(())
    }
}

struct Harness {
    pipeline: Pipeline,
    compile_calls: Rc<RefCell<Vec<CompileCall>>>,
    pack_calls: Rc<RefCell<usize>>,
    output: TempDir,
}

impl Harness {
    fn new(modules: &[&str]) -> Self {
        Self::build(modules, None, false)
    }

    fn with_failing_pack(modules: &[&str], fail_on_call: usize) -> Self {
        Self::build(modules, Some(fail_on_call), false)
    }

    fn build(modules: &[&str], fail_on_call: Option<usize>, modules_types: bool) -> Self {
        let compile_calls = Rc::new(RefCell::new(Vec::new()));
        let pack_calls = Rc::new(RefCell::new(0));

        let mut pacmak = FakePacmak::new(modules, pack_calls.clone());
        if let Some(call) = fail_on_call {
            pacmak = pacmak.failing_on(call);
        }

        let types: Box<dyn TypesPath> = if modules_types {
            Box::new(terrabind_fetch::ModuleTypes)
        } else {
            Box::new(ProviderTypes)
        };

        Self {
            pipeline: Pipeline::new(
                Box::new(MarkerGenerator),
                Box::new(ConstraintParser),
                Box::new(RecordingCompiler {
                    calls: compile_calls.clone(),
                }),
                Box::new(pacmak),
                types,
            ),
            compile_calls,
            pack_calls,
            output: TempDir::new().unwrap(),
        }
    }

    fn options(&self, language: Language, names: &[&str], is_module: bool) -> FetchOptions {
        FetchOptions {
            language,
            output: self.output.path().to_path_buf(),
            names: names.iter().map(|n| n.to_string()).collect(),
            is_module,
        }
    }
}

#[test]
fn typescript_is_written_directly() {
    let h = Harness::new(&[]);

    let report = h
        .pipeline
        .run(&h.options(Language::TypeScript, &["aws", "google"], false))
        .unwrap();

    // Direct emission, no staging, no compile, no packaging, no marker.
    assert!(h.output.path().join("index.ts").exists());
    assert!(h.compile_calls.borrow().is_empty());
    assert_eq!(*h.pack_calls.borrow(), 0);
    assert!(!h.output.path().join("__init__.py").exists());
    assert!(report.harvested.is_empty());
}

#[test]
fn python_stages_and_harvests_each_name() {
    let h = Harness::new(&["aws", "custom_provider"]);

    let report = h
        .pipeline
        .run(&h.options(Language::Python, &["aws@~> 2.0", "custom-provider"], false))
        .unwrap();

    assert_eq!(report.harvested, vec!["aws", "custom_provider"]);
    assert!(h.output.path().join("aws").join("module.py").exists());
    assert!(
        h.output
            .path()
            .join("custom_provider")
            .join("module.py")
            .exists()
    );

    let calls = h.compile_calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].entry_point, "aws");
    assert_eq!(calls[0].artifact_name, "aws");
    assert_eq!(calls[0].types_path, PathBuf::from("providers/aws"));
    assert_eq!(calls[1].entry_point, "custom-provider");
    assert_eq!(calls[1].artifact_name, "custom-provider");

    // The shared emission was persisted into every staging directory.
    assert!(calls.iter().all(|c| c.staged_code_present));
}

#[test]
fn staging_directories_are_scoped_per_name_and_released() {
    let h = Harness::new(&["aws", "google"]);

    h.pipeline
        .run(&h.options(Language::Python, &["aws", "google"], false))
        .unwrap();

    let calls = h.compile_calls.borrow();
    assert_ne!(calls[0].root, calls[1].root);
    assert!(calls.iter().all(|c| !c.root.exists()));
}

#[test]
fn module_names_use_fully_qualified_source() {
    let h = Harness::build(&["my_org/custom_module"], None, true);

    let report = h
        .pipeline
        .run(&h.options(Language::Python, &["my-org/custom-module@1.2"], true))
        .unwrap();

    let calls = h.compile_calls.borrow();
    assert_eq!(calls[0].entry_point, "my-org/custom-module");
    // Compile-safe: slashes replaced, hyphens kept.
    assert_eq!(calls[0].artifact_name, "my-org_custom-module");
    assert_eq!(
        calls[0].types_path,
        PathBuf::from("modules/my-org/custom-module")
    );
    // Harvest-safe: hyphens replaced, slashes kept.
    assert_eq!(report.harvested, vec!["my_org/custom_module"]);
    assert!(
        h.output
            .path()
            .join("my_org")
            .join("custom_module")
            .join("module.py")
            .exists()
    );
}

#[test]
fn package_marker_is_written_once_at_output_root() {
    let h = Harness::new(&["aws", "google"]);

    h.pipeline
        .run(&h.options(Language::Python, &["aws", "google"], false))
        .unwrap();

    let marker = h.output.path().join("__init__.py");
    assert_eq!(fs::read_to_string(marker).unwrap(), "");
    // The marker sits at the root, not inside harvested modules.
    assert!(!h.output.path().join("aws").join("__init__.py").exists());
}

#[test]
fn unsupported_language_fails_before_any_staging() {
    let h = Harness::new(&[]);

    let err = h
        .pipeline
        .run(&h.options(Language::DotNet, &["aws"], false))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedLanguage {
            language: Language::DotNet
        }
    ));
    assert!(h.compile_calls.borrow().is_empty());
    assert_eq!(*h.pack_calls.borrow(), 0);
}

#[test]
fn packager_failure_short_circuits_remaining_names() {
    let h = Harness::with_failing_pack(&["aws", "google", "azure"], 1);

    let err = h
        .pipeline
        .run(&h.options(Language::Python, &["aws", "google", "azure"], false))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::ExternalTool {
            tool: "mock-pacmak",
            ..
        }
    ));

    // The third name was never attempted.
    let calls = h.compile_calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(*h.pack_calls.borrow(), 2);

    // The failed iteration's staging directory was still released.
    assert!(calls.iter().all(|c| !c.root.exists()));

    // Only the first name made it into the output, and the request as a
    // whole reported failure.
    assert!(h.output.path().join("aws").exists());
    assert!(!h.output.path().join("google").exists());
    assert!(!h.output.path().join("azure").exists());
}

#[test]
fn rerun_overwrites_prior_harvested_output() {
    let first = Harness::new(&["aws"]);
    let options = first.options(Language::Python, &["aws"], false);

    // Seed stale output from a differently-shaped prior artifact.
    write_file(&first.output.path().join("aws").join("stale.py"), "old").unwrap();

    first.pipeline.run(&options).unwrap();

    let harvested = first.output.path().join("aws");
    assert!(harvested.join("module.py").exists());
    assert!(!harvested.join("stale.py").exists());
}

#[test]
fn resolution_failure_aborts_before_staging() {
    let h = Harness::new(&[]);
    let pipeline = Pipeline::new(
        Box::new(MarkerGenerator),
        Box::new(FailingResolver),
        Box::new(RecordingCompiler {
            calls: h.compile_calls.clone(),
        }),
        Box::new(FakePacmak::new(&[], h.pack_calls.clone())),
        Box::new(ProviderTypes),
    );

    let err = pipeline
        .run(&h.options(Language::Python, &["aws"], false))
        .unwrap_err();

    assert!(matches!(err, Error::Resolution { .. }));
    assert!(h.compile_calls.borrow().is_empty());
}

#[test]
fn generation_failure_is_fatal_with_no_fallback() {
    let h = Harness::new(&[]);
    let pipeline = Pipeline::new(
        Box::new(FailingGenerator),
        Box::new(ConstraintParser),
        Box::new(RecordingCompiler {
            calls: h.compile_calls.clone(),
        }),
        Box::new(FakePacmak::new(&[], h.pack_calls.clone())),
        Box::new(ProviderTypes),
    );

    let err = pipeline
        .run(&h.options(Language::Python, &["aws"], false))
        .unwrap_err();

    assert!(matches!(err, Error::Generation { .. }));
    assert!(h.compile_calls.borrow().is_empty());
    assert_eq!(*h.pack_calls.borrow(), 0);
}
