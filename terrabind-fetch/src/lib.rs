//! Generation and harvest pipeline for provider bindings.
//!
//! TypeScript bindings are emitted directly; every other supported
//! target language is derived from that emission by persisting it into
//! a scoped staging directory, running the jsii schema compiler and
//! `jsii-pacmak`, and harvesting the packager's conventional output
//! into the requested output directory.

mod compiler;
mod constraint;
mod error;
mod harvest;
mod language;
mod packager;
mod pipeline;
mod types_path;

pub use compiler::{CompileOptions, JsiiCompiler, SchemaCompiler, ToolError};
pub use constraint::{Constraint, ConstraintError, ConstraintParser, ConstraintResolver};
pub use error::{Error, Result};
pub use harvest::HarvestStrategy;
pub use language::Language;
pub use packager::{JsiiPacmak, Packager};
pub use pipeline::{FetchOptions, FetchReport, Pipeline};
pub use types_path::{ModuleTypes, ProviderTypes, TypesPath};
