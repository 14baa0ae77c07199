//! Staged code emission for the terrabind bindings generator.
//!
//! `CodeEmitter` accumulates generated TypeScript source in memory and
//! persists it on demand, either directly into the caller's output
//! directory or into a staging directory for cross-language packaging.
//! `SourceGenerator` is the seam where schema-driven generators plug
//! in; the built-in [`ScaffoldGenerator`] emits constraint scaffolding
//! only.

mod emitter;
mod generator;

pub use emitter::{CodeEmitter, EmitError};
pub use generator::{ScaffoldGenerator, SourceGenerator};
