//! Core utilities for the terrabind bindings generator.
//!
//! This crate provides the filesystem and process primitives shared
//! across the terrabind workspace: file writing, overwriting directory
//! moves, identifier sanitizers, subprocess invocation, and scoped
//! staging directories.

mod file;
mod naming;
mod shell;
mod staging;

// File operations
pub use file::{move_dir, write_file};
// Identifier sanitizers
pub use naming::{compile_safe, harvest_safe};
// Subprocess invocation
pub use shell::{ShellError, shell};
// Scoped staging directories
pub use staging::StagingDir;
