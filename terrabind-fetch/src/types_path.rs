//! Type-declaration lookup strategies.

use std::path::PathBuf;

/// Capability mapping a source identifier to the directory holding its
/// type declarations. Selected once at pipeline construction: provider
/// lookups and module lookups live under different roots.
pub trait TypesPath {
    fn types_path(&self, source: &str) -> PathBuf;
}

/// Provider type declarations live under `providers/<source>`.
#[derive(Debug, Default)]
pub struct ProviderTypes;

impl TypesPath for ProviderTypes {
    fn types_path(&self, source: &str) -> PathBuf {
        PathBuf::from("providers").join(source)
    }
}

/// Module type declarations live under `modules/<source>`.
#[derive(Debug, Default)]
pub struct ModuleTypes;

impl TypesPath for ModuleTypes {
    fn types_path(&self, source: &str) -> PathBuf {
        PathBuf::from("modules").join(source)
    }
}
