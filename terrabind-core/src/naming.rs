//! Identifier sanitizers for staged artifacts.
//!
//! Two distinct transformations: compile-safe names feed the schema
//! compiler (slashes are not valid in artifact names), harvest-safe
//! names match the packager's on-disk module directories (hyphens are
//! not valid in module names). They must not be conflated.

/// Sanitize a source identifier for use as a compilation artifact name
/// (e.g., "org/custom-module" -> "org_custom-module").
pub fn compile_safe(source: &str) -> String {
    source.replace('/', "_")
}

/// Sanitize a source identifier for use as a harvested module directory
/// name (e.g., "custom-provider" -> "custom_provider").
pub fn harvest_safe(source: &str) -> String {
    source.replace('-', "_")
}
