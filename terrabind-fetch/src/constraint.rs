//! Provider and module constraint resolution.

use thiserror::Error;

/// A resolved provider/module identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Fully-qualified source path (e.g., "hashicorp/aws").
    pub fqn: String,
    /// Short name, the last path segment (e.g., "aws").
    pub name: String,
}

#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("constraint '{name}' has an empty source")]
    EmptySource { name: String },
}

/// Capability for turning a raw constraint string into a [`Constraint`].
pub trait ConstraintResolver {
    fn resolve(&self, name: &str) -> Result<Constraint, ConstraintError>;
}

/// Default resolver parsing `[namespace/]name[@version]` strings.
///
/// The version suffix only pins what to download and never participates
/// in naming, so it is stripped here.
#[derive(Debug, Default)]
pub struct ConstraintParser;

impl ConstraintResolver for ConstraintParser {
    fn resolve(&self, name: &str) -> Result<Constraint, ConstraintError> {
        let source = name
            .split_once('@')
            .map_or(name, |(source, _)| source)
            .trim();

        let short = source
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConstraintError::EmptySource {
                name: name.to_string(),
            })?;

        Ok(Constraint {
            fqn: source.to_string(),
            name: short.to_string(),
        })
    }
}
