//! Target languages for binding generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Target languages recognized by the pipeline.
///
/// TypeScript is the primary language: bindings are emitted directly,
/// with no external compile step. Python is derived from the TypeScript
/// emission through the staging pipeline. The remaining variants are
/// recognized but have no harvest strategy yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript (direct emission)
    TypeScript,
    /// Python (staged, compiled, harvested)
    Python,
    /// C#/.NET (recognized, not yet supported)
    DotNet,
    /// Java (recognized, not yet supported)
    Java,
}

impl Language {
    /// Languages the pipeline can actually produce bindings for.
    pub const SUPPORTED: &'static [Language] = &[Language::TypeScript, Language::Python];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::DotNet => "dotnet",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::TypeScript),
            "python" | "py" => Ok(Language::Python),
            "dotnet" | "csharp" => Ok(Language::DotNet),
            "java" => Ok(Language::Java),
            _ => Err(format!(
                "unknown language '{}', expected one of: typescript, python, dotnet, java",
                s
            )),
        }
    }
}
