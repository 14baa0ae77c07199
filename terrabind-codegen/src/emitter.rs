//! In-memory code emission with indentation-aware formatting.

use std::{
    io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use terrabind_core::write_file;
use thiserror::Error;

/// 2-space indentation (TypeScript).
const INDENT: &str = "  ";

/// Errors surfaced by code emission and persistence.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write generated file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("code generation failed: {message}")]
    Generation { message: String },
}

/// Accumulates generated source files in memory.
///
/// Files are kept in insertion order. One file is open for writing at a
/// time; [`close_file`](Self::close_file) seals it, and
/// [`save`](Self::save) persists every sealed file into a directory.
/// Saving takes `&self`, so a single emission can be materialized into
/// any number of staging directories without re-running generation.
#[derive(Debug, Default)]
pub struct CodeEmitter {
    files: IndexMap<String, String>,
    current: Option<OpenFile>,
}

#[derive(Debug)]
struct OpenFile {
    path: String,
    buffer: String,
    indent_level: usize,
}

impl CodeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new file at the given relative path. Any file still open
    /// is sealed first.
    pub fn open_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.close_file();
        self.current = Some(OpenFile {
            path: path.into(),
            buffer: String::new(),
            indent_level: 0,
        });
        self
    }

    /// Seal the currently open file, if any.
    pub fn close_file(&mut self) -> &mut Self {
        if let Some(file) = self.current.take() {
            self.files.insert(file.path, file.buffer);
        }
        self
    }

    /// Add a line of code with the current indentation.
    pub fn line(&mut self, s: impl AsRef<str>) -> &mut Self {
        if let Some(file) = &mut self.current {
            for _ in 0..file.indent_level {
                file.buffer.push_str(INDENT);
            }
            file.buffer.push_str(s.as_ref());
            file.buffer.push('\n');
        }
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        if let Some(file) = &mut self.current {
            file.buffer.push('\n');
        }
        self
    }

    /// Open a braced block (`header {`) and increase indentation.
    pub fn open_block(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        if let Some(file) = &mut self.current {
            file.indent_level += 1;
        }
        self
    }

    /// Close a braced block and decrease indentation.
    pub fn close_block(&mut self) -> &mut Self {
        if let Some(file) = &mut self.current {
            file.indent_level = file.indent_level.saturating_sub(1);
        }
        self.line("}");
        self
    }

    /// Sealed files in insertion order, as (relative path, content).
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Persist every sealed file under the given directory.
    pub fn save(&self, dir: &Path) -> Result<(), EmitError> {
        for (path, content) in &self.files {
            let target = dir.join(path);
            write_file(&target, content).map_err(|source| EmitError::Io {
                path: target,
                source,
            })?;
        }
        Ok(())
    }
}
