//! Blocking subprocess invocation.

use std::{path::Path, process::Command};

use thiserror::Error;

/// Failure modes of an external tool invocation.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to spawn '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {code}: {stderr}")]
    Exit {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Run an external program to completion in the given working
/// directory. A non-zero exit status is an error carrying the captured
/// stderr.
pub fn shell(program: &str, args: &[&str], cwd: &Path) -> Result<(), ShellError> {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| ShellError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ShellError::Exit {
            program: program.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
