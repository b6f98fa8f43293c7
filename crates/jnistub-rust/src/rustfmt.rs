//! Running `rustfmt` over generated files.

use jnistub_core::ToolInvocationWarning;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, ChildStderr, Command, ExitStatus, Stdio};

/// Edition the generated code is written for.
const EDITION: &str = "2021";

/// A `rustfmt` executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rustfmt {
    program: String,
}

impl Rustfmt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Format `path` in place.
    ///
    /// Waits for the process to finish; the child is killed and reaped if
    /// anything goes wrong while it is running.
    pub fn format(&self, path: &Path) -> Result<(), ToolInvocationWarning> {
        tracing::info!("Applying {} for {}", self.program, path.display());

        let child = Command::new(&self.program)
            .arg("--edition")
            .arg(EDITION)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_warning(e))?;

        let mut child = ChildGuard::new(child);
        let mut stderr = String::new();
        if let Some(mut pipe) = child.take_stderr() {
            pipe.read_to_string(&mut stderr)
                .map_err(|e| self.spawn_warning(e))?;
        }
        let status = child.wait().map_err(|e| self.spawn_warning(e))?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolInvocationWarning::NonZeroExit {
                tool: self.program.clone(),
                status: status.to_string(),
                stderr: stderr.trim().to_string(),
            })
        }
    }

    fn spawn_warning(&self, err: io::Error) -> ToolInvocationWarning {
        if err.kind() == io::ErrorKind::NotFound {
            ToolInvocationWarning::NotFound {
                tool: self.program.clone(),
            }
        } else {
            ToolInvocationWarning::Spawn {
                tool: self.program.clone(),
                source: err,
            }
        }
    }
}

impl Default for Rustfmt {
    fn default() -> Self {
        Self::new("rustfmt")
    }
}

/// Owns a running child until it has been waited on.
struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.as_mut().and_then(|c| c.stderr.take())
    }

    fn wait(mut self) -> io::Result<ExitStatus> {
        match self.child.take() {
            Some(mut child) => child.wait(),
            None => Err(io::Error::other("child already reaped")),
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
#[path = "rustfmt/rustfmt_tests.rs"]
mod rustfmt_tests;
