//! Graphviz command-line renderer

use super::{GraphRenderer, RenderError};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Default layout command
pub const DEFAULT_COMMAND: &str = "dot";

/// Renders by spawning the Graphviz CLI: `<command> -T<format> <dot> -o <output>`
///
/// The call blocks until the process exits; there is no timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizRenderer {
    command: String,
}

impl GraphvizRenderer {
    /// Renderer for a specific executable name or path
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The executable this renderer spawns
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, dot_file: &Path, format: &str, output: &Path) -> Result<(), RenderError> {
        crate::debug!(
            "Running {} -T{format} {} -o {}",
            self.command,
            dot_file.display(),
            output.display()
        );

        let result = Command::new(&self.command)
            .arg(format!("-T{format}"))
            .arg(dot_file)
            .arg("-o")
            .arg(output)
            .output();

        let finished = match result {
            Ok(out) => out,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RenderError::NotFound {
                    command: self.command.clone(),
                    format: format.to_string(),
                    dot_file: dot_file.to_path_buf(),
                    output: output.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(RenderError::Spawn {
                    command: self.command.clone(),
                    source,
                });
            }
        };

        if !finished.status.success() {
            return Err(RenderError::Failed {
                command: self.command.clone(),
                format: format.to_string(),
                status: finished.status.code(),
                stderr: String::from_utf8_lossy(&finished.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
