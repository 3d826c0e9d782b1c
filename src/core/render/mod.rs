//! Render driver: turns `.dot` files into images and HTML pages
//!
//! Rendering is delegated to an external layout tool behind [`GraphRenderer`];
//! [`GraphvizRenderer`] is the real implementation.

pub mod format;
pub mod graphviz;
pub mod html;

pub use format::OutputFormat;
pub use graphviz::GraphvizRenderer;
pub use html::{page_title, write_html_page, FamilyTreePage};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where to point users who don't have Graphviz
pub const GRAPHVIZ_DOWNLOAD_URL: &str = "https://graphviz.org/download/";

/// Errors from rendering a graph document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer executable could not be found
    #[error("Graphviz not found (tried to run '{command}')")]
    NotFound {
        /// Executable that was attempted
        command: String,
        /// Requested `-T` format
        format: String,
        /// Input document
        dot_file: PathBuf,
        /// Requested artifact path
        output: PathBuf,
    },
    /// The renderer could not be started for another reason
    #[error("could not start '{command}': {source}")]
    Spawn {
        /// Executable that was attempted
        command: String,
        /// Underlying error
        source: std::io::Error,
    },
    /// The renderer ran but exited unsuccessfully
    #[error("'{command} -T{format}' failed ({}){}", exit_label(.status), stderr_suffix(.stderr))]
    Failed {
        /// Executable that ran
        command: String,
        /// Requested `-T` format
        format: String,
        /// Exit code, if the process exited normally
        status: Option<i32>,
        /// Captured diagnostics
        stderr: String,
    },
    /// Reading or writing an artifact failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The HTML template failed to render
    #[error("HTML template error: {0}")]
    Template(#[from] askama::Error),
}

impl RenderError {
    /// Wrap an I/O error with the path it concerns
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Hint telling the user how to fix the problem, when there is one
    #[must_use]
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::NotFound {
                command,
                format,
                dot_file,
                output,
            } => Some(format!(
                "Please install Graphviz from: {GRAPHVIZ_DOWNLOAD_URL}\n   Then manually run: {command} -T{format} {} -o {}",
                dot_file.display(),
                output.display()
            )),
            Self::Failed { .. } | Self::Spawn { .. } => Some(format!(
                "Make sure Graphviz is installed: {GRAPHVIZ_DOWNLOAD_URL}"
            )),
            Self::Io { .. } | Self::Template(_) => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn exit_label(status: &Option<i32>) -> String {
    status.map_or_else(|| "terminated by signal".to_string(), |code| format!("exit code {code}"))
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Something that can lay out a DOT file into an artifact
pub trait GraphRenderer {
    /// Render `dot_file` with layout format `format` (a Graphviz `-T` value) to `output`
    ///
    /// # Errors
    /// Returns an error if the renderer is unavailable or fails.
    fn render(&self, dot_file: &Path, format: &str, output: &Path) -> Result<(), RenderError>;
}

/// Produce one artifact for a `.dot` file
///
/// # Errors
/// Returns the first renderer or I/O failure.
pub fn render_artifact(
    renderer: &dyn GraphRenderer,
    dot_file: &Path,
    format: OutputFormat,
    output_dir: &Path,
    base_name: &str,
) -> Result<PathBuf, RenderError> {
    let output = output_dir.join(format!("{base_name}.{}", format.extension()));
    match format {
        OutputFormat::Html => write_html_page(renderer, dot_file, output_dir, base_name, &output)?,
        _ => renderer.render(dot_file, format.graphviz_format(), &output)?,
    }
    Ok(output)
}
