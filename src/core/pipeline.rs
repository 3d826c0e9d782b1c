//! Conversion pipeline: CSV file → `.dot` document → rendered artifacts
//!
//! Files are processed one at a time. A failure inside one file is reported and
//! the batch moves on to the next file.

use crate::config::Config;
use crate::core::graph::{GenerationPalette, GraphEmitter, DEFAULT_PALETTE};
use crate::core::records::{parse_family_csv, CsvError};
use crate::core::render::{render_artifact, GraphRenderer, OutputFormat, RenderError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a run before any file is converted
#[derive(Debug, Error)]
pub enum InputError {
    /// The input directory doesn't exist
    #[error("Data folder not found: {}", .0.display())]
    InputDirMissing(PathBuf),
    /// The input directory has no files with the wanted extension
    #[error("No {extension} files found in {}", dir.display())]
    NoInputFiles {
        /// Directory that was scanned
        dir: PathBuf,
        /// Extension that was looked for
        extension: String,
    },
    /// The input directory couldn't be listed
    #[error("Could not read {}: {source}", dir.display())]
    Unreadable {
        /// Directory that was scanned
        dir: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Errors that abort the conversion of a single file
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The CSV couldn't be read or parsed
    #[error("Error reading {}: {source}", path.display())]
    Parse {
        /// Input file
        path: PathBuf,
        /// Underlying parse error
        source: CsvError,
    },
    /// The output directory or `.dot` file couldn't be written
    #[error("Error writing {}: {source}", path.display())]
    Write {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// An artifact failed to render
    #[error("Failed to create {description}: {source}")]
    Render {
        /// Artifact being produced (e.g. "PNG image")
        description: &'static str,
        /// Underlying render error
        source: RenderError,
    },
}

impl ConvertError {
    /// Remediation hint, if the underlying failure has one
    #[must_use]
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::Render { source, .. } => source.remediation(),
            Self::Parse { .. } | Self::Write { .. } => None,
        }
    }
}

/// Settings for converting files
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory receiving every artifact
    pub output_dir: PathBuf,
    /// Artifacts to render after the `.dot` file, in order
    pub formats: Vec<OutputFormat>,
    /// Node color palette
    pub palette: GenerationPalette,
}

impl ConvertOptions {
    /// Options rendering the default formats into `output_dir`
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            formats: OutputFormat::DEFAULTS.to_vec(),
            palette: DEFAULT_PALETTE,
        }
    }

    /// Options taken from the loaded configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::new(&config.paths.out_dir);
        if !config.render.formats.is_empty() {
            options.formats.clone_from(&config.render.formats);
        }
        options
    }

    /// Replace the artifact list
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = formats;
        self
    }
}

/// What one successful conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input CSV
    pub input: PathBuf,
    /// Written `.dot` file
    pub dot_file: PathBuf,
    /// Person nodes in the document
    pub people: usize,
    /// Rendered artifacts, in the order they were produced
    pub artifacts: Vec<(OutputFormat, PathBuf)>,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Files attempted
    pub total: usize,
    /// Successful conversions
    pub reports: Vec<FileReport>,
    /// Failed files with their error
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchSummary {
    /// Number of files converted successfully
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.reports.len()
    }

    /// Number of files that failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// List the input files in `dir` with the given extension, sorted by path
///
/// # Errors
/// Returns an error if the directory is missing, unreadable, or has no matches.
pub fn discover_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::InputDirMissing(dir.to_path_buf()));
    }

    let extension = extension.trim_start_matches('.');
    let entries = fs::read_dir(dir).map_err(|source| InputError::Unreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();

    if files.is_empty() {
        return Err(InputError::NoInputFiles {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    files.sort();
    Ok(files)
}

/// Base name used for every artifact of `input`
#[must_use]
pub fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("family_tree")
        .to_string()
}

/// Convert one CSV file: write `<base>.dot`, then render each configured format
///
/// Stops at the first render failure; artifacts written before it are kept.
///
/// # Errors
/// Returns an error if the input can't be parsed, the output can't be written, or
/// any artifact fails to render.
pub fn convert_file(
    input: &Path,
    options: &ConvertOptions,
    renderer: &dyn GraphRenderer,
) -> Result<FileReport, ConvertError> {
    let records = parse_family_csv(input).map_err(|source| ConvertError::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    crate::info!("Loaded {} records from {}", records.len(), input.display());

    let output_dir = &options.output_dir;
    fs::create_dir_all(output_dir).map_err(|source| ConvertError::Write {
        path: output_dir.clone(),
        source,
    })?;

    let base = base_name(input);
    let document = GraphEmitter::new(&options.palette).emit(&records);
    let dot_file = output_dir.join(format!("{base}.dot"));
    fs::write(&dot_file, document.to_dot()).map_err(|source| ConvertError::Write {
        path: dot_file.clone(),
        source,
    })?;
    crate::debug!("Graph document written: {}", dot_file.display());

    let mut artifacts = Vec::with_capacity(options.formats.len());
    for &format in &options.formats {
        let artifact = render_artifact(renderer, &dot_file, format, output_dir, &base).map_err(
            |source| ConvertError::Render {
                description: format.description(),
                source,
            },
        )?;
        crate::debug!("{} created: {}", format.description(), artifact.display());
        artifacts.push((format, artifact));
    }

    Ok(FileReport {
        input: input.to_path_buf(),
        dot_file,
        people: document.node_count(),
        artifacts,
    })
}

/// Convert every input in order, reporting each result through `on_file`
///
/// A failed file never stops the batch. User-facing reporting is left to
/// `on_file`; the batch itself only logs at debug level.
pub fn run_batch<F>(
    inputs: &[PathBuf],
    options: &ConvertOptions,
    renderer: &dyn GraphRenderer,
    mut on_file: F,
) -> BatchSummary
where
    F: FnMut(&Path, &Result<FileReport, ConvertError>),
{
    let mut summary = BatchSummary {
        total: inputs.len(),
        ..BatchSummary::default()
    };

    for input in inputs {
        let result = convert_file(input, options, renderer);
        on_file(input, &result);
        match result {
            Ok(report) => summary.reports.push(report),
            Err(err) => {
                crate::debug!("Conversion of {} failed: {err}", input.display());
                summary.failures.push((input.clone(), err));
            }
        }
    }

    summary
}
