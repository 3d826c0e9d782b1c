//! Convert command handler

use famgraph::config::Config;
use famgraph::core::pipeline::{
    discover_inputs, run_batch, ConvertError, ConvertOptions, FileReport,
};
use famgraph::core::render::GraphvizRenderer;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 50;

/// Run the convert command
///
/// Returns the process exit code: 1 when there is nothing to convert, 0 otherwise.
pub fn run(files: &[PathBuf], config: &Config) -> i32 {
    let inputs = if files.is_empty() {
        let data_dir = PathBuf::from(&config.paths.data_dir);
        match discover_inputs(&data_dir, &config.render.extension) {
            Ok(found) => found,
            Err(e) => {
                eprintln!("✗ {e}");
                eprintln!(
                    "   Put your {} files in '{}' or pass them explicitly.",
                    config.render.extension,
                    data_dir.display()
                );
                return 1;
            }
        }
    } else {
        files.to_vec()
    };

    println!(
        "Found {} {} file(s):",
        inputs.len(),
        config.render.extension.to_uppercase()
    );
    for input in &inputs {
        println!("   - {}", file_label(input));
    }
    famgraph::verbose!(
        "Rendering with '{}' into {}/",
        config.render.command,
        config.paths.out_dir
    );

    let options = ConvertOptions::from_config(config);
    let renderer = GraphvizRenderer::new(&config.render.command);
    famgraph::debug!(
        "Rendering {:?} with '{}' into {}",
        options.formats,
        renderer.command(),
        options.output_dir.display()
    );

    let summary = run_batch(&inputs, &options, &renderer, |input, result| {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("Processing: {}", file_label(input));
        println!("{}", "=".repeat(RULE_WIDTH));
        match result {
            Ok(report) => print_report(report),
            Err(e) => print_failure(input, e),
        }
    });

    println!("\nDone!");
    println!(
        "Successfully processed {}/{} files",
        summary.succeeded(),
        summary.total
    );
    println!("Output files saved to: {}/", options.output_dir.display());
    0
}

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}

fn print_report(report: &FileReport) {
    println!("✓ Graph document created: {}", report.dot_file.display());
    famgraph::verbose!("   {} people charted", report.people);
    for (format, artifact) in &report.artifacts {
        println!("✓ {} created: {}", format.description(), artifact.display());
    }
}

fn print_failure(input: &Path, error: &ConvertError) {
    eprintln!("✗ {error}");
    if let Some(hint) = error.remediation() {
        eprintln!("   {hint}");
    }
    eprintln!("✗ Failed to process {}", file_label(input));
}
