//! End-to-end conversion tests using an in-process renderer

use famgraph::core::pipeline::{
    convert_file, discover_inputs, run_batch, ConvertError, ConvertOptions, InputError,
};
use famgraph::core::render::{
    GraphRenderer, GraphvizRenderer, OutputFormat, RenderError, GRAPHVIZ_DOWNLOAD_URL,
};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAMILY_CSV: &str = "\
Person_ID,Full_Name,Birth_Info,Generation,Spouse_ID,Father_ID,Mother_ID
C1,Child,b. 1960,2,,F1,M1
F1,Father,b. 1930,1,M1,,
M1,Mother,,1,F1,,
";

const FAKE_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"><g class=\"node\"></g></svg>";

/// Writes a small placeholder artifact instead of running Graphviz
#[derive(Default)]
struct FakeRenderer {
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl FakeRenderer {
    fn failing_on(format: &'static str) -> Self {
        Self {
            fail_on: Some(format),
            ..Self::default()
        }
    }

    fn formats(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(f, _)| f.clone()).collect()
    }
}

impl GraphRenderer for FakeRenderer {
    fn render(&self, dot_file: &Path, format: &str, output: &Path) -> Result<(), RenderError> {
        assert!(dot_file.exists(), "dot file must be written before rendering");
        self.calls
            .borrow_mut()
            .push((format.to_string(), output.to_path_buf()));

        if self.fail_on == Some(format) {
            return Err(RenderError::Failed {
                command: "fake".to_string(),
                format: format.to_string(),
                status: Some(1),
                stderr: "layout failed".to_string(),
            });
        }

        let body = if format == "svg" {
            FAKE_SVG
        } else {
            "fake-binary"
        };
        fs::write(output, body).map_err(|source| RenderError::io(output, source))
    }
}

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write input");
    path
}

fn leftover_temp_svgs(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.contains("_temp"))
        .collect()
}

#[test]
fn converts_family_to_all_default_artifacts() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "smith_family.csv", FAMILY_CSV);
    let out_dir = temp.path().join("output");
    let renderer = FakeRenderer::default();

    let report = convert_file(&input, &ConvertOptions::new(&out_dir), &renderer).unwrap();

    assert_eq!(report.people, 3);
    assert_eq!(report.dot_file, out_dir.join("smith_family.dot"));
    assert_eq!(
        report.artifacts,
        vec![
            (OutputFormat::Png, out_dir.join("smith_family.png")),
            (OutputFormat::Svg, out_dir.join("smith_family.svg")),
            (OutputFormat::Html, out_dir.join("smith_family.html")),
        ]
    );
    assert_eq!(renderer.formats(), vec!["png", "svg", "svg"]);

    let dot = fs::read_to_string(&report.dot_file).unwrap();
    assert!(dot.starts_with("digraph family_tree {\n    rankdir=TB;\n"));
    assert!(dot.contains(
        "\"F1\" [label=\"Father\\nb. 1930\", fillcolor=\"lightcoral\", style=\"filled,rounded\", tooltip=\"\"];"
    ));
    assert!(dot.contains("\"M1\" [label=\"Mother\\nBirth: Unknown\""));
    assert!(dot.contains("{rank=same; \"F1\"; \"M1\"};"));
    assert_eq!(dot.matches("dir=none").count(), 1);
    assert!(dot.contains("    \"F1\" -> \"C1\";\n    \"M1\" -> \"C1\";\n"));
    assert!(dot.ends_with("}\n"));

    let html = fs::read_to_string(out_dir.join("smith_family.html")).unwrap();
    assert!(html.contains("<title>Smith Family - Family Tree</title>"));
    assert!(html.contains(FAKE_SVG));
    assert!(leftover_temp_svgs(&out_dir).is_empty());
}

#[test]
fn html_failure_removes_temporary_svg() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "jones.csv", FAMILY_CSV);
    let out_dir = temp.path().join("out");
    let renderer = FakeRenderer::failing_on("svg");
    let options = ConvertOptions::new(&out_dir).with_formats(vec![OutputFormat::Html]);

    let err = convert_file(&input, &options, &renderer).unwrap_err();

    assert!(matches!(err, ConvertError::Render { description: "HTML interactive", .. }));
    assert!(err.remediation().unwrap().contains(GRAPHVIZ_DOWNLOAD_URL));
    assert!(out_dir.join("jones.dot").exists());
    assert!(!out_dir.join("jones.html").exists());
    assert!(leftover_temp_svgs(&out_dir).is_empty());
}

#[test]
fn first_render_failure_aborts_remaining_formats() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "brown.csv", FAMILY_CSV);
    let out_dir = temp.path().join("out");
    let renderer = FakeRenderer::failing_on("png");

    let err = convert_file(&input, &ConvertOptions::new(&out_dir), &renderer).unwrap_err();

    assert!(err.to_string().starts_with("Failed to create PNG image"));
    assert_eq!(renderer.formats(), vec!["png"]);
    assert!(out_dir.join("brown.dot").exists());
    assert!(!out_dir.join("brown.svg").exists());
}

#[test]
fn pdf_uses_cairo_backend() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "tree.csv", FAMILY_CSV);
    let renderer = FakeRenderer::default();
    let options =
        ConvertOptions::new(temp.path().join("out")).with_formats(vec![OutputFormat::Pdf]);

    let report = convert_file(&input, &options, &renderer).unwrap();

    assert_eq!(renderer.formats(), vec!["pdf:cairo"]);
    assert_eq!(report.artifacts[0].1, temp.path().join("out").join("tree.pdf"));
}

#[test]
fn batch_continues_after_failures() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    write_input(&data, "b_family.csv", FAMILY_CSV);
    write_input(&data, "a_broken.csv", "Full_Name\nNobody\n");
    write_input(&data, "c_family.csv", FAMILY_CSV);
    write_input(&data, "notes.txt", "ignored");

    let inputs = discover_inputs(&data, "csv").unwrap();
    let names: Vec<_> = inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a_broken.csv", "b_family.csv", "c_family.csv"]);

    let renderer = FakeRenderer::default();
    let options = ConvertOptions::new(temp.path().join("output"));
    let mut seen = Vec::new();
    let summary = run_batch(&inputs, &options, &renderer, |input, result| {
        seen.push((input.to_path_buf(), result.is_ok()));
    });

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 1);
    assert!(matches!(summary.failures[0].1, ConvertError::Parse { .. }));
    assert_eq!(
        seen.iter().map(|(_, ok)| *ok).collect::<Vec<_>>(),
        vec![false, true, true]
    );
}

#[test]
fn missing_graphviz_is_reported_per_file() {
    let temp = TempDir::new().unwrap();
    let first = write_input(temp.path(), "one.csv", FAMILY_CSV);
    let second = write_input(temp.path(), "two.csv", FAMILY_CSV);
    let renderer = GraphvizRenderer::new("famgraph-test-missing-dot");
    let options =
        ConvertOptions::new(temp.path().join("out")).with_formats(vec![OutputFormat::Png]);

    let summary = run_batch(&[first, second], &options, &renderer, |_, _| {});

    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded(), 0);
    for (_, err) in &summary.failures {
        let hint = err.remediation().unwrap();
        assert!(hint.contains(GRAPHVIZ_DOWNLOAD_URL));
        assert!(hint.contains("Then manually run: famgraph-test-missing-dot -Tpng"));
    }
    assert!(temp.path().join("out").join("one.dot").exists());
    assert!(temp.path().join("out").join("two.dot").exists());
}

#[test]
fn discover_reports_empty_directory() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), "readme.md", "# nothing here");

    let err = discover_inputs(temp.path(), ".csv").unwrap_err();
    assert!(matches!(err, InputError::NoInputFiles { .. }));
    assert!(err.to_string().starts_with("No csv files found in"));
}

#[test]
fn sample_family_converts() {
    let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/family/smith_family.csv");
    let temp = TempDir::new().unwrap();
    let renderer = FakeRenderer::default();
    let options = ConvertOptions::new(temp.path()).with_formats(vec![OutputFormat::Svg]);

    let report = convert_file(&sample, &options, &renderer).unwrap();
    let dot = fs::read_to_string(report.dot_file).unwrap();

    assert_eq!(report.people, 6);
    assert_eq!(dot.matches("dir=none").count(), 2);
    assert!(dot.contains("label=\"William \\\"Bill\\\" Smith\\nb. 1907\\nd. 1988\""));
    assert!(dot.contains("peripheries=3, fontname=\"Arial Bold\""));
    assert!(dot.contains("class=\"tree-connection\""));
    assert!(dot.contains("\"AS1938\" [label=\"Alice Smith\\nBirth: Unknown\", fillcolor=\"lightsteelblue\""));
}
