//! HTML page embedding a rendered SVG chart

use super::{GraphRenderer, RenderError};
use askama::Template;
use std::fs;
use std::path::Path;

/// Standalone page with the chart inlined and hover styling for tree connections
#[derive(Template)]
#[template(path = "family_tree.html")]
pub struct FamilyTreePage<'a> {
    /// Page title prefix (`<title>` is `"{title} - Family Tree"`)
    pub title: String,
    /// Raw SVG markup, inserted unescaped
    pub svg: &'a str,
}

impl<'a> FamilyTreePage<'a> {
    /// Page for a chart whose files are named after `base_name`
    #[must_use]
    pub fn new(base_name: &str, svg: &'a str) -> Self {
        Self {
            title: page_title(base_name),
            svg,
        }
    }
}

/// `smith_family` becomes `Smith Family`
///
/// Underscores become spaces; every letter that follows a non-letter is
/// upper-cased and the rest lower-cased.
#[must_use]
pub fn page_title(base_name: &str) -> String {
    let mut title = String::with_capacity(base_name.len());
    let mut after_letter = false;
    for c in base_name.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if after_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            title.push(c);
            after_letter = false;
        }
    }
    title
}

/// Render `dot_file` to a temporary SVG in `output_dir`, wrap it in a page and write
/// it to `output`
///
/// The temporary SVG is removed whether or not rendering succeeds.
///
/// # Errors
/// Returns an error if the renderer fails or any file operation fails.
pub fn write_html_page(
    renderer: &dyn GraphRenderer,
    dot_file: &Path,
    output_dir: &Path,
    base_name: &str,
    output: &Path,
) -> Result<(), RenderError> {
    let temp_svg = tempfile::Builder::new()
        .prefix(&format!("{base_name}_temp"))
        .suffix(".svg")
        .tempfile_in(output_dir)
        .map_err(|source| RenderError::io(output_dir, source))?
        .into_temp_path();

    renderer.render(dot_file, "svg", &temp_svg)?;

    let svg = fs::read_to_string(&temp_svg).map_err(|source| RenderError::io(&temp_svg, source))?;
    let page = FamilyTreePage::new(base_name, &svg).render()?;
    fs::write(output, page).map_err(|source| RenderError::io(output, source))?;

    temp_svg
        .close()
        .map_err(|source| RenderError::io(output_dir, source))
}
