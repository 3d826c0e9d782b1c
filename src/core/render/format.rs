//! Output artifact formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Artifacts that can be produced from a `.dot` file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster image
    Png,
    /// Vector image
    Svg,
    /// PDF with clickable links (cairo backend)
    Pdf,
    /// Standalone page embedding the SVG inline
    Html,
}

impl OutputFormat {
    /// Formats produced when nothing is configured
    pub const DEFAULTS: [Self; 3] = [Self::Png, Self::Svg, Self::Html];

    /// File extension of the artifact
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }

    /// Value passed to Graphviz as `-T<format>`
    ///
    /// HTML pages are built from an intermediate SVG render.
    #[must_use]
    pub const fn graphviz_format(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg | Self::Html => "svg",
            Self::Pdf => "pdf:cairo",
        }
    }

    /// Human-readable name for progress messages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Png => "PNG image",
            Self::Svg => "SVG vector",
            Self::Pdf => "PDF document",
            Self::Html => "HTML interactive",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
