//! Generation color palette

/// Maps a generation number to a node fill color
///
/// Generations `0..colors.len()` index the palette; anything else (negative or
/// beyond the palette) gets the fallback. A missing generation counts as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPalette {
    colors: &'static [&'static str],
    fallback: &'static str,
}

/// Palette used by the family chart: gold for the focus person, then one tint per
/// ancestral generation up to ten generations back
pub const DEFAULT_PALETTE: GenerationPalette = GenerationPalette::new(
    &[
        "gold",           // focus person
        "lightcoral",     // parents
        "lightsteelblue", // grandparents
        "lightgreen",
        "wheat",
        "plum",
        "lightyellow",
        "lightcyan",
        "mistyrose",
        "lavender",
        "lightgray",
    ],
    "lightgray",
);

impl GenerationPalette {
    /// Build a palette from an ordered color list and a fallback color
    #[must_use]
    pub const fn new(colors: &'static [&'static str], fallback: &'static str) -> Self {
        Self { colors, fallback }
    }

    /// Color for a generation
    #[must_use]
    pub fn color_for(&self, generation: Option<i64>) -> &'static str {
        usize::try_from(generation.unwrap_or(0))
            .ok()
            .and_then(|index| self.colors.get(index))
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for GenerationPalette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_colors() {
        let palette = GenerationPalette::default();
        let generations = [Some(0), Some(1), Some(2), Some(11), Some(-1), None];
        let colors: Vec<&str> = generations.iter().map(|g| palette.color_for(*g)).collect();

        assert_eq!(
            colors,
            vec![
                "gold",
                "lightcoral",
                "lightsteelblue",
                "lightgray",
                "lightgray",
                "gold"
            ]
        );
    }

    #[test]
    fn test_last_palette_entry() {
        assert_eq!(DEFAULT_PALETTE.color_for(Some(9)), "lavender");
        assert_eq!(DEFAULT_PALETTE.color_for(Some(10)), "lightgray");
    }

    #[test]
    fn test_custom_palette() {
        const MONO: GenerationPalette = GenerationPalette::new(&["black"], "white");
        assert_eq!(MONO.color_for(Some(0)), "black");
        assert_eq!(MONO.color_for(Some(1)), "white");
    }
}
