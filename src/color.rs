use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species label → Color32
// ---------------------------------------------------------------------------

/// Maps each species label to a distinct colour, shared by the scatter plot
/// and the sidebar checkboxes.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SpeciesColors {
    /// Build the mapping from the dataset's species index.
    pub fn new(species: &[String]) -> Self {
        let palette = generate_palette(species.len());
        let mapping: BTreeMap<String, Color32> = species
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        SpeciesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species label.
    pub fn color_for(&self, species: &str) -> Color32 {
        self.mapping
            .get(species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_distinct_color_per_species() {
        let labels = vec![
            "Adelie".to_string(),
            "Chinstrap".to_string(),
            "Gentoo".to_string(),
        ];
        let colors = SpeciesColors::new(&labels);
        let a = colors.color_for("Adelie");
        let c = colors.color_for("Chinstrap");
        let g = colors.color_for("Gentoo");
        assert_ne!(a, c);
        assert_ne!(a, g);
        assert_ne!(c, g);
        // Stable: same label, same colour.
        assert_eq!(a, colors.color_for("Adelie"));
    }

    #[test]
    fn unknown_label_falls_back_to_grey() {
        let colors = SpeciesColors::new(&["Adelie".to_string()]);
        assert_eq!(colors.color_for("Emperor"), Color32::GRAY);
    }

    #[test]
    fn empty_palette_is_empty() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(4).len(), 4);
    }
}
