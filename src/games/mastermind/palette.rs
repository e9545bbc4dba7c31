//! Color palettes that supply the pegs for each difficulty.

use super::types::{Color, Difficulty};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Supplies the ordered, deduplicated colors for a difficulty.
///
/// Implementations must return exactly `difficulty.color_count()` colors
/// with distinct ids.
pub trait Palette {
    /// Colors available at `difficulty`, in display order.
    fn colors_for(&self, difficulty: Difficulty) -> Vec<Color>;

    /// Looks up an offered color by id (case-insensitive).
    fn color_by_id(&self, difficulty: Difficulty, id: &str) -> Option<Color> {
        self.colors_for(difficulty)
            .into_iter()
            .find(|color| color.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// Built-in palette themes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ColorTheme {
    /// Primary and secondary colors.
    #[default]
    Classic,
    /// Spectrum order.
    Rainbow,
    /// Cold blues through hot reds.
    FireIce,
    /// Soft tones.
    Pastel,
    /// White through black.
    Monochrome,
    /// Earthy tones.
    Nature,
}

/// (id, hex, name)
type Swatch = (&'static str, &'static str, &'static str);

const CLASSIC: [Swatch; 8] = [
    ("red", "#FF4444", "Red"),
    ("blue", "#4444FF", "Blue"),
    ("green", "#44FF44", "Green"),
    ("yellow", "#FFFF44", "Yellow"),
    ("purple", "#FF44FF", "Purple"),
    ("orange", "#FF8844", "Orange"),
    ("brown", "#8B4513", "Brown"),
    ("pink", "#FFB6C1", "Pink"),
];

const RAINBOW: [Swatch; 8] = [
    ("red", "#FF0000", "Red"),
    ("orange", "#FF7F00", "Orange"),
    ("yellow", "#FFFF00", "Yellow"),
    ("green", "#00FF00", "Green"),
    ("blue", "#0000FF", "Blue"),
    ("indigo", "#4B0082", "Indigo"),
    ("violet", "#9400D3", "Violet"),
    ("pink", "#FF1493", "Pink"),
];

const FIRE_ICE: [Swatch; 8] = [
    ("ice-blue", "#A5F2F3", "Ice Blue"),
    ("light-blue", "#00BFFF", "Light Blue"),
    ("blue", "#0000FF", "Blue"),
    ("purple", "#800080", "Purple"),
    ("pink", "#FF69B4", "Pink"),
    ("orange", "#FF7F00", "Orange"),
    ("red", "#FF0000", "Red"),
    ("dark-red", "#8B0000", "Dark Red"),
];

const PASTEL: [Swatch; 8] = [
    ("pastel-pink", "#FFD1DC", "Pastel Pink"),
    ("pastel-orange", "#FFB347", "Pastel Orange"),
    ("pastel-yellow", "#FDFD96", "Pastel Yellow"),
    ("pastel-green", "#77DD77", "Pastel Green"),
    ("pastel-blue", "#AEC6CF", "Pastel Blue"),
    ("pastel-purple", "#B39EB5", "Pastel Purple"),
    ("pastel-mint", "#99FFCC", "Pastel Mint"),
    ("pastel-lavender", "#C8A2C8", "Pastel Lavender"),
];

const MONOCHROME: [Swatch; 8] = [
    ("white", "#FFFFFF", "White"),
    ("light-gray", "#D3D3D3", "Light Gray"),
    ("silver", "#C0C0C0", "Silver"),
    ("gray", "#808080", "Gray"),
    ("dim-gray", "#696969", "Dim Gray"),
    ("dark-gray", "#404040", "Dark Gray"),
    ("charcoal", "#2F4F4F", "Charcoal"),
    ("black", "#000000", "Black"),
];

const NATURE: [Swatch; 8] = [
    ("leaf-green", "#4F7942", "Leaf Green"),
    ("sky-blue", "#87CEEB", "Sky Blue"),
    ("sandy-brown", "#F4A460", "Sandy Brown"),
    ("ocean-blue", "#1E90FF", "Ocean Blue"),
    ("forest-green", "#228B22", "Forest Green"),
    ("sunset-orange", "#FD5E53", "Sunset Orange"),
    ("mountain-purple", "#9678B6", "Mountain Purple"),
    ("stone-gray", "#8D8C8C", "Stone Gray"),
];

impl ColorTheme {
    /// Display label for the theme.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Rainbow => "Rainbow",
            Self::FireIce => "Fire & Ice",
            Self::Pastel => "Pastel",
            Self::Monochrome => "Monochrome",
            Self::Nature => "Nature",
        }
    }

    fn swatches(self) -> &'static [Swatch; 8] {
        match self {
            Self::Classic => &CLASSIC,
            Self::Rainbow => &RAINBOW,
            Self::FireIce => &FIRE_ICE,
            Self::Pastel => &PASTEL,
            Self::Monochrome => &MONOCHROME,
            Self::Nature => &NATURE,
        }
    }
}

impl Palette for ColorTheme {
    #[instrument]
    fn colors_for(&self, difficulty: Difficulty) -> Vec<Color> {
        self.swatches()
            .iter()
            .take(difficulty.color_count())
            .map(|(id, hex, name)| Color::new(*id, *hex, *name, true))
            .collect()
    }
}
