//! Tessellation base units: the repeating cell a client tiles across the
//! plane, plus a small color scheme.

use std::f64::consts::PI;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::palette::Rgb;

/// Tiling cell families. Unknown labels fall back to the square cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingKind {
    Triangular,
    Square,
    Hexagonal,
}

impl TilingKind {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "triangular" => TilingKind::Triangular,
            "hexagonal" => TilingKind::Hexagonal,
            _ => TilingKind::Square,
        }
    }

    /// Vertices of one tiling cell at the given size.
    pub fn base_unit(self, cell_size: f64) -> Vec<[f64; 2]> {
        match self {
            TilingKind::Triangular => vec![
                [0.0, 0.0],
                [cell_size, 0.0],
                [cell_size / 2.0, cell_size * (PI / 3.0).sin()],
            ],
            TilingKind::Square => vec![
                [0.0, 0.0],
                [cell_size, 0.0],
                [cell_size, cell_size],
                [0.0, cell_size],
            ],
            TilingKind::Hexagonal => (0..6)
                .map(|i| {
                    let angle = i as f64 * PI / 3.0;
                    [cell_size * angle.cos(), cell_size * angle.sin()]
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TessellationParams {
    pub pattern: String,
    #[serde(rename = "cellSize")]
    pub cell_size: f64,
    pub rotation: f64,
    pub offset: f64,
    #[serde(rename = "colorScheme")]
    pub color_scheme: String,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            pattern: "triangular".to_string(),
            cell_size: 50.0,
            rotation: 0.0,
            offset: 0.0,
            color_scheme: "monochromatic".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BaseUnit {
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TessellationDocument {
    /// Echo of the requested pattern label.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "cellSize")]
    pub cell_size: f64,
    pub rotation: f64,
    pub offset: f64,
    #[serde(rename = "colorScheme")]
    pub color_scheme: String,
    #[serde(rename = "baseUnit")]
    pub base_unit: BaseUnit,
    pub colors: Vec<String>,
}

pub fn generate(params: &TessellationParams, rng: &mut StdRng) -> TessellationDocument {
    let kind = TilingKind::from_label(&params.pattern);
    TessellationDocument {
        kind: params.pattern.clone(),
        cell_size: params.cell_size,
        rotation: params.rotation,
        offset: params.offset,
        color_scheme: params.color_scheme.clone(),
        base_unit: BaseUnit {
            points: kind.base_unit(params.cell_size),
        },
        colors: scheme_colors(&params.color_scheme, rng),
    }
}

/// Three-color scheme around a random base hue; unknown scheme labels get a
/// neutral grey ramp.
fn scheme_colors(scheme: &str, rng: &mut StdRng) -> Vec<String> {
    let base_hue: f64 = rng.gen();
    match scheme.to_lowercase().as_str() {
        "monochromatic" => vec![
            Rgb::from_hsv(base_hue, 0.8, 0.9).to_hex(),
            Rgb::from_hsv(base_hue, 0.6, 0.8).to_hex(),
            Rgb::from_hsv(base_hue, 0.4, 0.7).to_hex(),
        ],
        "complementary" => vec![
            Rgb::from_hsv(base_hue, 0.8, 0.9).to_hex(),
            Rgb::from_hsv(base_hue + 0.5, 0.8, 0.9).to_hex(),
            Rgb::from_hsv(base_hue, 0.6, 0.7).to_hex(),
        ],
        _ => vec![
            "#000000".to_string(),
            "#666666".to_string(),
            "#cccccc".to_string(),
        ],
    }
}
