//! Layered geometric motifs: symmetric polygons and connecting lines.

use std::f64::consts::PI;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::palette::{pick, PaletteKind};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeometricParams {
    pub symmetry: usize,
    pub layers: usize,
    pub complexity: f64,
    /// Whole-pattern rotation in degrees.
    pub rotation: f64,
    pub hue: f64,
    pub palette: String,
}

impl Default for GeometricParams {
    fn default() -> Self {
        Self {
            symmetry: 6,
            layers: 3,
            complexity: 0.7,
            rotation: 0.0,
            hue: 0.5,
            palette: "monochromatic".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Polygon {
        points: Vec<[f64; 2]>,
        color: String,
        layer: usize,
    },
    Line {
        start: [f64; 2],
        end: [f64; 2],
        color: String,
        layer: usize,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct GeometricDocument {
    pub shapes: Vec<Shape>,
    pub colors: Vec<String>,
    #[serde(rename = "rotationSpeed")]
    pub rotation_speed: f64,
}

pub fn generate(params: &GeometricParams, rng: &mut StdRng) -> GeometricDocument {
    let symmetry = params.symmetry.max(1);
    let complexity = params.complexity.clamp(0.0, 1.0);
    let colors = PaletteKind::from_label(&params.palette).build(params.hue);

    let mut document = GeometricDocument {
        shapes: Vec::new(),
        colors: colors.iter().map(|c| c.to_hex()).collect(),
        rotation_speed: rng.gen_range(0.1..0.3),
    };

    for layer in 0..params.layers {
        let radius = 100.0 + layer as f64 * 50.0;
        let num_points = symmetry * (layer + 2);

        let points: Vec<(f64, f64)> = (0..num_points)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / num_points as f64 + params.rotation.to_radians();
                (radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        if rng.gen_bool(complexity) {
            // One polygon per symmetry-sized run of ring points.
            for start in (0..points.len()).step_by(symmetry) {
                let shape_points = (0..symmetry)
                    .map(|j| {
                        let (x, y) = points[(start + j) % points.len()];
                        [x, y]
                    })
                    .collect();
                document.shapes.push(Shape::Polygon {
                    points: shape_points,
                    color: pick(&colors, rng).to_hex(),
                    layer,
                });
            }
        }

        for i in 0..points.len() {
            if rng.gen_bool(complexity) {
                let (sx, sy) = points[i];
                let (ex, ey) = points[(i + symmetry) % points.len()];
                document.shapes.push(Shape::Line {
                    start: [sx, sy],
                    end: [ex, ey],
                    color: pick(&colors, rng).to_hex(),
                    layer,
                });
            }
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn full_complexity_emits_polygons_and_lines_per_layer() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = GeometricParams {
            complexity: 1.0,
            ..GeometricParams::default()
        };
        let document = generate(&params, &mut rng);

        // Layer l has symmetry * (l + 2) points: that many lines, and one
        // polygon per symmetry-sized run.
        let expected_lines: usize = (0..3).map(|l| 6 * (l + 2)).sum();
        let expected_polygons: usize = (0..3).map(|l| l + 2).sum();
        let polygons = document
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Polygon { .. }))
            .count();
        let lines = document
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
            .count();
        assert_eq!(polygons, expected_polygons);
        assert_eq!(lines, expected_lines);
    }

    #[test]
    fn zero_complexity_emits_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = GeometricParams {
            complexity: 0.0,
            ..GeometricParams::default()
        };
        assert!(generate(&params, &mut rng).shapes.is_empty());
    }

    #[test]
    fn polygons_have_symmetry_vertices() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = GeometricParams {
            symmetry: 5,
            complexity: 1.0,
            ..GeometricParams::default()
        };
        for shape in generate(&params, &mut rng).shapes {
            if let Shape::Polygon { points, .. } = shape {
                assert_eq!(points.len(), 5);
            }
        }
    }

    #[test]
    fn shapes_serialize_with_a_type_tag() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = GeometricParams {
            complexity: 1.0,
            layers: 1,
            ..GeometricParams::default()
        };
        let value = serde_json::to_value(generate(&params, &mut rng)).unwrap();
        let first = &value["shapes"][0];
        assert!(first["type"] == "polygon" || first["type"] == "line");
        assert_eq!(value["colors"].as_array().unwrap().len(), 4);
    }
}
